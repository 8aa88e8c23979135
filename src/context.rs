/// Per-request input to [`CorsPolicy::decide`](crate::CorsPolicy::decide).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext<'a> {
    origin: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(origin: Option<&'a str>) -> Self {
        Self { origin }
    }

    pub fn with_origin(origin: &'a str) -> Self {
        Self::new(Some(origin))
    }

    /// A request that carried no `Origin` header.
    pub fn without_origin() -> Self {
        Self::new(None)
    }

    /// The `Origin` header value. An empty header counts as absent.
    pub fn origin(&self) -> Option<&'a str> {
        self.origin.filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
