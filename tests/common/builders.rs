use origin_gate::{ConfigError, CorsOptions, CorsPolicy, HeaderSet, RequestContext};

#[derive(Default)]
pub struct PolicyBuilder {
    origins: Option<Vec<String>>,
    credentials: Option<bool>,
    expose_headers: Option<Vec<String>>,
    vary_origin: Option<bool>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = Some(origins.into_iter().map(Into::into).collect());
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expose_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn vary_origin(mut self, enabled: bool) -> Self {
        self.vary_origin = Some(enabled);
        self
    }

    pub fn options(self) -> CorsOptions {
        let CorsOptions {
            origins: default_origins,
            credentials: default_credentials,
            expose_headers: default_expose_headers,
            vary_origin: default_vary_origin,
        } = CorsOptions::default();

        CorsOptions {
            origins: self.origins.unwrap_or(default_origins),
            credentials: self.credentials.unwrap_or(default_credentials),
            expose_headers: self.expose_headers.unwrap_or(default_expose_headers),
            vary_origin: self.vary_origin.unwrap_or(default_vary_origin),
        }
    }

    pub fn try_build(self) -> Result<CorsPolicy, ConfigError> {
        CorsPolicy::new(self.options())
    }

    pub fn build(self) -> CorsPolicy {
        self.try_build().expect("valid CORS configuration")
    }
}

#[derive(Default)]
pub struct RequestBuilder {
    origin: Option<String>,
}

impl RequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn decide(self, policy: &CorsPolicy) -> HeaderSet {
        let ctx = RequestContext::new(self.origin.as_deref());
        policy.decide(&ctx)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn request() -> RequestBuilder {
    RequestBuilder::new()
}

pub fn myapp_origins() -> [&'static str; 2] {
    ["http://api.myapp.com", "http://www.myapp.com"]
}
