use crate::constants::header;
use crate::context::RequestContext;
use crate::headers::HeaderSet;
use crate::policy::CorsPolicy;

pub(crate) enum OriginOutcome<'r> {
    /// No `Origin` header: nothing to negotiate.
    Skip,
    Disallow(&'r str),
    Allow(HeaderSet),
}

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a CorsPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a CorsPolicy) -> Self {
        Self { policy }
    }

    pub(crate) fn build_origin_headers<'r>(
        &self,
        request: &RequestContext<'r>,
    ) -> OriginOutcome<'r> {
        let Some(origin) = request.origin() else {
            return OriginOutcome::Skip;
        };

        if !self.policy.origin().allows(origin) {
            return OriginOutcome::Disallow(origin);
        }

        // The request origin is echoed even for `Origin::Any`; `*` is never emitted.
        let mut headers = HeaderSet::with_capacity(4);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_owned());
        OriginOutcome::Allow(headers)
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderSet {
        if self.policy.credentials() {
            let mut headers = HeaderSet::with_capacity(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true".to_string());
            headers
        } else {
            HeaderSet::new()
        }
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderSet {
        if let Some(value) = self.policy.exposed_headers().header_value() {
            let mut headers = HeaderSet::with_capacity(1);
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value.to_owned());
            return headers;
        }
        HeaderSet::new()
    }

    pub(crate) fn build_vary_header(&self) -> HeaderSet {
        let mut headers = HeaderSet::new();
        if self.policy.vary_origin() {
            headers.add_vary(header::ORIGIN);
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
