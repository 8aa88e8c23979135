use crate::context::RequestContext;
use crate::exposed_headers::ExposedHeaders;
use crate::header_builder::{HeaderBuilder, OriginOutcome};
use crate::headers::HeaderSet;
use crate::options::{ConfigError, CorsOptions};
use crate::origin::Origin;

/// Validated, immutable CORS policy.
///
/// Built once from [`CorsOptions`] and shared read-only (e.g. behind an
/// [`Arc`](std::sync::Arc) or a [`CorsHandle`](crate::CorsHandle)) by every
/// request that needs a decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsPolicy {
    origin: Origin,
    credentials: bool,
    exposed_headers: ExposedHeaders,
    vary_origin: bool,
}

impl CorsPolicy {
    /// Validates `options` and normalizes them into a policy.
    ///
    /// Fails with [`ConfigError::IncompatibleWildcardCredentials`] when
    /// credentials are enabled for the `"*"` origin, and with
    /// [`ConfigError::InvalidOriginPattern`] or [`ConfigError::InvalidOrigin`]
    /// when an origin entry is malformed, too broad or too long.
    pub fn new(options: CorsOptions) -> Result<Self, ConfigError> {
        options.validate()?;

        let CorsOptions {
            origins,
            credentials,
            expose_headers,
            vary_origin,
        } = options;

        let policy = Self {
            origin: Origin::from_entries(&origins)?,
            credentials,
            exposed_headers: ExposedHeaders::with_defaults(expose_headers),
            vary_origin,
        };

        tracing::debug!(
            origins = %policy.origin,
            credentials = policy.credentials,
            expose_headers = policy.exposed_headers.header_value().unwrap_or_default(),
            vary_origin = policy.vary_origin,
            "cors policy constructed"
        );

        Ok(policy)
    }

    /// Computes the CORS response headers for one actual (non-preflight) request.
    ///
    /// Returns an empty set when the request has no `Origin` or its origin is
    /// not allowed.
    pub fn decide(&self, request: &RequestContext<'_>) -> HeaderSet {
        let builder = HeaderBuilder::new(self);

        let mut headers = match builder.build_origin_headers(request) {
            OriginOutcome::Skip => return HeaderSet::new(),
            OriginOutcome::Disallow(origin) => {
                tracing::trace!(origin, "cors origin not allowed");
                return HeaderSet::new();
            }
            OriginOutcome::Allow(headers) => headers,
        };

        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());
        headers.extend(builder.build_vary_header());
        headers
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn credentials(&self) -> bool {
        self.credentials
    }

    pub fn exposed_headers(&self) -> &ExposedHeaders {
        &self.exposed_headers
    }

    pub fn vary_origin(&self) -> bool {
        self.vary_origin
    }
}

impl Default for CorsPolicy {
    /// The policy of an empty configuration: no origin is ever allowed.
    fn default() -> Self {
        Self {
            origin: Origin::default(),
            credentials: false,
            exposed_headers: ExposedHeaders::default(),
            vary_origin: false,
        }
    }
}

impl TryFrom<CorsOptions> for CorsPolicy {
    type Error = ConfigError;

    fn try_from(options: CorsOptions) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
