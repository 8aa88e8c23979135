use crate::constants::origin::WILDCARD;
use crate::policy::CorsPolicy;
use serde::Deserialize;
use thiserror::Error;

/// Raw CORS configuration as supplied by bootstrap code or a config file.
///
/// Every field is optional. An empty configuration is valid and yields a
/// policy that never emits `Access-Control-Allow-Origin`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CorsOptions {
    /// Exact origins, glob patterns such as `https://*.example.com`, or `"*"`.
    pub origins: Vec<String>,
    pub credentials: bool,
    /// Appended after [`DEFAULT_EXPOSE_HEADERS`](crate::constants::DEFAULT_EXPOSE_HEADERS).
    pub expose_headers: Vec<String>,
    /// Emit `Vary: Origin` alongside an allowed origin.
    pub vary_origin: bool,
}

impl CorsOptions {
    /// Checks option combinations that can never form a valid policy.
    ///
    /// Origin patterns are compiled by [`CorsPolicy::new`], which reports
    /// their errors as well.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.credentials && self.allows_any_origin() {
            return Err(ConfigError::IncompatibleWildcardCredentials);
        }

        Ok(())
    }

    pub fn into_policy(self) -> Result<CorsPolicy, ConfigError> {
        CorsPolicy::new(self)
    }

    fn allows_any_origin(&self) -> bool {
        self.origins.iter().any(|origin| origin.trim() == WILDCARD)
    }
}

/// Errors raised while turning [`CorsOptions`] into a [`CorsPolicy`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error(
        "origins contains the wildcard \"*\" while credentials are enabled; credentialed responses require explicit origins"
    )]
    IncompatibleWildcardCredentials,
    #[error("origin `{origin}` is invalid: {reason}")]
    InvalidOrigin { origin: String, reason: String },
    #[error("origin pattern `{pattern}` is invalid: {reason}")]
    InvalidOriginPattern { pattern: String, reason: String },
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
