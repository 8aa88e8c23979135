use crate::context::RequestContext;
use crate::headers::HeaderSet;
use crate::options::{ConfigError, CorsOptions};
use crate::policy::CorsPolicy;
use arc_swap::ArcSwap;
use std::sync::Arc;

/// Shared, hot-swappable handle to the live [`CorsPolicy`].
///
/// Readers never lock. A reload validates the new options first and then
/// replaces the whole policy in one atomic store, so a request observes either
/// the old policy or the new one.
#[derive(Debug)]
pub struct CorsHandle {
    current: ArcSwap<CorsPolicy>,
}

impl CorsHandle {
    pub fn new(policy: CorsPolicy) -> Self {
        Self {
            current: ArcSwap::from_pointee(policy),
        }
    }

    pub fn from_options(options: CorsOptions) -> Result<Self, ConfigError> {
        CorsPolicy::new(options).map(Self::new)
    }

    /// Snapshot of the policy in effect right now.
    pub fn current(&self) -> Arc<CorsPolicy> {
        self.current.load_full()
    }

    pub fn decide(&self, request: &RequestContext<'_>) -> HeaderSet {
        self.current.load().decide(request)
    }

    /// Validates `options` and swaps the resulting policy in.
    ///
    /// On error the current policy stays in effect and the error is returned.
    pub fn reload(&self, options: CorsOptions) -> Result<(), ConfigError> {
        match CorsPolicy::new(options) {
            Ok(policy) => {
                tracing::info!(origins = %policy.origin(), "cors policy reloaded");
                self.replace(policy);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "rejected cors policy reload, keeping current policy");
                Err(err)
            }
        }
    }

    pub fn replace(&self, policy: CorsPolicy) {
        self.current.store(Arc::new(policy));
    }
}

impl From<CorsPolicy> for CorsHandle {
    fn from(policy: CorsPolicy) -> Self {
        Self::new(policy)
    }
}

#[cfg(test)]
#[path = "reload_test.rs"]
mod reload_test;
