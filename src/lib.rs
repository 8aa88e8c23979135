//! CORS response-header negotiation for actual (non-preflight) requests.
//!
//! [`CorsOptions`] are validated once into an immutable [`CorsPolicy`]; each
//! request's `Origin` is then turned into a [`HeaderSet`] by
//! [`CorsPolicy::decide`].

pub mod constants;
mod context;
mod exposed_headers;
mod header_builder;
mod headers;
mod options;
mod origin;
mod policy;
mod reload;

pub use context::RequestContext;
pub use exposed_headers::ExposedHeaders;
pub use headers::HeaderSet;
pub use options::{ConfigError, CorsOptions};
pub use origin::{Origin, OriginList, OriginPattern};
pub use policy::CorsPolicy;
pub use reload::CorsHandle;
