pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: &str = "Access-Control-Allow-Credentials";
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: &str = "Access-Control-Expose-Headers";
    pub const ORIGIN: &str = "Origin";
    pub const VARY: &str = "Vary";
}

pub mod origin {
    /// Configuration entry that allows every origin.
    pub const WILDCARD: &str = "*";
}

/// Response headers every policy exposes to client scripts, ahead of any
/// configured entries.
pub const DEFAULT_EXPOSE_HEADERS: &[&str] = &[
    "api-version",
    "content-length",
    "content-md5",
    "content-type",
    "date",
    "request-id",
    "response-time",
];
