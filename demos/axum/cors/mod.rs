use std::sync::Arc;

use origin_gate::{ConfigError, CorsHandle, CorsOptions};

pub type SharedCors = Arc<CorsHandle>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ConfigError> {
    let options = CorsOptions {
        origins: vec![
            "http://api.example.com".into(),
            "http://*.example.com".into(),
            "http://localhost:*".into(),
        ],
        credentials: true,
        expose_headers: vec!["X-Example-Trace".into()],
        vary_origin: true,
    };

    let cors = Arc::new(CorsHandle::from_options(options)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the axum CORS demo!",
    })
}

pub mod middleware;
