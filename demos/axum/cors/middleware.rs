use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use origin_gate::{HeaderSet, RequestContext, constants::header};

use super::AppState;

pub async fn cors_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let origin = header_value(request.headers(), header::ORIGIN);
    let headers = state.cors.decide(&RequestContext::new(origin.as_deref()));

    let mut response = next.run(request).await;
    apply_headers(response.headers_mut(), &headers);
    response
}

fn apply_headers(map: &mut HeaderMap, headers: &HeaderSet) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) =
            (HeaderName::try_from(name), HeaderValue::from_str(value))
        {
            map.insert(header_name, header_value);
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
