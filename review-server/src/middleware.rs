//! Request-id injection: stamp every request with an id (reusing one the
//! caller already supplied via `x-request-id`, or minting a fresh one) so
//! the trace spans emitted by [`tower_http::trace::TraceLayer`] and our
//! own log lines can be correlated end to end.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

pub async fn request_id(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    request.extensions_mut().insert(request_id.clone());

    let mut response = next.run(request).await;
    if let Ok(value) = request_id.parse() {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}
