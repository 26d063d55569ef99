use std::time::Instant;

use axum::{
    extract::{OriginalUri, Request},
    middleware::Next,
    response::Response,
};

/// Log one line per API call: method, URI, response status, elapsed time.
pub async fn api_logger(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    // Nested routers see a stripped path; log the one the client sent.
    let uri = req
        .extensions()
        .get::<OriginalUri>()
        .map(|original| original.0.clone())
        .unwrap_or_else(|| req.uri().clone());
    let started = Instant::now();

    let res = next.run(req).await;

    tracing::info!(
        %method,
        %uri,
        status = res.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "api call"
    );

    res
}
