use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use customer_api_customers::ResponseEnvelope;

/// Send a service-built envelope as-is: its status, and its body as JSON when
/// present (empty otherwise).
pub fn envelope_to_response<T: Serialize>(envelope: ResponseEnvelope<T>) -> axum::response::Response {
    match envelope.body {
        Some(body) => (envelope.status, Json(body)).into_response(),
        None => envelope.status.into_response(),
    }
}
