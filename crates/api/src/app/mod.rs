//! HTTP API application wiring (Axum router + service injection).
//!
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: mapping service results onto HTTP responses
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use customer_api_customers::CustomerService;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router around the given customer service.
pub fn build_app(customers: Arc<dyn CustomerService>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(customers))
}
