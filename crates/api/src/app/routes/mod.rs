use axum::Router;

pub mod customers;
pub mod system;

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new().nest("/customer", customers::router())
}
