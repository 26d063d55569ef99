use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    handler::Handler,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use customer_api_customers::{Customer, CustomerId, CustomerService};

use crate::app::{dto, errors};
use crate::middleware;

type Customers = Arc<dyn CustomerService>;

pub fn router() -> Router {
    Router::new()
        .route(
            "/",
            post(create_customer.layer(axum::middleware::from_fn(middleware::api_logger)))
                .get(list_customer_refs),
        )
        .route(
            "/:id",
            get(get_customer)
                .patch(patch_customer)
                .put(put_customer)
                .delete(delete_customer),
        )
}

pub async fn create_customer(
    Extension(customers): Extension<Customers>,
    Json(body): Json<Customer>,
) -> axum::response::Response {
    match customers.create_customer(body).await {
        Ok(created) => (StatusCode::OK, Json(created)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_customer_refs(
    Extension(customers): Extension<Customers>,
) -> axum::response::Response {
    match customers.get_all_customer_refs().await {
        Ok(refs) if !refs.is_empty() => (StatusCode::OK, Json(refs)).into_response(),
        Ok(_) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_customer(
    Extension(customers): Extension<Customers>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = CustomerId::from(id);
    match customers.get_customer_by_id(&id).await {
        Ok(Some(customer)) => (StatusCode::OK, Json(customer)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn patch_customer(
    Extension(customers): Extension<Customers>,
    Path(id): Path<String>,
    Json(body): Json<Customer>,
) -> axum::response::Response {
    update_customer(customers, id, body).await
}

pub async fn put_customer(
    Extension(customers): Extension<Customers>,
    Path(id): Path<String>,
    Json(body): Json<Customer>,
) -> axum::response::Response {
    update_customer(customers, id, body).await
}

pub async fn delete_customer(
    Extension(customers): Extension<Customers>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = CustomerId::from(id);
    match customers.delete_customer(&id).await {
        Ok(envelope) => dto::envelope_to_response(envelope),
        Err(e) => errors::domain_error_to_response(e),
    }
}

// PATCH and PUT share one service call; the service decides what each means.
async fn update_customer(customers: Customers, id: String, body: Customer) -> axum::response::Response {
    let id = CustomerId::from(id);
    match customers.update_customer(&id, body).await {
        Ok(envelope) => dto::envelope_to_response(envelope),
        Err(e) => errors::domain_error_to_response(e),
    }
}
