//! Customer service contract consumed by the HTTP layer.

use async_trait::async_trait;
use http::StatusCode;

use customer_api_core::DomainResult;

use crate::customer::{Customer, CustomerId, CustomerRef};

/// Status code plus optional body, built by the service for operations where
/// it owns the outcome (update and delete).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope<T> {
    pub status: StatusCode,
    pub body: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    pub fn with_status(status: StatusCode, body: Option<T>) -> Self {
        Self { status, body }
    }

    pub fn ok(body: T) -> Self {
        Self::with_status(StatusCode::OK, Some(body))
    }

    pub fn not_found() -> Self {
        Self::with_status(StatusCode::NOT_FOUND, None)
    }

    pub fn bad_request() -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, None)
    }
}

/// Customer operations behind `/customer`.
///
/// Implementations are shared across request tasks, hence `Send + Sync`.
#[async_trait]
pub trait CustomerService: Send + Sync {
    async fn create_customer(&self, customer: Customer) -> DomainResult<Customer>;

    async fn get_all_customer_refs(&self) -> DomainResult<Vec<CustomerRef>>;

    async fn get_customer_by_id(&self, id: &CustomerId) -> DomainResult<Option<Customer>>;

    /// Used for both full replacement (PUT) and partial update (PATCH).
    async fn update_customer(
        &self,
        id: &CustomerId,
        customer: Customer,
    ) -> DomainResult<ResponseEnvelope<Customer>>;

    async fn delete_customer(&self, id: &CustomerId) -> DomainResult<ResponseEnvelope<Customer>>;
}
