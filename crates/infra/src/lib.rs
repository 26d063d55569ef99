//! Infrastructure layer: storage adapters and service implementations.

pub mod customer_service;
pub mod store;

pub use customer_service::InMemoryCustomerService;
pub use store::{InMemoryStore, KeyValueStore};
