//! Customers domain module.
//!
//! Customer transfer objects and the service contract the HTTP layer delegates
//! to. No IO, no routing, no storage.

pub mod customer;
pub mod service;

pub use customer::{ContactInfo, Customer, CustomerId, CustomerRef};
pub use service::{CustomerService, ResponseEnvelope};
