//! In-memory `CustomerService` used by the binary in dev and by tests.

use async_trait::async_trait;
use uuid::Uuid;

use customer_api_core::{DomainError, DomainResult, Entity};
use customer_api_customers::{Customer, CustomerId, CustomerRef, CustomerService, ResponseEnvelope};

use crate::store::{InMemoryStore, KeyValueStore};

/// Customer service over a [`KeyValueStore`].
///
/// Owns the status decisions for update and delete: unknown ids yield a 404
/// envelope, a blank replacement name yields a 400 envelope.
#[derive(Debug)]
pub struct InMemoryCustomerService<S = InMemoryStore<CustomerId, Customer>> {
    store: S,
}

impl InMemoryCustomerService {
    pub fn new() -> Self {
        Self::with_store(InMemoryStore::new())
    }
}

impl Default for InMemoryCustomerService {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> InMemoryCustomerService<S>
where
    S: KeyValueStore<CustomerId, Customer>,
{
    pub fn with_store(store: S) -> Self {
        Self { store }
    }
}

fn is_blank(name: Option<&str>) -> bool {
    name.is_none_or(|n| n.trim().is_empty())
}

#[async_trait]
impl<S> CustomerService for InMemoryCustomerService<S>
where
    S: KeyValueStore<CustomerId, Customer>,
{
    async fn create_customer(&self, customer: Customer) -> DomainResult<Customer> {
        if is_blank(customer.name.as_deref()) {
            return Err(DomainError::validation("customer name must not be empty"));
        }

        let id = match customer.id() {
            Some(id) => id.clone(),
            None => CustomerId::from(Uuid::now_v7().to_string()),
        };
        let customer = customer.with_id(id.clone());

        if !self.store.insert_new(id.clone(), customer.clone())? {
            return Err(DomainError::conflict(format!("customer {id} already exists")));
        }

        tracing::info!(customer_id = %id, "customer created");
        Ok(customer)
    }

    async fn get_all_customer_refs(&self) -> DomainResult<Vec<CustomerRef>> {
        let mut refs = self
            .store
            .list()?
            .into_iter()
            .filter_map(|(_id, customer)| customer.to_ref())
            .collect::<Vec<_>>();
        refs.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(refs)
    }

    async fn get_customer_by_id(&self, id: &CustomerId) -> DomainResult<Option<Customer>> {
        self.store.get(id)
    }

    async fn update_customer(
        &self,
        id: &CustomerId,
        customer: Customer,
    ) -> DomainResult<ResponseEnvelope<Customer>> {
        if customer.name.is_some() && is_blank(customer.name.as_deref()) {
            return Ok(ResponseEnvelope::bad_request());
        }

        let mut patch = Some(customer);
        let updated = self.store.replace_with(id, &mut |stored: &Customer| {
            stored.clone().merged_with(patch.take().unwrap_or_default())
        })?;

        match updated {
            Some(customer) => {
                tracing::info!(customer_id = %id, "customer updated");
                Ok(ResponseEnvelope::ok(customer))
            }
            None => {
                tracing::debug!(customer_id = %id, "update of unknown customer");
                Ok(ResponseEnvelope::not_found())
            }
        }
    }

    async fn delete_customer(&self, id: &CustomerId) -> DomainResult<ResponseEnvelope<Customer>> {
        match self.store.remove(id)? {
            Some(customer) => {
                tracing::info!(customer_id = %id, "customer deleted");
                Ok(ResponseEnvelope::ok(customer))
            }
            None => Ok(ResponseEnvelope::not_found()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use customer_api_customers::ContactInfo;
    use http::StatusCode;
    use proptest::prelude::*;

    use super::*;

    fn id(s: &str) -> CustomerId {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn create_assigns_id_and_stores_customer() {
        let svc = InMemoryCustomerService::new();

        let created = svc.create_customer(Customer::named("Ada")).await.unwrap();
        let created_id = created.id.clone().expect("id assigned");

        let fetched = svc.get_customer_by_id(&created_id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn create_keeps_caller_id_and_rejects_duplicates() {
        let svc = InMemoryCustomerService::new();

        let created = svc
            .create_customer(Customer::named("Ada").with_id(id("ada")))
            .await
            .unwrap();
        assert_eq!(created.id, Some(id("ada")));

        let err = svc
            .create_customer(Customer::named("Other").with_id(id("ada")))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let svc = InMemoryCustomerService::new();

        let err = svc.create_customer(Customer::default()).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = svc.create_customer(Customer::named("  ")).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn refs_are_sorted_by_id() {
        let svc = InMemoryCustomerService::new();
        for key in ["b", "c", "a"] {
            svc.create_customer(Customer::named(key.to_uppercase()).with_id(id(key)))
                .await
                .unwrap();
        }

        let refs = svc.get_all_customer_refs().await.unwrap();
        let ids = refs.iter().map(|r| r.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(refs[0].name.as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn unknown_id_reads_as_none() {
        let svc = InMemoryCustomerService::new();
        assert_eq!(svc.get_customer_by_id(&id("abc")).await.unwrap(), None);
        assert!(svc.get_all_customer_refs().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_merges_fields() {
        let svc = InMemoryCustomerService::new();
        svc.create_customer(Customer::named("Ada").with_id(id("1")))
            .await
            .unwrap();

        let patch = Customer::default().with_contact(ContactInfo {
            email: Some("ada@example.com".to_string()),
            ..ContactInfo::default()
        });
        let envelope = svc.update_customer(&id("1"), patch).await.unwrap();

        assert_eq!(envelope.status, StatusCode::OK);
        let body = envelope.body.unwrap();
        assert_eq!(body.name.as_deref(), Some("Ada"));
        assert_eq!(body.contact.email.as_deref(), Some("ada@example.com"));
        assert_eq!(svc.get_customer_by_id(&id("1")).await.unwrap(), Some(body));
    }

    #[tokio::test]
    async fn update_with_blank_name_is_bad_request() {
        let svc = InMemoryCustomerService::new();
        svc.create_customer(Customer::named("Ada").with_id(id("1")))
            .await
            .unwrap();

        let envelope = svc
            .update_customer(&id("1"), Customer::named(""))
            .await
            .unwrap();
        assert_eq!(envelope.status, StatusCode::BAD_REQUEST);
        assert!(envelope.body.is_none());
    }

    #[tokio::test]
    async fn update_and_delete_of_unknown_id_are_not_found() {
        let svc = InMemoryCustomerService::new();

        let envelope = svc
            .update_customer(&id("missing"), Customer::named("Ada"))
            .await
            .unwrap();
        assert_eq!(envelope.status, StatusCode::NOT_FOUND);

        let envelope = svc.delete_customer(&id("missing")).await.unwrap();
        assert_eq!(envelope.status, StatusCode::NOT_FOUND);
        assert!(envelope.body.is_none());
    }

    #[tokio::test]
    async fn delete_returns_removed_customer() {
        let svc = InMemoryCustomerService::new();
        let created = svc
            .create_customer(Customer::named("Ada").with_id(id("1")))
            .await
            .unwrap();

        let envelope = svc.delete_customer(&id("1")).await.unwrap();
        assert_eq!(envelope.status, StatusCode::OK);
        assert_eq!(envelope.body, Some(created));
        assert_eq!(svc.get_customer_by_id(&id("1")).await.unwrap(), None);
    }

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(fut)
    }

    proptest! {
        #[test]
        fn every_created_customer_is_listed_once(names in prop::collection::vec("[a-z]{1,8}", 0..20)) {
            let svc = InMemoryCustomerService::new();

            let created = block_on(async {
                let mut ids = Vec::new();
                for name in &names {
                    let c = svc.create_customer(Customer::named(name.clone())).await.unwrap();
                    ids.push(c.id.unwrap());
                }
                ids
            });
            let refs = block_on(svc.get_all_customer_refs()).unwrap();

            prop_assert_eq!(refs.len(), names.len());
            let listed: HashSet<_> = refs.into_iter().map(|r| r.id).collect();
            let created: HashSet<_> = created.into_iter().collect();
            prop_assert_eq!(listed, created);
        }
    }
}
