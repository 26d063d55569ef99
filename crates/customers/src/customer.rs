use core::convert::Infallible;
use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use customer_api_core::Entity;

/// Customer identifier.
///
/// Opaque to the HTTP layer: any path segment converts, blank ones included.
/// What counts as an existing customer is the service's call.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CustomerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for CustomerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for CustomerId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Contact information for a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.phone.is_none() && self.address.is_none()
    }

    /// Overlay `patch` onto `self`; fields absent from the patch are kept.
    pub fn merged_with(self, patch: ContactInfo) -> Self {
        Self {
            email: patch.email.or(self.email),
            phone: patch.phone.or(self.phone),
            address: patch.address.or(self.address),
        }
    }
}

/// Customer record as exchanged over the API.
///
/// Every field is optional on the wire; what counts as a valid customer is up
/// to the service behind the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        deserialize_with = "null_as_default",
        skip_serializing_if = "ContactInfo::is_empty"
    )]
    pub contact: ContactInfo,
}

// An explicit `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Customer {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: CustomerId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_contact(mut self, contact: ContactInfo) -> Self {
        self.contact = contact;
        self
    }

    /// Overlay `patch` onto `self`.
    ///
    /// The identifier never changes; name and contact fields present in the
    /// patch replace the stored ones.
    pub fn merged_with(self, patch: Customer) -> Self {
        Self {
            id: self.id,
            name: patch.name.or(self.name),
            contact: self.contact.merged_with(patch.contact),
        }
    }

    /// Lightweight reference for listings. `None` until an id is assigned.
    pub fn to_ref(&self) -> Option<CustomerRef> {
        Some(CustomerRef {
            id: self.id.clone()?,
            name: self.name.clone(),
        })
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

/// Lightweight customer reference used by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: CustomerId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CustomerRef {
    pub fn new(id: CustomerId) -> Self {
        Self { id, name: None }
    }
}
