//! Key/value storage abstractions.

pub mod key_value;

pub use key_value::{InMemoryStore, KeyValueStore};
