use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

use customer_api_core::{DomainError, DomainResult};

/// Key/value store abstraction backing service implementations.
pub trait KeyValueStore<K, V>: Send + Sync {
    fn get(&self, key: &K) -> DomainResult<Option<V>>;

    /// Insert only if `key` is vacant. Returns `false` when it was taken.
    fn insert_new(&self, key: K, value: V) -> DomainResult<bool>;

    /// Replace the value under `key` with `f(current)`. Returns the new value,
    /// or `None` when the key is vacant.
    fn replace_with(&self, key: &K, f: &mut dyn FnMut(&V) -> V) -> DomainResult<Option<V>>;

    fn remove(&self, key: &K) -> DomainResult<Option<V>>;

    fn list(&self) -> DomainResult<Vec<(K, V)>>;
}

impl<K, V, S> KeyValueStore<K, V> for Arc<S>
where
    S: KeyValueStore<K, V> + ?Sized,
{
    fn get(&self, key: &K) -> DomainResult<Option<V>> {
        (**self).get(key)
    }

    fn insert_new(&self, key: K, value: V) -> DomainResult<bool> {
        (**self).insert_new(key, value)
    }

    fn replace_with(&self, key: &K, f: &mut dyn FnMut(&V) -> V) -> DomainResult<Option<V>> {
        (**self).replace_with(key, f)
    }

    fn remove(&self, key: &K) -> DomainResult<Option<V>> {
        (**self).remove(key)
    }

    fn list(&self) -> DomainResult<Vec<(K, V)>> {
        (**self).list()
    }
}

/// In-memory store for tests/dev.
#[derive(Debug)]
pub struct InMemoryStore<K, V> {
    inner: RwLock<HashMap<K, V>>,
}

impl<K, V> InMemoryStore<K, V> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }
}

impl<K, V> Default for InMemoryStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> DomainError {
    DomainError::unavailable("in-memory store lock poisoned")
}

impl<K, V> KeyValueStore<K, V> for InMemoryStore<K, V>
where
    K: Clone + Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn get(&self, key: &K) -> DomainResult<Option<V>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(key).cloned())
    }

    fn insert_new(&self, key: K, value: V) -> DomainResult<bool> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        if map.contains_key(&key) {
            return Ok(false);
        }
        map.insert(key, value);
        Ok(true)
    }

    fn replace_with(&self, key: &K, f: &mut dyn FnMut(&V) -> V) -> DomainResult<Option<V>> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        Ok(map.get_mut(key).map(|slot| {
            *slot = f(slot);
            slot.clone()
        }))
    }

    fn remove(&self, key: &K) -> DomainResult<Option<V>> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        Ok(map.remove(key))
    }

    fn list(&self) -> DomainResult<Vec<(K, V)>> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_new_refuses_taken_key() {
        let store: InMemoryStore<u32, &'static str> = InMemoryStore::new();
        assert!(store.insert_new(1, "a").unwrap());
        assert!(!store.insert_new(1, "b").unwrap());
        assert_eq!(store.get(&1).unwrap(), Some("a"));
    }

    #[test]
    fn replace_with_only_touches_existing_keys() {
        let store: InMemoryStore<u32, u32> = InMemoryStore::new();
        assert_eq!(store.replace_with(&1, &mut |v: &u32| v + 1).unwrap(), None);

        store.insert_new(1, 10).unwrap();
        assert_eq!(store.replace_with(&1, &mut |v: &u32| v + 1).unwrap(), Some(11));
        assert_eq!(store.get(&1).unwrap(), Some(11));
    }

    #[test]
    fn remove_returns_previous_value() {
        let store: Arc<InMemoryStore<u32, u32>> = Arc::new(InMemoryStore::new());
        store.insert_new(1, 10).unwrap();
        assert_eq!(store.remove(&1).unwrap(), Some(10));
        assert_eq!(store.remove(&1).unwrap(), None);
        assert!(store.list().unwrap().is_empty());
    }
}
