use serde::Serialize;
use serde::de::DeserializeOwned;

use shopcart_core::Update;

use crate::local::LocalStorage;
use crate::store::KeyValueStore;

/// An in-memory value bound to a storage key.
///
/// The value is loaded once at construction (falling back to `initial`) and written
/// through on every change. A failed write is logged by [`LocalStorage`]; the in-memory
/// value still changes so the session stays consistent.
#[derive(Debug)]
pub struct PersistedState<T, S> {
    key: String,
    initial: T,
    value: T,
    storage: LocalStorage<S>,
}

impl<T, S> PersistedState<T, S>
where
    T: Clone + Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    pub fn new(store: S, key: impl Into<String>, initial: T) -> Self {
        let key = key.into();
        let storage = LocalStorage::new(store);
        let value = storage.get(&key, initial.clone());
        Self {
            key,
            initial,
            value,
            storage,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Apply an update (a new value or a function of the current one) and persist it.
    pub fn set<'a>(&mut self, update: impl Into<Update<'a, T>>) -> &T
    where
        T: 'a,
    {
        self.value = update.into().apply(&self.value);
        self.storage.set(&self.key, &self.value);
        &self.value
    }

    /// Delete the stored value and reset to the initial value.
    pub fn remove(&mut self) {
        self.storage.remove(&self.key);
        self.value = self.initial.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::memory::InMemoryStore;
    use crate::strict::StrictStorage;

    #[test]
    fn loads_existing_value_over_initial() {
        let store = Arc::new(InMemoryStore::new());
        store.set_item("names", r#"["a","b"]"#).unwrap();

        let state = PersistedState::new(store, "names", vec!["init".to_string()]);
        assert_eq!(state.value(), &vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn set_accepts_value_or_function_and_writes_through() {
        let store = Arc::new(InMemoryStore::new());
        let mut state = PersistedState::new(store.clone(), "count", 0u32);

        state.set(5u32);
        state.set(Update::compute(|prev: &u32| prev + 1));
        assert_eq!(*state.value(), 6);

        let persisted: u32 = StrictStorage::new(store).get("count", 0).unwrap();
        assert_eq!(persisted, 6);
    }

    #[test]
    fn failed_write_still_updates_memory() {
        let store = Arc::new(InMemoryStore::with_quota(8));
        let mut state = PersistedState::new(store.clone(), "list", Vec::<u32>::new());

        state.set(vec![1u32, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(state.value().len(), 8);
        assert_eq!(store.get_item("list").unwrap(), None);
    }

    #[test]
    fn remove_resets_to_initial() {
        let store = Arc::new(InMemoryStore::new());
        let mut state = PersistedState::new(store.clone(), "count", 1u32);
        state.set(9u32);

        state.remove();
        assert_eq!(*state.value(), 1);
        assert_eq!(store.get_item("count").unwrap(), None);
    }
}
