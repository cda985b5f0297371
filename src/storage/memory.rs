use super::StorageDriver;
use crate::storage;
use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// In-memory StorageDriver, used for testing. Items are held as JSON values
/// so the driver misbehaves the same way the fs driver does on a record that
/// does not parse.
pub struct InMemoryStore<T> {
    items: DashMap<Uuid, Value>,
    _item_type: std::marker::PhantomData<T>,
}

impl<T> InMemoryStore<T> {
    pub fn new() -> storage::Result<InMemoryStore<T>> {
        Ok(InMemoryStore {
            items: DashMap::new(),
            _item_type: std::marker::PhantomData,
        })
    }
}

impl<T: DeserializeOwned + Serialize + Send + Sync> StorageDriver for InMemoryStore<T> {
    type Item = T;

    fn read(&self, id: &Uuid) -> storage::Result<Option<T>> {
        match self.items.get(id) {
            Some(value_ref) => {
                let item: T = serde_json::from_value(value_ref.clone())?;
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }

    fn read_all(&self) -> storage::Result<Vec<T>> {
        self.items
            .iter()
            .map(|kvp| serde_json::from_value(kvp.value().clone()).map_err(|e| e.into()))
            .collect()
    }

    fn write(&self, id: &Uuid, value: &T) -> storage::Result<()> {
        let json = serde_json::to_value(value)?;
        self.items.insert(*id, json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Joke;

    #[test]
    fn read_missing_returns_none() {
        let store: InMemoryStore<Joke> = InMemoryStore::new().unwrap();

        assert!(store.read(&Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn write_then_read_round_trips() {
        let store: InMemoryStore<Joke> = InMemoryStore::new().unwrap();
        let joke = Joke {
            id: Uuid::new_v4(),
            joke: "setup".to_owned(),
            response: "punchline".to_owned(),
        };

        store.write(&joke.id, &joke).unwrap();

        assert_eq!(store.read(&joke.id).unwrap(), Some(joke));
    }
}
