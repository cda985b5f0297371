use crate::models::Joke;
use crate::storage::{self, StorageDriver};
use dashmap::mapref::entry::Entry::*;
use dashmap::DashMap;
use std::error::Error;
use std::sync::Arc;
use uuid::Uuid;

/// The full set of jokes known to the service, loaded from storage at startup.
pub struct Catalogue {
    pub current: Arc<DashMap<Uuid, Joke>>,
    storage: Arc<dyn StorageDriver<Item = Joke>>,
}

impl Catalogue {
    pub async fn from_storage<T: 'static>(storage: Arc<T>) -> Result<Catalogue, Box<dyn Error>>
    where
        T: StorageDriver<Item = Joke>,
    {
        let jokes: DashMap<Uuid, Joke> = DashMap::new();
        for joke in storage.read_all()? {
            match jokes.entry(joke.id) {
                Occupied(_) => {
                    error!(
                        "Detected duplicate joke with id '{}' when loading Catalogue",
                        joke.id
                    );
                    return Err(Box::new(CatalogueDataIntegrityError::DuplicateId(joke.id)));
                }
                Vacant(v) => v.insert(joke),
            };
        }

        info!("Loaded {} jokes from storage", jokes.len());
        Ok(Catalogue {
            current: Arc::new(jokes),
            storage,
        })
    }

    /// Inserts a new joke into the catalogue, or updates an existing joke with the same ID
    /// if it already exists. The in-memory map is only touched once the storage write
    /// succeeds, so a failed upsert leaves the catalogue as it was.
    ///
    /// * If an insert operation was performed, returns `None`
    /// * If an update operation was performed, returns `Some` with the value of the replaced joke
    pub async fn upsert_joke(&self, joke: Joke) -> Result<Option<Joke>, CatalogueWriteError> {
        match self.current.entry(joke.id) {
            Occupied(mut o) => {
                let old_joke = o.get().clone();
                match self.storage.write(&joke.id, &joke) {
                    Ok(_) => {
                        o.insert(joke);
                        Ok(Some(old_joke))
                    }
                    Err(e) => Err(CatalogueWriteError::Storage(e)),
                }
            }
            Vacant(v) => match self.storage.write(&joke.id, &joke) {
                Ok(_) => {
                    v.insert(joke);
                    Ok(None)
                }
                Err(e) => Err(CatalogueWriteError::Storage(e)),
            },
        }
    }
}

#[derive(Debug)]
pub enum CatalogueDataIntegrityError {
    DuplicateId(uuid::Uuid),
}

impl std::fmt::Display for CatalogueDataIntegrityError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Data integrity issue with the catalogue: {:?}", self)
    }
}

impl std::error::Error for CatalogueDataIntegrityError {}

#[derive(Debug)]
pub enum CatalogueWriteError {
    Storage(storage::Error),
}

impl std::fmt::Display for CatalogueWriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Error when performing a write operation on the catalogue: {:?}",
            self
        )
    }
}

impl std::error::Error for CatalogueWriteError {}
