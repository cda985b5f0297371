use crate::engine::{Error, ErrorCode, Result};
use crate::models;

use rand::Rng;
use uuid::Uuid;

/// The joke-provider collaborator behind the HTTP layer. Owns the catalogue
/// and hands out jokes on demand.
pub struct Api {
    catalogue: models::Catalogue,
}

pub enum AddOrUpdateOperation {
    Add,
    Update,
}

impl Api {
    pub async fn new(catalogue: models::Catalogue) -> Api {
        Api { catalogue }
    }

    /// Picks one joke uniformly at random from the catalogue.
    ///
    /// Fails with `CatalogueEmpty` if no jokes were loaded.
    pub async fn get_random_joke(&self) -> Result<models::Joke> {
        let jokes = &self.catalogue.current;
        if jokes.is_empty() {
            return Err(Error::new(ErrorCode::CatalogueEmpty, None));
        }
        let index = rand::thread_rng().gen_range(0, jokes.len());
        match jokes.iter().nth(index) {
            Some(entry) => Ok(entry.value().clone()),
            // Len changed between the check and the pick
            None => Err(Error::new(ErrorCode::Other, None)),
        }
    }

    pub async fn get_joke_by_id(&self, id: &Uuid) -> Result<Option<models::Joke>> {
        Ok(self.catalogue.current.get(id).map(|j| j.value().clone()))
    }

    pub async fn add_or_update_joke_in_catalogue(
        &self,
        joke: models::Joke,
    ) -> Result<AddOrUpdateOperation> {
        match self.catalogue.upsert_joke(joke).await? {
            None => Ok(AddOrUpdateOperation::Add),
            Some(_) => Ok(AddOrUpdateOperation::Update),
        }
    }
}
