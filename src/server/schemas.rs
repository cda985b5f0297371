use crate::models;
use serde::Deserialize;

// ###################
// # Request schemas #
// ###################

#[derive(Deserialize)]
pub struct PutJokeToCatalogueRequest {
    pub joke: models::Joke,
}
