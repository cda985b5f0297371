mod joke;
pub use self::joke::Joke;

pub mod config;

mod catalogue;
pub use self::catalogue::{Catalogue, CatalogueDataIntegrityError, CatalogueWriteError};
