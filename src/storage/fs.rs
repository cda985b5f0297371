use super::StorageDriver;
use crate::storage;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// StorageDriver backed by a directory of JSON files, one file per item id.
pub struct FsStore<T> {
    dirname: PathBuf,
    _item_type: std::marker::PhantomData<T>,
}

impl<T> FsStore<T> {
    pub fn new<P: Into<PathBuf>>(dirname: P) -> storage::Result<FsStore<T>> {
        Ok(FsStore {
            dirname: dirname.into(),
            _item_type: std::marker::PhantomData,
        })
    }

    fn get_filename_from_id(&self, id: &Uuid) -> PathBuf {
        self.dirname.join(format!("{}.json", id))
    }
}

impl<T: DeserializeOwned + Serialize + Send + Sync> StorageDriver for FsStore<T> {
    type Item = T;

    fn read(&self, id: &Uuid) -> storage::Result<Option<T>> {
        let path = self.get_filename_from_id(id);
        match path.exists() {
            false => Ok(None),
            true => {
                let contents = fs::read_to_string(path)?;
                let item: T = serde_json::from_str(&contents)?;
                Ok(Some(item))
            }
        }
    }

    fn read_all(&self) -> storage::Result<Vec<T>> {
        let mut items = Vec::new();
        for entry in fs::read_dir(&self.dirname)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                let contents = fs::read_to_string(&path)?;
                items.push(serde_json::from_str(&contents)?);
            }
        }
        Ok(items)
    }

    fn write(&self, id: &Uuid, value: &T) -> storage::Result<()> {
        let json = serde_json::to_string_pretty(&value)?;
        Ok(fs::write(self.get_filename_from_id(id), json)?)
    }
}
