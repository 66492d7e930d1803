//! Generic JSON-backed collection
//!
//! Every planning list (tasks, guests, vendors...) is a flat collection of
//! records persisted to its own JSON file. Records keep their insertion
//! order, both in memory and on disk, so list views that sort stably give
//! the same answer on every run.

use std::fmt;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::WedplanError;

use super::file_io::{read_json, write_json_atomic};

/// A record that can live in a [`JsonCollection`]
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Id: Copy + Eq + fmt::Display;

    fn id(&self) -> Self::Id;

    /// Whether `identifier` is this record's ID in full or short form
    fn matches_id(&self, identifier: &str) -> bool;
}

/// Implement [`Record`] for a model with an `id` field of a `define_id!` type
macro_rules! impl_record {
    ($model:ty, $id:ty) => {
        impl $crate::storage::collection::Record for $model {
            type Id = $id;

            fn id(&self) -> Self::Id {
                self.id
            }

            fn matches_id(&self, identifier: &str) -> bool {
                self.id.matches(identifier)
            }
        }
    };
}

/// On-disk layout of a collection file
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct CollectionFile<T> {
    #[serde(default)]
    items: Vec<T>,
}

#[derive(Serialize)]
struct CollectionFileRef<'a, T> {
    items: &'a [T],
}

impl<T> Default for CollectionFile<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

/// Insertion-ordered records persisted to a single JSON file
pub struct JsonCollection<T: Record> {
    path: PathBuf,
    data: RwLock<Vec<T>>,
}

impl<T: Record> JsonCollection<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<T>>, WedplanError> {
        self.data
            .read()
            .map_err(|e| WedplanError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<T>>, WedplanError> {
        self.data
            .write()
            .map_err(|e| WedplanError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load records from disk, replacing whatever is in memory
    pub fn load(&self) -> Result<(), WedplanError> {
        let file_data: CollectionFile<T> = read_json(&self.path)?;
        *self.write()? = file_data.items;
        Ok(())
    }

    pub fn save(&self) -> Result<(), WedplanError> {
        let data = self.read()?;
        let file_data = CollectionFileRef {
            items: data.as_slice(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get(&self, id: T::Id) -> Result<Option<T>, WedplanError> {
        Ok(self.read()?.iter().find(|r| r.id() == id).cloned())
    }

    /// All records in insertion order
    pub fn get_all(&self) -> Result<Vec<T>, WedplanError> {
        Ok(self.read()?.clone())
    }

    /// Look a record up by full or short ID
    pub fn find(&self, identifier: &str) -> Result<Option<T>, WedplanError> {
        Ok(self
            .read()?
            .iter()
            .find(|r| r.matches_id(identifier))
            .cloned())
    }

    /// First record satisfying a predicate
    pub fn find_by<F>(&self, predicate: F) -> Result<Option<T>, WedplanError>
    where
        F: Fn(&T) -> bool,
    {
        Ok(self.read()?.iter().find(|r| predicate(r)).cloned())
    }

    /// Replace a record in place, or append it if it is new
    pub fn upsert(&self, record: T) -> Result<(), WedplanError> {
        let mut data = self.write()?;
        let id = record.id();
        match data.iter_mut().find(|r| r.id() == id) {
            Some(existing) => *existing = record,
            None => data.push(record),
        }
        Ok(())
    }

    /// Remove a record, returning it if it existed
    pub fn remove(&self, id: T::Id) -> Result<Option<T>, WedplanError> {
        let mut data = self.write()?;
        Ok(data
            .iter()
            .position(|r| r.id() == id)
            .map(|pos| data.remove(pos)))
    }

    /// Keep only records satisfying `keep`, returning the ones dropped
    pub fn retain<F>(&self, keep: F) -> Result<Vec<T>, WedplanError>
    where
        F: Fn(&T) -> bool,
    {
        let mut data = self.write()?;
        let (kept, removed): (Vec<T>, Vec<T>) = data.drain(..).partition(|r| keep(r));
        *data = kept;
        Ok(removed)
    }

    pub fn count(&self) -> Result<usize, WedplanError> {
        Ok(self.read()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Vendor};
    use tempfile::TempDir;

    fn collection(temp: &TempDir) -> JsonCollection<Vendor> {
        JsonCollection::new(temp.path().join("vendors.json"))
    }

    #[test]
    fn test_upsert_keeps_insertion_order() {
        let temp = TempDir::new().unwrap();
        let repo = collection(&temp);

        let a = Vendor::new("Zinnia Florals", Category::Flowers);
        let mut b = Vendor::new("Aperture Photo", Category::Photography);
        repo.upsert(a.clone()).unwrap();
        repo.upsert(b.clone()).unwrap();

        b.name = "Aperture Photography".into();
        repo.upsert(b.clone()).unwrap();

        let names: Vec<String> = repo.get_all().unwrap().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["Zinnia Florals", "Aperture Photography"]);
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn test_save_and_load_round_trip_order() {
        let temp = TempDir::new().unwrap();
        let repo = collection(&temp);
        for name in ["C", "A", "B"] {
            repo.upsert(Vendor::new(name, Category::Other)).unwrap();
        }
        repo.save().unwrap();

        let reloaded = collection(&temp);
        reloaded.load().unwrap();
        let names: Vec<String> = reloaded.get_all().unwrap().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_find_by_short_id() {
        let temp = TempDir::new().unwrap();
        let repo = collection(&temp);
        let vendor = Vendor::new("DJ Mike", Category::Music);
        repo.upsert(vendor.clone()).unwrap();

        let found = repo.find(&vendor.id.to_string()).unwrap().unwrap();
        assert_eq!(found.id, vendor.id);
        assert!(repo.find("vnd-00000000").unwrap().is_none());
    }

    #[test]
    fn test_remove_and_retain() {
        let temp = TempDir::new().unwrap();
        let repo = collection(&temp);
        let a = Vendor::new("A", Category::Other);
        let b = Vendor::new("B", Category::Venue);
        let c = Vendor::new("C", Category::Venue);
        for v in [&a, &b, &c] {
            repo.upsert(v.clone()).unwrap();
        }

        assert_eq!(repo.remove(a.id).unwrap().map(|v| v.name), Some("A".to_string()));
        assert!(repo.remove(a.id).unwrap().is_none());

        let removed = repo.retain(|v| v.name != "B").unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(repo.get_all().unwrap()[0].name, "C");
    }

    #[test]
    fn test_load_file_without_items_key() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("vendors.json"), "{}").unwrap();

        let repo = collection(&temp);
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_load_replaces_in_memory_records() {
        let temp = TempDir::new().unwrap();
        let repo = collection(&temp);
        let kept = Vendor::new("Willow Barn", Category::Venue);
        repo.upsert(kept.clone()).unwrap();
        repo.save().unwrap();

        repo.upsert(Vendor::new("Unsaved Cakes", Category::Catering)).unwrap();
        repo.load().unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, kept.id);
        assert_eq!(all[0].category, Category::Venue);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let repo = collection(&temp);
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }
}
