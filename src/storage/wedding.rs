//! Wedding profile storage
//!
//! There is at most one wedding, stored in wedding.json (`null` until
//! onboarding has run).

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::WedplanError;
use crate::models::Wedding;

use super::file_io::{read_json, write_json_atomic};

pub struct WeddingRepository {
    path: PathBuf,
    data: RwLock<Option<Wedding>>,
}

impl WeddingRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(None),
        }
    }

    pub fn load(&self) -> Result<(), WedplanError> {
        let wedding: Option<Wedding> = read_json(&self.path)?;
        let mut data = self
            .data
            .write()
            .map_err(|e| WedplanError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = wedding;
        Ok(())
    }

    pub fn save(&self) -> Result<(), WedplanError> {
        let data = self
            .data
            .read()
            .map_err(|e| WedplanError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        write_json_atomic(&self.path, &*data)
    }

    pub fn get(&self) -> Result<Option<Wedding>, WedplanError> {
        let data = self
            .data
            .read()
            .map_err(|e| WedplanError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    /// The wedding, or `NotInitialized` if onboarding hasn't run
    pub fn require(&self) -> Result<Wedding, WedplanError> {
        self.get()?.ok_or(WedplanError::NotInitialized)
    }

    pub fn set(&self, wedding: Wedding) -> Result<(), WedplanError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WedplanError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = Some(wedding);
        Ok(())
    }
}
