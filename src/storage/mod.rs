//! Storage layer for wedplan
//!
//! JSON file storage with atomic writes. Each collection has its own file
//! under `data/`, and every mutation made through the services is recorded
//! in the audit log.

#[macro_use]
pub mod collection;

pub mod budget;
pub mod file_io;
pub mod guests;
pub mod init;
pub mod planning;
pub mod wedding;

pub use budget::{BudgetCategoryRepository, BudgetItemRepository};
pub use collection::{JsonCollection, Record};
pub use file_io::{read_json, write_json_atomic};
pub use guests::GuestRepository;
pub use init::default_budget_categories;
pub use planning::{EventRepository, MoodboardRepository, TaskRepository, VendorRepository};
pub use wedding::WeddingRepository;

use serde::Serialize;

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::WedplanPaths;
use crate::error::WedplanError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: WedplanPaths,
    audit: AuditLogger,
    pub wedding: WeddingRepository,
    pub tasks: TaskRepository,
    pub budget_categories: BudgetCategoryRepository,
    pub budget_items: BudgetItemRepository,
    pub guests: GuestRepository,
    pub vendors: VendorRepository,
    pub moodboards: MoodboardRepository,
    pub events: EventRepository,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: WedplanPaths) -> Result<Self, WedplanError> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            wedding: WeddingRepository::new(paths.wedding_file()),
            tasks: TaskRepository::new(paths.tasks_file()),
            budget_categories: BudgetCategoryRepository::new(paths.budget_categories_file()),
            budget_items: BudgetItemRepository::new(paths.budget_items_file()),
            guests: GuestRepository::new(paths.guests_file()),
            vendors: VendorRepository::new(paths.vendors_file()),
            moodboards: MoodboardRepository::new(paths.moodboards_file()),
            events: EventRepository::new(paths.events_file()),
            paths,
        })
    }

    pub fn paths(&self) -> &WedplanPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), WedplanError> {
        self.wedding.load()?;
        self.tasks.load()?;
        self.budget_categories.load()?;
        self.budget_items.load()?;
        self.guests.load()?;
        self.vendors.load()?;
        self.moodboards.load()?;
        self.events.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), WedplanError> {
        self.wedding.save()?;
        self.tasks.save()?;
        self.budget_categories.save()?;
        self.budget_items.save()?;
        self.guests.save()?;
        self.vendors.save()?;
        self.moodboards.save()?;
        self.events.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (settings written by `init`)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), WedplanError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update; the diff is computed from the snapshots when not given
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), WedplanError> {
        let mut entry =
            AuditEntry::update(entity_type, entity_id, entity_name, before, after, diff_summary);
        if entry.diff_summary.is_none() {
            if let (Some(b), Some(a)) = (&entry.before, &entry.after) {
                entry.diff_summary = generate_diff(b, a);
            }
        }
        self.audit.log(&entry)
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), WedplanError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_batch(&self, entries: &[AuditEntry]) -> Result<(), WedplanError> {
        self.audit.log_batch(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::{Category, Vendor};
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WedplanPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_save_all_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WedplanPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths.clone()).unwrap();
        storage
            .vendors
            .upsert(Vendor::new("Bloom & Wild", Category::Flowers))
            .unwrap();
        storage.save_all().unwrap();

        let mut reloaded = Storage::new(paths).unwrap();
        reloaded.load_all().unwrap();
        assert_eq!(reloaded.vendors.count().unwrap(), 1);
        assert!(reloaded.wedding.get().unwrap().is_none());
    }

    #[test]
    fn test_log_update_fills_in_diff() {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(WedplanPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();

        let before = Vendor::new("DJ Mike", Category::Music);
        let mut after = before.clone();
        after.rating = Some(5);

        storage
            .log_update(
                EntityType::Vendor,
                after.id.to_string(),
                Some(after.name.clone()),
                &before,
                &after,
                None,
            )
            .unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Update);
        assert_eq!(entries[0].diff_summary.as_deref(), Some("rating: null -> 5"));
    }
}
