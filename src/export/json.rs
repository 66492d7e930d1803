//! JSON Export functionality
//!
//! Exports the whole plan to JSON format with schema versioning.

use crate::error::{WedplanError, WedplanResult};
use crate::models::{
    BudgetCategory, BudgetItem, DayOfEvent, Guest, Moodboard, TimelineTask, Vendor, Wedding,
};
use crate::storage::Storage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full plan export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub wedding: Option<Wedding>,

    pub tasks: Vec<TimelineTask>,

    pub budget_categories: Vec<BudgetCategory>,

    pub budget_items: Vec<BudgetItem>,

    pub guests: Vec<Guest>,

    pub vendors: Vec<Vendor>,

    pub moodboards: Vec<Moodboard>,

    pub events: Vec<DayOfEvent>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Counts for a quick look at an export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub task_count: usize,
    pub completed_task_count: usize,
    pub budget_category_count: usize,
    pub budget_item_count: usize,
    pub guest_count: usize,
    pub vendor_count: usize,
    pub moodboard_count: usize,
    pub event_count: usize,
}

impl FullExport {
    /// Snapshot everything in storage
    pub fn from_storage(storage: &Storage) -> WedplanResult<Self> {
        let wedding = storage.wedding.get()?;
        let tasks = storage.tasks.get_all()?;
        let budget_categories = storage.budget_categories.get_all()?;
        let budget_items = storage.budget_items.get_all()?;
        let guests = storage.guests.get_all()?;
        let vendors = storage.vendors.get_all()?;
        let moodboards = storage.moodboards.get_all()?;
        let events = storage.events.get_all()?;

        let metadata = ExportMetadata {
            task_count: tasks.len(),
            completed_task_count: tasks.iter().filter(|t| t.completed).count(),
            budget_category_count: budget_categories.len(),
            budget_item_count: budget_items.len(),
            guest_count: guests.len(),
            vendor_count: vendors.len(),
            moodboard_count: moodboards.len(),
            event_count: events.len(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            wedding,
            tasks,
            budget_categories,
            budget_items,
            guests,
            vendors,
            moodboards,
            events,
            metadata,
        })
    }

    /// Check the schema version and cross-references
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let category_ids: HashSet<_> = self.budget_categories.iter().map(|c| c.id).collect();
        let vendor_ids: HashSet<_> = self.vendors.iter().map(|v| v.id).collect();

        for item in &self.budget_items {
            if !category_ids.contains(&item.category_id) {
                return Err(format!(
                    "Budget item {} references unknown category {}",
                    item.id, item.category_id
                ));
            }
            if let Some(vendor_id) = item.vendor_id {
                if !vendor_ids.contains(&vendor_id) {
                    return Err(format!(
                        "Budget item {} references unknown vendor {}",
                        item.id, vendor_id
                    ));
                }
            }
        }

        let mut codes = HashSet::new();
        for guest in &self.guests {
            if !codes.insert(guest.rsvp_code.as_str()) {
                return Err(format!("Duplicate RSVP code {}", guest.rsvp_code));
            }
        }

        Ok(())
    }
}

/// Export the full plan to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> WedplanResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| WedplanError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a JSON export and verify it
pub fn import_from_json(json_str: &str) -> WedplanResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| WedplanError::Import(e.to_string()))?;

    export.validate().map_err(WedplanError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::WedplanPaths;
    use crate::models::{BudgetCategoryId, Category, Money};
    use crate::services::{CreateGuestInput, GuestService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = WedplanPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_full_export() {
        let (_temp_dir, storage) = create_test_storage();

        let category = BudgetCategory::new("Venue", Category::Venue, Money::from_dollars(10_000));
        storage.budget_categories.upsert(category.clone()).unwrap();
        let item = BudgetItem::new(category.id, "Deposit", Money::from_dollars(2_000));
        storage.budget_items.upsert(item).unwrap();
        GuestService::new(&storage)
            .add(CreateGuestInput {
                first_name: "Emma".into(),
                last_name: "Johnson".into(),
                ..Default::default()
            })
            .unwrap();

        let mut output = Vec::new();
        export_full_json(&storage, &mut output, true).unwrap();
        let json_str = String::from_utf8(output).unwrap();
        assert!(json_str.contains("\"schema_version\""));

        let imported = import_from_json(&json_str).unwrap();
        assert!(imported.wedding.is_none());
        assert_eq!(imported.metadata.budget_category_count, 1);
        assert_eq!(imported.metadata.budget_item_count, 1);
        assert_eq!(imported.metadata.guest_count, 1);
        assert_eq!(imported.guests[0].first_name, "Emma");
    }

    #[test]
    fn test_validate_catches_dangling_category() {
        let (_temp_dir, storage) = create_test_storage();
        let mut export = FullExport::from_storage(&storage).unwrap();
        let item = BudgetItem::new(BudgetCategoryId::new(), "Orphan", Money::from_dollars(1));
        export.budget_items.push(item);

        let err = export.validate().unwrap_err();
        assert!(err.contains("unknown category"));
    }

    #[test]
    fn test_schema_mismatch() {
        let (_temp_dir, storage) = create_test_storage();
        let mut export = FullExport::from_storage(&storage).unwrap();
        export.schema_version = "0.1.0".into();
        assert!(export.validate().unwrap_err().contains("Schema version mismatch"));
    }
}
