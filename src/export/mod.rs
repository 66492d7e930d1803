//! Export module for wedplan
//!
//! Provides data export in multiple formats:
//! - CSV: the guest list and budget items (spreadsheet-compatible)
//! - JSON: machine-readable export of the whole plan
//! - YAML: human-readable export of the whole plan

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_budget_csv, export_guests_csv};
pub use json::{export_full_json, import_from_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
