//! YAML Export functionality
//!
//! Exports the whole plan to YAML format for a human-readable backup.

use crate::error::{WedplanError, WedplanResult};
use crate::export::json::FullExport;
use crate::storage::Storage;
use std::io::Write;

/// Export the full plan to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> WedplanResult<()> {
    let export = FullExport::from_storage(storage)?;
    let header_err = |e: std::io::Error| WedplanError::Export(e.to_string());

    writeln!(writer, "# wedplan full export").map_err(header_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(header_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(header_err)?;
    if let Some(wedding) = &export.wedding {
        writeln!(writer, "# Wedding: {}", wedding.couple()).map_err(header_err)?;
    }
    writeln!(writer).map_err(header_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| WedplanError::Export(e.to_string()))?;

    Ok(())
}

/// Read back a YAML export and verify it
pub fn import_from_yaml(yaml_str: &str) -> WedplanResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| WedplanError::Import(e.to_string()))?;

    export.validate().map_err(WedplanError::Import)?;

    Ok(export)
}
