//! CLI commands for data export
//!
//! Provides commands for exporting data in various formats.

use crate::error::{WedplanError, WedplanResult};
use crate::export::{self, FullExport};
use crate::storage::Storage;
use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Full export format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// JSON format
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all data to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export the guest list to CSV (re-importable with `guest import`)
    Guests {
        /// Output file path
        output: PathBuf,
    },

    /// Export budget items to CSV
    Budget {
        /// Output file path
        output: PathBuf,
    },

    /// Check that a full export file can be read back
    Verify {
        /// JSON or YAML export file
        file: PathBuf,
    },

    /// Show export information without writing files
    Info,
}

/// Handle export commands
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> WedplanResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let mut writer = create_output(&output)?;
            match format {
                ExportFormat::Json => export::export_full_json(storage, &mut writer, pretty)?,
                ExportFormat::Yaml => export::export_full_yaml(storage, &mut writer)?,
            }
            println!("Full database exported to: {}", output.display());
        }

        ExportCommands::Guests { output } => {
            export::export_guests_csv(storage, create_output(&output)?)?;
            let count = storage.guests.count()?;
            println!("Exported {} guests to: {}", count, output.display());
        }

        ExportCommands::Budget { output } => {
            export::export_budget_csv(storage, create_output(&output)?)?;
            let count = storage.budget_items.count()?;
            println!("Exported {} budget items to: {}", count, output.display());
        }

        ExportCommands::Verify { file } => {
            let contents = std::fs::read_to_string(&file).map_err(|e| {
                WedplanError::Import(format!("Failed to read {}: {}", file.display(), e))
            })?;
            let is_yaml = matches!(
                file.extension().and_then(|e| e.to_str()),
                Some("yaml") | Some("yml")
            );
            let backup = if is_yaml {
                export::import_from_yaml(&contents)?
            } else {
                export::import_from_json(&contents)?
            };
            println!("{} is a valid export.", file.display());
            println!();
            print_summary(&backup);
        }

        ExportCommands::Info => {
            let current = FullExport::from_storage(storage)?;
            println!("Export Information");
            println!("==================\n");
            print_summary(&current);
        }
    }

    Ok(())
}

fn create_output(output: &Path) -> WedplanResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        WedplanError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

fn print_summary(export: &FullExport) {
    println!("Schema Version: {}", export.schema_version);
    println!("App Version:    {}", export.app_version);
    println!("Exported At:    {}", export.exported_at);
    if let Some(wedding) = &export.wedding {
        println!("Wedding:        {}", wedding.couple());
    }
    println!();

    let m = &export.metadata;
    println!("Data Summary:");
    println!(
        "  Tasks:             {} ({} done)",
        m.task_count, m.completed_task_count
    );
    println!("  Budget categories: {}", m.budget_category_count);
    println!("  Budget items:      {}", m.budget_item_count);
    println!("  Guests:            {}", m.guest_count);
    println!("  Vendors:           {}", m.vendor_count);
    println!("  Moodboards:        {}", m.moodboard_count);
    println!("  Day-of events:     {}", m.event_count);
}
