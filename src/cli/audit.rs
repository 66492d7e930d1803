//! Audit log command

use crate::error::WedplanResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> WedplanResult<()> {
    let audit = storage.audit();
    let entries = audit.read_recent(limit)?;

    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    let total = audit.entry_count()?;
    if total > entries.len() {
        println!(
            "\nShowing {} of {} entries. Use --limit to see more.",
            entries.len(),
            total
        );
    }

    Ok(())
}
