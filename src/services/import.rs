//! Guest CSV import
//!
//! Reads a guest list exported from a spreadsheet. The header row names the
//! columns (`first_name,last_name,email,relation,side,plus_one`, any order,
//! only the two name columns required). Rows naming a guest who is already
//! on the list are skipped; malformed rows are reported by row number.

use std::collections::{BTreeMap, HashSet};
use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use crate::audit::{AuditEntry, EntityType};
use crate::error::{WedplanError, WedplanResult};
use crate::models::{GuestRelation, Side};
use crate::storage::Storage;

use super::guest::{CreateGuestInput, GuestService};

/// Column positions found in the header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestColumns {
    pub first_name: usize,
    pub last_name: usize,
    pub email: Option<usize>,
    pub relation: Option<usize>,
    pub side: Option<usize>,
    pub plus_one: Option<usize>,
}

impl GuestColumns {
    /// Locate columns by header name, ignoring case and spacing
    pub fn from_headers(headers: &StringRecord) -> WedplanResult<Self> {
        let position = |names: &[&str]| {
            headers.iter().position(|h| {
                let h = h.trim().to_lowercase().replace([' ', '-'], "_");
                names.contains(&h.as_str())
            })
        };

        let first_name = position(&["first_name", "first", "firstname"])
            .ok_or_else(|| WedplanError::Import("Missing 'first_name' column".into()))?;
        let last_name = position(&["last_name", "last", "lastname", "surname"])
            .ok_or_else(|| WedplanError::Import("Missing 'last_name' column".into()))?;

        Ok(Self {
            first_name,
            last_name,
            email: position(&["email", "email_address"]),
            relation: position(&["relation", "relationship"]),
            side: position(&["side"]),
            plus_one: position(&["plus_one", "plusone", "plus_one_allowed"]),
        })
    }
}

/// A guest row ready to import
#[derive(Debug, Clone)]
pub struct ParsedGuest {
    /// Data row number, 1-based, header excluded
    pub row_number: usize,
    pub input: CreateGuestInput,
}

/// Outcome of an import run
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    pub imported: usize,
    pub duplicates_skipped: usize,
    pub errors: usize,
    /// Error messages by row number
    pub error_messages: BTreeMap<usize, String>,
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.trim().to_lowercase().as_str() {
        "" | "no" | "n" | "false" | "0" => Ok(false),
        "yes" | "y" | "true" | "1" | "x" => Ok(true),
        other => Err(format!("Invalid plus_one value: '{}'", other)),
    }
}

fn cell<'r>(record: &'r StringRecord, column: Option<usize>) -> &'r str {
    column.and_then(|c| record.get(c)).map(str::trim).unwrap_or("")
}

/// Service for importing guests from CSV
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Parse every data row, keeping per-row errors
    pub fn parse_guests<R: Read>(
        &self,
        reader: R,
    ) -> WedplanResult<Vec<Result<ParsedGuest, (usize, String)>>> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader
            .headers()
            .map_err(|e| WedplanError::Import(format!("Failed to read CSV header: {}", e)))?
            .clone();
        let columns = GuestColumns::from_headers(&headers)?;

        let mut results = Vec::new();
        for (idx, record) in reader.records().enumerate() {
            let row_number = idx + 1;
            let parsed = match record {
                Ok(record) => self.parse_record(&record, &columns, row_number),
                Err(e) => Err(format!("Error reading CSV record: {}", e)),
            };
            results.push(parsed.map_err(|msg| (row_number, msg)));
        }
        Ok(results)
    }

    fn parse_record(
        &self,
        record: &StringRecord,
        columns: &GuestColumns,
        row_number: usize,
    ) -> Result<ParsedGuest, String> {
        let first_name = cell(record, Some(columns.first_name));
        let last_name = cell(record, Some(columns.last_name));
        if first_name.is_empty() || last_name.is_empty() {
            return Err("First and last name are required".into());
        }

        let relation = match cell(record, columns.relation) {
            "" => GuestRelation::default(),
            s => s.parse::<GuestRelation>()?,
        };
        let side = match cell(record, columns.side) {
            "" => Side::default(),
            s => s.parse::<Side>()?,
        };
        let email = cell(record, columns.email);

        Ok(ParsedGuest {
            row_number,
            input: CreateGuestInput {
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: (!email.is_empty()).then(|| email.to_string()),
                relation,
                side,
                plus_one_allowed: parse_bool(cell(record, columns.plus_one))?,
                ..CreateGuestInput::default()
            },
        })
    }

    /// Import guests from CSV, skipping anyone already on the list
    pub fn import_guests<R: Read>(&self, reader: R) -> WedplanResult<ImportResult> {
        let parsed = self.parse_guests(reader)?;
        let guest_service = GuestService::new(self.storage);

        let mut seen: HashSet<String> = self
            .storage
            .guests
            .get_all()?
            .iter()
            .map(|g| g.full_name().to_lowercase())
            .collect();

        let mut result = ImportResult::default();
        let mut entries = Vec::new();

        for row in parsed {
            let row = match row {
                Ok(row) => row,
                Err((row_number, message)) => {
                    result.errors += 1;
                    result.error_messages.insert(row_number, message);
                    continue;
                }
            };

            let key = format!("{} {}", row.input.first_name, row.input.last_name).to_lowercase();
            if seen.contains(&key) {
                result.duplicates_skipped += 1;
                continue;
            }

            // Codes must be unique against rows imported earlier in this run,
            // so each guest goes into the collection before the next is built
            match guest_service.build(row.input) {
                Ok(guest) => {
                    entries.push(AuditEntry::create(
                        EntityType::Guest,
                        guest.id.to_string(),
                        Some(guest.full_name()),
                        &guest,
                    ));
                    self.storage.guests.upsert(guest)?;
                    seen.insert(key);
                    result.imported += 1;
                }
                Err(e) => {
                    result.errors += 1;
                    result.error_messages.insert(row.row_number, e.to_string());
                }
            }
        }

        if result.imported > 0 {
            self.storage.guests.save()?;
            self.storage.log_batch(&entries)?;
        }

        info!(
            imported = result.imported,
            duplicates = result.duplicates_skipped,
            errors = result.errors,
            "Guest import finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::WedplanPaths;
    use crate::models::Guest;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = WedplanPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_columns_from_headers() {
        let headers = StringRecord::from(vec!["Email", "Last Name", "First Name", "Plus-One"]);
        let columns = GuestColumns::from_headers(&headers).unwrap();
        assert_eq!(columns.first_name, 2);
        assert_eq!(columns.last_name, 1);
        assert_eq!(columns.email, Some(0));
        assert_eq!(columns.plus_one, Some(3));
        assert_eq!(columns.side, None);

        let headers = StringRecord::from(vec!["name", "email"]);
        assert!(matches!(
            GuestColumns::from_headers(&headers),
            Err(WedplanError::Import(_))
        ));
    }

    #[test]
    fn test_import_guests() {
        let (_temp, storage) = create_test_storage();
        storage.guests.upsert(Guest::new("Emma", "Johnson")).unwrap();

        let csv = "\
first_name,last_name,email,relation,side,plus_one
Liam,Anders,liam@example.com,friend,partner1,yes
emma,johnson,,,,
Noah,,,,,
Olivia,Brown,,cousin,,
Ava,Smith,,family,both,no
";
        let result = ImportService::new(&storage)
            .import_guests(csv.as_bytes())
            .unwrap();

        assert_eq!(result.imported, 2);
        assert_eq!(result.duplicates_skipped, 1);
        assert_eq!(result.errors, 2);
        assert!(result.error_messages.contains_key(&3));
        assert!(result.error_messages[&4].contains("GuestRelation"));

        let liam = storage.guests.find_by_name("Liam Anders").unwrap().pop().unwrap();
        assert!(liam.plus_one_allowed);
        assert_eq!(liam.side, Side::Partner1);
        assert_eq!(storage.guests.count().unwrap(), 3);
        assert_eq!(storage.audit().entry_count().unwrap(), 2);
    }

    #[test]
    fn test_import_skips_duplicates_within_file() {
        let (_temp, storage) = create_test_storage();
        let csv = "first_name,last_name\nLiam,Anders\nLiam,Anders\n";
        let result = ImportService::new(&storage)
            .import_guests(csv.as_bytes())
            .unwrap();
        assert_eq!(result.imported, 1);
        assert_eq!(result.duplicates_skipped, 1);
    }
}
