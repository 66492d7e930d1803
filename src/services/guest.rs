//! Guest service
//!
//! Guest list management: adding and editing guests, RSVP status updates
//! and the counts shown on the dashboard.

use rand::Rng;
use tracing::debug;

use crate::audit::EntityType;
use crate::error::{WedplanError, WedplanResult};
use crate::models::guest::generate_rsvp_code;
use crate::models::{Guest, GuestId, GuestRelation, RsvpStatus, Side};
use crate::planning::{query_guests, GuestFilter, GuestStats};
use crate::storage::Storage;

/// Give up finding a free RSVP code after this many draws
const MAX_CODE_ATTEMPTS: usize = 64;

/// Service for guest list management
pub struct GuestService<'a> {
    storage: &'a Storage,
}

/// Input for adding a guest
#[derive(Debug, Clone, Default)]
pub struct CreateGuestInput {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub relation: GuestRelation,
    pub side: Side,
    pub plus_one_allowed: bool,
    pub notes: Option<String>,
}

/// Fields to change on a guest; `None` leaves a field as it is.
/// An empty string clears an optional text field.
#[derive(Debug, Clone, Default)]
pub struct GuestUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub relation: Option<GuestRelation>,
    pub side: Option<Side>,
    pub plus_one_allowed: Option<bool>,
    pub plus_one_name: Option<String>,
    pub meal_choice: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub notes: Option<String>,
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl<'a> GuestService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Guests matching a filter and search text, sorted by last then first name
    pub fn list(&self, filter: GuestFilter, search: &str) -> WedplanResult<Vec<Guest>> {
        let guests = self.storage.guests.get_all()?;
        Ok(query_guests(&guests, filter, search)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn stats(&self) -> WedplanResult<GuestStats> {
        Ok(GuestStats::from_guests(&self.storage.guests.get_all()?))
    }

    pub fn get(&self, id: GuestId) -> WedplanResult<Option<Guest>> {
        self.storage.guests.get(id)
    }

    /// Find a guest by ID, RSVP code or full name.
    ///
    /// A name shared by several guests is ambiguous and must be given as an ID.
    pub fn find(&self, identifier: &str) -> WedplanResult<Option<Guest>> {
        if let Some(guest) = self.storage.guests.find(identifier)? {
            return Ok(Some(guest));
        }
        if let Some(guest) = self.storage.guests.get_by_rsvp_code(identifier)? {
            return Ok(Some(guest));
        }

        let mut matches = self.storage.guests.find_by_name(identifier)?;
        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.pop()),
            n => Err(WedplanError::Validation(format!(
                "{} guests are named '{}'; use the guest ID instead",
                n,
                identifier.trim()
            ))),
        }
    }

    fn require(&self, identifier: &str) -> WedplanResult<Guest> {
        self.find(identifier)?
            .ok_or_else(|| WedplanError::guest_not_found(identifier))
    }

    /// Draw RSVP codes until one is free
    fn unique_code<R: Rng + ?Sized>(&self, rng: &mut R) -> WedplanResult<String> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_rsvp_code(rng);
            if !self.storage.guests.rsvp_code_taken(&code, None)? {
                return Ok(code);
            }
        }
        Err(WedplanError::Storage(
            "Could not generate a unique RSVP code".into(),
        ))
    }

    /// Build a validated guest without saving it
    pub(crate) fn build(&self, input: CreateGuestInput) -> WedplanResult<Guest> {
        let mut guest = Guest::new(input.first_name.trim(), input.last_name.trim());
        guest.rsvp_code = self.unique_code(&mut rand::thread_rng())?;
        guest.email = optional_text(input.email);
        guest.phone = optional_text(input.phone);
        guest.relation = input.relation;
        guest.side = input.side;
        guest.plus_one_allowed = input.plus_one_allowed;
        guest.notes = optional_text(input.notes);

        guest
            .validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;
        Ok(guest)
    }

    /// Add a guest with a fresh RSVP code
    pub fn add(&self, input: CreateGuestInput) -> WedplanResult<Guest> {
        let guest = self.build(input)?;

        self.storage.guests.upsert(guest.clone())?;
        self.storage.guests.save()?;

        self.storage.log_create(
            EntityType::Guest,
            guest.id.to_string(),
            Some(guest.full_name()),
            &guest,
        )?;

        debug!(guest = %guest.full_name(), code = %guest.rsvp_code, "Guest added");
        Ok(guest)
    }

    /// Edit a guest's details
    pub fn edit(&self, identifier: &str, update: GuestUpdate) -> WedplanResult<Guest> {
        let mut guest = self.require(identifier)?;
        let before = guest.clone();

        if let Some(first) = update.first_name {
            guest.first_name = first.trim().to_string();
        }
        if let Some(last) = update.last_name {
            guest.last_name = last.trim().to_string();
        }
        if update.email.is_some() {
            guest.email = optional_text(update.email);
        }
        if update.phone.is_some() {
            guest.phone = optional_text(update.phone);
        }
        if let Some(relation) = update.relation {
            guest.relation = relation;
        }
        if let Some(side) = update.side {
            guest.side = side;
        }
        if let Some(allowed) = update.plus_one_allowed {
            guest.plus_one_allowed = allowed;
            if !allowed {
                guest.plus_one_name = None;
            }
        }
        if update.plus_one_name.is_some() {
            guest.plus_one_name = optional_text(update.plus_one_name);
        }
        if update.meal_choice.is_some() {
            guest.meal_choice = optional_text(update.meal_choice);
        }
        if update.dietary_restrictions.is_some() {
            guest.dietary_restrictions = optional_text(update.dietary_restrictions);
        }
        if update.notes.is_some() {
            guest.notes = optional_text(update.notes);
        }

        guest
            .validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;
        guest.updated_at = chrono::Utc::now();

        self.save_update(&before, &guest)?;
        Ok(guest)
    }

    /// Set a guest's RSVP status by hand; any status may follow any other
    pub fn set_rsvp(&self, identifier: &str, status: RsvpStatus) -> WedplanResult<Guest> {
        let mut guest = self.require(identifier)?;
        let before = guest.clone();
        guest.set_rsvp_status(status);

        self.save_update(&before, &guest)?;
        debug!(guest = %guest.full_name(), status = %status, "RSVP status set");
        Ok(guest)
    }

    /// Remove a guest from the list
    pub fn remove(&self, identifier: &str) -> WedplanResult<Guest> {
        let guest = self.require(identifier)?;
        self.storage.guests.remove(guest.id)?;
        self.storage.guests.save()?;

        self.storage.log_delete(
            EntityType::Guest,
            guest.id.to_string(),
            Some(guest.full_name()),
            &guest,
        )?;

        Ok(guest)
    }

    pub(crate) fn save_update(&self, before: &Guest, after: &Guest) -> WedplanResult<()> {
        self.storage.guests.upsert(after.clone())?;
        self.storage.guests.save()?;
        self.storage.log_update(
            EntityType::Guest,
            after.id.to_string(),
            Some(after.full_name()),
            before,
            after,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::WedplanPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = WedplanPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn input(first: &str, last: &str) -> CreateGuestInput {
        CreateGuestInput {
            first_name: first.into(),
            last_name: last.into(),
            ..CreateGuestInput::default()
        }
    }

    #[test]
    fn test_add_assigns_unique_codes() {
        let (_temp, storage) = create_test_storage();
        let service = GuestService::new(&storage);

        let mut codes = std::collections::HashSet::new();
        for i in 0..25 {
            let guest = service.add(input("Guest", &format!("Number{}", i))).unwrap();
            assert_eq!(guest.rsvp_code.len(), 6);
            assert!(codes.insert(guest.rsvp_code));
        }
    }

    #[test]
    fn test_add_validates() {
        let (_temp, storage) = create_test_storage();
        let service = GuestService::new(&storage);
        assert!(service.add(input(" ", "Johnson")).unwrap_err().is_validation());

        let mut bad_email = input("Emma", "Johnson");
        bad_email.email = Some("emma.example.com".into());
        assert!(service.add(bad_email).unwrap_err().is_validation());

        let mut blank_email = input("Emma", "Johnson");
        blank_email.email = Some("  ".into());
        assert!(service.add(blank_email).unwrap().email.is_none());
    }

    #[test]
    fn test_find_by_name_code_and_id() {
        let (_temp, storage) = create_test_storage();
        let service = GuestService::new(&storage);
        let emma = service.add(input("Emma", "Johnson")).unwrap();

        assert_eq!(service.find("emma johnson").unwrap().unwrap().id, emma.id);
        assert_eq!(
            service
                .find(&emma.rsvp_code.to_lowercase())
                .unwrap()
                .unwrap()
                .id,
            emma.id
        );
        assert_eq!(service.find(&emma.id.to_string()).unwrap().unwrap().id, emma.id);

        service.add(input("Emma", "Johnson")).unwrap();
        assert!(service.find("Emma Johnson").unwrap_err().is_validation());
    }

    #[test]
    fn test_set_rsvp_any_transition() {
        let (_temp, storage) = create_test_storage();
        let service = GuestService::new(&storage);
        service.add(input("Emma", "Johnson")).unwrap();

        for status in [
            RsvpStatus::Declined,
            RsvpStatus::Confirmed,
            RsvpStatus::Pending,
            RsvpStatus::Maybe,
        ] {
            let guest = service.set_rsvp("Emma Johnson", status).unwrap();
            assert_eq!(guest.rsvp_status, status);
        }
    }

    #[test]
    fn test_edit_plus_one_rules() {
        let (_temp, storage) = create_test_storage();
        let service = GuestService::new(&storage);
        service.add(input("Emma", "Johnson")).unwrap();

        let err = service
            .edit(
                "Emma Johnson",
                GuestUpdate {
                    plus_one_name: Some("Liam".into()),
                    ..GuestUpdate::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());

        let guest = service
            .edit(
                "Emma Johnson",
                GuestUpdate {
                    plus_one_allowed: Some(true),
                    plus_one_name: Some("Liam".into()),
                    ..GuestUpdate::default()
                },
            )
            .unwrap();
        assert!(guest.has_plus_one());

        // Revoking the plus-one drops the name too
        let guest = service
            .edit(
                "Emma Johnson",
                GuestUpdate {
                    plus_one_allowed: Some(false),
                    ..GuestUpdate::default()
                },
            )
            .unwrap();
        assert!(guest.plus_one_name.is_none());
    }

    #[test]
    fn test_list_and_stats() {
        let (_temp, storage) = create_test_storage();
        let service = GuestService::new(&storage);
        service.add(input("Emma", "Johnson")).unwrap();
        service.add(input("Liam", "Anders")).unwrap();
        service.add(input("Noah", "Brown")).unwrap();
        service.set_rsvp("Liam Anders", RsvpStatus::Confirmed).unwrap();
        service.set_rsvp("Noah Brown", RsvpStatus::Declined).unwrap();

        let names: Vec<String> = service
            .list(GuestFilter::All, "")
            .unwrap()
            .iter()
            .map(Guest::full_name)
            .collect();
        assert_eq!(names, vec!["Liam Anders", "Noah Brown", "Emma Johnson"]);
        assert_eq!(service.list(GuestFilter::Pending, "").unwrap().len(), 1);
        assert!(service.list(GuestFilter::All, "nobody").unwrap().is_empty());

        let stats = service.stats().unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.confirmed + stats.declined + stats.pending, stats.total);
    }

    #[test]
    fn test_remove() {
        let (_temp, storage) = create_test_storage();
        let service = GuestService::new(&storage);
        service.add(input("Emma", "Johnson")).unwrap();
        service.remove("Emma Johnson").unwrap();
        assert!(service.remove("Emma Johnson").unwrap_err().is_not_found());
    }
}
