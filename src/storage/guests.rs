//! Guest repository
//!
//! Guests are stored in guests.json. RSVP codes are looked up
//! case-insensitively since guests type them in by hand.

use crate::error::WedplanError;
use crate::models::{Guest, GuestId};

use super::collection::JsonCollection;

impl_record!(Guest, GuestId);

pub type GuestRepository = JsonCollection<Guest>;

impl GuestRepository {
    /// Find the guest holding an RSVP code
    pub fn get_by_rsvp_code(&self, code: &str) -> Result<Option<Guest>, WedplanError> {
        let code = code.trim();
        self.find_by(|g| g.rsvp_code.eq_ignore_ascii_case(code))
    }

    /// Whether any guest other than `except` already holds `code`
    pub fn rsvp_code_taken(&self, code: &str, except: Option<GuestId>) -> Result<bool, WedplanError> {
        Ok(self
            .get_by_rsvp_code(code)?
            .is_some_and(|g| Some(g.id) != except))
    }

    /// Guests whose full name matches exactly, ignoring case
    pub fn find_by_name(&self, name: &str) -> Result<Vec<Guest>, WedplanError> {
        let name = name.trim().to_lowercase();
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|g| g.full_name().to_lowercase() == name)
            .collect())
    }
}
