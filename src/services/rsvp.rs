//! RSVP form
//!
//! The guest-facing side of the guest list. A guest looks up their
//! invitation with the code printed on it, then accepts or declines.
//! Accepting confirms the guest and records their meal, dietary needs and
//! plus-one; declining clears those. Song requests and messages for the
//! couple land in the guest's notes.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{WedplanError, WedplanResult};
use crate::models::{Guest, RsvpStatus};
use crate::storage::Storage;

use super::guest::GuestService;

/// What a guest sees when they open their invitation
#[derive(Debug, Clone)]
pub struct RsvpInvitation {
    pub guest: Guest,
    pub couple: String,
    pub wedding_date: Option<NaiveDate>,
    pub venue_name: Option<String>,
    pub location: Option<String>,
    pub meal_options: Vec<String>,
}

/// A submitted RSVP form
#[derive(Debug, Clone, Default)]
pub struct RsvpResponse {
    pub attending: bool,
    pub meal_choice: Option<String>,
    pub dietary_restrictions: Option<String>,
    pub plus_one_name: Option<String>,
    pub plus_one_meal: Option<String>,
    pub song_request: Option<String>,
    pub message: Option<String>,
}

fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Service behind the RSVP form
pub struct RsvpService<'a> {
    storage: &'a Storage,
}

impl<'a> RsvpService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    fn guest_for_code(&self, code: &str) -> WedplanResult<Guest> {
        self.storage
            .guests
            .get_by_rsvp_code(code)?
            .ok_or_else(|| {
                WedplanError::Rsvp(format!(
                    "No invitation found for code '{}'",
                    code.trim().to_uppercase()
                ))
            })
    }

    /// Open the invitation behind an RSVP code (case-insensitive)
    pub fn lookup(&self, code: &str) -> WedplanResult<RsvpInvitation> {
        let wedding = self.storage.wedding.require()?;
        let guest = self.guest_for_code(code)?;

        Ok(RsvpInvitation {
            guest,
            couple: wedding.couple(),
            wedding_date: wedding.wedding_date,
            venue_name: wedding.venue_name,
            location: wedding.location,
            meal_options: wedding.meal_options,
        })
    }

    /// Record a guest's answer
    pub fn respond(&self, code: &str, response: RsvpResponse) -> WedplanResult<Guest> {
        let wedding = self.storage.wedding.require()?;
        let mut guest = self.guest_for_code(code)?;
        let before = guest.clone();

        let canonical_meal = |choice: &str| {
            wedding
                .meal_option(choice)
                .map(str::to_string)
                .ok_or_else(|| {
                    WedplanError::Rsvp(format!(
                        "'{}' is not on the menu. Choose one of: {}",
                        choice,
                        wedding.meal_options.join(", ")
                    ))
                })
        };

        if response.attending {
            guest.meal_choice = filled(&response.meal_choice)
                .map(canonical_meal)
                .transpose()?;
            guest.dietary_restrictions = filled(&response.dietary_restrictions).map(str::to_string);

            match filled(&response.plus_one_name) {
                Some(_) if !guest.plus_one_allowed => {
                    return Err(WedplanError::Rsvp(
                        "This invitation does not include a plus-one".into(),
                    ));
                }
                Some(name) => {
                    guest.plus_one_name = Some(name.to_string());
                    if let Some(meal) = filled(&response.plus_one_meal) {
                        let meal = canonical_meal(meal)?;
                        guest.append_note(&format!("Plus-one meal: {}", meal));
                    }
                }
                None => guest.plus_one_name = None,
            }

            guest.set_rsvp_status(RsvpStatus::Confirmed);
        } else {
            guest.meal_choice = None;
            guest.plus_one_name = None;
            guest.set_rsvp_status(RsvpStatus::Declined);
        }

        if let Some(song) = filled(&response.song_request) {
            guest.append_note(&format!("Song request: {}", song));
        }
        if let Some(message) = filled(&response.message) {
            guest.append_note(&format!("Message: {}", message));
        }

        guest
            .validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;

        GuestService::new(self.storage).save_update(&before, &guest)?;

        info!(
            guest = %guest.full_name(),
            status = %guest.rsvp_status,
            "RSVP received"
        );
        Ok(guest)
    }
}
