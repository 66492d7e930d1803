//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod budget;
pub mod day_of;
pub mod export;
pub mod guest;
pub mod init;
pub mod inspiration;
pub mod moodboard;
pub mod rsvp;
pub mod timeline;
pub mod vendor;
pub mod wedding;

pub use audit::handle_audit_command;
pub use budget::{handle_budget_command, BudgetCommands};
pub use day_of::{handle_day_of_command, DayOfCommands};
pub use export::{handle_export_command, ExportCommands};
pub use guest::{handle_guest_command, GuestCommands};
pub use init::{handle_init_command, InitArgs};
pub use inspiration::{handle_inspiration_command, handle_serve_command, InspirationCommands, ServeArgs};
pub use moodboard::{handle_moodboard_command, MoodboardCommands};
pub use rsvp::{handle_rsvp_command, RsvpArgs};
pub use timeline::{handle_timeline_command, TimelineCommands};
pub use vendor::{handle_vendor_command, VendorCommands};
pub use wedding::{handle_config_command, handle_status_command, handle_wedding_command, WeddingCommands};

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::error::{WedplanError, WedplanResult};
use crate::models::Money;

/// Current local wall-clock time
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub(crate) fn parse_money(value: &str) -> WedplanResult<Money> {
    Money::parse(value).map_err(|e| WedplanError::Validation(e.to_string()))
}

pub(crate) fn parse_date(value: &str) -> WedplanResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        WedplanError::Validation(format!(
            "Invalid date '{}'. Use the format YYYY-MM-DD",
            value
        ))
    })
}

/// Parse a date argument where `none` clears the stored value
pub(crate) fn parse_date_or_clear(value: &str) -> WedplanResult<Option<NaiveDate>> {
    if value.trim().eq_ignore_ascii_case("none") {
        Ok(None)
    } else {
        parse_date(value).map(Some)
    }
}
