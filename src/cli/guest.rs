//! Guest CLI commands
//!
//! Implements CLI commands for the guest list, including RSVP tracking and
//! CSV import.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Subcommand;

use crate::display::{format_guest_details, format_guest_list, format_guest_stats};
use crate::error::{WedplanError, WedplanResult};
use crate::models::{GuestRelation, RsvpStatus, Side};
use crate::planning::GuestFilter;
use crate::services::{CreateGuestInput, GuestService, GuestUpdate, ImportService};
use crate::storage::Storage;

/// Guest subcommands
#[derive(Subcommand)]
pub enum GuestCommands {
    /// List guests, sorted by last name
    List {
        /// Filter: all, confirmed, pending, declined
        #[arg(short, long, default_value = "all")]
        filter: GuestFilter,
        /// Only guests whose name or email contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show RSVP counts
    Stats,
    /// Add a guest
    Add {
        /// First name
        first_name: String,
        /// Last name
        last_name: String,
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
        /// Phone number
        #[arg(short, long)]
        phone: Option<String>,
        /// Relation: family, friend, coworker, partner_family, partner_friend, other
        #[arg(short, long, default_value = "other")]
        relation: GuestRelation,
        /// Side: partner1, partner2, both
        #[arg(long, default_value = "both")]
        side: Side,
        /// Invite with a plus-one
        #[arg(long)]
        plus_one: bool,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Show guest details
    Show {
        /// Guest name, RSVP code or ID
        guest: String,
    },
    /// Edit a guest
    Edit {
        /// Guest name, RSVP code or ID
        guest: String,
        /// New first name
        #[arg(long)]
        first_name: Option<String>,
        /// New last name
        #[arg(long)]
        last_name: Option<String>,
        /// Email address (empty to clear)
        #[arg(short, long)]
        email: Option<String>,
        /// Phone number (empty to clear)
        #[arg(short, long)]
        phone: Option<String>,
        /// Relation
        #[arg(short, long)]
        relation: Option<GuestRelation>,
        /// Side
        #[arg(long)]
        side: Option<Side>,
        /// Whether the guest may bring a plus-one
        #[arg(long)]
        plus_one: Option<bool>,
        /// Plus-one's name (empty to clear)
        #[arg(long)]
        plus_one_name: Option<String>,
        /// Meal choice (empty to clear)
        #[arg(long)]
        meal: Option<String>,
        /// Dietary restrictions (empty to clear)
        #[arg(long)]
        dietary: Option<String>,
        /// Notes (empty to clear)
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Set a guest's RSVP status
    Rsvp {
        /// Guest name, RSVP code or ID
        guest: String,
        /// Status: pending, invited, confirmed, declined, maybe
        status: RsvpStatus,
    },
    /// Remove a guest
    Remove {
        /// Guest name, RSVP code or ID
        guest: String,
    },
    /// Import guests from a CSV file
    ///
    /// Expected columns: first_name, last_name, email, relation, side, plus_one
    Import {
        /// Path to the CSV file
        file: PathBuf,
    },
}

/// Handle a guest command
pub fn handle_guest_command(storage: &Storage, cmd: GuestCommands) -> WedplanResult<()> {
    let service = GuestService::new(storage);

    match cmd {
        GuestCommands::List { filter, search } => {
            let guests = service.list(filter, search.as_deref().unwrap_or(""))?;
            print!("{}", format_guest_list(&guests));
        }

        GuestCommands::Stats => {
            let stats = service.stats()?;
            print!("{}", format_guest_stats(&stats));
        }

        GuestCommands::Add {
            first_name,
            last_name,
            email,
            phone,
            relation,
            side,
            plus_one,
            notes,
        } => {
            let guest = service.add(CreateGuestInput {
                first_name,
                last_name,
                email,
                phone,
                relation,
                side,
                plus_one_allowed: plus_one,
                notes,
            })?;
            println!("Added guest: {}", guest.full_name());
            println!("  RSVP code: {}", guest.rsvp_code);
            println!("  ID:        {}", guest.id);
        }

        GuestCommands::Show { guest } => {
            let guest = service
                .find(&guest)?
                .ok_or_else(|| WedplanError::guest_not_found(&guest))?;
            print!("{}", format_guest_details(&guest));
        }

        GuestCommands::Edit {
            guest,
            first_name,
            last_name,
            email,
            phone,
            relation,
            side,
            plus_one,
            plus_one_name,
            meal,
            dietary,
            notes,
        } => {
            let update = GuestUpdate {
                first_name,
                last_name,
                email,
                phone,
                relation,
                side,
                plus_one_allowed: plus_one,
                plus_one_name,
                meal_choice: meal,
                dietary_restrictions: dietary,
                notes,
            };
            let guest = service.edit(&guest, update)?;
            println!("Updated guest: {}", guest.full_name());
        }

        GuestCommands::Rsvp { guest, status } => {
            let guest = service.set_rsvp(&guest, status)?;
            println!("{}: {}", guest.full_name(), guest.rsvp_status);
        }

        GuestCommands::Remove { guest } => {
            let guest = service.remove(&guest)?;
            println!("Removed guest: {}", guest.full_name());
        }

        GuestCommands::Import { file } => {
            let reader = File::open(&file).map_err(|e| {
                WedplanError::Import(format!("Failed to open {}: {}", file.display(), e))
            })?;
            let result = ImportService::new(storage).import_guests(BufReader::new(reader))?;

            println!("Guest import from {}", file.display());
            println!("{}", "=".repeat(40));
            println!("  Imported:            {}", result.imported);
            println!("  Duplicates (skip):   {}", result.duplicates_skipped);
            println!("  Errors:              {}", result.errors);
            for (row, message) in &result.error_messages {
                println!("    row {}: {}", row, message);
            }
        }
    }

    Ok(())
}
