//! Day-of schedule CLI commands

use clap::Subcommand;

use crate::display::format_schedule;
use crate::error::{WedplanError, WedplanResult};
use crate::models::day_of::parse_time;
use crate::services::{CreateEventInput, DayOfService};
use crate::storage::Storage;

/// Day-of subcommands
#[derive(Subcommand)]
pub enum DayOfCommands {
    /// Show the running order
    List,
    /// Add an entry to the schedule
    Add {
        /// What happens
        title: String,
        /// Start time (HH:MM, 24-hour)
        start: String,
        /// End time (HH:MM, 24-hour)
        #[arg(short, long)]
        end: Option<String>,
        /// Where it happens
        #[arg(short, long)]
        location: Option<String>,
        /// Who is responsible
        #[arg(short, long)]
        owner: Option<String>,
        /// Details
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Remove an entry
    Remove {
        /// Entry title or ID
        event: String,
    },
}

/// Handle a day-of command
pub fn handle_day_of_command(storage: &Storage, cmd: DayOfCommands) -> WedplanResult<()> {
    let service = DayOfService::new(storage);

    match cmd {
        DayOfCommands::List => {
            let events = service.schedule()?;
            print!("{}", format_schedule(&events));
        }

        DayOfCommands::Add {
            title,
            start,
            end,
            location,
            owner,
            description,
        } => {
            let time = |s: &str| parse_time(s).map_err(|e| WedplanError::Validation(e.to_string()));
            let event = service.add(CreateEventInput {
                title,
                start_time: time(&start)?,
                end_time: end.as_deref().map(time).transpose()?,
                location,
                description,
                assigned_to: owner,
            })?;
            println!("Scheduled: {} {}", event.time_range(), event.title);
        }

        DayOfCommands::Remove { event } => {
            let event = service.remove(&event)?;
            println!("Removed: {}", event);
        }
    }

    Ok(())
}
