//! Wedding profile, status and config commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_status, format_wedding_details};
use crate::error::WedplanResult;
use crate::models::WeddingStyle;
use crate::services::{DashboardService, WeddingService, WeddingUpdate};
use crate::storage::Storage;

use super::{now, parse_date_or_clear, parse_money};

/// Wedding subcommands
#[derive(Subcommand)]
pub enum WeddingCommands {
    /// Show the wedding profile
    Show,
    /// Edit the wedding profile
    Edit {
        /// First partner's name
        #[arg(long)]
        partner1: Option<String>,
        /// Second partner's name
        #[arg(long)]
        partner2: Option<String>,
        /// Wedding date (YYYY-MM-DD, or "none" to clear)
        #[arg(long)]
        date: Option<String>,
        /// City or region
        #[arg(long)]
        location: Option<String>,
        /// Venue name
        #[arg(long)]
        venue: Option<String>,
        /// Estimated number of guests
        #[arg(long)]
        guests: Option<u32>,
        /// Total budget (e.g. 40000 or 40k)
        #[arg(long)]
        budget: Option<String>,
        /// Wedding style
        #[arg(long)]
        style: Option<WeddingStyle>,
        /// Meal options for the RSVP form, comma separated
        #[arg(long, value_delimiter = ',')]
        meals: Option<Vec<String>>,
    },
}

/// Handle a wedding command
pub fn handle_wedding_command(
    storage: &Storage,
    settings: &Settings,
    cmd: WeddingCommands,
) -> WedplanResult<()> {
    let service = WeddingService::new(storage);

    match cmd {
        WeddingCommands::Show => {
            let wedding = service.require()?;
            print!("{}", format_wedding_details(settings, &wedding));
        }

        WeddingCommands::Edit {
            partner1,
            partner2,
            date,
            location,
            venue,
            guests,
            budget,
            style,
            meals,
        } => {
            let update = WeddingUpdate {
                partner1_name: partner1,
                partner2_name: partner2,
                wedding_date: date.as_deref().map(parse_date_or_clear).transpose()?,
                location,
                venue_name: venue,
                estimated_guests: guests,
                budget: budget.as_deref().map(parse_money).transpose()?,
                style,
                meal_options: meals,
            };
            let wedding = service.update(update)?;
            println!("Updated wedding: {}", wedding.couple());
            if wedding.wedding_date.is_some() && storage.tasks.count()? == 0 {
                println!("Run 'wedplan timeline generate' to build your timeline.");
            }
        }
    }

    Ok(())
}

/// Handle the status command: countdown plus dashboard
pub fn handle_status_command(storage: &Storage, settings: &Settings) -> WedplanResult<()> {
    let overview = DashboardService::new(storage).overview(now())?;
    print!("{}", format_status(settings, &overview));
    Ok(())
}

/// Print where data lives and the active settings
pub fn handle_config_command(storage: &Storage, settings: &Settings) -> WedplanResult<()> {
    let paths = storage.paths();

    println!("wedplan Configuration");
    println!("=====================");
    println!();
    println!("Paths:");
    println!("  Base directory: {}", paths.base_dir().display());
    println!("  Settings file:  {}", paths.settings_file().display());
    println!("  Data directory: {}", paths.data_dir().display());
    println!("  Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency:       {}", settings.currency_symbol);
    println!("  Date format:    {}", settings.date_format);
    println!("  Setup done:     {}", settings.setup_completed);
    println!();
    println!("Inspiration search:");
    println!("  API base:       {}", settings.search.api_base);
    println!("  Page size:      {}", settings.search.page_size);
    println!("  Server port:    {}", settings.search.effective_port());
    println!(
        "  Access token:   {}",
        if settings.search.access_token().is_some() {
            "set"
        } else {
            "not set (sample pins only)"
        }
    );

    Ok(())
}
