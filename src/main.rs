use anyhow::Result;
use clap::{Parser, Subcommand};

use wedplan::cli::{
    handle_audit_command, handle_budget_command, handle_config_command, handle_day_of_command,
    handle_export_command, handle_guest_command, handle_init_command, handle_inspiration_command,
    handle_moodboard_command, handle_rsvp_command, handle_serve_command, handle_status_command,
    handle_timeline_command, handle_vendor_command, handle_wedding_command, InitArgs, RsvpArgs,
    ServeArgs,
};
use wedplan::config::{paths::WedplanPaths, settings::Settings};
use wedplan::logging;
use wedplan::onboarding::OnboardingWizard;
use wedplan::storage::Storage;

#[derive(Parser)]
#[command(
    name = "wedplan",
    version,
    about = "Terminal-first wedding planner",
    long_about = "wedplan keeps a couple's wedding plan in one place: a timeline \
                  worked back from the date, the budget and its expenses, the \
                  guest list with RSVP codes, vendors, moodboards and the day-of \
                  schedule."
)]
struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Set up your wedding plan
    Init(InitArgs),

    /// Countdown and planning dashboard
    Status,

    /// Show current configuration and paths
    Config,

    /// Wedding profile commands
    #[command(subcommand)]
    Wedding(wedplan::cli::WeddingCommands),

    /// Timeline task commands
    #[command(subcommand, alias = "tasks")]
    Timeline(wedplan::cli::TimelineCommands),

    /// Budget commands
    #[command(subcommand)]
    Budget(wedplan::cli::BudgetCommands),

    /// Guest list commands
    #[command(subcommand, alias = "guests")]
    Guest(wedplan::cli::GuestCommands),

    /// Vendor commands
    #[command(subcommand, alias = "vendors")]
    Vendor(wedplan::cli::VendorCommands),

    /// Moodboard commands
    #[command(subcommand)]
    Moodboard(wedplan::cli::MoodboardCommands),

    /// Day-of schedule commands
    #[command(subcommand, name = "dayof")]
    DayOf(wedplan::cli::DayOfCommands),

    /// Open an invitation and reply to it
    Rsvp(RsvpArgs),

    /// Search for inspiration
    #[command(subcommand)]
    Inspiration(wedplan::cli::InspirationCommands),

    /// Run the inspiration search proxy
    Serve(ServeArgs),

    /// Export commands
    #[command(subcommand)]
    Export(wedplan::cli::ExportCommands),

    /// Show recent changes
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let serving = matches!(cli.command, Some(Commands::Serve(_)));
    logging::init(cli.verbose, serving);

    // Initialize paths and settings
    let paths = WedplanPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init(args)) => handle_init_command(&storage, &mut settings, args)?,
        Some(Commands::Status) => handle_status_command(&storage, &settings)?,
        Some(Commands::Config) => handle_config_command(&storage, &settings)?,
        Some(Commands::Wedding(cmd)) => handle_wedding_command(&storage, &settings, cmd)?,
        Some(Commands::Timeline(cmd)) => handle_timeline_command(&storage, &settings, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &settings, cmd)?,
        Some(Commands::Guest(cmd)) => handle_guest_command(&storage, cmd)?,
        Some(Commands::Vendor(cmd)) => handle_vendor_command(&storage, &settings, cmd)?,
        Some(Commands::Moodboard(cmd)) => handle_moodboard_command(&storage, cmd)?,
        Some(Commands::DayOf(cmd)) => handle_day_of_command(&storage, cmd)?,
        Some(Commands::Rsvp(args)) => handle_rsvp_command(&storage, &settings, args)?,
        Some(Commands::Inspiration(cmd)) => {
            handle_inspiration_command(&storage, &settings, cmd)?
        }
        Some(Commands::Serve(args)) => handle_serve_command(&settings, args)?,
        Some(Commands::Export(cmd)) => handle_export_command(&storage, cmd)?,
        Some(Commands::Audit { limit }) => handle_audit_command(&storage, limit)?,
        None => {
            println!("wedplan - terminal-first wedding planner");
            println!();
            if OnboardingWizard::new(paths).needs_onboarding(&storage, &settings)? {
                println!("Run 'wedplan init' to set up your wedding plan.");
            } else {
                println!("Run 'wedplan status' to see your dashboard.");
            }
            println!("Run 'wedplan --help' for usage information.");
        }
    }

    Ok(())
}
