//! Guest-facing RSVP command
//!
//! Without `--accept` or `--decline` the invitation is only shown.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::date;
use crate::error::WedplanResult;
use crate::models::RsvpStatus;
use crate::services::{RsvpInvitation, RsvpResponse, RsvpService};
use crate::storage::Storage;

/// RSVP form fields
#[derive(Args, Debug)]
pub struct RsvpArgs {
    /// The code printed on the invitation
    pub code: String,

    /// Joyfully accept
    #[arg(long, conflicts_with = "decline")]
    pub accept: bool,

    /// Regretfully decline
    #[arg(long)]
    pub decline: bool,

    /// Meal choice
    #[arg(long, requires = "accept")]
    pub meal: Option<String>,

    /// Dietary restrictions or allergies
    #[arg(long, requires = "accept")]
    pub dietary: Option<String>,

    /// Name of the guest you are bringing
    #[arg(long, requires = "accept")]
    pub plus_one: Option<String>,

    /// Your plus-one's meal choice
    #[arg(long, requires = "plus_one")]
    pub plus_one_meal: Option<String>,

    /// A song that will get you dancing
    #[arg(long)]
    pub song: Option<String>,

    /// A message for the couple
    #[arg(long)]
    pub message: Option<String>,
}

/// Handle the rsvp command
pub fn handle_rsvp_command(
    storage: &Storage,
    settings: &Settings,
    args: RsvpArgs,
) -> WedplanResult<()> {
    let service = RsvpService::new(storage);

    if !args.accept && !args.decline {
        let invitation = service.lookup(&args.code)?;
        print_invitation(settings, &invitation);
        println!();
        println!("Reply with --accept or --decline.");
        return Ok(());
    }

    let guest = service.respond(
        &args.code,
        RsvpResponse {
            attending: args.accept,
            meal_choice: args.meal,
            dietary_restrictions: args.dietary,
            plus_one_name: args.plus_one,
            plus_one_meal: args.plus_one_meal,
            song_request: args.song,
            message: args.message,
        },
    )?;

    match guest.rsvp_status {
        RsvpStatus::Confirmed => {
            println!("Thank you, {}! We can't wait to celebrate with you.", guest.first_name);
            if let Some(meal) = &guest.meal_choice {
                println!("  Meal: {}", meal);
            }
            if let Some(plus_one) = &guest.plus_one_name {
                println!("  Plus-one: {}", plus_one);
            }
        }
        _ => println!("Thank you, {}. You will be missed!", guest.first_name),
    }

    Ok(())
}

fn print_invitation(settings: &Settings, invitation: &RsvpInvitation) {
    let guest = &invitation.guest;

    println!("You're invited to the wedding of {}", invitation.couple);
    println!();
    println!("  Dear {},", guest.full_name());
    if let Some(day) = invitation.wedding_date {
        println!("  Date:     {}", date(settings, day));
    }
    if let Some(venue) = &invitation.venue_name {
        println!("  Venue:    {}", venue);
    }
    if let Some(location) = &invitation.location {
        println!("  Location: {}", location);
    }
    if guest.plus_one_allowed {
        println!("  You are welcome to bring a guest.");
    }
    if !invitation.meal_options.is_empty() {
        println!("  Meals:    {}", invitation.meal_options.join(", "));
    }
    if guest.rsvp_status != RsvpStatus::Pending && guest.rsvp_status != RsvpStatus::Invited {
        println!();
        println!("  Current reply: {}", guest.rsvp_status);
    }
}
