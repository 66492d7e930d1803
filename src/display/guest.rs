//! Guest list display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Guest;
use crate::planning::GuestStats;

use super::{or_dash, percent};

#[derive(Tabled)]
struct GuestRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "RSVP")]
    rsvp: &'static str,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Relation")]
    relation: &'static str,
    #[tabled(rename = "Side")]
    side: &'static str,
    #[tabled(rename = "Plus-one")]
    plus_one: String,
    #[tabled(rename = "Meal")]
    meal: String,
}

impl From<&Guest> for GuestRow {
    fn from(guest: &Guest) -> Self {
        let plus_one = match (&guest.plus_one_name, guest.plus_one_allowed) {
            (Some(name), true) => name.clone(),
            (None, true) => "allowed".to_string(),
            _ => String::new(),
        };
        Self {
            name: guest.full_name(),
            rsvp: guest.rsvp_status.label(),
            code: guest.rsvp_code.clone(),
            relation: guest.relation.label(),
            side: guest.side.label(),
            plus_one,
            meal: guest.meal_choice.clone().unwrap_or_default(),
        }
    }
}

/// Format guests as a table
pub fn format_guest_list(guests: &[Guest]) -> String {
    if guests.is_empty() {
        return "No guests found.\n".to_string();
    }

    let mut table = Table::new(guests.iter().map(GuestRow::from));
    table.with(Style::psql());
    format!("{}\n\n{} guest(s)\n", table, guests.len())
}

/// Format RSVP counts
pub fn format_guest_stats(stats: &GuestStats) -> String {
    let mut output = String::new();
    output.push_str(&format!("Total guests:   {}\n", stats.total));
    output.push_str(&format!("  Confirmed:    {}\n", stats.confirmed));
    output.push_str(&format!("  Declined:     {}\n", stats.declined));
    output.push_str(&format!("  Pending:      {}\n", stats.pending));
    output.push_str(&format!("Plus-ones:      {}\n", stats.plus_ones));
    output.push_str(&format!("Attending:      {}\n", stats.attending));
    output.push_str(&format!("Response rate:  {}\n", percent(stats.response_rate())));
    output
}

/// Format a single guest
pub fn format_guest_details(guest: &Guest) -> String {
    let mut output = String::new();

    output.push_str(&format!("Guest: {}\n", guest.full_name()));
    output.push_str(&format!("  ID:         {}\n", guest.id));
    output.push_str(&format!("  RSVP code:  {}\n", guest.rsvp_code));
    output.push_str(&format!("  RSVP:       {}\n", guest.rsvp_status));
    output.push_str(&format!("  Email:      {}\n", or_dash(guest.email.as_deref())));
    output.push_str(&format!("  Phone:      {}\n", or_dash(guest.phone.as_deref())));
    output.push_str(&format!("  Relation:   {}\n", guest.relation));
    output.push_str(&format!("  Side:       {}\n", guest.side));
    output.push_str(&format!(
        "  Plus-one:   {}\n",
        if guest.plus_one_allowed {
            guest.plus_one_name.as_deref().unwrap_or("allowed, not named")
        } else {
            "no"
        }
    ));
    output.push_str(&format!("  Meal:       {}\n", or_dash(guest.meal_choice.as_deref())));
    output.push_str(&format!(
        "  Dietary:    {}\n",
        or_dash(guest.dietary_restrictions.as_deref())
    ));
    if let Some(notes) = guest.notes.as_deref().filter(|n| !n.is_empty()) {
        output.push_str("  Notes:\n");
        for line in notes.lines() {
            output.push_str(&format!("    {}\n", line));
        }
    }

    output
}
