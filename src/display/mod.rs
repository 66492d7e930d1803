//! Display formatting for terminal output
//!
//! Every formatter returns a `String` so the CLI decides where it goes and
//! tests can look at it. Money and dates follow the user's settings.

pub mod budget;
pub mod dashboard;
pub mod day_of;
pub mod guest;
pub mod inspiration;
pub mod moodboard;
pub mod timeline;
pub mod vendor;

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::models::Money;

pub use budget::{format_budget_items, format_budget_summary, format_spent_mismatches};
pub use dashboard::{format_status, format_wedding_details};
pub use day_of::format_schedule;
pub use guest::{format_guest_details, format_guest_list, format_guest_stats};
pub use inspiration::format_search_results;
pub use moodboard::{format_moodboard_details, format_moodboard_list};
pub use timeline::{format_task_details, format_task_groups, format_template_list};
pub use vendor::{format_vendor_details, format_vendor_list, format_vendor_stats};

/// Amount with the configured currency symbol
pub fn money(settings: &Settings, amount: Money) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}

/// Date in the configured format
pub fn date(settings: &Settings, date: NaiveDate) -> String {
    date.format(&settings.date_format).to_string()
}

/// Percentage, or a dash when the whole is zero
pub fn percent(value: Option<i64>) -> String {
    value.map(|p| format!("{}%", p)).unwrap_or_else(|| "-".into())
}

/// Text or a dash
pub fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

/// Simple bar for a percentage, capped at full
pub fn format_bar(pct: Option<i64>, width: usize) -> String {
    let pct = pct.unwrap_or(0).clamp(0, 100) as usize;
    let filled = (pct * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
