//! Dashboard and wedding profile formatting

use crate::config::settings::Settings;
use crate::models::Wedding;
use crate::services::Overview;

use super::{date, format_bar, money, or_dash, percent, separator};

/// Format the `status` overview
pub fn format_status(settings: &Settings, overview: &Overview) -> String {
    let wedding = &overview.wedding;
    let mut output = String::new();

    output.push_str(&format!("{}\n", wedding.couple()));
    output.push_str(&format!("{}\n", separator(40)));

    match (wedding.wedding_date, overview.countdown) {
        (Some(day), Some(countdown)) if countdown.is_over() => {
            output.push_str(&format!("{}: the big day is here!\n", date(settings, day)));
        }
        (Some(day), Some(countdown)) => {
            output.push_str(&format!(
                "{}: {} days, {} hours, {} minutes to go",
                date(settings, day),
                countdown.days,
                countdown.hours,
                countdown.minutes
            ));
            if let Some(months) = overview.months_to_go {
                output.push_str(&format!(" (about {} months)", months));
            }
            output.push('\n');
        }
        _ => output.push_str("Date not set yet. Run 'wedplan wedding edit --date YYYY-MM-DD'.\n"),
    }
    output.push('\n');

    let tasks = &overview.tasks;
    output.push_str(&format!(
        "Timeline   {} {:>4}  {}/{} done",
        format_bar(tasks.progress, 20),
        percent(tasks.progress),
        tasks.completed,
        tasks.total
    ));
    if tasks.overdue > 0 {
        output.push_str(&format!(", {} overdue", tasks.overdue));
    }
    output.push('\n');

    let budget = &overview.budget;
    output.push_str(&format!(
        "Budget     {} {:>4}  {} of {} spent{}\n",
        format_bar(budget.percent_used, 20),
        percent(budget.percent_used),
        money(settings, budget.total_spent),
        money(settings, budget.total_allocated),
        if budget.is_over_budget { " (OVER BUDGET)" } else { "" }
    ));

    let guests = &overview.guests;
    output.push_str(&format!(
        "Guests     {} {:>4}  {} confirmed, {} declined, {} pending ({} attending)\n",
        format_bar(guests.response_rate(), 20),
        percent(guests.response_rate()),
        guests.confirmed,
        guests.declined,
        guests.pending,
        guests.attending
    ));

    let vendors = &overview.vendors;
    output.push_str(&format!(
        "Vendors    {} of {} booked, {} committed, {} in deposits\n",
        vendors.booked,
        vendors.total,
        money(settings, vendors.committed_spend),
        money(settings, vendors.deposits_paid)
    ));

    if !overview.upcoming.is_empty() {
        output.push_str("\nUp next:\n");
        for task in &overview.upcoming {
            let due = task
                .due_date
                .map(|d| date(settings, d))
                .unwrap_or_else(|| "no due date".into());
            output.push_str(&format!("  [ ] {} ({})\n", task.title, due));
        }
    }

    output
}

/// Format the wedding profile
pub fn format_wedding_details(settings: &Settings, wedding: &Wedding) -> String {
    let mut output = String::new();

    output.push_str(&format!("Wedding: {}\n", wedding.couple()));
    output.push_str(&format!(
        "  Date:        {}\n",
        wedding
            .wedding_date
            .map(|d| date(settings, d))
            .unwrap_or_else(|| "Not sure yet".into())
    ));
    output.push_str(&format!("  Location:    {}\n", or_dash(wedding.location.as_deref())));
    output.push_str(&format!("  Venue:       {}\n", or_dash(wedding.venue_name.as_deref())));
    output.push_str(&format!(
        "  Guests:      {}\n",
        wedding
            .estimated_guests
            .map(|g| format!("~{}", g))
            .unwrap_or_else(|| "-".into())
    ));
    output.push_str(&format!(
        "  Budget:      {}\n",
        wedding
            .budget
            .map(|b| money(settings, b))
            .unwrap_or_else(|| "-".into())
    ));
    output.push_str(&format!(
        "  Style:       {}\n",
        wedding
            .style
            .map(|s| s.label().to_string())
            .unwrap_or_else(|| "-".into())
    ));
    output.push_str(&format!("  Meals:       {}\n", wedding.meal_options.join(", ")));
    output.push_str(&format!("  ID:          {}\n", wedding.id));

    output
}
