//! Filter, search and sort for the list views
//!
//! Each list goes through the same three stages: an exact filter on a status
//! key, a case-insensitive substring search over the entity's text fields,
//! and a stable sort. Nothing here fails; an unmatched query is just an
//! empty list.

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{Guest, RsvpStatus, TimelineTask, Vendor, VendorStatus};

/// Case-insensitive substring match; an empty query matches everything
fn matches_query(query: &str, fields: &[Option<&str>]) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields
        .iter()
        .flatten()
        .any(|f| f.to_lowercase().contains(&query))
}

fn parse_error(kind: &str, s: &str, expected: &str) -> String {
    format!("Unknown {} filter '{}'. Expected one of: {}", kind, s, expected)
}

/// Guest list filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuestFilter {
    #[default]
    All,
    Confirmed,
    /// Pending, invited or maybe
    Pending,
    Declined,
}

impl GuestFilter {
    pub fn accepts(&self, guest: &Guest) -> bool {
        match self {
            Self::All => true,
            Self::Confirmed => guest.rsvp_status == RsvpStatus::Confirmed,
            Self::Pending => guest.rsvp_status.is_awaiting(),
            Self::Declined => guest.rsvp_status == RsvpStatus::Declined,
        }
    }
}

impl FromStr for GuestFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "confirmed" => Ok(Self::Confirmed),
            "pending" => Ok(Self::Pending),
            "declined" => Ok(Self::Declined),
            _ => Err(parse_error("guest", s, "all, confirmed, pending, declined")),
        }
    }
}

/// Filter, search and sort guests by last name then first name
pub fn query_guests<'a>(guests: &'a [Guest], filter: GuestFilter, search: &str) -> Vec<&'a Guest> {
    let mut result: Vec<&Guest> = guests
        .iter()
        .filter(|g| filter.accepts(g))
        .filter(|g| {
            let name = g.full_name();
            matches_query(search, &[Some(name.as_str()), g.email.as_deref()])
        })
        .collect();

    result.sort_by_cached_key(|g| {
        format!("{} {}", g.last_name, g.first_name).to_lowercase()
    });
    result
}

/// Timeline filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Todo,
    Completed,
    Overdue,
}

impl TaskFilter {
    pub fn accepts(&self, task: &TimelineTask, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Todo => !task.completed,
            Self::Completed => task.completed,
            Self::Overdue => task.is_overdue(today),
        }
    }
}

impl FromStr for TaskFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "todo" => Ok(Self::Todo),
            "completed" | "done" => Ok(Self::Completed),
            "overdue" => Ok(Self::Overdue),
            _ => Err(parse_error("task", s, "all, todo, completed, overdue")),
        }
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Todo => "todo",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        };
        f.write_str(s)
    }
}

/// Due date ascending, undated tasks last
fn by_due_date(a: &TimelineTask, b: &TimelineTask) -> Ordering {
    match (a.due_date, b.due_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Filter, search and sort tasks by due date
pub fn query_tasks<'a>(
    tasks: &'a [TimelineTask],
    filter: TaskFilter,
    search: &str,
    today: NaiveDate,
) -> Vec<&'a TimelineTask> {
    let mut result: Vec<&TimelineTask> = tasks
        .iter()
        .filter(|t| filter.accepts(t, today))
        .filter(|t| matches_query(search, &[Some(t.title.as_str()), t.description.as_deref()]))
        .collect();

    result.sort_by(|a, b| by_due_date(a, b));
    result
}

/// Vendor filter: everything or one status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VendorFilter {
    #[default]
    All,
    Status(VendorStatus),
}

impl VendorFilter {
    pub fn accepts(&self, vendor: &Vendor) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => vendor.status == *status,
        }
    }
}

impl FromStr for VendorFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse::<VendorStatus>()
            .map(Self::Status)
            .map_err(|_| parse_error("vendor", s, &format!("all, {}", VendorStatus::expected())))
    }
}

/// Filter, search and sort vendors, booked ones first then by name
pub fn query_vendors<'a>(
    vendors: &'a [Vendor],
    filter: VendorFilter,
    search: &str,
) -> Vec<&'a Vendor> {
    let mut result: Vec<&Vendor> = vendors
        .iter()
        .filter(|v| filter.accepts(v))
        .filter(|v| {
            matches_query(
                search,
                &[
                    Some(v.name.as_str()),
                    v.contact_name.as_deref(),
                    Some(v.category.as_str()),
                    Some(v.category.label()),
                ],
            )
        })
        .collect();

    result.sort_by_cached_key(|v| (!v.is_booked(), v.name.to_lowercase()));
    result
}
