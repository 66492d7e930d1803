//! Timeline derivation
//!
//! Turns a wedding date into a dated list of tasks by offsetting the date by
//! each template's lead time, and groups existing tasks into due-date windows
//! for display.

use chrono::{Months, NaiveDate, NaiveDateTime};

use super::templates::TaskTemplate;
use crate::models::TimelineTask;

const MONTH_MILLIS: i64 = 30 * 24 * 60 * 60 * 1000;

/// Whole 30-day months from `now` until the start of the wedding day,
/// rounded up. Negative once the wedding date has passed.
pub fn months_until(wedding_date: NaiveDate, now: NaiveDateTime) -> i64 {
    let diff = (wedding_date.and_time(chrono::NaiveTime::MIN) - now).num_milliseconds();
    if diff > 0 {
        (diff + MONTH_MILLIS - 1) / MONTH_MILLIS
    } else {
        // Truncating division already rounds towards +inf for negatives
        diff / MONTH_MILLIS
    }
}

/// Months left for display, never below zero
pub fn remaining_months(wedding_date: NaiveDate, now: NaiveDateTime) -> u32 {
    months_until(wedding_date, now).clamp(0, u32::MAX as i64) as u32
}

/// `wedding_date` minus `months_before` calendar months.
///
/// Days past the end of a shorter month clamp to its last day
/// (Mar 31 minus one month is Feb 28/29).
pub fn due_date(wedding_date: NaiveDate, months_before: u32) -> Option<NaiveDate> {
    wedding_date.checked_sub_months(Months::new(months_before))
}

/// A template placed on the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTask<'a> {
    pub template: &'a TaskTemplate,
    pub due_date: NaiveDate,
}

/// Templates still relevant given the time left before the wedding
pub fn applicable_templates(
    templates: &[TaskTemplate],
    wedding_date: NaiveDate,
    now: NaiveDateTime,
) -> impl Iterator<Item = &TaskTemplate> {
    let months = months_until(wedding_date, now);
    templates
        .iter()
        .filter(move |t| i64::from(t.months_before) <= months)
}

/// Derive the dated schedule for a wedding, in catalogue order
pub fn derive_schedule(
    templates: &[TaskTemplate],
    wedding_date: NaiveDate,
    now: NaiveDateTime,
) -> Vec<ScheduledTask<'_>> {
    applicable_templates(templates, wedding_date, now)
        .filter_map(|template| {
            due_date(wedding_date, template.months_before).map(|due_date| ScheduledTask {
                template,
                due_date,
            })
        })
        .collect()
}

/// Display bucket for a task relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DueWindow {
    /// Due within seven days, overdue included
    ThisWeek,
    ThisMonth,
    Upcoming,
    NoDueDate,
    Completed,
}

impl DueWindow {
    pub const ORDER: [DueWindow; 5] = [
        Self::ThisWeek,
        Self::ThisMonth,
        Self::Upcoming,
        Self::NoDueDate,
        Self::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::ThisWeek => "This Week",
            Self::ThisMonth => "This Month",
            Self::Upcoming => "Upcoming",
            Self::NoDueDate => "No Due Date",
            Self::Completed => "Completed",
        }
    }

    /// Which window a task falls into on `today`
    pub fn for_task(task: &TimelineTask, today: NaiveDate) -> Self {
        if task.completed {
            return Self::Completed;
        }
        match task.due_date {
            None => Self::NoDueDate,
            Some(due) => {
                let days = (due - today).num_days();
                if days <= 7 {
                    Self::ThisWeek
                } else if days <= 30 {
                    Self::ThisMonth
                } else {
                    Self::Upcoming
                }
            }
        }
    }
}

impl std::fmt::Display for DueWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Group tasks into windows in fixed window order, keeping the input order
/// within each group. Empty groups are left out, and so is the completed
/// group unless `include_completed` is set.
pub fn group_by_window<'a>(
    tasks: &'a [TimelineTask],
    today: NaiveDate,
    include_completed: bool,
) -> Vec<(DueWindow, Vec<&'a TimelineTask>)> {
    DueWindow::ORDER
        .iter()
        .filter(|w| include_completed || **w != DueWindow::Completed)
        .filter_map(|window| {
            let members: Vec<&TimelineTask> = tasks
                .iter()
                .filter(|t| DueWindow::for_task(t, today) == *window)
                .collect();
            (!members.is_empty()).then_some((*window, members))
        })
        .collect()
}
