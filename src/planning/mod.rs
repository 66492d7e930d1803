//! Planning core
//!
//! Pure functions over in-memory collections: deriving a dated timeline
//! from the template catalogue, aggregating budget/guest/vendor/task
//! statistics, and the filter/search/sort pipeline behind every list view.

pub mod query;
pub mod schedule;
pub mod stats;
pub mod templates;

pub use query::{query_guests, query_tasks, query_vendors, GuestFilter, TaskFilter, VendorFilter};
pub use schedule::{
    derive_schedule, due_date, group_by_window, months_until, remaining_months, DueWindow,
    ScheduledTask,
};
pub use stats::{
    percentage, BudgetSummary, CategoryUsage, Countdown, GuestStats, TaskStats, VendorStats,
};
pub use templates::{catalogue, TaskTemplate};
