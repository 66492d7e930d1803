//! Dashboard overview
//!
//! Gathers the numbers shown by `wedplan status` in one pass over storage.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::WedplanResult;
use crate::models::{TimelineTask, Wedding};
use crate::planning::{
    query_tasks, remaining_months, BudgetSummary, Countdown, GuestStats, TaskFilter, TaskStats,
    VendorStats,
};
use crate::storage::Storage;

/// How many open tasks the overview lists
pub const UPCOMING_TASK_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub wedding: Wedding,
    /// Only when the date is known
    pub countdown: Option<Countdown>,
    pub months_to_go: Option<u32>,
    pub tasks: TaskStats,
    /// Earliest-due open tasks
    pub upcoming: Vec<TimelineTask>,
    pub budget: BudgetSummary,
    pub guests: GuestStats,
    pub vendors: VendorStats,
}

pub struct DashboardService<'a> {
    storage: &'a Storage,
}

impl<'a> DashboardService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn overview(&self, now: NaiveDateTime) -> WedplanResult<Overview> {
        let wedding = self.storage.wedding.require()?;
        let today = now.date();

        let tasks = self.storage.tasks.get_all()?;
        let upcoming = query_tasks(&tasks, TaskFilter::Todo, "", today)
            .into_iter()
            .take(UPCOMING_TASK_LIMIT)
            .cloned()
            .collect();

        Ok(Overview {
            countdown: wedding.wedding_date.map(|d| Countdown::until(d, now)),
            months_to_go: wedding.wedding_date.map(|d| remaining_months(d, now)),
            tasks: TaskStats::from_tasks(&tasks, today),
            upcoming,
            budget: BudgetSummary::from_categories(&self.storage.budget_categories.get_all()?),
            guests: GuestStats::from_guests(&self.storage.guests.get_all()?),
            vendors: VendorStats::from_vendors(&self.storage.vendors.get_all()?),
            wedding,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::WedplanPaths;
    use crate::error::WedplanError;
    use crate::models::Money;
    use crate::services::WeddingService;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = WedplanPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_requires_wedding() {
        let (_temp_dir, storage) = create_test_storage();
        let err = DashboardService::new(&storage).overview(now()).unwrap_err();
        assert!(matches!(err, WedplanError::NotInitialized));
    }

    #[test]
    fn test_overview_after_onboarding() {
        let (_temp_dir, storage) = create_test_storage();
        let mut wedding = Wedding::new("Sarah", "Michael");
        wedding.wedding_date = NaiveDate::from_ymd_opt(2027, 6, 14);
        wedding.budget = Some(Money::from_dollars(50_000));
        WeddingService::new(&storage)
            .complete_onboarding(wedding, now())
            .unwrap();

        let overview = DashboardService::new(&storage).overview(now()).unwrap();
        assert_eq!(overview.months_to_go, Some(14));
        assert_eq!(overview.countdown.unwrap().days, 399);
        assert_eq!(overview.upcoming.len(), UPCOMING_TASK_LIMIT);
        assert_eq!(overview.budget.total_allocated, Money::from_dollars(50_000));
        assert_eq!(overview.tasks.completed, 0);
        assert_eq!(overview.guests.total, 0);
    }

    #[test]
    fn test_undated_wedding_has_no_countdown() {
        let (_temp_dir, storage) = create_test_storage();
        WeddingService::new(&storage)
            .complete_onboarding(Wedding::new("Sarah", "Michael"), now())
            .unwrap();

        let overview = DashboardService::new(&storage).overview(now()).unwrap();
        assert!(overview.countdown.is_none());
        assert!(overview.upcoming.is_empty());
    }
}
