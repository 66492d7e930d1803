//! Aggregate statistics over the planning collections
//!
//! Everything here is a pure function of its input slice, so the dashboard,
//! the listings and the exports all agree on the numbers.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::models::{BudgetCategory, BudgetCategoryId, Guest, Money, RsvpStatus, TimelineTask, Vendor};

/// `round(100 * part / whole)`, or `None` when `whole` is zero
pub fn percentage(part: i64, whole: i64) -> Option<i64> {
    if whole == 0 {
        return None;
    }
    Some(((part as f64 / whole as f64) * 100.0).round() as i64)
}

/// Usage of one budget category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryUsage {
    pub id: BudgetCategoryId,
    pub name: String,
    pub allocated: Money,
    pub spent: Money,
    pub remaining: Money,
    pub percent_used: Option<i64>,
    pub is_over_budget: bool,
}

/// Totals across all budget categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub total_allocated: Money,
    pub total_spent: Money,
    pub remaining: Money,
    pub percent_used: Option<i64>,
    pub is_over_budget: bool,
    pub categories: Vec<CategoryUsage>,
}

impl BudgetSummary {
    pub fn from_categories(categories: &[BudgetCategory]) -> Self {
        let total_allocated: Money = categories.iter().map(|c| c.allocated).sum();
        let total_spent: Money = categories.iter().map(|c| c.spent).sum();

        let usage = categories
            .iter()
            .map(|c| CategoryUsage {
                id: c.id,
                name: c.name.clone(),
                allocated: c.allocated,
                spent: c.spent,
                remaining: c.remaining(),
                percent_used: percentage(c.spent.cents(), c.allocated.cents()),
                is_over_budget: c.is_over_budget(),
            })
            .collect();

        Self {
            total_allocated,
            total_spent,
            remaining: total_allocated - total_spent,
            percent_used: percentage(total_spent.cents(), total_allocated.cents()),
            is_over_budget: total_spent > total_allocated,
            categories: usage,
        }
    }
}

/// RSVP counts for the guest list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GuestStats {
    pub total: usize,
    pub confirmed: usize,
    pub declined: usize,
    /// Pending, invited or maybe
    pub pending: usize,
    /// Guests with a named plus-one
    pub plus_ones: usize,
    /// Confirmed guests plus the named plus-ones of confirmed guests
    pub attending: usize,
}

impl GuestStats {
    pub fn from_guests(guests: &[Guest]) -> Self {
        let mut stats = Self {
            total: guests.len(),
            ..Self::default()
        };

        for guest in guests {
            match guest.rsvp_status {
                RsvpStatus::Confirmed => {
                    stats.confirmed += 1;
                    stats.attending += 1;
                    if guest.has_plus_one() {
                        stats.attending += 1;
                    }
                }
                RsvpStatus::Declined => stats.declined += 1,
                RsvpStatus::Pending | RsvpStatus::Invited | RsvpStatus::Maybe => {
                    stats.pending += 1
                }
            }
            if guest.has_plus_one() {
                stats.plus_ones += 1;
            }
        }

        stats
    }

    pub fn response_rate(&self) -> Option<i64> {
        percentage((self.confirmed + self.declined) as i64, self.total as i64)
    }
}

/// Vendor counts and committed money
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VendorStats {
    pub total: usize,
    pub booked: usize,
    /// Booked vendors' final price, else their quote
    pub committed_spend: Money,
    pub deposits_paid: Money,
}

impl VendorStats {
    pub fn from_vendors(vendors: &[Vendor]) -> Self {
        let booked: Vec<&Vendor> = vendors.iter().filter(|v| v.is_booked()).collect();
        Self {
            total: vendors.len(),
            booked: booked.len(),
            committed_spend: booked.iter().map(|v| v.committed_price()).sum(),
            deposits_paid: vendors.iter().map(|v| v.paid_deposit()).sum(),
        }
    }
}

/// Timeline progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub overdue: usize,
    pub progress: Option<i64>,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[TimelineTask], today: NaiveDate) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            completed,
            overdue: tasks.iter().filter(|t| t.is_overdue(today)).count(),
            progress: percentage(completed as i64, tasks.len() as i64),
        }
    }
}

/// Time left until the wedding day begins
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    /// Countdown to local midnight on `wedding_date`; all zero once it has passed
    pub fn until(wedding_date: NaiveDate, now: NaiveDateTime) -> Self {
        let total = (wedding_date.and_time(NaiveTime::MIN) - now)
            .num_seconds()
            .max(0);
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }

    pub fn is_over(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, VendorStatus};

    fn category(name: &str, allocated: i64, spent: i64) -> BudgetCategory {
        let mut c = BudgetCategory::new(name, Category::Other, Money::from_dollars(allocated));
        c.spent = Money::from_dollars(spent);
        c
    }

    fn guest(status: RsvpStatus, plus_one: Option<&str>) -> Guest {
        let mut g = Guest::new("A", "B");
        g.rsvp_status = status;
        g.plus_one_allowed = plus_one.is_some();
        g.plus_one_name = plus_one.map(String::from);
        g
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 3), Some(33));
        assert_eq!(percentage(2, 3), Some(67));
        assert_eq!(percentage(1, 2), Some(50));
        assert_eq!(percentage(150, 100), Some(150));
        assert_eq!(percentage(5, 0), None);
    }

    #[test]
    fn test_budget_summary() {
        let categories = vec![
            category("Venue", 12000, 8500),
            category("Catering", 8000, 0),
            category("Photography", 4000, 4200),
        ];
        let summary = BudgetSummary::from_categories(&categories);

        assert_eq!(summary.total_allocated, Money::from_dollars(24000));
        assert_eq!(summary.total_spent, Money::from_dollars(12700));
        assert_eq!(summary.remaining, Money::from_dollars(11300));
        assert_eq!(summary.percent_used, Some(53));
        assert!(!summary.is_over_budget);
        assert!(summary.categories[2].is_over_budget);
        assert_eq!(summary.categories[2].percent_used, Some(105));
        assert_eq!(summary.categories[1].percent_used, Some(0));
    }

    #[test]
    fn test_budget_percent_matches_totals() {
        let sets = [
            vec![category("a", 1000, 333), category("b", 3, 1)],
            vec![category("a", 7, 5)],
            vec![category("a", 100, 250), category("b", 0, 40)],
        ];
        for set in &sets {
            let spent: i64 = set.iter().map(|c| c.spent.cents()).sum();
            let allocated: i64 = set.iter().map(|c| c.allocated.cents()).sum();
            let expected = ((spent as f64 / allocated as f64) * 100.0).round() as i64;
            assert_eq!(
                BudgetSummary::from_categories(set).percent_used,
                Some(expected)
            );
        }
    }

    #[test]
    fn test_empty_budget() {
        let summary = BudgetSummary::from_categories(&[]);
        assert_eq!(summary.total_allocated, Money::zero());
        assert_eq!(summary.percent_used, None);
        assert!(!summary.is_over_budget);
    }

    #[test]
    fn test_over_budget() {
        let summary = BudgetSummary::from_categories(&[category("Venue", 100, 101)]);
        assert!(summary.is_over_budget);
        assert_eq!(summary.remaining, Money::from_dollars(-1));
    }

    #[test]
    fn test_guest_stats() {
        let guests = vec![
            guest(RsvpStatus::Confirmed, Some("David")),
            guest(RsvpStatus::Confirmed, None),
            guest(RsvpStatus::Pending, None),
            guest(RsvpStatus::Declined, None),
            guest(RsvpStatus::Confirmed, Some("Tom")),
            guest(RsvpStatus::Invited, Some("Sam")),
            guest(RsvpStatus::Confirmed, None),
            guest(RsvpStatus::Maybe, None),
        ];
        let stats = GuestStats::from_guests(&guests);

        assert_eq!(stats.total, 8);
        assert_eq!(stats.confirmed, 4);
        assert_eq!(stats.declined, 1);
        assert_eq!(stats.pending, 3);
        assert_eq!(stats.plus_ones, 3);
        // Sam is the plus-one of an invited guest and is not attending yet
        assert_eq!(stats.attending, 6);
        assert_eq!(stats.confirmed + stats.declined + stats.pending, stats.total);
        assert_eq!(stats.response_rate(), Some(63));
    }

    #[test]
    fn test_guest_partition_holds_for_every_status_mix() {
        let statuses = RsvpStatus::all();
        for n in 0..statuses.len() * 3 {
            let guests: Vec<Guest> = (0..n)
                .map(|i| guest(statuses[(i * 7 + n) % statuses.len()], None))
                .collect();
            let stats = GuestStats::from_guests(&guests);
            assert_eq!(stats.confirmed + stats.declined + stats.pending, stats.total);
        }
    }

    #[test]
    fn test_vendor_stats() {
        let mut photo = Vendor::new("Emily Rose", Category::Photography);
        photo.status = VendorStatus::Booked;
        photo.quoted_price = Some(Money::from_dollars(4000));
        photo.final_price = Some(Money::from_dollars(3800));
        photo.deposit_amount = Some(Money::from_dollars(1000));
        photo.deposit_paid = true;

        let mut dj = Vendor::new("DJ Mike", Category::Music);
        dj.status = VendorStatus::Booked;
        dj.quoted_price = Some(Money::from_dollars(1500));

        let mut florist = Vendor::new("Bloom", Category::Flowers);
        florist.status = VendorStatus::Quoted;
        florist.quoted_price = Some(Money::from_dollars(2500));
        florist.deposit_amount = Some(Money::from_dollars(500));

        let stats = VendorStats::from_vendors(&[photo, dj, florist]);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.booked, 2);
        assert_eq!(stats.committed_spend, Money::from_dollars(5300));
        assert_eq!(stats.deposits_paid, Money::from_dollars(1000));
    }

    #[test]
    fn test_task_stats() {
        let today = NaiveDate::from_ymd_opt(2026, 5, 10).unwrap();
        let mut late = TimelineTask::new("late", Category::Other);
        late.due_date = NaiveDate::from_ymd_opt(2026, 5, 1);
        let mut done = TimelineTask::new("done", Category::Other);
        done.set_completed(true);
        let open = TimelineTask::new("open", Category::Other);

        let stats = TaskStats::from_tasks(&[late, done, open], today);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.progress, Some(33));

        assert_eq!(TaskStats::from_tasks(&[], today).progress, None);
    }

    #[test]
    fn test_countdown() {
        let wedding = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let now = NaiveDate::from_ymd_opt(2026, 5, 30)
            .unwrap()
            .and_hms_opt(22, 29, 15)
            .unwrap();
        let c = Countdown::until(wedding, now);
        assert_eq!(
            c,
            Countdown {
                days: 1,
                hours: 1,
                minutes: 30,
                seconds: 45
            }
        );
        assert!(!c.is_over());

        let after = NaiveDate::from_ymd_opt(2026, 6, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(Countdown::until(wedding, after).is_over());
    }
}
