//! Starter data
//!
//! The default budget categories seeded by onboarding.

use crate::models::{BudgetCategory, Category, Money};

/// Default budget split, in whole percent of the total budget
pub const DEFAULT_BUDGET_SHARES: &[(&str, Category, i64)] = &[
    ("Venue", Category::Venue, 35),
    ("Catering", Category::Catering, 23),
    ("Photography", Category::Photography, 12),
    ("Flowers", Category::Flowers, 7),
    ("Music & Entertainment", Category::Music, 6),
    ("Attire", Category::Attire, 9),
    ("Decor & Rentals", Category::Decor, 6),
    ("Stationery", Category::Stationery, 2),
];

/// Starter budget categories allocated by the default split.
///
/// Rounding leftovers go to the first category so the allocations add up to
/// exactly `budget`.
pub fn default_budget_categories(budget: Money) -> Vec<BudgetCategory> {
    let mut categories: Vec<BudgetCategory> = DEFAULT_BUDGET_SHARES
        .iter()
        .enumerate()
        .map(|(i, (name, category, share))| {
            let mut c = BudgetCategory::new(*name, *category, budget.percent(*share));
            c.sort_order = i as i32;
            c
        })
        .collect();

    let allocated: Money = categories.iter().map(|c| c.allocated).sum();
    if let Some(first) = categories.first_mut() {
        first.allocated += budget - allocated;
    }

    categories
}
