//! Budget display formatting

use std::collections::HashMap;

use crate::config::settings::Settings;
use crate::models::{BudgetCategory, BudgetCategoryId, BudgetItem, Money};
use crate::planning::BudgetSummary;
use crate::services::SpentMismatch;

use super::{date, format_bar, money, percent};

/// Format the budget overview: one row per category plus totals
pub fn format_budget_summary(settings: &Settings, summary: &BudgetSummary) -> String {
    if summary.categories.is_empty() {
        return "No budget categories yet.\n\nRun 'wedplan budget add-category' to create one.\n"
            .to_string();
    }

    let name_width = summary
        .categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}  {:>12}  {:>5}  {}\n",
        "Category",
        "Allocated",
        "Spent",
        "Remaining",
        "Used",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->12}  {:->12}  {:->5}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for usage in &summary.categories {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {:>12}  {:>12}  {:>5}  {}{}\n",
            usage.name,
            money(settings, usage.allocated),
            money(settings, usage.spent),
            money(settings, usage.remaining),
            percent(usage.percent_used),
            format_bar(usage.percent_used, 10),
            if usage.is_over_budget { " OVER" } else { "" },
            name_width = name_width,
        ));
    }

    output.push_str(&format!(
        "{:-<name_width$}  {:->12}  {:->12}  {:->12}  {:->5}  {:-<10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {:>12}  {:>12}  {:>5}\n",
        "TOTAL",
        money(settings, summary.total_allocated),
        money(settings, summary.total_spent),
        money(settings, summary.remaining),
        percent(summary.percent_used),
        name_width = name_width,
    ));

    if summary.is_over_budget {
        output.push_str("\nWarning: spending is over the total budget.\n");
    }

    output
}

/// Format budget items with their category names
pub fn format_budget_items(
    settings: &Settings,
    items: &[BudgetItem],
    categories: &[BudgetCategory],
) -> String {
    if items.is_empty() {
        return "No budget items found.\n".to_string();
    }

    let names: HashMap<BudgetCategoryId, &str> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();
    let name_width = items.iter().map(|i| i.name.len()).max().unwrap_or(4).max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<name_width$}  {:<20}  {:>12}  {:>12}  {:<14}  {}\n",
        "ID",
        "Item",
        "Category",
        "Estimated",
        "Actual",
        "Status",
        "Due",
        name_width = name_width,
    ));
    for item in items {
        output.push_str(&format!(
            "{:<12}  {:<name_width$}  {:<20}  {:>12}  {:>12}  {:<14}  {}\n",
            item.id.to_string(),
            item.name,
            names.get(&item.category_id).copied().unwrap_or("Unknown"),
            money(settings, item.estimated_cost),
            item.actual_cost
                .map(|a| money(settings, a))
                .unwrap_or_else(|| "-".into()),
            item.payment_status.label(),
            item.due_date
                .map(|d| date(settings, d))
                .unwrap_or_else(|| "-".into()),
            name_width = name_width,
        ));
    }

    let estimated: Money = items.iter().map(|i| i.estimated_cost).sum();
    let actual: Money = items.iter().map(|i| i.spent_contribution()).sum();
    output.push_str(&format!(
        "\n{} items, {} estimated, {} spent\n",
        items.len(),
        money(settings, estimated),
        money(settings, actual)
    ));

    output
}

/// Format the categories whose recorded spending disagrees with their items
pub fn format_spent_mismatches(settings: &Settings, mismatches: &[SpentMismatch]) -> String {
    if mismatches.is_empty() {
        return "All category totals match their items.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{} categor{} out of sync:\n",
        mismatches.len(),
        if mismatches.len() == 1 { "y" } else { "ies" }
    ));
    for m in mismatches {
        output.push_str(&format!(
            "  {}: recorded {}, items add up to {} (difference {})\n",
            m.name,
            money(settings, m.recorded),
            money(settings, m.computed),
            money(settings, m.difference())
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, PaymentStatus};

    fn category(name: &str, allocated: i64, spent: i64) -> BudgetCategory {
        let mut c = BudgetCategory::new(name, Category::Other, Money::from_dollars(allocated));
        c.spent = Money::from_dollars(spent);
        c
    }

    #[test]
    fn test_summary_table() {
        let summary = BudgetSummary::from_categories(&[
            category("Venue", 20_000, 15_000),
            category("Flowers", 3_000, 3_500),
        ]);
        let output = format_budget_summary(&Settings::default(), &summary);

        assert!(output.contains("Venue"));
        assert!(output.contains("$15,000"));
        assert!(output.contains("75%"));
        assert!(output.contains("117%"));
        assert!(output.contains(" OVER"));
        assert!(output.contains("TOTAL"));
        assert!(!output.contains("Warning"));
    }

    #[test]
    fn test_empty_summary() {
        let output =
            format_budget_summary(&Settings::default(), &BudgetSummary::from_categories(&[]));
        assert!(output.starts_with("No budget categories yet."));
    }

    #[test]
    fn test_items() {
        let venue = category("Venue", 20_000, 0);
        let mut item = BudgetItem::new(venue.id, "Deposit", Money::from_dollars(5_000));
        item.actual_cost = Some(Money::from_dollars(5_000));
        item.payment_status = PaymentStatus::Paid;

        let output = format_budget_items(&Settings::default(), &[item], &[venue]);
        assert!(output.contains("Deposit"));
        assert!(output.contains("Venue"));
        assert!(output.contains("Paid"));
        assert!(output.contains("1 items, $5,000 estimated, $5,000 spent"));
    }

    #[test]
    fn test_mismatches() {
        let venue = category("Venue", 20_000, 100);
        let mismatch = SpentMismatch {
            category_id: venue.id,
            name: "Venue".into(),
            recorded: Money::from_dollars(100),
            computed: Money::from_dollars(40),
        };
        let output = format_spent_mismatches(&Settings::default(), &[mismatch]);
        assert!(output.starts_with("1 category out of sync"));
        assert!(output.contains("recorded $100, items add up to $40"));
    }
}
