//! Budget CLI commands
//!
//! Implements CLI commands for budget categories and the expenses recorded
//! against them.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_budget_items, format_budget_summary, format_spent_mismatches, money};
use crate::error::{WedplanError, WedplanResult};
use crate::models::{Category, PaymentStatus, VendorId};
use crate::services::{
    BudgetItemUpdate, BudgetService, CreateBudgetItemInput, VendorService,
};
use crate::storage::Storage;

use super::{parse_date, parse_date_or_clear, parse_money};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show allocated, spent and remaining per category
    Summary,
    /// List budget categories
    List,
    /// Create a budget category
    AddCategory {
        /// Category name
        name: String,
        /// Planning category it belongs to
        #[arg(short, long, default_value = "other")]
        category: Category,
        /// Amount allocated (e.g. 5000 or 5k)
        #[arg(short, long, default_value = "0")]
        allocated: String,
    },
    /// Set the amount allocated to a category
    Allocate {
        /// Category name or ID
        category: String,
        /// Amount (e.g. 5000 or 5k)
        amount: String,
    },
    /// Record an expense
    AddItem {
        /// Budget category name or ID
        category: String,
        /// What the expense is for
        name: String,
        /// Estimated cost
        estimated: String,
        /// Actual cost, once known
        #[arg(long)]
        actual: Option<String>,
        /// Payment status: quote, deposit_paid, partial, paid, cancelled
        #[arg(short, long, default_value = "quote")]
        status: PaymentStatus,
        /// Vendor name or ID
        #[arg(long)]
        vendor: Option<String>,
        /// Payment due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List expenses
    Items {
        /// Only expenses in this category (name or ID)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Edit an expense
    UpdateItem {
        /// Expense name or ID
        item: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// Move to another category (name or ID)
        #[arg(long)]
        category: Option<String>,
        /// New estimated cost
        #[arg(long)]
        estimated: Option<String>,
        /// New actual cost ("none" to clear)
        #[arg(long)]
        actual: Option<String>,
        /// New payment status
        #[arg(short, long)]
        status: Option<PaymentStatus>,
        /// New due date (YYYY-MM-DD, or "none" to clear)
        #[arg(long)]
        due: Option<String>,
        /// Date paid (YYYY-MM-DD, or "none" to clear)
        #[arg(long)]
        paid: Option<String>,
        /// New notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete an expense
    DeleteItem {
        /// Expense name or ID
        item: String,
    },
    /// Report categories whose spent total disagrees with their expenses
    Check,
    /// Rebuild every category's spent total from its expenses
    Recompute,
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> WedplanResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Summary => {
            let summary = service.summary()?;
            print!("{}", format_budget_summary(settings, &summary));
        }

        BudgetCommands::List => {
            let categories = service.list_categories()?;
            if categories.is_empty() {
                println!("No budget categories yet.");
                return Ok(());
            }

            let name_width = categories
                .iter()
                .map(|c| c.name.len())
                .max()
                .unwrap_or(4)
                .max(4);
            println!(
                "{:<12}  {:<name_width$}  {:<20}  {:>12}",
                "ID",
                "Name",
                "Type",
                "Allocated",
                name_width = name_width
            );
            println!("{}", "-".repeat(12 + 2 + name_width + 2 + 20 + 2 + 12));
            for category in &categories {
                println!(
                    "{:<12}  {:<name_width$}  {:<20}  {:>12}",
                    category.id.to_string(),
                    category.name,
                    category.category.label(),
                    money(settings, category.allocated),
                    name_width = name_width
                );
            }
            println!("\nTotal: {} categories", categories.len());
        }

        BudgetCommands::AddCategory {
            name,
            category,
            allocated,
        } => {
            let created = service.add_category(&name, category, parse_money(&allocated)?)?;
            println!("Created budget category: {}", created.name);
            println!("  Allocated: {}", money(settings, created.allocated));
            println!("  ID:        {}", created.id);
        }

        BudgetCommands::Allocate { category, amount } => {
            let updated = service.allocate(&category, parse_money(&amount)?)?;
            println!(
                "Allocated {} to {}",
                money(settings, updated.allocated),
                updated.name
            );
        }

        BudgetCommands::AddItem {
            category,
            name,
            estimated,
            actual,
            status,
            vendor,
            due,
            notes,
        } => {
            let category = service
                .find_category(&category)?
                .ok_or_else(|| WedplanError::budget_category_not_found(&category))?;
            let vendor_id = vendor
                .as_deref()
                .map(|v| resolve_vendor(storage, v))
                .transpose()?;

            let item = service.add_item(CreateBudgetItemInput {
                category_id: category.id,
                name,
                estimated_cost: parse_money(&estimated)?,
                actual_cost: actual.as_deref().map(parse_money).transpose()?,
                payment_status: status,
                vendor_id,
                due_date: due.as_deref().map(parse_date).transpose()?,
                notes,
            })?;
            println!("Added expense: {} ({})", item.name, category.name);
            println!("  Estimated: {}", money(settings, item.estimated_cost));
            if let Some(actual) = item.actual_cost {
                println!("  Actual:    {}", money(settings, actual));
            }
            println!("  ID:        {}", item.id);
        }

        BudgetCommands::Items { category } => {
            let category_id = match category {
                Some(c) => Some(
                    service
                        .find_category(&c)?
                        .ok_or_else(|| WedplanError::budget_category_not_found(&c))?
                        .id,
                ),
                None => None,
            };
            let items = service.items(category_id)?;
            let categories = service.list_categories()?;
            print!("{}", format_budget_items(settings, &items, &categories));
        }

        BudgetCommands::UpdateItem {
            item,
            name,
            category,
            estimated,
            actual,
            status,
            due,
            paid,
            notes,
        } => {
            let category_id = match category {
                Some(c) => Some(
                    service
                        .find_category(&c)?
                        .ok_or_else(|| WedplanError::budget_category_not_found(&c))?
                        .id,
                ),
                None => None,
            };
            let actual_cost = match actual.as_deref() {
                Some(a) if a.trim().eq_ignore_ascii_case("none") => Some(None),
                Some(a) => Some(Some(parse_money(a)?)),
                None => None,
            };

            let update = BudgetItemUpdate {
                name,
                category_id,
                estimated_cost: estimated.as_deref().map(parse_money).transpose()?,
                actual_cost,
                payment_status: status,
                due_date: due.as_deref().map(parse_date_or_clear).transpose()?,
                paid_date: paid.as_deref().map(parse_date_or_clear).transpose()?,
                notes,
            };
            let updated = service.update_item(&item, update)?;
            println!("Updated expense: {}", updated.name);
        }

        BudgetCommands::DeleteItem { item } => {
            let deleted = service.delete_item(&item)?;
            println!("Deleted expense: {}", deleted.name);
        }

        BudgetCommands::Check => {
            let mismatches = service.check()?;
            print!("{}", format_spent_mismatches(settings, &mismatches));
        }

        BudgetCommands::Recompute => {
            let fixed = service.recompute()?;
            if fixed.is_empty() {
                println!("All category totals already match their items.");
            } else {
                for m in &fixed {
                    println!(
                        "  {}: {} -> {}",
                        m.name,
                        money(settings, m.recorded),
                        money(settings, m.computed)
                    );
                }
                println!("Recomputed {} categories.", fixed.len());
            }
        }
    }

    Ok(())
}

fn resolve_vendor(storage: &Storage, identifier: &str) -> WedplanResult<VendorId> {
    VendorService::new(storage)
        .find(identifier)?
        .map(|v| v.id)
        .ok_or_else(|| WedplanError::vendor_not_found(identifier))
}
