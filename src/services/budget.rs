//! Budget service
//!
//! Budget categories hold an allocation and a running `spent` total; budget
//! items record individual expenses. Every item mutation adjusts the spent
//! total of the categories it touches, so the two stay in agreement.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::audit::EntityType;
use crate::error::{WedplanError, WedplanResult};
use crate::models::{
    BudgetCategory, BudgetCategoryId, BudgetItem, Category, Money, PaymentStatus, VendorId,
};
use crate::planning::BudgetSummary;
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct CreateBudgetItemInput {
    pub category_id: BudgetCategoryId,
    pub name: String,
    pub estimated_cost: Money,
    pub actual_cost: Option<Money>,
    pub payment_status: PaymentStatus,
    pub vendor_id: Option<VendorId>,
    pub due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Fields to change on an expense; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct BudgetItemUpdate {
    pub name: Option<String>,
    pub category_id: Option<BudgetCategoryId>,
    pub estimated_cost: Option<Money>,
    /// `Some(None)` clears the actual cost
    pub actual_cost: Option<Option<Money>>,
    pub payment_status: Option<PaymentStatus>,
    pub due_date: Option<Option<NaiveDate>>,
    pub paid_date: Option<Option<NaiveDate>>,
    pub notes: Option<String>,
}

/// A category whose stored spent total disagrees with its items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpentMismatch {
    pub category_id: BudgetCategoryId,
    pub name: String,
    pub recorded: Money,
    pub computed: Money,
}

impl SpentMismatch {
    pub fn difference(&self) -> Money {
        self.recorded - self.computed
    }
}

impl<'a> BudgetService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Totals and per-category usage
    pub fn summary(&self) -> WedplanResult<BudgetSummary> {
        let categories = self.storage.budget_categories.get_sorted()?;
        Ok(BudgetSummary::from_categories(&categories))
    }

    pub fn list_categories(&self) -> WedplanResult<Vec<BudgetCategory>> {
        self.storage.budget_categories.get_sorted()
    }

    /// Find a category by name or ID string
    pub fn find_category(&self, identifier: &str) -> WedplanResult<Option<BudgetCategory>> {
        if let Some(category) = self.storage.budget_categories.get_by_name(identifier)? {
            return Ok(Some(category));
        }
        self.storage.budget_categories.find(identifier)
    }

    fn require_category(&self, identifier: &str) -> WedplanResult<BudgetCategory> {
        self.find_category(identifier)?
            .ok_or_else(|| WedplanError::budget_category_not_found(identifier))
    }

    /// Create a budget category
    pub fn add_category(
        &self,
        name: &str,
        category: Category,
        allocated: Money,
    ) -> WedplanResult<BudgetCategory> {
        let name = name.trim();

        // Check for duplicate name
        if self.storage.budget_categories.get_by_name(name)?.is_some() {
            return Err(WedplanError::Duplicate {
                entity_type: "Budget category",
                identifier: name.to_string(),
            });
        }

        let mut budget_category = BudgetCategory::new(name, category, allocated);
        budget_category.sort_order = self.storage.budget_categories.next_sort_order()?;

        budget_category
            .validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;

        self.storage.budget_categories.upsert(budget_category.clone())?;
        self.storage.budget_categories.save()?;

        self.storage.log_create(
            EntityType::BudgetCategory,
            budget_category.id.to_string(),
            Some(budget_category.name.clone()),
            &budget_category,
        )?;

        debug!(category = %budget_category.name, "Budget category added");
        Ok(budget_category)
    }

    /// Set the amount allocated to a category
    pub fn allocate(&self, identifier: &str, amount: Money) -> WedplanResult<BudgetCategory> {
        let mut category = self.require_category(identifier)?;
        let before = category.clone();

        category.set_allocated(amount);
        category
            .validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;

        self.storage.budget_categories.upsert(category.clone())?;
        self.storage.budget_categories.save()?;

        self.storage.log_update(
            EntityType::BudgetCategory,
            category.id.to_string(),
            Some(category.name.clone()),
            &before,
            &category,
            Some(format!("allocated: {} -> {}", before.allocated, category.allocated)),
        )?;

        Ok(category)
    }

    /// Items in one category, or every item
    pub fn items(&self, category_id: Option<BudgetCategoryId>) -> WedplanResult<Vec<BudgetItem>> {
        match category_id {
            Some(id) => self.storage.budget_items.get_by_category(id),
            None => self.storage.budget_items.get_all(),
        }
    }

    /// Find an item by name or ID string
    pub fn find_item(&self, identifier: &str) -> WedplanResult<Option<BudgetItem>> {
        let name = identifier.trim();
        if let Some(item) = self
            .storage
            .budget_items
            .find_by(|i| i.name.eq_ignore_ascii_case(name))?
        {
            return Ok(Some(item));
        }
        self.storage.budget_items.find(identifier)
    }

    fn require_item(&self, identifier: &str) -> WedplanResult<BudgetItem> {
        self.find_item(identifier)?
            .ok_or_else(|| WedplanError::budget_item_not_found(identifier))
    }

    fn category_by_id(&self, id: BudgetCategoryId) -> WedplanResult<BudgetCategory> {
        self.storage
            .budget_categories
            .get(id)?
            .ok_or_else(|| WedplanError::budget_category_not_found(id.to_string()))
    }

    /// Move `delta` into a category's spent total
    fn adjust_spent(&self, id: BudgetCategoryId, delta: Money) -> WedplanResult<()> {
        if delta.is_zero() {
            return Ok(());
        }
        let mut category = self.category_by_id(id)?;
        category.adjust_spent(delta);
        self.storage.budget_categories.upsert(category)?;
        Ok(())
    }

    /// Record an expense; its actual cost counts towards the category
    pub fn add_item(&self, input: CreateBudgetItemInput) -> WedplanResult<BudgetItem> {
        let category = self.category_by_id(input.category_id)?;

        if let Some(vendor_id) = input.vendor_id {
            if self.storage.vendors.get(vendor_id)?.is_none() {
                return Err(WedplanError::vendor_not_found(vendor_id.to_string()));
            }
        }

        let mut item = BudgetItem::new(category.id, input.name.trim(), input.estimated_cost);
        item.actual_cost = input.actual_cost;
        item.payment_status = input.payment_status;
        item.vendor_id = input.vendor_id;
        item.due_date = input.due_date;
        item.notes = input.notes.filter(|n| !n.trim().is_empty());

        item.validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;

        self.adjust_spent(category.id, item.spent_contribution())?;
        self.storage.budget_items.upsert(item.clone())?;
        self.storage.budget_items.save()?;
        self.storage.budget_categories.save()?;

        self.storage.log_create(
            EntityType::BudgetItem,
            item.id.to_string(),
            Some(item.name.clone()),
            &item,
        )?;

        debug!(item = %item.name, category = %category.name, "Budget item added");
        Ok(item)
    }

    /// Edit an expense, moving its actual cost between categories as needed
    pub fn update_item(
        &self,
        identifier: &str,
        update: BudgetItemUpdate,
    ) -> WedplanResult<BudgetItem> {
        let mut item = self.require_item(identifier)?;
        let before = item.clone();

        if let Some(name) = update.name {
            item.name = name.trim().to_string();
        }
        if let Some(category_id) = update.category_id {
            self.category_by_id(category_id)?;
            item.category_id = category_id;
        }
        if let Some(estimated) = update.estimated_cost {
            item.estimated_cost = estimated;
        }
        if let Some(actual) = update.actual_cost {
            item.actual_cost = actual;
        }
        if let Some(status) = update.payment_status {
            item.payment_status = status;
        }
        if let Some(due_date) = update.due_date {
            item.due_date = due_date;
        }
        if let Some(paid_date) = update.paid_date {
            item.paid_date = paid_date;
        }
        if let Some(notes) = update.notes {
            let notes = notes.trim();
            item.notes = (!notes.is_empty()).then(|| notes.to_string());
        }

        item.validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;
        item.updated_at = chrono::Utc::now();

        self.adjust_spent(before.category_id, -before.spent_contribution())?;
        self.adjust_spent(item.category_id, item.spent_contribution())?;

        self.storage.budget_items.upsert(item.clone())?;
        self.storage.budget_items.save()?;
        self.storage.budget_categories.save()?;

        self.storage.log_update(
            EntityType::BudgetItem,
            item.id.to_string(),
            Some(item.name.clone()),
            &before,
            &item,
            None,
        )?;

        Ok(item)
    }

    /// Delete an expense, taking its actual cost off the category
    pub fn delete_item(&self, identifier: &str) -> WedplanResult<BudgetItem> {
        let item = self.require_item(identifier)?;

        self.adjust_spent(item.category_id, -item.spent_contribution())?;
        self.storage.budget_items.remove(item.id)?;
        self.storage.budget_items.save()?;
        self.storage.budget_categories.save()?;

        self.storage.log_delete(
            EntityType::BudgetItem,
            item.id.to_string(),
            Some(item.name.clone()),
            &item,
        )?;

        Ok(item)
    }

    /// Categories whose recorded spent total differs from their items
    pub fn check(&self) -> WedplanResult<Vec<SpentMismatch>> {
        let mut mismatches = Vec::new();
        for category in self.storage.budget_categories.get_sorted()? {
            let computed = self.storage.budget_items.spent_for(category.id)?;
            if computed != category.spent {
                mismatches.push(SpentMismatch {
                    category_id: category.id,
                    name: category.name,
                    recorded: category.spent,
                    computed,
                });
            }
        }

        if !mismatches.is_empty() {
            warn!(count = mismatches.len(), "Budget categories out of step with items");
        }
        Ok(mismatches)
    }

    /// Reset every mismatched spent total to the sum of its items
    pub fn recompute(&self) -> WedplanResult<Vec<SpentMismatch>> {
        let mismatches = self.check()?;

        for mismatch in &mismatches {
            let mut category = self.category_by_id(mismatch.category_id)?;
            let before = category.clone();
            category.adjust_spent(mismatch.computed - mismatch.recorded);
            self.storage.budget_categories.upsert(category.clone())?;
            self.storage.log_update(
                EntityType::BudgetCategory,
                category.id.to_string(),
                Some(category.name.clone()),
                &before,
                &category,
                Some(format!("spent: {} -> {}", before.spent, category.spent)),
            )?;
        }

        if !mismatches.is_empty() {
            self.storage.budget_categories.save()?;
            info!(repaired = mismatches.len(), "Recomputed budget spent totals");
        }
        Ok(mismatches)
    }
}
