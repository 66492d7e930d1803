//! Budget models
//!
//! A budget category is a named bucket with an allocated amount and a spent
//! amount. Budget items are individual expenses that belong to a category;
//! the category's `spent` is the sum of its items' actual costs, which the
//! budget service keeps in step.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::{BudgetCategoryId, BudgetItemId, VendorId};
use super::money::Money;

labeled_enum! {
    /// Where a budget item stands with the vendor
    pub enum PaymentStatus {
        Quote => ("quote", "Quote"),
        DepositPaid => ("deposit_paid", "Deposit Paid"),
        Partial => ("partial", "Partially Paid"),
        Paid => ("paid", "Paid"),
        Cancelled => ("cancelled", "Cancelled"),
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        Self::Quote
    }
}

/// A bucket of allocated spending
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub id: BudgetCategoryId,

    pub name: String,

    pub category: Category,

    pub allocated: Money,

    /// Sum of the actual costs of the items in this category
    #[serde(default)]
    pub spent: Money,

    #[serde(default)]
    pub sort_order: i32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl BudgetCategory {
    pub fn new(name: impl Into<String>, category: Category, allocated: Money) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetCategoryId::new(),
            name: name.into(),
            category,
            allocated,
            spent: Money::zero(),
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Allocated minus spent (negative when over budget)
    pub fn remaining(&self) -> Money {
        self.allocated - self.spent
    }

    pub fn is_over_budget(&self) -> bool {
        self.spent > self.allocated
    }

    pub fn set_allocated(&mut self, amount: Money) {
        self.allocated = amount;
        self.updated_at = Utc::now();
    }

    pub fn adjust_spent(&mut self, delta: Money) {
        self.spent += delta;
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.name.trim().is_empty() {
            return Err(BudgetValidationError::EmptyName);
        }

        if self.allocated.is_negative() {
            return Err(BudgetValidationError::NegativeAmount("allocated"));
        }

        Ok(())
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A single expense within a budget category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItem {
    pub id: BudgetItemId,

    pub category_id: BudgetCategoryId,

    #[serde(default)]
    pub vendor_id: Option<VendorId>,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub estimated_cost: Money,

    /// What was actually spent; counts towards the category's `spent`
    #[serde(default)]
    pub actual_cost: Option<Money>,

    #[serde(default)]
    pub payment_status: PaymentStatus,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub paid_date: Option<NaiveDate>,

    #[serde(default)]
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl BudgetItem {
    pub fn new(
        category_id: BudgetCategoryId,
        name: impl Into<String>,
        estimated_cost: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: BudgetItemId::new(),
            category_id,
            vendor_id: None,
            name: name.into(),
            description: None,
            estimated_cost,
            actual_cost: None,
            payment_status: PaymentStatus::default(),
            due_date: None,
            paid_date: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Contribution of this item to its category's spent amount
    pub fn spent_contribution(&self) -> Money {
        self.actual_cost.unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.name.trim().is_empty() {
            return Err(BudgetValidationError::EmptyName);
        }

        if self.estimated_cost.is_negative() {
            return Err(BudgetValidationError::NegativeAmount("estimated cost"));
        }

        if self.actual_cost.is_some_and(|c| c.is_negative()) {
            return Err(BudgetValidationError::NegativeAmount("actual cost"));
        }

        Ok(())
    }
}

impl fmt::Display for BudgetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyName,
    NegativeAmount(&'static str),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::NegativeAmount(field) => write!(f, "The {} cannot be negative", field),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_remaining() {
        let mut cat =
            BudgetCategory::new("Venue", Category::Venue, Money::from_dollars(12000));
        cat.adjust_spent(Money::from_dollars(8500));
        assert_eq!(cat.remaining(), Money::from_dollars(3500));
        assert!(!cat.is_over_budget());

        cat.adjust_spent(Money::from_dollars(4000));
        assert!(cat.is_over_budget());
        assert_eq!(cat.remaining(), Money::from_dollars(-500));
    }

    #[test]
    fn test_category_validation() {
        let cat = BudgetCategory::new("", Category::Other, Money::zero());
        assert_eq!(cat.validate(), Err(BudgetValidationError::EmptyName));

        let cat = BudgetCategory::new("Flowers", Category::Flowers, Money::from_dollars(-1));
        assert_eq!(
            cat.validate(),
            Err(BudgetValidationError::NegativeAmount("allocated"))
        );
    }

    #[test]
    fn test_item_spent_contribution() {
        let mut item = BudgetItem::new(
            BudgetCategoryId::new(),
            "Deposit",
            Money::from_dollars(2000),
        );
        assert_eq!(item.spent_contribution(), Money::zero());

        item.actual_cost = Some(Money::from_dollars(1800));
        assert_eq!(item.spent_contribution(), Money::from_dollars(1800));

        // A cancelled booking still counts what was actually paid
        item.payment_status = PaymentStatus::Cancelled;
        assert_eq!(item.spent_contribution(), Money::from_dollars(1800));
    }

    #[test]
    fn test_item_validation() {
        let mut item = BudgetItem::new(BudgetCategoryId::new(), "Cake", Money::from_dollars(600));
        assert!(item.validate().is_ok());

        item.actual_cost = Some(Money::from_dollars(-5));
        assert_eq!(
            item.validate(),
            Err(BudgetValidationError::NegativeAmount("actual cost"))
        );
    }

    #[test]
    fn test_payment_status_parse() {
        assert_eq!(
            "deposit-paid".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::DepositPaid
        );
        assert_eq!(
            "Partially Paid".parse::<PaymentStatus>().unwrap(),
            PaymentStatus::Partial
        );
    }
}
