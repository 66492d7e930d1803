//! Budget repositories
//!
//! Budget categories live in budget_categories.json and the items that
//! spend against them in budget_items.json.

use crate::error::WedplanError;
use crate::models::{BudgetCategory, BudgetCategoryId, BudgetItem, BudgetItemId, Money};

use super::collection::JsonCollection;

impl_record!(BudgetCategory, BudgetCategoryId);
impl_record!(BudgetItem, BudgetItemId);

pub type BudgetCategoryRepository = JsonCollection<BudgetCategory>;
pub type BudgetItemRepository = JsonCollection<BudgetItem>;

impl BudgetCategoryRepository {
    /// Find a category by name, ignoring case
    pub fn get_by_name(&self, name: &str) -> Result<Option<BudgetCategory>, WedplanError> {
        let name = name.trim();
        self.find_by(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Categories ordered by their sort order (stable for ties)
    pub fn get_sorted(&self) -> Result<Vec<BudgetCategory>, WedplanError> {
        let mut categories = self.get_all()?;
        categories.sort_by_key(|c| c.sort_order);
        Ok(categories)
    }

    pub fn next_sort_order(&self) -> Result<i32, WedplanError> {
        Ok(self
            .get_all()?
            .iter()
            .map(|c| c.sort_order + 1)
            .max()
            .unwrap_or(0))
    }
}

impl BudgetItemRepository {
    pub fn get_by_category(&self, category_id: BudgetCategoryId) -> Result<Vec<BudgetItem>, WedplanError> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|i| i.category_id == category_id)
            .collect())
    }

    /// Sum of actual costs recorded against a category
    pub fn spent_for(&self, category_id: BudgetCategoryId) -> Result<Money, WedplanError> {
        Ok(self
            .get_by_category(category_id)?
            .iter()
            .map(BudgetItem::spent_contribution)
            .sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::TempDir;

    #[test]
    fn test_category_lookup_and_order() {
        let temp = TempDir::new().unwrap();
        let repo = BudgetCategoryRepository::new(temp.path().join("cats.json"));
        assert_eq!(repo.next_sort_order().unwrap(), 0);

        let mut venue = BudgetCategory::new("Venue", Category::Venue, Money::from_dollars(12000));
        venue.sort_order = 1;
        let mut catering =
            BudgetCategory::new("Catering", Category::Catering, Money::from_dollars(8000));
        catering.sort_order = 0;
        repo.upsert(venue).unwrap();
        repo.upsert(catering).unwrap();

        assert!(repo.get_by_name("VENUE").unwrap().is_some());
        let sorted: Vec<String> = repo.get_sorted().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(sorted, vec!["Catering", "Venue"]);
        assert_eq!(repo.next_sort_order().unwrap(), 2);
    }

    #[test]
    fn test_spent_for_category() {
        let temp = TempDir::new().unwrap();
        let repo = BudgetItemRepository::new(temp.path().join("items.json"));
        let cat = BudgetCategoryId::new();

        let mut deposit = BudgetItem::new(cat, "Deposit", Money::from_dollars(3000));
        deposit.actual_cost = Some(Money::from_dollars(3000));
        let quote = BudgetItem::new(cat, "Balance", Money::from_dollars(9000));
        let mut other = BudgetItem::new(BudgetCategoryId::new(), "Cake", Money::from_dollars(600));
        other.actual_cost = Some(Money::from_dollars(650));

        for item in [deposit, quote, other] {
            repo.upsert(item).unwrap();
        }

        assert_eq!(repo.get_by_category(cat).unwrap().len(), 2);
        assert_eq!(repo.spent_for(cat).unwrap(), Money::from_dollars(3000));
    }
}
