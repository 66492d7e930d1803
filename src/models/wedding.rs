//! Wedding profile model
//!
//! The single profile describing the couple's wedding. Created by onboarding
//! and consulted by the timeline generator, the RSVP form and the dashboard.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::WeddingId;
use super::money::Money;

labeled_enum! {
    /// Overall style chosen during onboarding
    pub enum WeddingStyle {
        Modern => ("modern", "Modern"),
        Rustic => ("rustic", "Rustic"),
        Classic => ("classic", "Classic"),
        Boho => ("boho", "Boho"),
        Romantic => ("romantic", "Romantic"),
        Minimalist => ("minimalist", "Minimalist"),
        Garden => ("garden", "Garden"),
        Beach => ("beach", "Beach"),
        Glamorous => ("glamorous", "Glamorous"),
        Vintage => ("vintage", "Vintage"),
    }
}

/// Meal options offered on the RSVP form unless the couple changes them
pub const DEFAULT_MEAL_OPTIONS: &[&str] = &["Beef", "Chicken", "Fish", "Vegetarian", "Vegan"];

fn default_meal_options() -> Vec<String> {
    DEFAULT_MEAL_OPTIONS.iter().map(|m| m.to_string()).collect()
}

/// The couple's wedding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wedding {
    pub id: WeddingId,

    pub partner1_name: String,

    pub partner2_name: String,

    /// None while the couple hasn't picked a date
    pub wedding_date: Option<NaiveDate>,

    pub location: Option<String>,

    pub venue_name: Option<String>,

    pub estimated_guests: Option<u32>,

    /// Total budget
    pub budget: Option<Money>,

    pub style: Option<WeddingStyle>,

    #[serde(default = "default_meal_options")]
    pub meal_options: Vec<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl Wedding {
    /// Create a new wedding profile for a couple
    pub fn new(partner1_name: impl Into<String>, partner2_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: WeddingId::new(),
            partner1_name: partner1_name.into(),
            partner2_name: partner2_name.into(),
            wedding_date: None,
            location: None,
            venue_name: None,
            estimated_guests: None,
            budget: None,
            style: None,
            meal_options: default_meal_options(),
            created_at: now,
            updated_at: now,
        }
    }

    /// "Sarah & Michael"
    pub fn couple(&self) -> String {
        format!("{} & {}", self.partner1_name, self.partner2_name)
    }

    /// Find a configured meal option, ignoring case
    pub fn meal_option(&self, choice: &str) -> Option<&str> {
        let choice = choice.trim();
        self.meal_options
            .iter()
            .find(|m| m.eq_ignore_ascii_case(choice))
            .map(String::as_str)
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn validate(&self) -> Result<(), WeddingValidationError> {
        if self.partner1_name.trim().is_empty() || self.partner2_name.trim().is_empty() {
            return Err(WeddingValidationError::MissingPartnerName);
        }

        if let Some(budget) = self.budget {
            if budget.is_negative() {
                return Err(WeddingValidationError::NegativeBudget);
            }
        }

        if self.meal_options.iter().any(|m| m.trim().is_empty()) {
            return Err(WeddingValidationError::EmptyMealOption);
        }

        Ok(())
    }
}

impl fmt::Display for Wedding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.couple())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeddingValidationError {
    MissingPartnerName,
    NegativeBudget,
    EmptyMealOption,
}

impl fmt::Display for WeddingValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPartnerName => write!(f, "Both partner names are required"),
            Self::NegativeBudget => write!(f, "Budget cannot be negative"),
            Self::EmptyMealOption => write!(f, "Meal options cannot be blank"),
        }
    }
}

impl std::error::Error for WeddingValidationError {}
