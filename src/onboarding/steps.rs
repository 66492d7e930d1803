//! Onboarding steps and their gates
//!
//! Onboarding collects the wedding profile in six steps. Each step has a gate
//! that must pass before the next one opens; the same gates apply whether the
//! answers come from prompts or from command-line flags.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

use crate::error::{WedplanError, WedplanResult};
use crate::models::{Money, Wedding, WeddingStyle};

/// One page of onboarding, in the order they are asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    Names,
    Date,
    Location,
    GuestCount,
    Style,
    Budget,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 6] = [
        Self::Names,
        Self::Date,
        Self::Location,
        Self::GuestCount,
        Self::Style,
        Self::Budget,
    ];

    /// Zero-based position
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Names => "Who's getting married?",
            Self::Date => "When's the big day?",
            Self::Location => "Where will it be?",
            Self::GuestCount => "How many guests?",
            Self::Style => "What's your style?",
            Self::Budget => "What's your budget?",
        }
    }

    /// What is missing when the gate is closed, phrased for the flag path
    pub fn requirement(&self) -> &'static str {
        match self {
            Self::Names => "Both partner names are required (--partner1, --partner2)",
            Self::Date => "Give a wedding date (--date YYYY-MM-DD) or pass --date-undecided",
            Self::Location => "A location is required (--location)",
            Self::GuestCount => "Choose a guest count (--guests intimate|small|medium|large|grand)",
            Self::Style => "Choose a style (--style)",
            Self::Budget => "Choose a budget range (--budget 10k|25k|50k|75k|100k|150k)",
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {}: {}", self.index() + 1, self.title())
    }
}

/// Guest count bucket; each stands for a fixed estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestRange {
    Intimate,
    Small,
    Medium,
    Large,
    Grand,
}

impl GuestRange {
    pub const ALL: [GuestRange; 5] = [
        Self::Intimate,
        Self::Small,
        Self::Medium,
        Self::Large,
        Self::Grand,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intimate => "intimate",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Grand => "grand",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Intimate => "Intimate (under 50)",
            Self::Small => "Small (50-100)",
            Self::Medium => "Medium (100-150)",
            Self::Large => "Large (150-250)",
            Self::Grand => "Grand (250+)",
        }
    }

    pub fn estimate(&self) -> u32 {
        match self {
            Self::Intimate => 50,
            Self::Small => 100,
            Self::Medium => 150,
            Self::Large => 250,
            Self::Grand => 300,
        }
    }
}

impl FromStr for GuestRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == wanted || r.estimate().to_string() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown guest count '{}'. Expected one of: intimate, small, medium, large, grand",
                    s
                )
            })
    }
}

/// Budget bucket; each stands for its upper bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetRange {
    Under10k,
    Upto25k,
    Upto50k,
    Upto75k,
    Upto100k,
    Over100k,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 6] = [
        Self::Under10k,
        Self::Upto25k,
        Self::Upto50k,
        Self::Upto75k,
        Self::Upto100k,
        Self::Over100k,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Under10k => "Under $10k",
            Self::Upto25k => "$10k - $25k",
            Self::Upto50k => "$25k - $50k",
            Self::Upto75k => "$50k - $75k",
            Self::Upto100k => "$75k - $100k",
            Self::Over100k => "$100k+",
        }
    }

    pub fn amount(&self) -> Money {
        Money::from_dollars(match self {
            Self::Under10k => 10_000,
            Self::Upto25k => 25_000,
            Self::Upto50k => 50_000,
            Self::Upto75k => 75_000,
            Self::Upto100k => 100_000,
            Self::Over100k => 150_000,
        })
    }
}

impl FromStr for BudgetRange {
    type Err = String;

    /// Accepts the bucket amount in any form `Money::parse` understands
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || {
            format!(
                "Unknown budget range '{}'. Expected one of: 10k, 25k, 50k, 75k, 100k, 150k",
                s
            )
        };
        let amount = Money::parse(s).map_err(|_| error())?;
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.amount() == amount)
            .ok_or_else(error)
    }
}

/// Answers collected so far
#[derive(Debug, Clone, Default)]
pub struct OnboardingDraft {
    pub partner1_name: String,
    pub partner2_name: String,
    pub wedding_date: Option<NaiveDate>,
    pub date_undecided: bool,
    pub location: String,
    pub guest_range: Option<GuestRange>,
    pub style: Option<WeddingStyle>,
    pub budget_range: Option<BudgetRange>,
}

impl OnboardingDraft {
    /// Whether the gate of `step` is open
    pub fn can_proceed(&self, step: OnboardingStep) -> bool {
        match step {
            OnboardingStep::Names => {
                !self.partner1_name.trim().is_empty() && !self.partner2_name.trim().is_empty()
            }
            OnboardingStep::Date => self.date_undecided || self.wedding_date.is_some(),
            OnboardingStep::Location => !self.location.trim().is_empty(),
            OnboardingStep::GuestCount => self.guest_range.is_some(),
            OnboardingStep::Style => self.style.is_some(),
            OnboardingStep::Budget => self.budget_range.is_some(),
        }
    }

    pub fn first_incomplete(&self) -> Option<OnboardingStep> {
        OnboardingStep::ALL
            .iter()
            .copied()
            .find(|s| !self.can_proceed(*s))
    }

    /// Fraction of steps done, in percent
    pub fn progress(&self) -> usize {
        let done = match self.first_incomplete() {
            Some(step) => step.index(),
            None => OnboardingStep::ALL.len(),
        };
        done * 100 / OnboardingStep::ALL.len()
    }

    /// Build the wedding profile once every gate is open
    pub fn to_wedding(&self) -> WedplanResult<Wedding> {
        if let Some(step) = self.first_incomplete() {
            return Err(WedplanError::Validation(format!(
                "{}: {}",
                step,
                step.requirement()
            )));
        }

        let mut wedding = Wedding::new(self.partner1_name.trim(), self.partner2_name.trim());
        wedding.wedding_date = if self.date_undecided {
            None
        } else {
            self.wedding_date
        };
        wedding.location = Some(self.location.trim().to_string());
        wedding.estimated_guests = self.guest_range.map(|r| r.estimate());
        wedding.style = self.style;
        wedding.budget = self.budget_range.map(|r| r.amount());
        Ok(wedding)
    }
}
