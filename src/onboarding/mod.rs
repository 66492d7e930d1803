//! First-run onboarding
//!
//! Collects the couple's names, date, location, guest count, style and
//! budget, then creates the wedding profile with its starter budget and
//! timeline.

pub mod steps;
pub mod wizard;

pub use steps::{BudgetRange, GuestRange, OnboardingDraft, OnboardingStep};
pub use wizard::{OnboardingWizard, Prompter};
