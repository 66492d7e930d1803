//! Wedding profile service
//!
//! Owns the single wedding profile: creating it at the end of onboarding
//! (with its starter budget and timeline) and editing it afterwards.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use crate::audit::{AuditEntry, EntityType};
use crate::error::{WedplanError, WedplanResult};
use crate::models::{Money, Wedding, WeddingStyle};
use crate::storage::{default_budget_categories, Storage};

use super::timeline::TimelineService;

/// Service for the wedding profile
pub struct WeddingService<'a> {
    storage: &'a Storage,
}

/// Fields to change on the wedding; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct WeddingUpdate {
    pub partner1_name: Option<String>,
    pub partner2_name: Option<String>,
    /// `Some(None)` clears the date
    pub wedding_date: Option<Option<NaiveDate>>,
    pub location: Option<String>,
    pub venue_name: Option<String>,
    pub estimated_guests: Option<u32>,
    pub budget: Option<Money>,
    pub style: Option<WeddingStyle>,
    pub meal_options: Option<Vec<String>>,
}

/// What completing onboarding set up
#[derive(Debug, Clone)]
pub struct OnboardingOutcome {
    pub wedding: Wedding,
    pub budget_categories_created: usize,
    pub tasks_generated: usize,
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl<'a> WeddingService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> WedplanResult<Option<Wedding>> {
        self.storage.wedding.get()
    }

    /// The wedding, or an error telling the user to run `init`
    pub fn require(&self) -> WedplanResult<Wedding> {
        self.storage.wedding.require()
    }

    /// Store a freshly onboarded wedding.
    ///
    /// Seeds the default budget categories when a budget is known and none
    /// exist yet, and generates the timeline when the date is known.
    pub fn complete_onboarding(
        &self,
        mut wedding: Wedding,
        now: NaiveDateTime,
    ) -> WedplanResult<OnboardingOutcome> {
        if let Some(existing) = self.storage.wedding.get()? {
            return Err(WedplanError::Duplicate {
                entity_type: "Wedding",
                identifier: existing.couple(),
            });
        }

        wedding.partner1_name = wedding.partner1_name.trim().to_string();
        wedding.partner2_name = wedding.partner2_name.trim().to_string();
        wedding
            .validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;

        self.storage.wedding.set(wedding.clone())?;
        self.storage.wedding.save()?;
        self.storage.log_create(
            EntityType::Wedding,
            wedding.id.to_string(),
            Some(wedding.couple()),
            &wedding,
        )?;

        let mut budget_categories_created = 0;
        if let Some(budget) = wedding.budget {
            if self.storage.budget_categories.count()? == 0 {
                let categories = default_budget_categories(budget);
                let entries: Vec<AuditEntry> = categories
                    .iter()
                    .map(|c| {
                        AuditEntry::create(
                            EntityType::BudgetCategory,
                            c.id.to_string(),
                            Some(c.name.clone()),
                            c,
                        )
                    })
                    .collect();
                budget_categories_created = categories.len();
                for category in categories {
                    self.storage.budget_categories.upsert(category)?;
                }
                self.storage.budget_categories.save()?;
                self.storage.log_batch(&entries)?;
            }
        }

        let tasks_generated = if wedding.wedding_date.is_some() {
            TimelineService::new(self.storage).generate(now, false)?.len()
        } else {
            0
        };

        info!(
            couple = %wedding.couple(),
            budget_categories_created,
            tasks_generated,
            "Onboarding complete"
        );

        Ok(OnboardingOutcome {
            wedding,
            budget_categories_created,
            tasks_generated,
        })
    }

    /// Apply an edit to the wedding profile
    pub fn update(&self, update: WeddingUpdate) -> WedplanResult<Wedding> {
        let mut wedding = self.require()?;
        let before = wedding.clone();

        if let Some(name) = non_blank(update.partner1_name) {
            wedding.partner1_name = name;
        }
        if let Some(name) = non_blank(update.partner2_name) {
            wedding.partner2_name = name;
        }
        if let Some(date) = update.wedding_date {
            wedding.wedding_date = date;
        }
        if let Some(location) = update.location {
            wedding.location = non_blank(Some(location));
        }
        if let Some(venue) = update.venue_name {
            wedding.venue_name = non_blank(Some(venue));
        }
        if let Some(guests) = update.estimated_guests {
            wedding.estimated_guests = Some(guests);
        }
        if let Some(budget) = update.budget {
            wedding.budget = Some(budget);
        }
        if let Some(style) = update.style {
            wedding.style = Some(style);
        }
        if let Some(options) = update.meal_options {
            wedding.meal_options = options.into_iter().map(|m| m.trim().to_string()).collect();
        }

        wedding
            .validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;
        wedding.touch();

        self.storage.wedding.set(wedding.clone())?;
        self.storage.wedding.save()?;
        self.storage.log_update(
            EntityType::Wedding,
            wedding.id.to_string(),
            Some(wedding.couple()),
            &before,
            &wedding,
            None,
        )?;

        debug!(couple = %wedding.couple(), "Wedding profile updated");
        Ok(wedding)
    }
}
