//! Day-of schedule service

use chrono::NaiveTime;
use tracing::debug;

use crate::audit::EntityType;
use crate::error::{WedplanError, WedplanResult};
use crate::models::DayOfEvent;
use crate::storage::Storage;

/// Service for the wedding-day running order
pub struct DayOfService<'a> {
    storage: &'a Storage,
}

/// Input for a schedule entry
#[derive(Debug, Clone)]
pub struct CreateEventInput {
    pub title: String,
    pub start_time: NaiveTime,
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub assigned_to: Option<String>,
}

impl<'a> DayOfService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Events ordered by start time
    pub fn schedule(&self) -> WedplanResult<Vec<DayOfEvent>> {
        self.storage.events.get_schedule()
    }

    pub fn add(&self, input: CreateEventInput) -> WedplanResult<DayOfEvent> {
        let mut event = DayOfEvent::new(input.title.trim(), input.start_time);
        event.end_time = input.end_time;
        event.duration_minutes = input
            .end_time
            .map(|end| (end - input.start_time).num_minutes())
            .filter(|m| *m >= 0)
            .map(|m| m as u32);
        event.location = input.location.filter(|s| !s.trim().is_empty());
        event.description = input.description.filter(|s| !s.trim().is_empty());
        event.assigned_to = input.assigned_to.filter(|s| !s.trim().is_empty());

        event
            .validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;

        self.storage.events.upsert(event.clone())?;
        self.storage.events.save()?;

        self.storage.log_create(
            EntityType::DayOfEvent,
            event.id.to_string(),
            Some(event.title.clone()),
            &event,
        )?;

        debug!(event = %event, "Day-of event added");
        Ok(event)
    }

    /// Remove an event by ID or title
    pub fn remove(&self, identifier: &str) -> WedplanResult<DayOfEvent> {
        let title = identifier.trim();
        let event = match self
            .storage
            .events
            .find_by(|e| e.title.eq_ignore_ascii_case(title))?
        {
            Some(event) => event,
            None => self
                .storage
                .events
                .find(identifier)?
                .ok_or_else(|| WedplanError::event_not_found(identifier))?,
        };

        self.storage.events.remove(event.id)?;
        self.storage.events.save()?;

        self.storage.log_delete(
            EntityType::DayOfEvent,
            event.id.to_string(),
            Some(event.title.clone()),
            &event,
        )?;

        Ok(event)
    }
}
