//! Day-of schedule events

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EventId;

/// Something happening on the wedding day, at a time of day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayOfEvent {
    pub id: EventId,

    pub title: String,

    pub start_time: NaiveTime,

    #[serde(default)]
    pub end_time: Option<NaiveTime>,

    #[serde(default)]
    pub duration_minutes: Option<u32>,

    #[serde(default)]
    pub location: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Person or vendor responsible
    #[serde(default)]
    pub assigned_to: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl DayOfEvent {
    pub fn new(title: impl Into<String>, start_time: NaiveTime) -> Self {
        let now = Utc::now();
        Self {
            id: EventId::new(),
            title: title.into(),
            start_time,
            end_time: None,
            duration_minutes: None,
            location: None,
            description: None,
            assigned_to: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// "3:00 PM" or "3:00 PM - 3:30 PM"
    pub fn time_range(&self) -> String {
        match self.end_time {
            Some(end) => format!("{} - {}", format_time(self.start_time), format_time(end)),
            None => format_time(self.start_time),
        }
    }

    pub fn validate(&self) -> Result<(), DayOfValidationError> {
        if self.title.trim().is_empty() {
            return Err(DayOfValidationError::EmptyTitle);
        }

        if let Some(end) = self.end_time {
            if end < self.start_time {
                return Err(DayOfValidationError::EndBeforeStart);
            }
        }

        Ok(())
    }
}

/// Parse an `HH:MM` time of day
pub fn parse_time(s: &str) -> Result<NaiveTime, DayOfValidationError> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M")
        .map_err(|_| DayOfValidationError::InvalidTime(s.to_string()))
}

/// 12-hour clock, e.g. `5:30 PM`
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

impl fmt::Display for DayOfEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_time(self.start_time), self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayOfValidationError {
    EmptyTitle,
    EndBeforeStart,
    InvalidTime(String),
}

impl fmt::Display for DayOfValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Event title cannot be empty"),
            Self::EndBeforeStart => write!(f, "End time cannot be before the start time"),
            Self::InvalidTime(s) => write!(f, "Invalid time '{}': expected HH:MM", s),
        }
    }
}

impl std::error::Error for DayOfValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        let t = parse_time("17:30").unwrap();
        assert_eq!(format_time(t), "5:30 PM");
        assert_eq!(format_time(parse_time("09:05").unwrap()), "9:05 AM");
        assert!(parse_time("25:00").is_err());
        assert!(parse_time("noon").is_err());
    }

    #[test]
    fn test_time_range() {
        let mut event = DayOfEvent::new("First Look", parse_time("15:00").unwrap());
        assert_eq!(event.time_range(), "3:00 PM");
        event.end_time = Some(parse_time("15:30").unwrap());
        assert_eq!(event.time_range(), "3:00 PM - 3:30 PM");
    }

    #[test]
    fn test_validation() {
        let mut event = DayOfEvent::new("Ceremony", parse_time("17:00").unwrap());
        event.end_time = Some(parse_time("16:00").unwrap());
        assert_eq!(event.validate(), Err(DayOfValidationError::EndBeforeStart));
    }
}
