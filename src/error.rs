//! Custom error types for wedplan
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for wedplan operations
#[derive(Error, Debug)]
pub enum WedplanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Duplicate entity errors
    #[error("{entity_type} already exists: {identifier}")]
    Duplicate {
        entity_type: &'static str,
        identifier: String,
    },

    /// Budget bookkeeping errors
    #[error("Budget error: {0}")]
    Budget(String),

    /// RSVP form errors
    #[error("RSVP error: {0}")]
    Rsvp(String),

    /// Inspiration search errors
    #[error("Search error: {0}")]
    Search(String),

    /// Import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// The wedding profile has not been created yet
    #[error("No wedding set up yet. Run 'wedplan init' first.")]
    NotInitialized,
}

impl WedplanError {
    /// Create a "not found" error for tasks
    pub fn task_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Task",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budget categories
    pub fn budget_category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget category",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budget items
    pub fn budget_item_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget item",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for guests
    pub fn guest_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Guest",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for vendors
    pub fn vendor_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Vendor",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for moodboards
    pub fn moodboard_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Moodboard",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for day-of events
    pub fn event_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Event",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for WedplanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WedplanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for wedplan operations
pub type WedplanResult<T> = Result<T, WedplanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WedplanError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = WedplanError::guest_not_found("Emma Johnson");
        assert_eq!(err.to_string(), "Guest not found: Emma Johnson");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_duplicate_error() {
        let err = WedplanError::Duplicate {
            entity_type: "Moodboard",
            identifier: "Florals".into(),
        };
        assert_eq!(err.to_string(), "Moodboard already exists: Florals");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: WedplanError = io_err.into();
        assert!(matches!(err, WedplanError::Io(_)));
    }
}
