//! Strongly-typed ID wrappers for all entity types
//!
//! Each entity gets its own newtype so a guest ID can never be handed to a
//! vendor lookup. IDs print as a short prefixed form (`gst-1a2b3c4d`) which
//! is also accepted back when parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse a full UUID, with or without the display prefix
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }

            /// Check whether `identifier` is this ID in full or short form.
            ///
            /// The short form is the prefix plus the first eight hex digits,
            /// exactly as printed by `Display`.
            pub fn matches(&self, identifier: &str) -> bool {
                let identifier = identifier.trim().to_lowercase();
                let bare = identifier
                    .strip_prefix($display_prefix)
                    .unwrap_or(&identifier);
                if bare.len() < 8 {
                    return false;
                }
                self.0.to_string().starts_with(bare)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }
    };
}

define_id!(WeddingId, "wed-");
define_id!(TaskId, "tsk-");
define_id!(BudgetCategoryId, "bud-");
define_id!(BudgetItemId, "itm-");
define_id!(GuestId, "gst-");
define_id!(VendorId, "vnd-");
define_id!(MoodboardId, "brd-");
define_id!(MoodboardItemId, "pin-");
define_id!(EventId, "evt-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        let id = GuestId::new();
        let display = id.to_string();
        assert!(display.starts_with("gst-"));
        assert_eq!(display.len(), 12);
    }

    #[test]
    fn test_short_form_matches() {
        let id = TaskId::new();
        assert!(id.matches(&id.to_string()));
        assert!(id.matches(&id.as_uuid().to_string()));
        assert!(id.matches(&id.to_string().to_uppercase()));
        assert!(!id.matches("tsk-"));
        assert!(!id.matches("tsk-12"));
    }

    #[test]
    fn test_parse_with_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: VendorId = format!("vnd-{}", uuid_str).parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
        assert!(VendorId::parse("vnd-1234").is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = MoodboardId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: MoodboardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
