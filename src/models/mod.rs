//! Core data models for wedplan
//!
//! This module contains the data structures of the planning domain: the
//! wedding profile, timeline tasks, budget categories and items, guests,
//! vendors, moodboards and the day-of schedule.

/// Declare a closed set of string-tagged values.
///
/// Every variant gets a stable storage key (used by serde and accepted on the
/// command line) and a human label for display. Parsing accepts either form,
/// case-insensitively, with spaces or dashes standing in for underscores.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($key:literal, $label:literal), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $key)] $variant, )+
        }

        impl $name {
            /// All values in declaration order
            pub fn all() -> &'static [Self] {
                &[ $( Self::$variant, )+ ]
            }

            /// Storage key
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $key, )+
                }
            }

            /// Human-readable label
            pub fn label(&self) -> &'static str {
                match self {
                    $( Self::$variant => $label, )+
                }
            }

            /// Comma-separated list of accepted keys, for error messages
            pub fn expected() -> String {
                Self::all()
                    .iter()
                    .map(|v| v.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
                Self::all()
                    .iter()
                    .copied()
                    .find(|v| {
                        v.as_str() == wanted
                            || v.label().to_lowercase().replace(['-', ' '], "_") == wanted
                    })
                    .ok_or_else(|| {
                        format!(
                            "Unknown {} '{}'. Expected one of: {}",
                            stringify!($name),
                            s,
                            Self::expected()
                        )
                    })
            }
        }
    };
}

pub mod budget;
pub mod category;
pub mod day_of;
pub mod guest;
pub mod ids;
pub mod money;
pub mod moodboard;
pub mod task;
pub mod vendor;
pub mod wedding;

pub use budget::{BudgetCategory, BudgetItem, PaymentStatus};
pub use category::Category;
pub use day_of::DayOfEvent;
pub use guest::{Guest, GuestRelation, RsvpStatus, Side};
pub use ids::{
    BudgetCategoryId, BudgetItemId, EventId, GuestId, MoodboardId, MoodboardItemId, TaskId,
    VendorId, WeddingId,
};
pub use money::Money;
pub use moodboard::{Moodboard, MoodboardItem};
pub use task::{ChecklistItem, Priority, TimelineTask};
pub use vendor::{Vendor, VendorStatus};
pub use wedding::{Wedding, WeddingStyle};
