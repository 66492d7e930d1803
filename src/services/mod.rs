//! Service layer for wedplan
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, cross-entity bookkeeping and audit logging.

pub mod budget;
pub mod dashboard;
pub mod day_of;
pub mod guest;
pub mod import;
pub mod moodboard;
pub mod rsvp;
pub mod timeline;
pub mod vendor;
pub mod wedding;

pub use budget::{BudgetItemUpdate, BudgetService, CreateBudgetItemInput, SpentMismatch};
pub use dashboard::{DashboardService, Overview};
pub use day_of::{CreateEventInput, DayOfService};
pub use guest::{CreateGuestInput, GuestService, GuestUpdate};
pub use import::{ImportResult, ImportService};
pub use moodboard::{AddItemInput, MoodboardService};
pub use rsvp::{RsvpInvitation, RsvpResponse, RsvpService};
pub use timeline::{CreateTaskInput, TaskUpdate, TimelineService};
pub use vendor::{CreateVendorInput, VendorService, VendorUpdate};
pub use wedding::{OnboardingOutcome, WeddingService, WeddingUpdate};
