//! wedplan - terminal-first wedding planner
//!
//! This library provides the core functionality for the wedplan application:
//! a timeline derived from the wedding date, a budget split into categories
//! with tracked expenses, the guest list with RSVP codes, vendors,
//! moodboards, the day-of running order and an inspiration search backed by
//! Pinterest.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (wedding, tasks, budget, guests, vendors, ...)
//! - `planning`: Pure derivations: schedule, aggregates, filters
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `onboarding`: First-run wizard
//! - `inspiration`: Pin search client and HTTP proxy
//! - `export`: JSON, YAML and CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use wedplan::config::{paths::WedplanPaths, settings::Settings};
//!
//! let paths = WedplanPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod inspiration;
pub mod logging;
pub mod models;
pub mod onboarding;
pub mod planning;
pub mod services;
pub mod storage;

pub use error::{WedplanError, WedplanResult};
