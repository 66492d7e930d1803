//! Configuration module for wedplan
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence
//! - Inspiration search settings and secrets from the environment

pub mod paths;
pub mod settings;

pub use paths::WedplanPaths;
pub use settings::{SearchSettings, Settings};
