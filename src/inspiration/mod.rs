//! Inspiration search
//!
//! A thin client for the Pinterest pin search API, the placeholder page
//! served while no access token is configured, and the HTTP proxy that
//! exposes the search to browsers.

pub mod client;
pub mod error;
pub mod mock;
pub mod server;
pub mod types;

pub use client::{PinterestClient, TokenSource};
pub use error::SearchError;
pub use mock::mock_results;
pub use server::{router, ServerConfig};
pub use types::{wedding_query, Pin, SearchResults};
