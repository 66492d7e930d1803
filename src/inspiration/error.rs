//! Inspiration search errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::error::WedplanError;

/// Body of the 400 response for a missing query
pub const MISSING_QUERY_MESSAGE: &str = "Query parameter 'q' is required";

/// Body of the 500 response for every other failure
pub const SEARCH_FAILED_MESSAGE: &str = "Failed to search Pinterest";

#[derive(Error, Debug)]
pub enum SearchError {
    /// No access token; callers fall back to placeholder results
    #[error("Pinterest access token not configured")]
    NotConfigured,

    #[error("{}", MISSING_QUERY_MESSAGE)]
    MissingQuery,

    #[error("Pinterest API error: {status}")]
    Upstream { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingQuery => (StatusCode::BAD_REQUEST, MISSING_QUERY_MESSAGE),
            _ => {
                warn!(error = %self, "Pinterest search failed");
                (StatusCode::INTERNAL_SERVER_ERROR, SEARCH_FAILED_MESSAGE)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<SearchError> for WedplanError {
    fn from(err: SearchError) -> Self {
        Self::Search(err.to_string())
    }
}
