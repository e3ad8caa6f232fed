//! Rating domain errors
//!
//! This module defines all error types that can occur while rating
//! a driver profile.

use thiserror::Error;

/// Errors that can occur in the rating domain
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// A rule action referenced a knowledge base key that was never registered.
    ///
    /// This is a configuration defect: the standard rule set only requests
    /// keys the standard knowledge base contains, so this error surfaces a
    /// mismatch introduced during engine setup rather than bad caller input.
    #[error("Missing knowledge base entry: {0}")]
    MissingKnowledgeEntry(String),
}

impl RatingError {
    /// Creates a missing knowledge entry error
    pub fn missing_entry(key: impl Into<String>) -> Self {
        RatingError::MissingKnowledgeEntry(key.into())
    }
}
