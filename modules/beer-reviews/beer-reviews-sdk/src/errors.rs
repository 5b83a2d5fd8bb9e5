//! Public error types for the `beer_reviews` module.
//!
//! These errors are safe to expose to other modules and consumers.

use thiserror::Error;

/// Errors that can be returned by the `BeerReviewsClient`.
///
/// Empty results are never errors: a listing without matches is `Ok(vec![])`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BeerReviewsError {
    /// The request was rejected, e.g. a stats filter naming two dimensions.
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The datastore failed; details are logged, not exposed.
    #[error("Internal error")]
    Internal,
}

impl BeerReviewsError {
    /// Create a Validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an Internal error.
    #[must_use]
    pub fn internal() -> Self {
        Self::Internal
    }
}
