use beer_reviews_sdk::BeerReviewsError;
use thiserror::Error;

use crate::domain::filter::FilterError;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Invalid stats filter: {0}")]
    InvalidFilter(#[from] FilterError),
}

impl DomainError {
    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for BeerReviewsError {
    fn from(domain_error: DomainError) -> Self {
        match domain_error {
            DomainError::InvalidFilter(err) => BeerReviewsError::validation(err.to_string()),
            DomainError::Database { .. } => BeerReviewsError::internal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_errors_surface_as_validation() {
        let err = DomainError::from(FilterError::ConflictingDimensions {
            given: vec!["brewery", "location"],
        });
        assert_eq!(
            BeerReviewsError::from(err),
            BeerReviewsError::validation(
                "at most one of brewery, location and style may be given, got: brewery, location"
            )
        );
    }

    #[test]
    fn database_details_are_hidden() {
        let err = DomainError::database("connection reset");
        assert_eq!(BeerReviewsError::from(err), BeerReviewsError::Internal);
    }
}
