//! Domain-level errors

use thiserror::Error;

use crate::value_objects::InvalidCoordinates;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required location was not provided (zero or missing coordinates)
    #[error("Missing location: {0}")]
    MissingLocation(String),

    /// Coordinates outside the valid range
    #[error(transparent)]
    InvalidCoordinates(#[from] InvalidCoordinates),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create a missing location error for the named role (e.g. "origin")
    pub fn missing_location(role: impl Into<String>) -> Self {
        Self::MissingLocation(role.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_location_message() {
        let err = DomainError::missing_location("origin");
        assert_eq!(err.to_string(), "Missing location: origin");
    }

    #[test]
    fn invalid_coordinates_converts() {
        let err: DomainError = InvalidCoordinates.into();
        assert!(matches!(err, DomainError::InvalidCoordinates(_)));
        assert!(err.to_string().contains("latitude must be -90 to 90"));
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("query is empty".to_string());
        assert_eq!(err.to_string(), "Validation failed: query is empty");
    }
}
