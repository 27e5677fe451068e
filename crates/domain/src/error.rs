//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CasaHubError`]
//! via `#[from]` — no stringly-typed variants.

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum CasaHubError {
    /// A domain invariant was violated by the input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A lookup referenced a record that does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// An appliance name was empty.
    #[error("appliance name must not be empty")]
    EmptyName,

    /// A setting key was empty.
    #[error("setting key must not be empty")]
    EmptyKey,

    /// A path or payload identifier was not a valid UUID.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

/// A record lookup failed.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Human-readable entity kind (`"Appliance"`, `"Setting"`).
    pub entity: &'static str,
    /// The identifier that missed.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Appliance",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Appliance not found: abc");
    }

    #[test]
    fn should_convert_validation_error_into_domain_error() {
        let err: CasaHubError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            CasaHubError::Validation(ValidationError::EmptyName)
        ));
    }
}
