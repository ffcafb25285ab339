//! # Validation Errors

use thiserror::Error;

use crate::annotation::ConstraintKey;

/// Result type for runtime validation
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Errors raised by a runtime validation call
///
/// `Failed` is the expected outcome for values that break their
/// constraints and carries the aggregated message. The other two variants
/// report faults in the declaration or in the descriptor/value pairing;
/// they abort traversal instead of joining the failure list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more constraints did not hold for the value
    #[error("{0}")]
    Failed(String),

    /// A constraint was unusable at evaluation time
    #[error("{0}")]
    InvalidConstraint(String),

    /// Value shape did not fit the descriptor it was validated against
    #[error("Unexpected error found due to typedesc and value mismatch.")]
    ValueMismatch,
}

impl ValidationError {
    /// Builds the fault for a constraint that cannot be evaluated
    pub(crate) fn invalid_constraint(path: &str, key: ConstraintKey, reason: &str) -> Self {
        ValidationError::InvalidConstraint(format!(
            "invalid value found for {}:{} constraint. {}",
            path,
            key.as_str(),
            reason
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_carries_aggregated_message() {
        let err = ValidationError::Failed("Validation failed for 'length' constraint(s).".into());
        assert_eq!(
            err.to_string(),
            "Validation failed for 'length' constraint(s)."
        );
    }

    #[test]
    fn test_invalid_constraint_names_path_and_key() {
        let err = ValidationError::invalid_constraint(
            "items[2]",
            ConstraintKey::MaxLength,
            "Length constraints should be positive",
        );
        assert_eq!(
            err.to_string(),
            "invalid value found for items[2]:maxLength constraint. \
             Length constraints should be positive"
        );
    }

    #[test]
    fn test_mismatch_message() {
        assert_eq!(
            ValidationError::ValueMismatch.to_string(),
            "Unexpected error found due to typedesc and value mismatch."
        );
    }
}
