//! Length constraints
//!
//! Evaluates `length`, `minLength` and `maxLength` against string character
//! counts and array element counts. Bounds must be strictly positive
//! integers; zero and negative bounds are rejected at check time and again
//! before every evaluation.

use serde_json::Value;

use crate::annotation::{ConstraintKey, ConstraintValue};
use crate::rules::strategy::{ConstraintStrategy, EvalError};

const REASON: &str = "Length constraints should be positive";

/// Strategy for the length constraint family
pub struct LengthStrategy;

impl LengthStrategy {
    /// Derives the length the family compares: character count for strings,
    /// element count for arrays
    fn derive_length(value: &Value) -> Option<i64> {
        match value {
            Value::String(text) => Some(text.chars().count() as i64),
            Value::Array(items) => Some(items.len() as i64),
            _ => None,
        }
    }
}

impl ConstraintStrategy for LengthStrategy {
    fn reason(&self) -> &'static str {
        REASON
    }

    fn check_literal(
        &self,
        key: ConstraintKey,
        literal: &ConstraintValue,
    ) -> Result<(), &'static str> {
        match key {
            ConstraintKey::Length | ConstraintKey::MinLength | ConstraintKey::MaxLength => {
                match literal {
                    ConstraintValue::Int(bound) if *bound > 0 => Ok(()),
                    ConstraintValue::Int(_)
                    | ConstraintValue::Float(_)
                    | ConstraintValue::String(_) => Err(REASON),
                }
            }
            ConstraintKey::MinValue
            | ConstraintKey::MinValueExclusive
            | ConstraintKey::MaxValue
            | ConstraintKey::MaxValueExclusive
            | ConstraintKey::Pattern => Err(REASON),
        }
    }

    fn evaluate(
        &self,
        key: ConstraintKey,
        literal: &ConstraintValue,
        value: &Value,
    ) -> Result<bool, EvalError> {
        let actual = match Self::derive_length(value) {
            Some(length) => length,
            None => return Err(EvalError::ValueMismatch),
        };
        let bound = match literal {
            ConstraintValue::Int(bound) => *bound,
            ConstraintValue::Float(_) | ConstraintValue::String(_) => {
                return Err(EvalError::InvalidConstraint)
            }
        };

        match key {
            ConstraintKey::Length => Ok(actual == bound),
            ConstraintKey::MinLength => Ok(actual >= bound),
            ConstraintKey::MaxLength => Ok(actual <= bound),
            ConstraintKey::MinValue
            | ConstraintKey::MinValueExclusive
            | ConstraintKey::MaxValue
            | ConstraintKey::MaxValueExclusive
            | ConstraintKey::Pattern => Err(EvalError::InvalidConstraint),
        }
    }
}
