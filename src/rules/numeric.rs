//! Numeric range constraints
//!
//! Evaluates `minValue`, `minValueExclusive`, `maxValue` and
//! `maxValueExclusive` against numeric values. Comparison stays in integer
//! arithmetic when both the value and the bound are integers; mixed
//! int/float pairings compare as floats.

use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::annotation::{ConstraintKey, ConstraintValue};
use crate::rules::strategy::{ConstraintStrategy, EvalError};

const REASON: &str = "Value constraints should be numeric";

/// Strategy for the numeric constraint family
pub struct NumericStrategy;

impl NumericStrategy {
    /// Compares a numeric value against a declared bound
    fn compare(actual: &Number, bound: &ConstraintValue) -> Option<Ordering> {
        match bound {
            ConstraintValue::Int(b) => {
                if let Some(a) = actual.as_i64() {
                    return Some(a.cmp(b));
                }
                actual.as_f64().and_then(|a| a.partial_cmp(&(*b as f64)))
            }
            ConstraintValue::Float(b) => actual.as_f64().and_then(|a| a.partial_cmp(b)),
            ConstraintValue::String(_) => None,
        }
    }
}

impl ConstraintStrategy for NumericStrategy {
    fn reason(&self) -> &'static str {
        REASON
    }

    fn check_literal(
        &self,
        key: ConstraintKey,
        literal: &ConstraintValue,
    ) -> Result<(), &'static str> {
        match key {
            ConstraintKey::MinValue
            | ConstraintKey::MinValueExclusive
            | ConstraintKey::MaxValue
            | ConstraintKey::MaxValueExclusive => match literal {
                ConstraintValue::Int(_) | ConstraintValue::Float(_) => Ok(()),
                ConstraintValue::String(_) => Err(REASON),
            },
            ConstraintKey::Length
            | ConstraintKey::MinLength
            | ConstraintKey::MaxLength
            | ConstraintKey::Pattern => Err(REASON),
        }
    }

    fn evaluate(
        &self,
        key: ConstraintKey,
        literal: &ConstraintValue,
        value: &Value,
    ) -> Result<bool, EvalError> {
        let number = match value {
            Value::Number(number) => number,
            _ => return Err(EvalError::ValueMismatch),
        };
        let ordering = match Self::compare(number, literal) {
            Some(ordering) => ordering,
            None => return Err(EvalError::InvalidConstraint),
        };

        match key {
            ConstraintKey::MinValue => Ok(ordering != Ordering::Less),
            ConstraintKey::MinValueExclusive => Ok(ordering == Ordering::Greater),
            ConstraintKey::MaxValue => Ok(ordering != Ordering::Greater),
            ConstraintKey::MaxValueExclusive => Ok(ordering == Ordering::Less),
            ConstraintKey::Length
            | ConstraintKey::MinLength
            | ConstraintKey::MaxLength
            | ConstraintKey::Pattern => Err(EvalError::InvalidConstraint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn eval(key: ConstraintKey, literal: ConstraintValue, value: Value) -> Result<bool, EvalError> {
        NumericStrategy.evaluate(key, &literal, &value)
    }

    #[test]
    fn test_inclusive_bounds() {
        let key = ConstraintKey::MinValue;
        assert_eq!(eval(key, ConstraintValue::Int(18), json!(18)), Ok(true));
        assert_eq!(eval(key, ConstraintValue::Int(18), json!(19)), Ok(true));
        assert_eq!(eval(key, ConstraintValue::Int(18), json!(17)), Ok(false));

        let key = ConstraintKey::MaxValue;
        assert_eq!(eval(key, ConstraintValue::Int(100), json!(100)), Ok(true));
        assert_eq!(eval(key, ConstraintValue::Int(100), json!(101)), Ok(false));
    }

    #[test]
    fn test_exclusive_bounds() {
        let key = ConstraintKey::MinValueExclusive;
        assert_eq!(eval(key, ConstraintValue::Int(0), json!(0)), Ok(false));
        assert_eq!(eval(key, ConstraintValue::Int(0), json!(1)), Ok(true));

        let key = ConstraintKey::MaxValueExclusive;
        assert_eq!(eval(key, ConstraintValue::Int(10), json!(10)), Ok(false));
        assert_eq!(eval(key, ConstraintValue::Int(10), json!(9)), Ok(true));
    }

    #[test]
    fn test_mixed_int_float_comparison() {
        let key = ConstraintKey::MinValue;
        assert_eq!(eval(key, ConstraintValue::Float(2.5), json!(3)), Ok(true));
        assert_eq!(eval(key, ConstraintValue::Float(2.5), json!(2)), Ok(false));
        assert_eq!(eval(key, ConstraintValue::Int(3), json!(3.5)), Ok(true));
        assert_eq!(eval(key, ConstraintValue::Int(3), json!(2.5)), Ok(false));
    }

    #[test]
    fn test_non_numeric_value_is_mismatch() {
        let key = ConstraintKey::MinValue;
        assert_eq!(
            eval(key, ConstraintValue::Int(1), json!("5")),
            Err(EvalError::ValueMismatch)
        );
        assert_eq!(
            eval(key, ConstraintValue::Int(1), json!(true)),
            Err(EvalError::ValueMismatch)
        );
        assert_eq!(
            eval(key, ConstraintValue::Int(1), json!(null)),
            Err(EvalError::ValueMismatch)
        );
    }

    #[test]
    fn test_literal_check() {
        let strategy = NumericStrategy;
        assert!(strategy
            .check_literal(ConstraintKey::MinValue, &ConstraintValue::Int(-10))
            .is_ok());
        assert!(strategy
            .check_literal(ConstraintKey::MaxValue, &ConstraintValue::Float(0.5))
            .is_ok());
        assert_eq!(
            strategy.check_literal(ConstraintKey::MinValue, &ConstraintValue::from("10")),
            Err(REASON)
        );
    }

    #[test]
    fn test_foreign_key_is_invalid_constraint() {
        assert_eq!(
            eval(ConstraintKey::MinLength, ConstraintValue::Int(1), json!(5)),
            Err(EvalError::InvalidConstraint)
        );
        assert!(NumericStrategy
            .check_literal(ConstraintKey::Pattern, &ConstraintValue::Int(1))
            .is_err());
    }
}
