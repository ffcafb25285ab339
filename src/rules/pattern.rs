//! Pattern constraints
//!
//! Evaluates `pattern` against string values: the entire value must match
//! the declared regular expression. The expression is compiled at check
//! time and again at evaluation time; anchoring makes partial matches
//! insufficient.

use regex::Regex;
use serde_json::Value;

use crate::annotation::{ConstraintKey, ConstraintValue};
use crate::rules::strategy::{ConstraintStrategy, EvalError};

const REASON: &str = "Pattern constraints should be valid regular expressions";

/// Strategy for the pattern constraint family
pub struct PatternStrategy;

impl PatternStrategy {
    /// Wraps an expression so it must match the whole value
    fn anchored(pattern: &str) -> String {
        format!("^(?:{pattern})$")
    }
}

impl ConstraintStrategy for PatternStrategy {
    fn reason(&self) -> &'static str {
        REASON
    }

    fn check_literal(
        &self,
        key: ConstraintKey,
        literal: &ConstraintValue,
    ) -> Result<(), &'static str> {
        match key {
            ConstraintKey::Pattern => match literal {
                ConstraintValue::String(pattern) => match Regex::new(&Self::anchored(pattern)) {
                    Ok(_) => Ok(()),
                    Err(_) => Err(REASON),
                },
                ConstraintValue::Int(_) | ConstraintValue::Float(_) => Err(REASON),
            },
            ConstraintKey::MinValue
            | ConstraintKey::MinValueExclusive
            | ConstraintKey::MaxValue
            | ConstraintKey::MaxValueExclusive
            | ConstraintKey::Length
            | ConstraintKey::MinLength
            | ConstraintKey::MaxLength => Err(REASON),
        }
    }

    fn evaluate(
        &self,
        key: ConstraintKey,
        literal: &ConstraintValue,
        value: &Value,
    ) -> Result<bool, EvalError> {
        let text = match value {
            Value::String(text) => text,
            _ => return Err(EvalError::ValueMismatch),
        };
        let pattern = match literal {
            ConstraintValue::String(pattern) => pattern,
            ConstraintValue::Int(_) | ConstraintValue::Float(_) => {
                return Err(EvalError::InvalidConstraint)
            }
        };

        match key {
            ConstraintKey::Pattern => match Regex::new(&Self::anchored(pattern)) {
                Ok(regex) => Ok(regex.is_match(text)),
                Err(_) => Err(EvalError::InvalidConstraint),
            },
            ConstraintKey::MinValue
            | ConstraintKey::MinValueExclusive
            | ConstraintKey::MaxValue
            | ConstraintKey::MaxValueExclusive
            | ConstraintKey::Length
            | ConstraintKey::MinLength
            | ConstraintKey::MaxLength => Err(EvalError::InvalidConstraint),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn eval(pattern: &str, value: Value) -> Result<bool, EvalError> {
        PatternStrategy.evaluate(
            ConstraintKey::Pattern,
            &ConstraintValue::from(pattern),
            &value,
        )
    }

    #[test]
    fn test_whole_value_must_match() {
        assert_eq!(eval("[a-z]+", json!("hello")), Ok(true));
        assert_eq!(eval("[a-z]+", json!("hello world")), Ok(false));
        assert_eq!(eval("[a-z]+", json!("Hello")), Ok(false));
    }

    #[test]
    fn test_alternation_stays_anchored() {
        // without grouping, `a|bc` would match any value containing "a"
        assert_eq!(eval("a|bc", json!("a")), Ok(true));
        assert_eq!(eval("a|bc", json!("bc")), Ok(true));
        assert_eq!(eval("a|bc", json!("abc")), Ok(false));
    }

    #[test]
    fn test_non_string_value_is_mismatch() {
        assert_eq!(eval("[0-9]+", json!(123)), Err(EvalError::ValueMismatch));
        assert_eq!(eval("[0-9]+", json!(["1"])), Err(EvalError::ValueMismatch));
    }

    #[test]
    fn test_literal_check_compiles_expression() {
        let strategy = PatternStrategy;
        assert!(strategy
            .check_literal(ConstraintKey::Pattern, &ConstraintValue::from("^[A-Z]{2}-\\d+$"))
            .is_ok());
        assert_eq!(
            strategy.check_literal(ConstraintKey::Pattern, &ConstraintValue::from("[unclosed")),
            Err(REASON)
        );
        assert_eq!(
            strategy.check_literal(ConstraintKey::Pattern, &ConstraintValue::Int(7)),
            Err(REASON)
        );
    }
}
