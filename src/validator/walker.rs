//! Depth-first constraint walker
//!
//! One traversal per validation call. Every node first evaluates the
//! annotations declared at the position that led to it, then dispatches on
//! its descriptor. Validation failures never stop the walk; faults in the
//! declaration or in the descriptor/value pairing abort it. Each recursive
//! step returns its own failures and the caller merges them, so no
//! accumulator is shared between calls.

use serde_json::Value;
use tracing::debug;

use crate::annotation::{ConstraintAnnotation, ConstraintKey};
use crate::descriptor::TypeDescriptor;
use crate::rules::{rule_for, strategy_for, EvalError};
use crate::validator::aggregate::aggregate;
use crate::validator::errors::{ValidationError, ValidationResult};

/// One constraint violation at one traversal position
///
/// Scoped to a single validation call; the aggregator consumes the full
/// list before the call returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConstraintFailure {
    /// Path of the failing node
    pub path: String,
    /// Key that did not hold
    pub key: ConstraintKey,
    /// Custom message declared on the failing annotation
    pub message: Option<String>,
}

/// Validates a value against its descriptor and declaration annotations
///
/// Field paths start at the value itself (`items[0].name`). Returns `Ok`
/// when every constraint holds, [`ValidationError::Failed`] with the
/// aggregated message when any does not.
///
/// # Errors
///
/// Besides `Failed`, returns [`ValidationError::InvalidConstraint`] when a
/// declared constraint cannot be evaluated and
/// [`ValidationError::ValueMismatch`] when the value's shape does not fit
/// the descriptor. Both abort the traversal.
pub fn validate(
    value: &Value,
    descriptor: &TypeDescriptor,
    annotations: &[ConstraintAnnotation],
) -> ValidationResult<()> {
    validate_at(value, descriptor, annotations, "")
}

/// Validates a value with field paths prefixed by a base path
///
/// Hosts pass the declaration name they want failure paths anchored to.
/// Semantics are otherwise identical to [`validate`].
pub fn validate_at(
    value: &Value,
    descriptor: &TypeDescriptor,
    annotations: &[ConstraintAnnotation],
    base_path: &str,
) -> ValidationResult<()> {
    debug!(base_path, "validating value");
    let failures = walk(value, descriptor, annotations, base_path)?;
    debug!(base_path, failures = failures.len(), "traversal finished");

    match aggregate(&failures, base_path) {
        Some(message) => Err(ValidationError::Failed(message)),
        None => Ok(()),
    }
}

/// Walks one node and returns the failures at and below it.
///
/// The annotations in hand were declared at the position that led here
/// (the top-level call, a record field, or an alias name) and always
/// evaluate against this node's value at the current path.
fn walk(
    value: &Value,
    descriptor: &TypeDescriptor,
    in_hand: &[ConstraintAnnotation],
    path: &str,
) -> ValidationResult<Vec<ConstraintFailure>> {
    let mut failures = evaluate_annotations(value, in_hand, path)?;

    match descriptor {
        TypeDescriptor::Scalar { .. } => {}
        TypeDescriptor::Alias {
            annotations,
            target,
        } => {
            // recursing unwraps multi-alias chains one link per step,
            // keeping the path fixed at the aliased position
            failures.extend(walk(value, target, annotations, path)?);
        }
        TypeDescriptor::Record { fields } => {
            let object = match value {
                Value::Object(object) => object,
                _ => return Err(ValidationError::ValueMismatch),
            };
            for field in fields {
                if let Some(field_value) = object.get(&field.name) {
                    let field_path = make_path(path, &field.name);
                    failures.extend(walk(
                        field_value,
                        &field.field_type,
                        &field.annotations,
                        &field_path,
                    )?);
                }
            }
        }
        TypeDescriptor::Array { element } => {
            let elements = match value {
                Value::Array(elements) => elements,
                _ => return Err(ValidationError::ValueMismatch),
            };
            for (i, element_value) in elements.iter().enumerate() {
                let element_path = format!("{}[{}]", path, i);
                failures.extend(walk(element_value, element, &[], &element_path)?);
            }
        }
        // members are not traversed; only the annotations declared at the
        // union site itself (already in hand) apply
        TypeDescriptor::Union { .. } => {}
    }

    Ok(failures)
}

/// Evaluates every annotation in hand against one node's value.
fn evaluate_annotations(
    value: &Value,
    annotations: &[ConstraintAnnotation],
    path: &str,
) -> ValidationResult<Vec<ConstraintFailure>> {
    let mut failures = Vec::new();
    for annotation in annotations {
        let rule = rule_for(annotation.tag);
        for (key, literal) in &annotation.constraints {
            let strategy = strategy_for(rule.family_for(*key));

            // literals are re-checked before every evaluation; a bad bound
            // is a fault in the declaration, not a validation failure
            if let Err(reason) = strategy.check_literal(*key, literal) {
                return Err(ValidationError::invalid_constraint(path, *key, reason));
            }

            match strategy.evaluate(*key, literal, value) {
                Ok(true) => {}
                Ok(false) => failures.push(ConstraintFailure {
                    path: path.to_string(),
                    key: *key,
                    message: annotation.message.clone(),
                }),
                Err(EvalError::ValueMismatch) => return Err(ValidationError::ValueMismatch),
                Err(EvalError::InvalidConstraint) => {
                    return Err(ValidationError::invalid_constraint(
                        path,
                        *key,
                        strategy.reason(),
                    ))
                }
            }
        }
    }
    Ok(failures)
}

/// Joins a path prefix and a field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}
