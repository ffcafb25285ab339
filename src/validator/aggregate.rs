//! Failure aggregation
//!
//! Collapses the failure list of one traversal into at most one outcome
//! message. A custom message declared on the validated root's own
//! annotation replaces the synthesized key list entirely; otherwise the
//! distinct failed keys are rendered in sorted order.

use crate::validator::walker::ConstraintFailure;

/// Aggregates one traversal's failures into the outcome message
///
/// Returns `None` for an empty failure list. Root failures are the ones
/// recorded at the base path (the declaration's own annotations or an
/// alias chain unwrapped at the root position); the first of them carrying
/// a custom message decides the whole outcome.
pub(crate) fn aggregate(failures: &[ConstraintFailure], base_path: &str) -> Option<String> {
    if failures.is_empty() {
        return None;
    }

    if let Some(failure) = failures
        .iter()
        .find(|failure| failure.path == base_path && failure.message.is_some())
    {
        return failure.message.clone();
    }

    let mut keys: Vec<&str> = failures.iter().map(|failure| failure.key.as_str()).collect();
    keys.sort_unstable();
    keys.dedup();

    let quoted: Vec<String> = keys.iter().map(|key| format!("'{}'", key)).collect();
    Some(format!(
        "Validation failed for {} constraint(s).",
        quoted.join(",")
    ))
}
