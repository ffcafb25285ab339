//! Declaration compatibility checks
//!
//! Four checks per annotation, run independently so one declaration can
//! surface every defect at once: tag↔type compatibility (101), constraint
//! availability (102), constraint-key exclusion (103), literal validity
//! (104).

use tracing::debug;

use crate::annotation::ConstraintAnnotation;
use crate::checker::{DeclaredType, Diagnostic, SourceLocation};
use crate::rules::{rule_for, strategy_for};

/// Checks one declaration's annotations against its reduced type
///
/// Stateless; hosts may call this concurrently across declarations. The
/// returned diagnostics are advisory: whether they block the build is the
/// host compiler's decision.
pub fn check_declaration(
    declared: &DeclaredType,
    annotations: &[ConstraintAnnotation],
    location: &SourceLocation,
) -> Vec<Diagnostic> {
    debug!(
        declaration = declared.name(),
        annotations = annotations.len(),
        "checking declaration"
    );

    let mut diagnostics = Vec::new();
    for annotation in annotations {
        diagnostics.extend(tag_compatibility(declared, annotation, location));
        diagnostics.extend(constraints_available(declared, annotation, location));
        diagnostics.extend(constraints_compatible(declared, annotation, location));
        diagnostics.extend(literal_validity(declared, annotation, location));
    }

    if !diagnostics.is_empty() {
        debug!(
            declaration = declared.name(),
            diagnostics = diagnostics.len(),
            "declaration check produced diagnostics"
        );
    }
    diagnostics
}

/// 101: the tag must be compatible with every union member
///
/// One incompatible member fails the whole declaration; members are not
/// required to all fail.
fn tag_compatibility(
    declared: &DeclaredType,
    annotation: &ConstraintAnnotation,
    location: &SourceLocation,
) -> Option<Diagnostic> {
    let rule = rule_for(annotation.tag);
    let incompatible = declared.kinds().iter().any(|kind| !rule.is_compatible(*kind));

    incompatible.then(|| {
        Diagnostic::tag_incompatible(annotation.tag, declared.name(), location.clone())
    })
}

/// 102: an annotation with no constraints is meaningless
fn constraints_available(
    declared: &DeclaredType,
    annotation: &ConstraintAnnotation,
    location: &SourceLocation,
) -> Option<Diagnostic> {
    annotation.constraints.is_empty().then(|| {
        Diagnostic::no_constraints(annotation.tag, declared.name(), location.clone())
    })
}

/// 103: declared keys must be admitted by the tag and free of exclusions
fn constraints_compatible(
    declared: &DeclaredType,
    annotation: &ConstraintAnnotation,
    location: &SourceLocation,
) -> Option<Diagnostic> {
    let rule = rule_for(annotation.tag);
    let foreign = annotation.keys().any(|key| !rule.admits(key));
    let conflicting = rule
        .exclusions()
        .iter()
        .any(|(first, second)| annotation.has_key(*first) && annotation.has_key(*second));

    (foreign || conflicting).then(|| {
        Diagnostic::conflicting_constraints(annotation.tag, declared.name(), location.clone())
    })
}

/// 104: every literal must pass its family's validity rule
fn literal_validity(
    declared: &DeclaredType,
    annotation: &ConstraintAnnotation,
    location: &SourceLocation,
) -> Vec<Diagnostic> {
    annotation
        .constraints
        .iter()
        .filter(|(key, literal)| {
            strategy_for(key.family())
                .check_literal(*key, literal)
                .is_err()
        })
        .map(|_| Diagnostic::invalid_literal(annotation.tag, declared.name(), location.clone()))
        .collect()
}
