//! Constraint rule table
//!
//! Static facts about each annotation tag: which reduced type kinds it may
//! attach to, which constraint keys it admits, and which key pairs exclude
//! each other. Pure data plus lookup; no I/O.

use serde::{Deserialize, Serialize};

use crate::annotation::{AnnotationTag, ConstraintFamily, ConstraintKey};

/// Reduced kind of a declared field type
///
/// The host's syntax layer reduces every annotated declaration to one kind
/// per union member before checking; record types reduce to `Record`
/// regardless of their fields, and types outside the vocabulary reduce to
/// `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// 64-bit signed integer
    Int,
    /// 64-bit floating point
    Float,
    /// Arbitrary-precision decimal
    Decimal,
    /// UTF-8 string
    String,
    /// Boolean
    Boolean,
    /// Array of any element type
    Array,
    /// Record of any shape
    Record,
    /// Any type outside the constraint vocabulary
    Other,
}

/// Static rule for one annotation tag
#[derive(Debug)]
pub struct ConstraintRule {
    /// Tag this rule describes
    pub tag: AnnotationTag,
    /// Kinds the tag may attach to
    compatible: &'static [TypeKind],
    /// Keys the tag admits
    admitted: &'static [ConstraintKey],
    /// Key pairs that may not be declared together
    exclusions: &'static [(ConstraintKey, ConstraintKey)],
    /// Family that evaluates keys the tag does not admit
    primary: ConstraintFamily,
}

impl ConstraintRule {
    /// Checks whether the tag may attach to a declaration of this kind
    pub fn is_compatible(&self, kind: TypeKind) -> bool {
        self.compatible.contains(&kind)
    }

    /// Checks whether the tag admits this constraint key
    pub fn admits(&self, key: ConstraintKey) -> bool {
        self.admitted.contains(&key)
    }

    /// Returns the mutually exclusive key pairs for this tag
    pub fn exclusions(&self) -> &'static [(ConstraintKey, ConstraintKey)] {
        self.exclusions
    }

    /// Returns the family that evaluates a key declared under this tag
    ///
    /// Admitted keys evaluate under their own family. A key the tag does
    /// not admit routes to the tag's primary family, whose literal check
    /// rejects it as a fault instead of silently passing it.
    pub fn family_for(&self, key: ConstraintKey) -> ConstraintFamily {
        if self.admits(key) {
            key.family()
        } else {
            self.primary
        }
    }
}

const NUMERIC_KEYS: &[ConstraintKey] = &[
    ConstraintKey::MinValue,
    ConstraintKey::MinValueExclusive,
    ConstraintKey::MaxValue,
    ConstraintKey::MaxValueExclusive,
];

const LENGTH_KEYS: &[ConstraintKey] = &[
    ConstraintKey::Length,
    ConstraintKey::MinLength,
    ConstraintKey::MaxLength,
];

const STRING_KEYS: &[ConstraintKey] = &[
    ConstraintKey::Length,
    ConstraintKey::MinLength,
    ConstraintKey::MaxLength,
    ConstraintKey::Pattern,
];

const NUMERIC_EXCLUSIONS: &[(ConstraintKey, ConstraintKey)] = &[
    (ConstraintKey::MinValue, ConstraintKey::MinValueExclusive),
    (ConstraintKey::MaxValue, ConstraintKey::MaxValueExclusive),
];

const LENGTH_EXCLUSIONS: &[(ConstraintKey, ConstraintKey)] = &[
    (ConstraintKey::Length, ConstraintKey::MinLength),
    (ConstraintKey::Length, ConstraintKey::MaxLength),
];

static INT_RULE: ConstraintRule = ConstraintRule {
    tag: AnnotationTag::Int,
    compatible: &[TypeKind::Int],
    admitted: NUMERIC_KEYS,
    exclusions: NUMERIC_EXCLUSIONS,
    primary: ConstraintFamily::Numeric,
};

static FLOAT_RULE: ConstraintRule = ConstraintRule {
    tag: AnnotationTag::Float,
    compatible: &[TypeKind::Float],
    admitted: NUMERIC_KEYS,
    exclusions: NUMERIC_EXCLUSIONS,
    primary: ConstraintFamily::Numeric,
};

static NUMBER_RULE: ConstraintRule = ConstraintRule {
    tag: AnnotationTag::Number,
    compatible: &[TypeKind::Int, TypeKind::Float, TypeKind::Decimal],
    admitted: NUMERIC_KEYS,
    exclusions: NUMERIC_EXCLUSIONS,
    primary: ConstraintFamily::Numeric,
};

static ARRAY_RULE: ConstraintRule = ConstraintRule {
    tag: AnnotationTag::Array,
    compatible: &[TypeKind::Array],
    admitted: LENGTH_KEYS,
    exclusions: LENGTH_EXCLUSIONS,
    primary: ConstraintFamily::Length,
};

static STRING_RULE: ConstraintRule = ConstraintRule {
    tag: AnnotationTag::String,
    compatible: &[TypeKind::String],
    admitted: STRING_KEYS,
    exclusions: LENGTH_EXCLUSIONS,
    primary: ConstraintFamily::Length,
};

/// Returns the rule for a tag
pub fn rule_for(tag: AnnotationTag) -> &'static ConstraintRule {
    match tag {
        AnnotationTag::Int => &INT_RULE,
        AnnotationTag::Float => &FLOAT_RULE,
        AnnotationTag::Number => &NUMBER_RULE,
        AnnotationTag::Array => &ARRAY_RULE,
        AnnotationTag::String => &STRING_RULE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_compatibility() {
        assert!(rule_for(AnnotationTag::Int).is_compatible(TypeKind::Int));
        assert!(!rule_for(AnnotationTag::Int).is_compatible(TypeKind::Float));
        assert!(!rule_for(AnnotationTag::Int).is_compatible(TypeKind::Record));

        assert!(rule_for(AnnotationTag::Float).is_compatible(TypeKind::Float));
        assert!(!rule_for(AnnotationTag::Float).is_compatible(TypeKind::Int));

        assert!(rule_for(AnnotationTag::Number).is_compatible(TypeKind::Int));
        assert!(rule_for(AnnotationTag::Number).is_compatible(TypeKind::Float));
        assert!(rule_for(AnnotationTag::Number).is_compatible(TypeKind::Decimal));
        assert!(!rule_for(AnnotationTag::Number).is_compatible(TypeKind::String));

        assert!(rule_for(AnnotationTag::Array).is_compatible(TypeKind::Array));
        assert!(!rule_for(AnnotationTag::Array).is_compatible(TypeKind::String));

        assert!(rule_for(AnnotationTag::String).is_compatible(TypeKind::String));
        assert!(!rule_for(AnnotationTag::String).is_compatible(TypeKind::Boolean));
        assert!(!rule_for(AnnotationTag::String).is_compatible(TypeKind::Other));
    }

    #[test]
    fn test_admitted_keys() {
        let int_rule = rule_for(AnnotationTag::Int);
        assert!(int_rule.admits(ConstraintKey::MinValue));
        assert!(int_rule.admits(ConstraintKey::MaxValueExclusive));
        assert!(!int_rule.admits(ConstraintKey::Length));
        assert!(!int_rule.admits(ConstraintKey::Pattern));

        let array_rule = rule_for(AnnotationTag::Array);
        assert!(array_rule.admits(ConstraintKey::MaxLength));
        assert!(!array_rule.admits(ConstraintKey::Pattern));
        assert!(!array_rule.admits(ConstraintKey::MinValue));

        // pattern belongs to string declarations only
        let string_rule = rule_for(AnnotationTag::String);
        assert!(string_rule.admits(ConstraintKey::Pattern));
        assert!(string_rule.admits(ConstraintKey::Length));
        assert!(!string_rule.admits(ConstraintKey::MaxValue));
    }

    #[test]
    fn test_family_routing() {
        let string_rule = rule_for(AnnotationTag::String);
        assert_eq!(
            string_rule.family_for(ConstraintKey::Pattern),
            ConstraintFamily::Pattern
        );
        assert_eq!(
            string_rule.family_for(ConstraintKey::MinLength),
            ConstraintFamily::Length
        );
        // keys outside the tag fall back to its own family
        assert_eq!(
            string_rule.family_for(ConstraintKey::MinValue),
            ConstraintFamily::Length
        );
        assert_eq!(
            rule_for(AnnotationTag::Int).family_for(ConstraintKey::MaxLength),
            ConstraintFamily::Numeric
        );
    }

    #[test]
    fn test_exclusion_pairs() {
        let exclusions = rule_for(AnnotationTag::Number).exclusions();
        assert!(exclusions
            .contains(&(ConstraintKey::MinValue, ConstraintKey::MinValueExclusive)));
        assert!(exclusions
            .contains(&(ConstraintKey::MaxValue, ConstraintKey::MaxValueExclusive)));

        let exclusions = rule_for(AnnotationTag::String).exclusions();
        assert!(exclusions.contains(&(ConstraintKey::Length, ConstraintKey::MinLength)));
        assert!(exclusions.contains(&(ConstraintKey::Length, ConstraintKey::MaxLength)));
        // min and max lengths may be combined
        assert!(!exclusions.contains(&(ConstraintKey::MinLength, ConstraintKey::MaxLength)));
    }
}
