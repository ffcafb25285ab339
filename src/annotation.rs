//! Constraint annotation vocabulary
//!
//! The closed set of annotation tags, constraint keys, and literal values
//! shared by the static checker and the runtime validator. Tags select a
//! compatibility rule, keys select a constraint family, literals carry the
//! declared bound.

use serde::{Deserialize, Serialize};

/// Annotation tags (fixed vocabulary)
///
/// Each tag maps to exactly one compatibility rule and one or more
/// constraint families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationTag {
    /// Attachable to `int` declarations
    Int,
    /// Attachable to `float` declarations
    Float,
    /// Attachable to any numeric declaration (`int`, `float`, `decimal`)
    Number,
    /// Attachable to array declarations of any element type
    Array,
    /// Attachable to `string` declarations
    String,
}

impl AnnotationTag {
    /// Returns the tag spelling used in diagnostics
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationTag::Int => "int",
            AnnotationTag::Float => "float",
            AnnotationTag::Number => "number",
            AnnotationTag::Array => "array",
            AnnotationTag::String => "string",
        }
    }
}

/// Constraint keys across all families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConstraintKey {
    /// Inclusive lower bound (numeric family)
    MinValue,
    /// Exclusive lower bound (numeric family)
    MinValueExclusive,
    /// Inclusive upper bound (numeric family)
    MaxValue,
    /// Exclusive upper bound (numeric family)
    MaxValueExclusive,
    /// Exact length (length family)
    Length,
    /// Minimum length (length family)
    MinLength,
    /// Maximum length (length family)
    MaxLength,
    /// Full-match regular expression (pattern family)
    Pattern,
}

impl ConstraintKey {
    /// Returns the key spelling used in messages and synthesized errors
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintKey::MinValue => "minValue",
            ConstraintKey::MinValueExclusive => "minValueExclusive",
            ConstraintKey::MaxValue => "maxValue",
            ConstraintKey::MaxValueExclusive => "maxValueExclusive",
            ConstraintKey::Length => "length",
            ConstraintKey::MinLength => "minLength",
            ConstraintKey::MaxLength => "maxLength",
            ConstraintKey::Pattern => "pattern",
        }
    }

    /// Returns the family whose strategy evaluates this key
    pub fn family(&self) -> ConstraintFamily {
        match self {
            ConstraintKey::MinValue
            | ConstraintKey::MinValueExclusive
            | ConstraintKey::MaxValue
            | ConstraintKey::MaxValueExclusive => ConstraintFamily::Numeric,
            ConstraintKey::Length | ConstraintKey::MinLength | ConstraintKey::MaxLength => {
                ConstraintFamily::Length
            }
            ConstraintKey::Pattern => ConstraintFamily::Pattern,
        }
    }
}

/// Constraint families, each backed by one validation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintFamily {
    /// Bounds over numeric values
    Numeric,
    /// Bounds over string character counts and array element counts
    Length,
    /// Regular-expression match over string values
    Pattern,
}

/// A constraint's declared literal value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstraintValue {
    /// Integer literal
    Int(i64),
    /// Floating-point literal
    Float(f64),
    /// String literal
    String(String),
}

impl From<i64> for ConstraintValue {
    fn from(value: i64) -> Self {
        ConstraintValue::Int(value)
    }
}

impl From<f64> for ConstraintValue {
    fn from(value: f64) -> Self {
        ConstraintValue::Float(value)
    }
}

impl From<&str> for ConstraintValue {
    fn from(value: &str) -> Self {
        ConstraintValue::String(value.to_string())
    }
}

impl From<String> for ConstraintValue {
    fn from(value: String) -> Self {
        ConstraintValue::String(value)
    }
}

/// One constraint annotation attached to a declaration
///
/// Multiple annotations may attach to the same declaration; each is checked
/// and evaluated independently. Constraint pairs keep declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintAnnotation {
    /// Vocabulary tag selecting the compatibility rule
    pub tag: AnnotationTag,
    /// Declared constraint-key/literal pairs, in declaration order
    #[serde(default)]
    pub constraints: Vec<(ConstraintKey, ConstraintValue)>,
    /// Optional caller-supplied failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ConstraintAnnotation {
    /// Create an annotation with no constraints
    pub fn new(tag: AnnotationTag) -> Self {
        Self {
            tag,
            constraints: Vec::new(),
            message: None,
        }
    }

    /// Create an `int` annotation
    pub fn int() -> Self {
        Self::new(AnnotationTag::Int)
    }

    /// Create a `float` annotation
    pub fn float() -> Self {
        Self::new(AnnotationTag::Float)
    }

    /// Create a `number` annotation
    pub fn number() -> Self {
        Self::new(AnnotationTag::Number)
    }

    /// Create an `array` annotation
    pub fn array() -> Self {
        Self::new(AnnotationTag::Array)
    }

    /// Create a `string` annotation
    pub fn string() -> Self {
        Self::new(AnnotationTag::String)
    }

    /// Add a constraint-key/literal pair
    pub fn constraint(mut self, key: ConstraintKey, value: impl Into<ConstraintValue>) -> Self {
        self.constraints.push((key, value.into()));
        self
    }

    /// Set the custom failure message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the declared constraint keys in declaration order
    pub fn keys(&self) -> impl Iterator<Item = ConstraintKey> + '_ {
        self.constraints.iter().map(|(key, _)| *key)
    }

    /// Checks whether a key is declared on this annotation
    pub fn has_key(&self, key: ConstraintKey) -> bool {
        self.keys().any(|declared| declared == key)
    }
}
