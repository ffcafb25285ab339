//! Resolved type descriptors
//!
//! The shape of a declaration's type after the host's symbol resolution,
//! abstracted away from source syntax. The checker and validator only
//! inspect descriptors; the constructor helpers exist for hosts and tests.
//!
//! Annotations attach at annotatable positions: record fields carry their
//! own annotation lists, alias nodes carry the annotations declared on the
//! aliased type name, and a top-level declaration's annotations travel
//! alongside the descriptor in the validation call.

use serde::{Deserialize, Serialize};

use crate::annotation::ConstraintAnnotation;

/// Scalar kinds a descriptor can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
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
}

impl ScalarKind {
    /// Returns the kind name for messages
    pub fn name(&self) -> &'static str {
        match self {
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
            ScalarKind::Decimal => "decimal",
            ScalarKind::String => "string",
            ScalarKind::Boolean => "boolean",
        }
    }
}

/// Resolved type of a declaration
///
/// Immutable once produced by the host's type resolution. Descriptors form
/// finite trees; alias chains terminate and no cyclic definitions reach the
/// validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TypeDescriptor {
    /// Scalar leaf
    Scalar {
        /// Resolved scalar kind
        kind: ScalarKind,
    },
    /// Homogeneous array
    Array {
        /// Element type (boxed to allow recursive types)
        element: Box<TypeDescriptor>,
    },
    /// Record with ordered named fields
    Record {
        /// Field definitions in declaration order
        fields: Vec<FieldDescriptor>,
    },
    /// Named alias of another type
    Alias {
        /// Annotations declared on the alias name
        #[serde(default)]
        annotations: Vec<ConstraintAnnotation>,
        /// Aliased type
        target: Box<TypeDescriptor>,
    },
    /// Union of alternatives in declaration order
    Union {
        /// Member types
        members: Vec<TypeDescriptor>,
    },
}

impl TypeDescriptor {
    /// Scalar descriptor of the given kind
    pub fn scalar(kind: ScalarKind) -> Self {
        TypeDescriptor::Scalar { kind }
    }

    /// `int` scalar descriptor
    pub fn int() -> Self {
        Self::scalar(ScalarKind::Int)
    }

    /// `float` scalar descriptor
    pub fn float() -> Self {
        Self::scalar(ScalarKind::Float)
    }

    /// `decimal` scalar descriptor
    pub fn decimal() -> Self {
        Self::scalar(ScalarKind::Decimal)
    }

    /// `string` scalar descriptor
    pub fn string() -> Self {
        Self::scalar(ScalarKind::String)
    }

    /// `boolean` scalar descriptor
    pub fn boolean() -> Self {
        Self::scalar(ScalarKind::Boolean)
    }

    /// Array descriptor with the given element type
    pub fn array(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array {
            element: Box::new(element),
        }
    }

    /// Record descriptor with fields in declaration order
    pub fn record(fields: Vec<FieldDescriptor>) -> Self {
        TypeDescriptor::Record { fields }
    }

    /// Alias descriptor carrying the annotations declared on the alias name
    pub fn alias(annotations: Vec<ConstraintAnnotation>, target: TypeDescriptor) -> Self {
        TypeDescriptor::Alias {
            annotations,
            target: Box::new(target),
        }
    }

    /// Unannotated alias descriptor
    pub fn alias_of(target: TypeDescriptor) -> Self {
        Self::alias(Vec::new(), target)
    }

    /// Union descriptor with members in declaration order
    pub fn union(members: Vec<TypeDescriptor>) -> Self {
        TypeDescriptor::Union { members }
    }

    /// Returns the descriptor name for messages
    pub fn type_name(&self) -> &'static str {
        match self {
            TypeDescriptor::Scalar { kind } => kind.name(),
            TypeDescriptor::Array { .. } => "array",
            TypeDescriptor::Record { .. } => "record",
            TypeDescriptor::Alias { .. } => "alias",
            TypeDescriptor::Union { .. } => "union",
        }
    }
}

/// One named record field with its annotations and resolved type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as declared
    pub name: String,
    /// Annotations attached to the field
    #[serde(default)]
    pub annotations: Vec<ConstraintAnnotation>,
    /// Resolved field type
    pub field_type: TypeDescriptor,
}

impl FieldDescriptor {
    /// Create an unannotated field
    pub fn new(name: impl Into<String>, field_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            annotations: Vec::new(),
            field_type,
        }
    }

    /// Create a field with attached annotations
    pub fn annotated(
        name: impl Into<String>,
        annotations: Vec<ConstraintAnnotation>,
        field_type: TypeDescriptor,
    ) -> Self {
        Self {
            name: name.into(),
            annotations,
            field_type,
        }
    }
}
