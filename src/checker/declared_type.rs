//! Reduced declared types
//!
//! The checker's input form: a display name plus one reduced kind per union
//! member. The host's syntax layer performs the reduction; record types
//! reduce to the literal name `record` regardless of their fields.

use serde::{Deserialize, Serialize};

use crate::rules::TypeKind;

/// A declaration's type as reduced by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclaredType {
    name: String,
    kinds: Vec<TypeKind>,
}

impl DeclaredType {
    /// Arbitrary reduced type; `kinds` holds one entry per union member
    pub fn new(name: impl Into<String>, kinds: Vec<TypeKind>) -> Self {
        Self {
            name: name.into(),
            kinds,
        }
    }

    /// `int` declaration
    pub fn int() -> Self {
        Self::new("int", vec![TypeKind::Int])
    }

    /// `float` declaration
    pub fn float() -> Self {
        Self::new("float", vec![TypeKind::Float])
    }

    /// `decimal` declaration
    pub fn decimal() -> Self {
        Self::new("decimal", vec![TypeKind::Decimal])
    }

    /// `string` declaration
    pub fn string() -> Self {
        Self::new("string", vec![TypeKind::String])
    }

    /// `boolean` declaration
    pub fn boolean() -> Self {
        Self::new("boolean", vec![TypeKind::Boolean])
    }

    /// Record declaration, reduced to the literal name `record`
    pub fn record() -> Self {
        Self::new("record", vec![TypeKind::Record])
    }

    /// Array declaration with the host's spelling (e.g. `string[]`)
    pub fn array(name: impl Into<String>) -> Self {
        Self::new(name, vec![TypeKind::Array])
    }

    /// Union declaration with the host's spelling (e.g. `int|float`)
    pub fn union(name: impl Into<String>, kinds: Vec<TypeKind>) -> Self {
        Self::new(name, kinds)
    }

    /// Declaration outside the constraint vocabulary
    pub fn other(name: impl Into<String>) -> Self {
        Self::new(name, vec![TypeKind::Other])
    }

    /// Returns the display name used in diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the reduced kinds, one per union member
    pub fn kinds(&self) -> &[TypeKind] {
        &self.kinds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_names() {
        assert_eq!(DeclaredType::int().name(), "int");
        assert_eq!(DeclaredType::decimal().name(), "decimal");
        assert_eq!(DeclaredType::record().name(), "record");
        assert_eq!(DeclaredType::int().kinds(), &[TypeKind::Int]);
    }

    #[test]
    fn test_array_keeps_host_spelling() {
        let declared = DeclaredType::array("string[]");
        assert_eq!(declared.name(), "string[]");
        assert_eq!(declared.kinds(), &[TypeKind::Array]);
    }

    #[test]
    fn test_union_members() {
        let declared = DeclaredType::union("int|float", vec![TypeKind::Int, TypeKind::Float]);
        assert_eq!(declared.name(), "int|float");
        assert_eq!(declared.kinds().len(), 2);
    }
}
