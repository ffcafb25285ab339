//! Checker diagnostics
//!
//! Diagnostic codes:
//! - 101: annotation tag incompatible with the declared type
//! - 102: annotation declares no constraints
//! - 103: annotation declares conflicting constraint keys
//! - 104: constraint literal fails its family's validity rule
//!
//! Diagnostics are created once per violated rule and handed back to the
//! host for reporting; they are never mutated or retracted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::annotation::AnnotationTag;

/// Severity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Declaration is self-inconsistent
    Error,
    /// Declaration is suspect but usable
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// Diagnostic codes emitted by the checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    /// Annotation tag incompatible with the declared type
    TagIncompatible,
    /// Annotation carries zero constraint-key/value pairs
    NoConstraints,
    /// Constraint keys conflict or fall outside the tag's families
    ConflictingConstraints,
    /// Constraint literal fails its family's validity rule
    InvalidLiteral,
}

impl DiagnosticCode {
    /// Returns the numeric code
    pub fn code(&self) -> u16 {
        match self {
            DiagnosticCode::TagIncompatible => 101,
            DiagnosticCode::NoConstraints => 102,
            DiagnosticCode::ConflictingConstraints => 103,
            DiagnosticCode::InvalidLiteral => 104,
        }
    }

    /// Returns the severity for this code
    pub fn severity(&self) -> Severity {
        match self {
            DiagnosticCode::TagIncompatible
            | DiagnosticCode::NoConstraints
            | DiagnosticCode::ConflictingConstraints
            | DiagnosticCode::InvalidLiteral => Severity::Error,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Location of the checked declaration in host source
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Source file as named by the host
    pub file: String,
    /// One-based line
    pub line: u32,
    /// One-based column
    pub column: u32,
}

impl SourceLocation {
    /// Create a location
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// One advisory diagnostic for a checked declaration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    code: DiagnosticCode,
    message: String,
    location: SourceLocation,
}

impl Diagnostic {
    /// Create a 101 diagnostic naming the incompatible pair
    pub fn tag_incompatible(
        tag: AnnotationTag,
        type_name: &str,
        location: SourceLocation,
    ) -> Self {
        Self {
            code: DiagnosticCode::TagIncompatible,
            message: format!(
                "'{}' annotation is not compatible with type '{}'",
                tag.as_str(),
                type_name
            ),
            location,
        }
    }

    /// Create a 102 diagnostic for an annotation without constraints
    pub fn no_constraints(tag: AnnotationTag, type_name: &str, location: SourceLocation) -> Self {
        Self {
            code: DiagnosticCode::NoConstraints,
            message: format!(
                "'{}' annotation on type '{}' declares no constraints",
                tag.as_str(),
                type_name
            ),
            location,
        }
    }

    /// Create a 103 diagnostic for conflicting or inadmissible keys
    pub fn conflicting_constraints(
        tag: AnnotationTag,
        type_name: &str,
        location: SourceLocation,
    ) -> Self {
        Self {
            code: DiagnosticCode::ConflictingConstraints,
            message: format!(
                "'{}' annotation on type '{}' declares conflicting constraints",
                tag.as_str(),
                type_name
            ),
            location,
        }
    }

    /// Create a 104 diagnostic for an invalid constraint literal
    pub fn invalid_literal(tag: AnnotationTag, type_name: &str, location: SourceLocation) -> Self {
        Self {
            code: DiagnosticCode::InvalidLiteral,
            message: format!(
                "'{}' annotation on type '{}' declares an invalid constraint value",
                tag.as_str(),
                type_name
            ),
            location,
        }
    }

    /// Returns the diagnostic code
    pub fn code(&self) -> DiagnosticCode {
        self.code
    }

    /// Returns the severity
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the rendered message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the declaration's source location
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.severity(),
            self.code.code(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_codes() {
        assert_eq!(DiagnosticCode::TagIncompatible.code(), 101);
        assert_eq!(DiagnosticCode::NoConstraints.code(), 102);
        assert_eq!(DiagnosticCode::ConflictingConstraints.code(), 103);
        assert_eq!(DiagnosticCode::InvalidLiteral.code(), 104);
    }

    #[test]
    fn test_all_codes_are_errors() {
        assert_eq!(DiagnosticCode::TagIncompatible.severity(), Severity::Error);
        assert_eq!(DiagnosticCode::InvalidLiteral.severity(), Severity::Error);
    }

    #[test]
    fn test_message_names_the_pair() {
        let diagnostic = Diagnostic::tag_incompatible(
            AnnotationTag::String,
            "boolean",
            SourceLocation::new("models.api", 14, 5),
        );
        assert!(diagnostic.message().contains("'string'"));
        assert!(diagnostic.message().contains("'boolean'"));
        assert_eq!(diagnostic.location().line, 14);
    }

    #[test]
    fn test_display_carries_severity_and_code() {
        let diagnostic = Diagnostic::no_constraints(
            AnnotationTag::Int,
            "int",
            SourceLocation::default(),
        );
        let display = format!("{}", diagnostic);
        assert!(display.starts_with("[ERROR] 102:"));
    }
}
