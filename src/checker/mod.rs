//! Static compatibility checker
//!
//! Checks one declaration at a time: the declared type (reduced by the
//! host's syntax layer) against the constraint annotations attached to it.
//! Each violated rule produces one advisory diagnostic; the host compiler
//! decides whether diagnostics block the build.
//!
//! Design principles:
//! - Checks never abort: one annotation can produce several diagnostics
//! - Invocations are stateless; hosts may check declarations in parallel
//! - Record declarations reduce to the literal type name `record`

mod checks;
mod declared_type;
mod diagnostics;

pub use checks::check_declaration;
pub use declared_type::DeclaredType;
pub use diagnostics::{Diagnostic, DiagnosticCode, Severity, SourceLocation};
