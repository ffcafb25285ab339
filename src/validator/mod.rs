//! Recursive runtime validator
//!
//! Validates a live value against its resolved type descriptor and the
//! constraint annotations attached to the declaration. One depth-first
//! traversal collects every violation before a single aggregated outcome
//! is produced.
//!
//! Design principles:
//! - A failure never stops the walk; the caller sees all defects at once
//! - Faults in the declaration itself abort immediately and loudly
//! - Each call owns its accumulator; concurrent calls share nothing
//! - Exactly one outcome per call: success or one aggregated message

mod aggregate;
mod errors;
mod walker;

pub use errors::{ValidationError, ValidationResult};
pub use walker::{validate, validate_at};
