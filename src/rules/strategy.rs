//! Strategy selection for constraint evaluation
//!
//! One stateless strategy per constraint family. Strategies are pure: the
//! literal check runs at compile time (and again before every runtime
//! evaluation), the value check runs at runtime. Neither touches shared
//! state, so concurrent callers need no locking.

use serde_json::Value;

use crate::annotation::{ConstraintFamily, ConstraintKey, ConstraintValue};
use crate::rules::{LengthStrategy, NumericStrategy, PatternStrategy};

/// Faults a strategy can surface during evaluation
///
/// These are errors in the rules or in the descriptor/value pairing, never
/// in the validated input itself; callers translate them into fatal faults
/// rather than validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Value shape does not fit the family's evaluation
    ValueMismatch,
    /// Constraint unusable at evaluation time: key outside the family or
    /// literal of the wrong shape
    InvalidConstraint,
}

/// One constraint family's validation behavior
pub trait ConstraintStrategy {
    /// Reason sentence this family puts in fault messages
    fn reason(&self) -> &'static str;

    /// Checks a constraint's declared literal value
    ///
    /// Pure; used by the static checker and re-run before every runtime
    /// evaluation. On rejection returns the family's reason sentence for
    /// fault messages.
    fn check_literal(
        &self,
        key: ConstraintKey,
        literal: &ConstraintValue,
    ) -> Result<(), &'static str>;

    /// Evaluates a live value against one constraint
    ///
    /// Returns whether the value satisfies the constraint. Assumes the
    /// literal already passed [`check_literal`](Self::check_literal).
    fn evaluate(
        &self,
        key: ConstraintKey,
        literal: &ConstraintValue,
        value: &Value,
    ) -> Result<bool, EvalError>;
}

static NUMERIC: NumericStrategy = NumericStrategy;
static LENGTH: LengthStrategy = LengthStrategy;
static PATTERN: PatternStrategy = PatternStrategy;

/// Returns the strategy for a family
pub fn strategy_for(family: ConstraintFamily) -> &'static dyn ConstraintStrategy {
    match family {
        ConstraintFamily::Numeric => &NUMERIC,
        ConstraintFamily::Length => &LENGTH,
        ConstraintFamily::Pattern => &PATTERN,
    }
}
