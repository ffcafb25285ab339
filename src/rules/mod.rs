//! Shared constraint rule vocabulary
//!
//! One table row per annotation tag, one strategy per constraint family.
//! Both the static checker and the runtime validator resolve tags and keys
//! through this module, never through string comparison.
//!
//! Design principles:
//! - The table is static data; lookups never allocate
//! - Strategies are pure and stateless; safe to share across threads
//! - Adding a family means one table change plus one strategy, nothing else

mod length;
mod numeric;
mod pattern;
mod strategy;
mod table;

pub use length::LengthStrategy;
pub use numeric::NumericStrategy;
pub use pattern::PatternStrategy;
pub use strategy::{strategy_for, ConstraintStrategy, EvalError};
pub use table::{rule_for, ConstraintRule, TypeKind};
