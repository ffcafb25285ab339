//! strictbound - annotation-driven constraint validation for typed values
//!
//! Declarative length, range and pattern constraints checked statically
//! against the declaring type and enforced at runtime over live values

pub mod annotation;
pub mod checker;
pub mod descriptor;
pub mod rules;
pub mod validator;
