//! The standard library of propagators.

pub mod assign;
pub mod clause;
pub mod distinct;
pub mod equal;
pub mod forbid;
pub mod imply;
