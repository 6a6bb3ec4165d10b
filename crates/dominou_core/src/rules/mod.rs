//! Pure rule predicates and selectors: move legality, the opening pick,
//! and end-of-turn outcome evaluation.

pub mod opening;
pub mod outcome;
pub mod validate;
