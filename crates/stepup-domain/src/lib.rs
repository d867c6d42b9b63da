//! Pure step-up authentication policy evaluation (no IO).
//!
//! Input: a method/policy catalog and a directory snapshot constructed
//! elsewhere, plus one wall-clock reading sampled by the caller.
//! Output: a decision (satisfied, or the fresh action sets that would
//! satisfy) with evaluation bookkeeping.

#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;

mod engine;
mod enrollment;
mod enumerate;
mod freshness;
mod index;
mod patterns;
mod satisfy;

pub use engine::{evaluate, EvalError};
pub use enumerate::SEARCH_NODE_BUDGET;
pub use freshness::is_action_still_valid;
pub use index::KindIndex;
pub use patterns::policy_patterns;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
