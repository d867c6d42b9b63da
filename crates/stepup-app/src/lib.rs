//! Use case orchestration for stepup.
//!
//! This crate provides the application layer: use cases that coordinate the
//! settings, store, domain, and render layers. It is intentionally thin and
//! delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and exit
//! codes.

#![forbid(unsafe_code)]

mod decide;
mod demo;
mod mutate;
mod render;

pub use decide::{decision_exit_code, run_decide, DecideInput, DecideOutput};
pub use stepup_domain::policy_patterns;
pub use demo::run_demo;
pub use mutate::{apply_mutation, Mutation};
pub use render::{
    load_catalog_file, load_state_file, parse_envelope_json, serialize_envelope,
    state_to_renderable, write_text,
};
