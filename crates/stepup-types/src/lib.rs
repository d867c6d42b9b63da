//! Stable DTOs and IDs used across the stepup workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted decision envelope
//! - stable string IDs and schema constants
//! - the method-strength kind shared by catalog and policies

#![forbid(unsafe_code)]

pub mod decision;
pub mod ids;
pub mod kind;

pub use decision::{
    Decision, DecisionData, DecisionEnvelope, DecisionStatus, ToolMeta, SCHEMA_DECISION_V1,
};
pub use kind::MethodKind;
