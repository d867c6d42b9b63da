//! Stable identifiers for the input schemas.
//!
//! The decision schema id lives next to its envelope in `decision`.

pub const SCHEMA_CATALOG_V1: &str = "stepup.catalog.v1";
pub const SCHEMA_STATE_V1: &str = "stepup.state.v1";
