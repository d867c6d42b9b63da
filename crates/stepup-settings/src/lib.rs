//! Catalog config parsing and validation.
//!
//! This crate is intentionally IO-free: it parses and validates the
//! hand-editable catalog provided as a string. Malformed catalogs are
//! rejected with a descriptive error here, before any evaluation starts.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{CatalogConfigV1, MethodConfig, RequirementConfig};
pub use presets::builtin_catalog;

use stepup_domain::catalog::Catalog;

/// Parse `stepup.toml` (or equivalent) into the permissive config model.
pub fn parse_catalog_toml(input: &str) -> anyhow::Result<CatalogConfigV1> {
    let cfg: CatalogConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Validate the permissive config into the typed catalog the engine uses.
pub fn resolve_catalog(cfg: CatalogConfigV1) -> anyhow::Result<Catalog> {
    resolve::resolve_catalog(cfg)
}
