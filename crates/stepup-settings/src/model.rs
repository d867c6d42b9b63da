use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `stepup.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive
/// (kinds are plain strings, fields optional) so forward-compat is easy.
/// Validation happens in `resolve`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogConfigV1 {
    /// Optional schema string for tooling (`stepup.catalog.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Authentication method catalog, in canonical order.
    #[serde(default)]
    pub methods: Vec<MethodConfig>,

    /// Map of policy name -> OR-options, each option an AND-list of
    /// requirements.
    #[serde(default)]
    pub policies: BTreeMap<String, Vec<Vec<RequirementConfig>>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MethodConfig {
    pub id: String,

    /// Strength kind: `single_factor` or `multi_factor`.
    pub kind: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RequirementConfig {
    /// Strength kind: `single_factor` or `multi_factor`.
    pub kind: String,

    /// Freshness window in seconds. Any integer is accepted, including zero
    /// and negative values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i64>,
}
