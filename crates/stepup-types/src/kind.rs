use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Strength class of an authentication method (AMR).
///
/// Policies constrain kinds, never concrete method ids; the evaluator resolves
/// concrete candidates at evaluation time.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    SingleFactor,
    MultiFactor,
}

impl MethodKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MethodKind::SingleFactor => "single_factor",
            MethodKind::MultiFactor => "multi_factor",
        }
    }
}

impl std::fmt::Display for MethodKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
