use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for stepup decision envelopes.
pub const SCHEMA_DECISION_V1: &str = "stepup.decision.v1";

/// Outcome of one policy evaluation.
///
/// The wire strings are a transport contract with collaborators and must not
/// change: `"OK"` and `"authentication required"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum DecisionStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "authentication required")]
    AuthenticationRequired,
}

/// One evaluation decision, representable as plain nested lists/maps.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Decision {
    pub status: DecisionStatus,

    /// Catalog method ids relevant to the policy that the user has not
    /// enrolled in, in catalog order.
    pub missing_enrollments: Vec<String>,

    /// Distinct sufficient sets of fresh authentications. Present only when
    /// status is `authentication required`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possible_action_sets: Option<Vec<Vec<String>>>,

    pub data: DecisionData,
}

/// Evaluation bookkeeping carried alongside the decision.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionData {
    pub policy: String,
    pub options_considered: u32,
    pub search_nodes_visited: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Envelope written to disk and handed to collaborators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DecisionEnvelope {
    pub schema: String,
    pub tool: ToolMeta,

    #[serde(with = "time::serde::rfc3339")]
    #[schemars(with = "String")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    #[schemars(with = "String")]
    pub finished_at: OffsetDateTime,

    pub decision: Decision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_strings_are_stable() {
        assert_eq!(
            serde_json::to_string(&DecisionStatus::Ok).unwrap(),
            "\"OK\""
        );
        assert_eq!(
            serde_json::to_string(&DecisionStatus::AuthenticationRequired).unwrap(),
            "\"authentication required\""
        );
    }

    #[test]
    fn action_sets_omitted_when_absent() {
        let decision = Decision {
            status: DecisionStatus::Ok,
            missing_enrollments: vec!["mail_otp".to_string()],
            possible_action_sets: None,
            data: DecisionData {
                policy: "normal".to_string(),
                options_considered: 2,
                search_nodes_visited: 0,
                truncated_reason: None,
            },
        };

        let json = serde_json::to_value(&decision).unwrap();
        assert!(json.get("possible_action_sets").is_none());
        assert_eq!(json["status"], "OK");
    }
}
