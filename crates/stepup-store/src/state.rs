use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use stepup_domain::model::{Directory, PastAction, Session, User};
use stepup_types::ids::SCHEMA_STATE_V1;

/// `state.json` schema v1: the persisted form of users and sessions.
///
/// `validated_at` stays a string on disk; the engine parses it lazily, so a
/// hand-edited or corrupted value round-trips untouched and simply never
/// validates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DirectoryStateV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default)]
    pub users: Vec<UserState>,

    #[serde(default)]
    pub sessions: Vec<SessionState>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UserState {
    pub id: String,
    #[serde(default)]
    pub enrolled_means: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SessionState {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub past_actions: Vec<PastActionState>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PastActionState {
    pub method: String,
    pub validated_at: String,
}

pub fn parse_state_json(text: &str) -> anyhow::Result<Directory> {
    let state: DirectoryStateV1 = serde_json::from_str(text)?;

    if let Some(schema) = state.schema.as_deref() {
        if schema != SCHEMA_STATE_V1 {
            anyhow::bail!("unknown state schema: {schema} (expected {SCHEMA_STATE_V1})");
        }
    }

    Ok(Directory {
        users: state
            .users
            .into_iter()
            .map(|u| User {
                id: u.id,
                enrolled_means: u.enrolled_means,
            })
            .collect(),
        sessions: state
            .sessions
            .into_iter()
            .map(|s| Session {
                id: s.id,
                user_id: s.user_id,
                past_actions: s
                    .past_actions
                    .into_iter()
                    .map(|a| PastAction {
                        method: a.method,
                        validated_at: a.validated_at,
                    })
                    .collect(),
            })
            .collect(),
    })
}

pub fn render_state_json(directory: &Directory) -> anyhow::Result<String> {
    let state = DirectoryStateV1 {
        schema: Some(SCHEMA_STATE_V1.to_string()),
        users: directory
            .users
            .iter()
            .map(|u| UserState {
                id: u.id.clone(),
                enrolled_means: u.enrolled_means.clone(),
            })
            .collect(),
        sessions: directory
            .sessions
            .iter()
            .map(|s| SessionState {
                id: s.id.clone(),
                user_id: s.user_id.clone(),
                past_actions: s
                    .past_actions
                    .iter()
                    .map(|a| PastActionState {
                        method: a.method.clone(),
                        validated_at: a.validated_at.clone(),
                    })
                    .collect(),
            })
            .collect(),
    };

    let mut text = serde_json::to_string_pretty(&state)?;
    text.push('\n');
    Ok(text)
}
