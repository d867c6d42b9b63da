use stepup_types::{Decision, DecisionStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Ok,
    AuthenticationRequired,
}

#[derive(Clone, Debug)]
pub struct RenderableDecision {
    pub status: RenderableStatus,
    pub policy: String,
    pub action_sets: Vec<Vec<String>>,
    pub missing_enrollments: Vec<String>,
    pub truncated_reason: Option<String>,
}

impl From<&Decision> for RenderableDecision {
    fn from(decision: &Decision) -> Self {
        Self {
            status: match decision.status {
                DecisionStatus::Ok => RenderableStatus::Ok,
                DecisionStatus::AuthenticationRequired => RenderableStatus::AuthenticationRequired,
            },
            policy: decision.data.policy.clone(),
            action_sets: decision.possible_action_sets.clone().unwrap_or_default(),
            missing_enrollments: decision.missing_enrollments.clone(),
            truncated_reason: decision.data.truncated_reason.clone(),
        }
    }
}

/// Flattened view of the catalog and directory for `show`.
#[derive(Clone, Debug, Default)]
pub struct RenderableState {
    pub methods: Vec<RenderableMethod>,
    pub policies: Vec<RenderablePolicy>,
    pub users: Vec<RenderableUser>,
    pub sessions: Vec<RenderableSession>,
}

#[derive(Clone, Debug)]
pub struct RenderableMethod {
    pub id: String,
    pub kind: String,
}

#[derive(Clone, Debug)]
pub struct RenderablePolicy {
    pub name: String,
    /// One string per option, e.g. `single_factor<=93600s AND single_factor<=300s`.
    pub options: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct RenderableUser {
    pub id: String,
    pub enrolled_means: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct RenderableSession {
    pub id: String,
    pub user_id: String,
    pub past_actions: Vec<RenderablePastAction>,
}

#[derive(Clone, Debug)]
pub struct RenderablePastAction {
    pub method: String,
    /// The raw stored value, shown verbatim next to the display form.
    pub validated_at: String,
}
