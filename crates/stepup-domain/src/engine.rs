use crate::catalog::Catalog;
use crate::enrollment::missing_enrollments;
use crate::enumerate::{enumerate_action_sets, SEARCH_NODE_BUDGET};
use crate::index::KindIndex;
use crate::model::Directory;
use crate::satisfy::policy_satisfied;
use stepup_types::{Decision, DecisionData, DecisionStatus};

/// All three kinds fail fast, before any search starts. Malformed history
/// timestamps are deliberately not errors anywhere in the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("unknown session: {0}")]
    UnknownSession(String),

    #[error("unknown user: {0}")]
    UnknownUser(String),

    #[error("unknown policy: {0}")]
    UnknownPolicy(String),
}

/// Decide whether the session's history satisfies the named policy at
/// `now_ms`, and if not, which fresh action sets would satisfy it.
///
/// `now_ms` must be sampled exactly once by the caller; it is threaded
/// unchanged through every sub-check so one decision is internally
/// consistent. The catalog and directory are never mutated.
pub fn evaluate(
    catalog: &Catalog,
    directory: &Directory,
    session_id: &str,
    policy_name: &str,
    now_ms: i64,
) -> Result<Decision, EvalError> {
    let session = directory
        .session(session_id)
        .ok_or_else(|| EvalError::UnknownSession(session_id.to_string()))?;
    let user = directory
        .user(&session.user_id)
        .ok_or_else(|| EvalError::UnknownUser(session.user_id.clone()))?;
    let policy = catalog
        .policy(policy_name)
        .ok_or_else(|| EvalError::UnknownPolicy(policy_name.to_string()))?;

    let index = KindIndex::new(catalog);
    let missing = missing_enrollments(catalog, user, policy);

    if policy_satisfied(&index, user, session, policy, now_ms) {
        return Ok(Decision {
            status: DecisionStatus::Ok,
            missing_enrollments: missing,
            possible_action_sets: None,
            data: DecisionData {
                policy: policy_name.to_string(),
                options_considered: policy.len() as u32,
                search_nodes_visited: 0,
                truncated_reason: None,
            },
        });
    }

    let enumeration = enumerate_action_sets(&index, user, session, policy, now_ms);
    let truncated_reason = enumeration.budget_exceeded.then(|| {
        format!("action sets dropped: search exceeded {SEARCH_NODE_BUDGET} nodes")
    });

    Ok(Decision {
        status: DecisionStatus::AuthenticationRequired,
        missing_enrollments: missing,
        possible_action_sets: Some(enumeration.action_sets),
        data: DecisionData {
            policy: policy_name.to_string(),
            options_considered: policy.len() as u32,
            search_nodes_visited: enumeration.nodes_visited,
            truncated_reason,
        },
    })
}
