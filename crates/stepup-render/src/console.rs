use crate::datetime::format_ms_string;
use crate::{RenderableDecision, RenderableState, RenderableStatus};

/// One-screen text form of a decision, for terminals.
pub fn render_decision_text(decision: &RenderableDecision) -> String {
    let mut out = String::new();

    match decision.status {
        RenderableStatus::Ok => {
            out.push_str(&format!("policy {}: OK\n", decision.policy));
        }
        RenderableStatus::AuthenticationRequired => {
            out.push_str(&format!(
                "policy {}: authentication required\n",
                decision.policy
            ));
            if let Some(reason) = &decision.truncated_reason {
                out.push_str(&format!("  note: {}\n", reason));
            }
            if decision.action_sets.is_empty() {
                out.push_str("  no enrolled methods can complete any option\n");
            } else {
                out.push_str("  do one of:\n");
                for set in &decision.action_sets {
                    out.push_str(&format!("    - {}\n", set.join(" + ")));
                }
            }
        }
    }

    if !decision.missing_enrollments.is_empty() {
        out.push_str(&format!(
            "  missing enrollments: {}\n",
            decision.missing_enrollments.join(", ")
        ));
    }

    out
}

/// Full catalog + directory listing for `show`. Raw timestamps are printed
/// next to their display form so hand-edited values stay inspectable.
pub fn render_state_text(state: &RenderableState) -> String {
    let mut out = String::new();

    out.push_str("methods:\n");
    for method in &state.methods {
        out.push_str(&format!("  {} ({})\n", method.id, method.kind));
    }

    out.push_str("policies:\n");
    for policy in &state.policies {
        out.push_str(&format!("  {}:\n", policy.name));
        for option in &policy.options {
            out.push_str(&format!("    - {}\n", option));
        }
    }

    out.push_str("users:\n");
    for user in &state.users {
        out.push_str(&format!(
            "  {} [{}]\n",
            user.id,
            user.enrolled_means.join(", ")
        ));
    }

    out.push_str("sessions:\n");
    for session in &state.sessions {
        out.push_str(&format!("  {} (user {})\n", session.id, session.user_id));
        for action in &session.past_actions {
            out.push_str(&format!(
                "    {} @ {} ({})\n",
                action.method,
                format_ms_string(&action.validated_at),
                action.validated_at
            ));
        }
    }

    out
}
