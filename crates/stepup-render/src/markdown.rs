use crate::{RenderableDecision, RenderableStatus};

pub fn render_markdown(decision: &RenderableDecision) -> String {
    let mut out = String::new();

    out.push_str("# Stepup decision\n\n");
    let status = match decision.status {
        RenderableStatus::Ok => "OK",
        RenderableStatus::AuthenticationRequired => "AUTHENTICATION REQUIRED",
    };
    out.push_str(&format!(
        "- Policy: `{}`\n- Status: **{}**\n\n",
        decision.policy, status
    ));

    if let Some(reason) = &decision.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", reason));
    }

    if decision.status == RenderableStatus::AuthenticationRequired {
        out.push_str("## Possible action sets\n\n");
        if decision.action_sets.is_empty() {
            out.push_str("No enrolled methods can complete any option.\n\n");
        } else {
            for set in &decision.action_sets {
                out.push_str(&format!("- `{}`\n", set.join("` + `")));
            }
            out.push('\n');
        }
    }

    if decision.missing_enrollments.is_empty() {
        out.push_str("No missing enrollments.\n");
    } else {
        out.push_str("## Missing enrollments\n\n");
        for id in &decision.missing_enrollments {
            out.push_str(&format!("- `{}`\n", id));
        }
    }

    out
}
