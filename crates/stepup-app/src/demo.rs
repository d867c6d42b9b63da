//! The scripted console demo: pattern expansion for both built-in policies,
//! then a decision for each demo session.

use crate::decide::to_unix_ms;
use stepup_domain::catalog::Catalog;
use stepup_domain::model::Directory;
use stepup_render::{render_decision_text, RenderableDecision};
use time::OffsetDateTime;

/// Walk the demo scenarios against the given catalog and directory and
/// return the whole transcript. One clock reading covers the entire walk.
pub fn run_demo(
    catalog: &Catalog,
    directory: &Directory,
    now_ms: Option<i64>,
) -> anyhow::Result<String> {
    let now_ms = now_ms.unwrap_or_else(|| to_unix_ms(OffsetDateTime::now_utc()));
    let mut out = String::new();

    for policy_name in ["strong", "normal"] {
        if catalog.policy(policy_name).is_none() {
            continue;
        }
        let patterns = stepup_domain::policy_patterns(catalog, policy_name)?;
        out.push_str(&format!(
            "required auth patterns for {policy_name}: {}\n",
            format_patterns(&patterns)
        ));
    }

    let scenarios = [
        ("1", "strong"),
        ("1", "normal"),
        ("2", "normal"),
        ("2", "strong"),
        ("3", "strong"),
    ];

    for (session_id, policy_name) in scenarios {
        if directory.session(session_id).is_none() || catalog.policy(policy_name).is_none() {
            continue;
        }
        let decision =
            stepup_domain::evaluate(catalog, directory, session_id, policy_name, now_ms)?;
        out.push_str(&format!("session {session_id} -> "));
        out.push_str(&render_decision_text(&RenderableDecision::from(&decision)));
    }

    out.push_str(&format!("now(ms): {now_ms}\n"));
    Ok(out)
}

fn format_patterns(patterns: &[Vec<String>]) -> String {
    let rendered: Vec<String> = patterns.iter().map(|p| format!("[{}]", p.join(", "))).collect();
    format!("[{}]", rendered.join(", "))
}
