//! The `decide` use case: evaluate a policy against a session and wrap the
//! result in a decision envelope.

use stepup_domain::catalog::Catalog;
use stepup_domain::model::Directory;
use stepup_types::{DecisionEnvelope, DecisionStatus, ToolMeta, SCHEMA_DECISION_V1};
use time::OffsetDateTime;

/// Input for the decide use case.
#[derive(Clone, Debug)]
pub struct DecideInput<'a> {
    pub catalog: &'a Catalog,
    pub directory: &'a Directory,
    pub session_id: &'a str,
    pub policy_name: &'a str,

    /// Pinned evaluation instant in Unix milliseconds. When absent, the
    /// wall clock is sampled exactly once at call start.
    pub now_ms: Option<i64>,
}

/// Output from the decide use case.
#[derive(Clone, Debug)]
pub struct DecideOutput {
    pub envelope: DecisionEnvelope,
}

pub fn run_decide(input: DecideInput<'_>) -> anyhow::Result<DecideOutput> {
    let started_at = OffsetDateTime::now_utc();
    let now_ms = input.now_ms.unwrap_or_else(|| to_unix_ms(started_at));

    let decision = stepup_domain::evaluate(
        input.catalog,
        input.directory,
        input.session_id,
        input.policy_name,
        now_ms,
    )?;

    let finished_at = OffsetDateTime::now_utc();

    Ok(DecideOutput {
        envelope: DecisionEnvelope {
            schema: SCHEMA_DECISION_V1.to_string(),
            tool: ToolMeta {
                name: "stepup".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            started_at,
            finished_at,
            decision,
        },
    })
}

/// Map status to exit code: 0 = OK, 2 = authentication required.
pub fn decision_exit_code(status: DecisionStatus) -> i32 {
    match status {
        DecisionStatus::Ok => 0,
        DecisionStatus::AuthenticationRequired => 2,
    }
}

pub(crate) fn to_unix_ms(instant: OffsetDateTime) -> i64 {
    (instant.unix_timestamp_nanos() / 1_000_000) as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepup_settings::builtin_catalog;
    use stepup_store::demo_directory;

    const NOW_MS: i64 = 1_768_999_349_620;

    #[test]
    fn pinned_now_gives_reproducible_envelopes() {
        let catalog = builtin_catalog();
        let directory = demo_directory();

        let input = DecideInput {
            catalog: &catalog,
            directory: &directory,
            session_id: "1",
            policy_name: "strong",
            now_ms: Some(NOW_MS),
        };

        let a = run_decide(input.clone()).expect("decide");
        let b = run_decide(input).expect("decide");

        assert_eq!(a.envelope.decision, b.envelope.decision);
        assert_eq!(a.envelope.schema, SCHEMA_DECISION_V1);
        assert_eq!(a.envelope.tool.name, "stepup");
    }

    #[test]
    fn unknown_session_surfaces_as_error() {
        let catalog = builtin_catalog();
        let directory = demo_directory();

        let err = run_decide(DecideInput {
            catalog: &catalog,
            directory: &directory,
            session_id: "99",
            policy_name: "normal",
            now_ms: Some(NOW_MS),
        })
        .unwrap_err();

        assert!(err.to_string().contains("unknown session: 99"));
    }

    #[test]
    fn exit_codes() {
        assert_eq!(decision_exit_code(DecisionStatus::Ok), 0);
        assert_eq!(decision_exit_code(DecisionStatus::AuthenticationRequired), 2);
    }
}
