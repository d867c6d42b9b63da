//! Mutation use cases: the four externally-driven state changes.
//!
//! Each mutation is applied in memory; the caller persists the directory and
//! the evaluator sees the change on its next call.

use crate::decide::to_unix_ms;
use stepup_domain::model::Directory;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug)]
pub enum Mutation<'a> {
    Record {
        session_id: &'a str,
        method_id: &'a str,
    },
    Enroll {
        user_id: &'a str,
        method_id: &'a str,
    },
    Unenroll {
        user_id: &'a str,
        method_id: &'a str,
    },
    Revoke {
        session_id: &'a str,
        index: usize,
    },
}

pub fn apply_mutation(
    directory: &mut Directory,
    mutation: Mutation<'_>,
    now_ms: Option<i64>,
) -> anyhow::Result<()> {
    match mutation {
        Mutation::Record {
            session_id,
            method_id,
        } => {
            let now_ms = now_ms.unwrap_or_else(|| to_unix_ms(OffsetDateTime::now_utc()));
            stepup_store::record_action(directory, session_id, method_id, now_ms)
        }
        Mutation::Enroll { user_id, method_id } => {
            stepup_store::enroll(directory, user_id, method_id)
        }
        Mutation::Unenroll { user_id, method_id } => {
            stepup_store::unenroll(directory, user_id, method_id)
        }
        Mutation::Revoke { session_id, index } => {
            stepup_store::revoke_action(directory, session_id, index)
        }
    }
}
