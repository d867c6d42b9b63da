use crate::catalog::Requirement;
use crate::index::KindIndex;
use crate::model::{PastAction, User};

/// Does the history hold a still-fresh proof for `method_id`?
///
/// Scans every entry: mismatched ids and unparsable timestamps are skipped,
/// never errors. The freshness boundary is inclusive
/// (`now - validated_at <= max_age * 1000`). Arithmetic saturates so extreme
/// or negative windows cannot overflow.
pub fn is_action_still_valid(
    past_actions: &[PastAction],
    method_id: &str,
    max_age_secs: i64,
    now_ms: i64,
) -> bool {
    let max_age_ms = max_age_secs.saturating_mul(1000);

    for action in past_actions {
        if action.method != method_id {
            continue;
        }
        let Some(validated_at_ms) = action.validated_at_ms() else {
            continue;
        };
        if now_ms.saturating_sub(validated_at_ms) <= max_age_ms {
            return true;
        }
    }
    false
}

/// Enrolled ids of the requirement's kind with a still-valid proof in
/// history, in catalog order. Validity is always re-derived from the raw
/// history; reuse tracking is the caller's concern.
pub(crate) fn valid_candidates<'a>(
    index: &'a KindIndex,
    user: &User,
    past_actions: &[PastAction],
    requirement: &Requirement,
    now_ms: i64,
) -> Vec<&'a str> {
    index
        .enrolled(requirement.kind, user)
        .into_iter()
        .filter(|id| is_action_still_valid(past_actions, id, requirement.max_age_secs, now_ms))
        .collect()
}
