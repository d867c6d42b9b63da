use crate::catalog::{Policy, PolicyOption};
use crate::freshness::valid_candidates;
use crate::index::KindIndex;
use crate::model::{Session, User};
use std::collections::BTreeSet;

/// Is the policy already satisfied by history alone?
///
/// Options are tried in declaration order; the first satisfied option wins.
pub(crate) fn policy_satisfied(
    index: &KindIndex,
    user: &User,
    session: &Session,
    policy: &Policy,
    now_ms: i64,
) -> bool {
    policy
        .iter()
        .any(|option| option_satisfied(index, user, session, option, now_ms))
}

/// Greedy first-fit assignment of history entries to requirements.
///
/// Each requirement takes the first valid candidate (catalog order) not yet
/// used inside this option. There is no backtracking across requirements:
/// a greedy pick that starves a later requirement fails the whole option
/// even when a different assignment would succeed. Intentional, observable
/// behavior — do not "fix" to exhaustive matching.
fn option_satisfied(
    index: &KindIndex,
    user: &User,
    session: &Session,
    option: &PolicyOption,
    now_ms: i64,
) -> bool {
    let mut used: BTreeSet<&str> = BTreeSet::new();

    for requirement in option {
        let valid = valid_candidates(index, user, &session.past_actions, requirement, now_ms);
        let Some(pick) = valid.into_iter().find(|id| !used.contains(id)) else {
            return false;
        };
        used.insert(pick);
    }
    true
}
