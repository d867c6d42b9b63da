use crate::catalog::Policy;
use crate::freshness::{is_action_still_valid, valid_candidates};
use crate::index::KindIndex;
use crate::model::{Session, User};
use std::collections::BTreeSet;

/// Worst-case search cost is exponential in requirements-per-option, bounded
/// in practice by small policy-authored option lengths. The budget is a
/// backstop against pathological hand-authored policies; on exhaustion the
/// search fails closed (no action sets).
pub const SEARCH_NODE_BUDGET: u32 = 100_000;

/// Result of the action-set search across all options of one policy.
#[derive(Clone, Debug, Default)]
pub(crate) struct Enumeration {
    /// Distinct (order-insensitive) sufficient sets of fresh actions.
    /// Empty when every option is structurally blocked, or when the budget
    /// was exceeded.
    pub action_sets: Vec<Vec<String>>,
    pub nodes_visited: u32,
    pub budget_exceeded: bool,
}

/// One branch of the search. Immutable snapshot: children clone and extend,
/// nothing is shared between branches.
#[derive(Clone, Debug)]
struct Branch {
    position: usize,
    used_history: BTreeSet<String>,
    used_new: BTreeSet<String>,
    to_do: Vec<String>,
}

impl Branch {
    fn root() -> Self {
        Self {
            position: 0,
            used_history: BTreeSet::new(),
            used_new: BTreeSet::new(),
            to_do: Vec::new(),
        }
    }
}

/// Enumerate every distinct minimal set of fresh actions sufficient to
/// satisfy the policy, given that history alone is insufficient.
///
/// Each option runs its own depth-first worklist over requirement positions.
/// At a position, branches that consume a valid history entry are preferred
/// and exclusive: planning a fresh action is only explored when no unused
/// valid history candidate exists. Validity is always re-derived from the
/// raw session history; only reuse is tracked in the branch.
pub(crate) fn enumerate_action_sets(
    index: &KindIndex,
    user: &User,
    session: &Session,
    policy: &Policy,
    now_ms: i64,
) -> Enumeration {
    let mut pooled: Vec<Vec<String>> = Vec::new();
    let mut nodes_visited: u32 = 0;
    let mut budget_exceeded = false;

    'options: for option in policy {
        let mut worklist = vec![Branch::root()];

        while let Some(branch) = worklist.pop() {
            nodes_visited += 1;
            if nodes_visited > SEARCH_NODE_BUDGET {
                budget_exceeded = true;
                break 'options;
            }

            if branch.position >= option.len() {
                pooled.push(branch.to_do);
                continue;
            }

            let requirement = &option[branch.position];

            // History branches: consume an unused, still-valid entry.
            let valid =
                valid_candidates(index, user, &session.past_actions, requirement, now_ms);
            let mut branched_from_history = false;

            for id in valid {
                if branch.used_history.contains(id) {
                    continue;
                }
                let mut used_history = branch.used_history.clone();
                used_history.insert(id.to_string());
                worklist.push(Branch {
                    position: branch.position + 1,
                    used_history,
                    used_new: branch.used_new.clone(),
                    to_do: branch.to_do.clone(),
                });
                branched_from_history = true;
            }

            if branched_from_history {
                continue;
            }

            // Fallback branches: plan a fresh action. Enrolled, right kind,
            // not reused in this branch, and not currently valid.
            for id in index.enrolled(requirement.kind, user) {
                if branch.used_history.contains(id) || branch.used_new.contains(id) {
                    continue;
                }
                if is_action_still_valid(
                    &session.past_actions,
                    id,
                    requirement.max_age_secs,
                    now_ms,
                ) {
                    continue;
                }

                let mut used_new = branch.used_new.clone();
                used_new.insert(id.to_string());
                let mut to_do = branch.to_do.clone();
                to_do.push(id.to_string());
                worklist.push(Branch {
                    position: branch.position + 1,
                    used_history: branch.used_history.clone(),
                    used_new,
                    to_do,
                });
            }
            // No children at all: dead end, branch is discarded.
        }
    }

    let action_sets = if budget_exceeded {
        Vec::new()
    } else {
        dedupe_unordered(pooled)
    };

    Enumeration {
        action_sets,
        nodes_visited,
        budget_exceeded,
    }
}

/// Drop sets that are equal irrespective of element order, keeping the
/// first-generated set of each equivalence class.
pub(crate) fn dedupe_unordered(sets: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut seen: BTreeSet<Vec<String>> = BTreeSet::new();
    let mut out = Vec::new();

    for set in sets {
        let mut key = set.clone();
        key.sort();
        if seen.insert(key) {
            out.push(set);
        }
    }
    out
}
