//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Decision determinism
//! - Monotonicity of history growth
//! - Order-insensitive dedup of action sets
//! - Freshness boundary and malformed-input tolerance

use crate::catalog::{Catalog, Method, Policy, Requirement};
use crate::engine::evaluate;
use crate::freshness::is_action_still_valid;
use crate::model::{Directory, PastAction, Session, User};
use crate::test_support::NOW_MS;
use proptest::prelude::*;
use std::collections::BTreeMap;
use stepup_types::{DecisionStatus, MethodKind};

/// Small fixed id pool so that catalogs, enrollments and histories overlap
/// often enough to exercise the interesting paths.
const ID_POOL: &[&str] = &["otp", "password", "biometry", "mail", "token", "fido"];

fn arb_kind() -> impl Strategy<Value = MethodKind> {
    prop_oneof![
        Just(MethodKind::SingleFactor),
        Just(MethodKind::MultiFactor),
    ]
}

/// A catalog over a random subset of the pool, with one policy named "p".
fn arb_catalog() -> impl Strategy<Value = Catalog> {
    (
        prop::collection::btree_set(prop::sample::select(ID_POOL.to_vec()), 1..ID_POOL.len()),
        prop::collection::vec(arb_kind(), ID_POOL.len()),
        arb_policy(),
    )
        .prop_map(|(ids, kinds, policy)| {
            let methods: Vec<Method> = ids
                .into_iter()
                .enumerate()
                .map(|(i, id)| Method {
                    id: id.to_string(),
                    kind: kinds[i % kinds.len()],
                })
                .collect();
            let mut policies = BTreeMap::new();
            policies.insert("p".to_string(), policy);
            Catalog { methods, policies }
        })
}

fn arb_requirement() -> impl Strategy<Value = Requirement> {
    (arb_kind(), -100i64..100_000).prop_map(|(kind, max_age_secs)| Requirement {
        kind,
        max_age_secs,
    })
}

fn arb_policy() -> impl Strategy<Value = Policy> {
    prop::collection::vec(prop::collection::vec(arb_requirement(), 1..4), 1..4)
}

/// Timestamps mix parsable values around `NOW_MS` with garbage.
fn arb_validated_at() -> impl Strategy<Value = String> {
    prop_oneof![
        (0i64..2_000_000).prop_map(|ago_ms| (NOW_MS - ago_ms).to_string()),
        Just("not-a-timestamp".to_string()),
        Just(String::new()),
        Just("9.5e3".to_string()),
    ]
}

fn arb_history() -> impl Strategy<Value = Vec<PastAction>> {
    prop::collection::vec(
        (prop::sample::select(ID_POOL.to_vec()), arb_validated_at()).prop_map(
            |(method, validated_at)| PastAction {
                method: method.to_string(),
                validated_at,
            },
        ),
        0..6,
    )
}

fn arb_directory() -> impl Strategy<Value = Directory> {
    (
        prop::collection::btree_set(prop::sample::select(ID_POOL.to_vec()), 0..ID_POOL.len()),
        arb_history(),
    )
        .prop_map(|(enrolled, past_actions)| Directory {
            users: vec![User {
                id: "u".to_string(),
                enrolled_means: enrolled.into_iter().map(|m| m.to_string()).collect(),
            }],
            sessions: vec![Session {
                id: "s".to_string(),
                user_id: "u".to_string(),
                past_actions,
            }],
        })
}

proptest! {
    /// Two calls with identical inputs and identical `now` return identical
    /// decisions.
    #[test]
    fn evaluation_is_deterministic(catalog in arb_catalog(), directory in arb_directory()) {
        let a = evaluate(&catalog, &directory, "s", "p", NOW_MS);
        let b = evaluate(&catalog, &directory, "s", "p", NOW_MS);
        prop_assert_eq!(a, b);
    }

    /// Appending a past action can move a decision from "authentication
    /// required" toward OK, never the reverse.
    #[test]
    fn history_growth_is_monotone(
        catalog in arb_catalog(),
        directory in arb_directory(),
        method in prop::sample::select(ID_POOL.to_vec()),
        validated_at in arb_validated_at(),
    ) {
        let before = evaluate(&catalog, &directory, "s", "p", NOW_MS).unwrap();

        let mut grown = directory.clone();
        grown.sessions[0].past_actions.push(PastAction {
            method: method.to_string(),
            validated_at,
        });
        let after = evaluate(&catalog, &grown, "s", "p", NOW_MS).unwrap();

        prop_assert!(
            !(before.status == DecisionStatus::Ok
                && after.status == DecisionStatus::AuthenticationRequired),
            "adding history flipped OK to required: before={before:?} after={after:?}"
        );
    }

    /// No two returned action sets are equal irrespective of order.
    #[test]
    fn action_sets_are_distinct_as_sets(
        catalog in arb_catalog(),
        directory in arb_directory(),
    ) {
        let decision = evaluate(&catalog, &directory, "s", "p", NOW_MS).unwrap();

        if let Some(sets) = decision.possible_action_sets {
            let mut keys: Vec<Vec<String>> = sets
                .iter()
                .map(|s| {
                    let mut k = s.clone();
                    k.sort();
                    k
                })
                .collect();
            let total = keys.len();
            keys.sort();
            keys.dedup();
            prop_assert_eq!(keys.len(), total, "set-equal duplicates survived dedup");
        }
    }

    /// Every planned action references an enrolled catalog method.
    #[test]
    fn planned_actions_are_enrolled_catalog_methods(
        catalog in arb_catalog(),
        directory in arb_directory(),
    ) {
        let decision = evaluate(&catalog, &directory, "s", "p", NOW_MS).unwrap();
        let user = &directory.users[0];

        for set in decision.possible_action_sets.iter().flatten() {
            for id in set {
                prop_assert!(catalog.method(id).is_some(), "unknown catalog id {id}");
                prop_assert!(user.is_enrolled(id), "unenrolled id {id}");
            }
        }
    }

    /// Freshness boundary is inclusive at exactly `maxAge` seconds and
    /// exclusive one millisecond later.
    #[test]
    fn freshness_boundary(t in 0i64..1_000_000_000_000, s in 0i64..1_000_000) {
        let history = vec![PastAction {
            method: "x".to_string(),
            validated_at: t.to_string(),
        }];

        prop_assert!(is_action_still_valid(&history, "x", s, t + s * 1000));
        prop_assert!(!is_action_still_valid(&history, "x", s, t + s * 1000 + 1));
    }

    /// The oracle never panics, whatever the stored timestamp looks like.
    #[test]
    fn oracle_tolerates_arbitrary_input(
        raw in ".*",
        method in "[a-z]{0,6}",
        max_age in any::<i64>(),
        now in any::<i64>(),
    ) {
        let history = vec![PastAction {
            method: method.clone(),
            validated_at: raw,
        }];
        let _ = is_action_still_valid(&history, &method, max_age, now);
        let _ = is_action_still_valid(&history, "other", max_age, now);
    }
}
