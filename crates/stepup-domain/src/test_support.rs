use crate::catalog::{Catalog, Method, Policy, Requirement};
use crate::model::{Directory, PastAction, Session, User};
use std::collections::BTreeMap;
use stepup_types::MethodKind;
use stepup_types::MethodKind::{MultiFactor, SingleFactor};

/// Fixed evaluation instant shared by the tests: ten seconds after the
/// newest action in the demo history.
pub const NOW_MS: i64 = 1_768_999_349_620;

/// `NOW_MS - 10_000`, as stored.
pub const SECONDS_AGO_10: &str = "1768999339620";

/// `NOW_MS - 1_000_000`, as stored. Stale for a 300 s window, fresh for an
/// hour-scale one.
pub const SECONDS_AGO_1000: &str = "1768998349620";

pub fn method(id: &str, kind: MethodKind) -> Method {
    Method {
        id: id.to_string(),
        kind,
    }
}

pub fn requirement(kind: MethodKind, max_age_secs: i64) -> Requirement {
    Requirement { kind, max_age_secs }
}

pub fn action(method: &str, validated_at: &str) -> PastAction {
    PastAction {
        method: method.to_string(),
        validated_at: validated_at.to_string(),
    }
}

pub fn user(id: &str, enrolled: &[&str]) -> User {
    User {
        id: id.to_string(),
        enrolled_means: enrolled.iter().map(|m| m.to_string()).collect(),
    }
}

pub fn session(id: &str, user_id: &str, past_actions: Vec<PastAction>) -> Session {
    Session {
        id: id.to_string(),
        user_id: user_id.to_string(),
        past_actions,
    }
}

pub fn catalog(methods: Vec<Method>, policies: Vec<(&str, Policy)>) -> Catalog {
    Catalog {
        methods,
        policies: policies
            .into_iter()
            .map(|(name, policy)| (name.to_string(), policy))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// The demo catalog: four methods, policies "normal" and "strong".
pub fn demo_catalog() -> Catalog {
    catalog(
        vec![
            method("phone_otp", SingleFactor),
            method("password", SingleFactor),
            method("phone_biometry", MultiFactor),
            method("mail_otp", SingleFactor),
        ],
        vec![
            (
                "normal",
                vec![
                    vec![requirement(SingleFactor, 3600)],
                    vec![requirement(MultiFactor, 3600)],
                ],
            ),
            (
                "strong",
                vec![
                    vec![
                        requirement(SingleFactor, 93_600),
                        requirement(SingleFactor, 300),
                    ],
                    vec![requirement(MultiFactor, 300)],
                ],
            ),
        ],
    )
}

/// The demo directory: arthur with mixed-age history, bigNoob and otherNoob
/// with empty histories.
pub fn demo_directory() -> Directory {
    Directory {
        users: vec![
            user("arthur", &["phone_otp", "password", "phone_biometry"]),
            user("bigNoob", &["phone_otp", "password", "phone_biometry"]),
            user("otherNoob", &["phone_otp"]),
        ],
        sessions: vec![
            session(
                "1",
                "arthur",
                vec![
                    action("phone_otp", SECONDS_AGO_10),
                    action("phone_biometry", SECONDS_AGO_1000),
                ],
            ),
            session("2", "bigNoob", Vec::new()),
            session("3", "otherNoob", Vec::new()),
        ],
    }
}
