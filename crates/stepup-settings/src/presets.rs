use std::collections::BTreeMap;
use stepup_domain::catalog::{Catalog, Method, Policy, Requirement};
use stepup_types::MethodKind::{MultiFactor, SingleFactor};

/// The built-in catalog used when no `stepup.toml` exists.
///
/// Keep this small and readable. Anything beyond a demo setup should go into
/// repo config.
pub fn builtin_catalog() -> Catalog {
    let methods = vec![
        method("phone_otp", SingleFactor),
        method("password", SingleFactor),
        method("phone_biometry", MultiFactor),
        method("mail_otp", SingleFactor),
    ];

    let mut policies: BTreeMap<String, Policy> = BTreeMap::new();
    policies.insert(
        "normal".to_string(),
        vec![
            vec![requirement(SingleFactor, 3600)],
            vec![requirement(MultiFactor, 3600)],
        ],
    );
    policies.insert(
        "strong".to_string(),
        vec![
            // Either: two single factors (one may be much older).
            vec![
                requirement(SingleFactor, 93_600),
                requirement(SingleFactor, 300),
            ],
            // Or: one very recent multi factor.
            vec![requirement(MultiFactor, 300)],
        ],
    );

    Catalog { methods, policies }
}

fn method(id: &str, kind: stepup_types::MethodKind) -> Method {
    Method {
        id: id.to_string(),
        kind,
    }
}

fn requirement(kind: stepup_types::MethodKind, max_age_secs: i64) -> Requirement {
    Requirement { kind, max_age_secs }
}
