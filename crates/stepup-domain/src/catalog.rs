use std::collections::BTreeMap;
use stepup_types::MethodKind;

/// One authentication method from the catalog. Immutable configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    pub id: String,
    pub kind: MethodKind,
}

/// One (kind, freshness window) constraint inside a policy option.
///
/// `max_age_secs` may be any integer, including zero or negative; the
/// freshness check must tolerate all of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Requirement {
    pub kind: MethodKind,
    pub max_age_secs: i64,
}

/// AND-of-requirements, evaluated in declaration order.
pub type PolicyOption = Vec<Requirement>;

/// OR-of-options: a policy is satisfied iff at least one option is.
pub type Policy = Vec<PolicyOption>;

/// Method catalog plus named assurance-level policies.
///
/// Read-only for the duration of one evaluation; method order is the
/// canonical tie-break order everywhere.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub methods: Vec<Method>,
    pub policies: BTreeMap<String, Policy>,
}

impl Catalog {
    pub fn policy(&self, name: &str) -> Option<&Policy> {
        self.policies.get(name)
    }

    pub fn method(&self, id: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.id == id)
    }
}
