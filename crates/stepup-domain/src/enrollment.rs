use crate::catalog::{Catalog, Policy};
use crate::model::User;
use std::collections::BTreeSet;
use stepup_types::MethodKind;

/// Catalog method ids relevant to the policy that the user has not enrolled
/// in, regardless of current validity. Catalog order, for reproducible
/// output.
pub(crate) fn missing_enrollments(catalog: &Catalog, user: &User, policy: &Policy) -> Vec<String> {
    let required_kinds: BTreeSet<MethodKind> = policy
        .iter()
        .flatten()
        .map(|requirement| requirement.kind)
        .collect();

    catalog
        .methods
        .iter()
        .filter(|m| required_kinds.contains(&m.kind))
        .filter(|m| !user.is_enrolled(&m.id))
        .map(|m| m.id.clone())
        .collect()
}
