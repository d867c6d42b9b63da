use crate::catalog::Catalog;
use crate::engine::EvalError;
use crate::enumerate::dedupe_unordered;
use crate::index::KindIndex;

/// All abstract authentication patterns that could satisfy the named policy,
/// ignoring any user or session: per option, the cross-product of catalog
/// ids per requirement kind, with no id repeated within one pattern.
///
/// An option containing a kind with zero catalog methods contributes
/// nothing. The pooled patterns are deduplicated order-insensitively.
pub fn policy_patterns(catalog: &Catalog, policy_name: &str) -> Result<Vec<Vec<String>>, EvalError> {
    let policy = catalog
        .policy(policy_name)
        .ok_or_else(|| EvalError::UnknownPolicy(policy_name.to_string()))?;

    let index = KindIndex::new(catalog);
    let mut patterns: Vec<Vec<String>> = Vec::new();

    for option in policy {
        let mut partials: Vec<Vec<String>> = vec![Vec::new()];

        for requirement in option {
            let ids = index.ids_of(requirement.kind);
            if ids.is_empty() {
                partials.clear();
                break;
            }

            let mut next = Vec::new();
            for partial in &partials {
                for id in ids {
                    if partial.iter().any(|p| p == id) {
                        continue;
                    }
                    let mut grown = partial.clone();
                    grown.push(id.clone());
                    next.push(grown);
                }
            }
            partials = next;
        }

        patterns.extend(partials);
    }

    Ok(dedupe_unordered(patterns))
}
