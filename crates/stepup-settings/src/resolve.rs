use crate::model::CatalogConfigV1;
use anyhow::Context;
use std::collections::{BTreeMap, BTreeSet};
use stepup_domain::catalog::{Catalog, Method, Policy, Requirement};
use stepup_types::ids::SCHEMA_CATALOG_V1;
use stepup_types::MethodKind;

pub fn resolve_catalog(cfg: CatalogConfigV1) -> anyhow::Result<Catalog> {
    if let Some(schema) = cfg.schema.as_deref() {
        if schema != SCHEMA_CATALOG_V1 {
            anyhow::bail!("unknown catalog schema: {schema} (expected {SCHEMA_CATALOG_V1})");
        }
    }

    let mut seen_ids: BTreeSet<&str> = BTreeSet::new();
    let mut methods = Vec::with_capacity(cfg.methods.len());
    for m in &cfg.methods {
        if m.id.is_empty() {
            anyhow::bail!("method with empty id");
        }
        if !seen_ids.insert(&m.id) {
            anyhow::bail!("duplicate method id: {}", m.id);
        }
        let kind = parse_kind(&m.kind).with_context(|| format!("method {}", m.id))?;
        methods.push(Method {
            id: m.id.clone(),
            kind,
        });
    }

    let mut policies: BTreeMap<String, Policy> = BTreeMap::new();
    for (name, options) in &cfg.policies {
        if name.is_empty() {
            anyhow::bail!("policy with empty name");
        }
        if options.is_empty() {
            anyhow::bail!("policy {name} has no options");
        }

        let mut policy: Policy = Vec::with_capacity(options.len());
        for (opt_index, option) in options.iter().enumerate() {
            if option.is_empty() {
                anyhow::bail!("policy {name} option {opt_index} has no requirements");
            }

            let mut resolved = Vec::with_capacity(option.len());
            for req in option {
                let kind = parse_kind(&req.kind)
                    .with_context(|| format!("policy {name} option {opt_index}"))?;
                let max_age_secs = req.max_age.with_context(|| {
                    format!("policy {name} option {opt_index} is missing max_age")
                })?;
                resolved.push(Requirement { kind, max_age_secs });
            }
            policy.push(resolved);
        }
        policies.insert(name.clone(), policy);
    }

    Ok(Catalog { methods, policies })
}

fn parse_kind(v: &str) -> anyhow::Result<MethodKind> {
    match v {
        "single_factor" => Ok(MethodKind::SingleFactor),
        "multi_factor" => Ok(MethodKind::MultiFactor),
        other => anyhow::bail!("unknown method kind: {other} (expected single_factor|multi_factor)"),
    }
}

#[cfg(test)]
mod tests {
    use crate::parse_catalog_toml;

    use super::*;

    const DEMO_TOML: &str = r#"
schema = "stepup.catalog.v1"

[[methods]]
id = "phone_otp"
kind = "single_factor"

[[methods]]
id = "phone_biometry"
kind = "multi_factor"

[policies]
normal = [
  [{ kind = "single_factor", max_age = 3600 }],
  [{ kind = "multi_factor", max_age = 3600 }],
]
"#;

    #[test]
    fn resolves_a_wellformed_catalog() {
        let cfg = parse_catalog_toml(DEMO_TOML).unwrap();
        let catalog = resolve_catalog(cfg).unwrap();

        assert_eq!(catalog.methods.len(), 2);
        assert_eq!(catalog.methods[0].id, "phone_otp");
        assert_eq!(catalog.methods[0].kind, MethodKind::SingleFactor);

        let normal = catalog.policy("normal").unwrap();
        assert_eq!(normal.len(), 2);
        assert_eq!(normal[0][0].max_age_secs, 3600);
    }

    #[test]
    fn rejects_duplicate_method_ids() {
        let cfg = parse_catalog_toml(
            r#"
[[methods]]
id = "phone_otp"
kind = "single_factor"

[[methods]]
id = "phone_otp"
kind = "multi_factor"
"#,
        )
        .unwrap();

        let err = resolve_catalog(cfg).unwrap_err();
        assert!(err.to_string().contains("duplicate method id: phone_otp"));
    }

    #[test]
    fn rejects_unknown_kind_with_context() {
        let cfg = parse_catalog_toml(
            r#"
[[methods]]
id = "phone_otp"
kind = "tri_factor"
"#,
        )
        .unwrap();

        let err = format!("{:#}", resolve_catalog(cfg).unwrap_err());
        assert!(err.contains("method phone_otp"));
        assert!(err.contains("unknown method kind: tri_factor"));
    }

    #[test]
    fn rejects_missing_max_age() {
        let cfg = parse_catalog_toml(
            r#"
[[methods]]
id = "phone_otp"
kind = "single_factor"

[policies]
normal = [[{ kind = "single_factor" }]]
"#,
        )
        .unwrap();

        let err = format!("{:#}", resolve_catalog(cfg).unwrap_err());
        assert!(err.contains("missing max_age"));
    }

    #[test]
    fn rejects_degenerate_policies() {
        let empty_policy = parse_catalog_toml("[policies]\nnormal = []").unwrap();
        assert!(resolve_catalog(empty_policy)
            .unwrap_err()
            .to_string()
            .contains("has no options"));

        let empty_option = parse_catalog_toml("[policies]\nnormal = [[]]").unwrap();
        assert!(resolve_catalog(empty_option)
            .unwrap_err()
            .to_string()
            .contains("has no requirements"));
    }

    #[test]
    fn rejects_foreign_schema() {
        let cfg = parse_catalog_toml("schema = \"stepup.catalog.v9\"").unwrap();
        assert!(resolve_catalog(cfg)
            .unwrap_err()
            .to_string()
            .contains("unknown catalog schema"));
    }

    #[test]
    fn negative_and_zero_windows_are_accepted() {
        let cfg = parse_catalog_toml(
            r#"
[[methods]]
id = "phone_otp"
kind = "single_factor"

[policies]
odd = [[{ kind = "single_factor", max_age = 0 }, { kind = "single_factor", max_age = -5 }]]
"#,
        )
        .unwrap();

        let catalog = resolve_catalog(cfg).unwrap();
        let odd = catalog.policy("odd").unwrap();
        assert_eq!(odd[0][1].max_age_secs, -5);
    }
}
