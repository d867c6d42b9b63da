use crate::catalog::Catalog;
use crate::model::User;
use std::collections::BTreeMap;
use stepup_types::MethodKind;

/// Catalog method ids grouped by strength kind, preserving catalog order.
///
/// Pure function of the catalog; cheap enough to rebuild per evaluation.
#[derive(Clone, Debug, Default)]
pub struct KindIndex {
    by_kind: BTreeMap<MethodKind, Vec<String>>,
}

impl KindIndex {
    pub fn new(catalog: &Catalog) -> Self {
        let mut by_kind: BTreeMap<MethodKind, Vec<String>> = BTreeMap::new();
        for method in &catalog.methods {
            by_kind.entry(method.kind).or_default().push(method.id.clone());
        }
        Self { by_kind }
    }

    /// All catalog ids of the given kind, in catalog order.
    pub fn ids_of(&self, kind: MethodKind) -> &[String] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids of the given kind the user is enrolled in, in catalog order.
    ///
    /// Enrollment entries absent from the catalog never show up here.
    pub fn enrolled<'a>(&'a self, kind: MethodKind, user: &User) -> Vec<&'a str> {
        self.ids_of(kind)
            .iter()
            .filter(|id| user.is_enrolled(id))
            .map(String::as_str)
            .collect()
    }
}
