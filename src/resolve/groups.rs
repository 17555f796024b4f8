use std::collections::BTreeMap;

use super::policy::IdNormalizer;
use crate::model::Catalog;

/// Collection pass: normalized id → names carrying it, in catalog order.
/// Entities without an id are not part of any group.
pub(crate) fn collect_groups(
    catalog: &Catalog,
    normalizer: &IdNormalizer,
) -> BTreeMap<String, Vec<String>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, id) in catalog.ids() {
        groups
            .entry(normalizer.normalize(id).to_string())
            .or_default()
            .push(name.to_string());
    }
    groups
}

/// Groups whose normalized id is shared by more than one entity.
pub fn duplicate_groups(
    catalog: &Catalog,
    normalizer: &IdNormalizer,
) -> BTreeMap<String, Vec<String>> {
    let mut groups = collect_groups(catalog, normalizer);
    groups.retain(|_, names| names.len() > 1);
    groups
}
