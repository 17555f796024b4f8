use std::collections::HashSet;

use super::groups::collect_groups;
use super::policy::{DuplicatePolicy, IdNormalizer};
use crate::error::CatalogError;
use crate::id::IdSource;
use crate::model::{Catalog, ChangeRecord};

/// Outcome of one resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Reassignments in catalog order.
    pub changes: Vec<ChangeRecord>,
    /// Collisions between base entries, which the policy leaves alone.
    pub unresolved: Vec<UnresolvedGroup>,
}

impl Resolution {
    pub fn changed(&self) -> bool {
        !self.changes.is_empty()
    }
}

/// Two or more non-variant entries sharing a normalized id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedGroup {
    pub normalized_id: String,
    pub names: Vec<String>,
}

/// Find ids that collide after normalization and give every colliding
/// variant entry a fresh id. Base entries, entities outside any duplicate
/// group, and entities without an id are left exactly as they were.
///
/// Fresh ids are checked against every existing id (raw and normalized) and
/// every id issued earlier in the pass. On error the catalog may already be
/// partially rewritten and should be discarded.
pub fn resolve(
    catalog: &mut Catalog,
    policy: &DuplicatePolicy,
    ids: &mut dyn IdSource,
) -> Result<Resolution, CatalogError> {
    let normalizer = policy.normalizer();
    let groups = collect_groups(catalog, normalizer);

    let mut taken: HashSet<String> = HashSet::new();
    for (_, id) in catalog.ids() {
        taken.insert(id.to_string());
        taken.insert(normalizer.normalize(id).to_string());
    }

    let mut resolution = Resolution::default();
    for (normalized_id, names) in &groups {
        if names.len() < 2 {
            continue;
        }
        let base: Vec<String> = names
            .iter()
            .filter(|name| !policy.is_variant(name))
            .cloned()
            .collect();
        if base.len() > 1 {
            tracing::warn!(
                normalized_id = normalized_id.as_str(),
                entities = ?base,
                "duplicate id shared by non-variant entries left unresolved"
            );
            resolution.unresolved.push(UnresolvedGroup {
                normalized_id: normalized_id.clone(),
                names: base,
            });
        }
    }

    // Snapshot so the catalog can be mutated while walking it.
    let entries: Vec<(String, String)> = catalog
        .ids()
        .map(|(name, id)| (name.to_string(), id.to_string()))
        .collect();

    for (name, old_id) in entries {
        let group_size = groups
            .get(normalizer.normalize(&old_id))
            .map_or(0, Vec::len);
        if group_size <= 1 || !policy.is_variant(&name) {
            continue;
        }

        let new_id = fresh_id(&name, ids, &taken, normalizer, policy.max_id_attempts())?;
        taken.insert(new_id.clone());
        catalog.replace_id(&name, new_id.clone());
        tracing::debug!(
            entity = name.as_str(),
            old_id = old_id.as_str(),
            new_id = new_id.as_str(),
            "reassigned id"
        );

        resolution.changes.push(ChangeRecord {
            entity_name: name,
            old_id,
            new_id,
        });
    }

    Ok(resolution)
}

/// Draw ids until one is outside the taken set, both as-is and normalized.
fn fresh_id(
    name: &str,
    ids: &mut dyn IdSource,
    taken: &HashSet<String>,
    normalizer: &IdNormalizer,
    max_attempts: u32,
) -> Result<String, CatalogError> {
    for attempt in 1..=max_attempts {
        let candidate = ids.next_id().map_err(CatalogError::IdGeneration)?;
        if !taken.contains(&candidate) && !taken.contains(normalizer.normalize(&candidate)) {
            return Ok(candidate);
        }
        tracing::debug!(
            entity = name,
            attempt,
            candidate = candidate.as_str(),
            "generated id already taken"
        );
    }
    Err(CatalogError::IdSpaceExhausted {
        name: name.to_string(),
        attempts: max_attempts,
    })
}
