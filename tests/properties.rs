use std::collections::{HashMap, HashSet};

use catalog_dedup::resolve::duplicate_groups;
use catalog_dedup::{Catalog, DuplicatePolicy, SeededUuidSource, resolve};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value, json};

/// A catalog of `size` entities drawn from a small id pool so collisions are
/// common. Roughly a third are variants, a tenth have no id.
fn random_catalog(seed: u64, size: usize) -> Catalog {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut weapons = Map::new();
    for i in 0..size {
        let variant = rng.random_bool(0.35);
        let name = if variant {
            format!("Weapon{i}_uncommon")
        } else {
            format!("Weapon{i}")
        };
        let mut record = json!({ "damage": rng.random_range(1..20), "rarity": i % 4 });
        if !rng.random_bool(0.1) {
            let base = rng.random_range(0..size as u32 / 2 + 1);
            let id = if rng.random_bool(0.5) {
                format!("{base}-U")
            } else {
                base.to_string()
            };
            record["id"] = Value::String(id);
        }
        weapons.insert(name, record);
    }
    Catalog::from_value(json!({ "weapons": weapons }), "weapons").unwrap()
}

fn snapshot(catalog: &Catalog) -> HashMap<String, Value> {
    catalog
        .names()
        .map(|name| (name.to_string(), Value::Object(catalog.entity(name).unwrap().clone())))
        .collect()
}

#[test]
fn resolution_properties_hold_across_seeds() {
    let policy = DuplicatePolicy::default();

    for seed in 0..25 {
        let mut catalog = random_catalog(seed, 40);
        let before = snapshot(&catalog);
        let groups = duplicate_groups(&catalog, policy.normalizer());
        let in_group: HashSet<&str> = groups.values().flatten().map(String::as_str).collect();

        let mut ids = SeededUuidSource::new(seed);
        let resolution = resolve(&mut catalog, &policy, &mut ids).unwrap();
        let after = snapshot(&catalog);

        // The key set never changes.
        let before_names: HashSet<_> = before.keys().collect();
        let after_names: HashSet<_> = after.keys().collect();
        assert_eq!(before_names, after_names, "seed {seed}");

        let changed: HashSet<&str> = resolution
            .changes
            .iter()
            .map(|c| c.entity_name.as_str())
            .collect();

        for (name, record) in &before {
            let is_variant = name.contains("_uncommon");
            let has_id = record.get("id").is_some();
            if !has_id || !in_group.contains(name.as_str()) || !is_variant {
                // Untouched, every field.
                assert_eq!(&after[name], record, "seed {seed}: {name} should be unchanged");
                assert!(!changed.contains(name.as_str()), "seed {seed}: {name}");
            } else {
                // Only the id differs.
                assert!(changed.contains(name.as_str()), "seed {seed}: {name} not rewritten");
                let mut expected = record.clone();
                expected["id"] = after[name]["id"].clone();
                assert_eq!(after[name], expected, "seed {seed}: {name}");
            }
        }

        // Rewritten ids are unique across the whole catalog.
        let all_ids: Vec<&str> = catalog.ids().map(|(_, id)| id).collect();
        for change in &resolution.changes {
            let count = all_ids.iter().filter(|id| **id == change.new_id).count();
            assert_eq!(count, 1, "seed {seed}: {} not unique", change.new_id);
        }

        // Second pass is a no-op.
        let settled = catalog.clone();
        let again = resolve(&mut catalog, &policy, &mut ids).unwrap();
        assert!(!again.changed(), "seed {seed}: second pass changed ids");
        assert_eq!(catalog, settled);
    }
}

#[test]
fn only_base_collisions_remain_after_resolution() {
    let policy = DuplicatePolicy::default();

    for seed in 100..110 {
        let mut catalog = random_catalog(seed, 60);
        let mut ids = SeededUuidSource::new(seed);
        let resolution = resolve(&mut catalog, &policy, &mut ids).unwrap();

        let remaining = duplicate_groups(&catalog, policy.normalizer());
        for (normalized_id, names) in &remaining {
            assert!(
                names.iter().all(|n| !policy.is_variant(n)),
                "seed {seed}: variant left in group {normalized_id}"
            );
            assert!(
                resolution
                    .unresolved
                    .iter()
                    .any(|g| &g.normalized_id == normalized_id && &g.names == names),
                "seed {seed}: group {normalized_id} not reported"
            );
        }
    }
}
