use std::collections::VecDeque;
use std::io;

use serde_json::Value;

use crate::id::IdSource;
use crate::model::Catalog;

// ---------------------------------------------------------------------------
// Catalog builders
// ---------------------------------------------------------------------------

/// Build a `weapons` catalog from `(name, id)` pairs. `None` leaves the
/// entity without an id field. Every entity also gets a `damage` field so
/// pass-through of other fields can be checked.
pub fn weapons_catalog(entries: &[(&str, Option<&str>)]) -> Catalog {
    Catalog::from_value(weapons_document(entries), "weapons")
        .unwrap_or_else(|e| panic!("weapons_catalog: {e}"))
}

/// The raw document behind [`weapons_catalog`].
pub fn weapons_document(entries: &[(&str, Option<&str>)]) -> Value {
    let mut weapons = serde_json::Map::new();
    for (i, (name, id)) in entries.iter().enumerate() {
        let mut record = serde_json::Map::new();
        if let Some(id) = id {
            record.insert("id".to_string(), Value::from(*id));
        }
        record.insert("damage".to_string(), Value::from(i as u64 + 1));
        weapons.insert(name.to_string(), Value::Object(record));
    }
    let mut document = serde_json::Map::new();
    document.insert("weapons".to_string(), Value::Object(weapons));
    Value::Object(document)
}

// ---------------------------------------------------------------------------
// Id sources
// ---------------------------------------------------------------------------

/// Hands out a fixed list of ids, then fails as if the random source were gone.
#[derive(Debug, Default)]
pub struct ScriptedIds {
    queue: VecDeque<String>,
}

impl ScriptedIds {
    pub fn new(ids: &[&str]) -> Self {
        Self {
            queue: ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl IdSource for ScriptedIds {
    fn next_id(&mut self) -> io::Result<String> {
        self.queue
            .pop_front()
            .ok_or_else(|| io::Error::other("scripted id source exhausted"))
    }
}
