use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::FormatError;

/// Field holding an entity's identifier.
pub const ID_FIELD: &str = "id";

/// A catalog document: an entity collection (name → record) plus whatever
/// other top-level keys the document carries.
///
/// Object key order is preserved end to end, so a catalog that is loaded
/// and serialized again without changes reproduces the same document.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    /// Top-level document. The collection slot holds `null` while the
    /// entities live in `entities`; serialization puts them back in place.
    document: Map<String, Value>,
    collection_key: String,
    entities: Map<String, Value>,
}

impl Catalog {
    /// Build a catalog from a parsed document, checking that the collection
    /// exists and every entity is an object whose `id`, if present, is a string.
    pub fn from_value(value: Value, collection_key: &str) -> Result<Self, FormatError> {
        let Value::Object(mut document) = value else {
            return Err(FormatError::NotAnObject);
        };
        let slot = document
            .get_mut(collection_key)
            .ok_or_else(|| FormatError::MissingCollection {
                key: collection_key.to_string(),
            })?;
        let Value::Object(entities) = slot.take() else {
            return Err(FormatError::CollectionNotAnObject {
                key: collection_key.to_string(),
            });
        };

        for (name, record) in &entities {
            let Some(fields) = record.as_object() else {
                return Err(FormatError::EntityNotAnObject { name: name.clone() });
            };
            if fields.get(ID_FIELD).is_some_and(|id| !id.is_string()) {
                return Err(FormatError::IdNotAString { name: name.clone() });
            }
        }

        Ok(Self {
            document,
            collection_key: collection_key.to_string(),
            entities,
        })
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entity names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.keys().map(String::as_str)
    }

    pub fn entity(&self, name: &str) -> Option<&Map<String, Value>> {
        self.entities.get(name).and_then(Value::as_object)
    }

    pub fn entity_id(&self, name: &str) -> Option<&str> {
        self.entity(name)
            .and_then(|fields| fields.get(ID_FIELD))
            .and_then(Value::as_str)
    }

    /// `(name, id)` for every entity that has an id, in catalog order.
    /// Entities without an id are skipped.
    pub fn ids(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entities.iter().filter_map(|(name, record)| {
            record
                .get(ID_FIELD)
                .and_then(Value::as_str)
                .map(|id| (name.as_str(), id))
        })
    }

    /// Overwrite an entity's id, returning the previous one.
    /// Returns `None` if the entity is unknown or had no id.
    pub(crate) fn replace_id(&mut self, name: &str, new_id: String) -> Option<String> {
        let fields = self.entities.get_mut(name)?.as_object_mut()?;
        let previous = fields.insert(ID_FIELD.to_string(), Value::String(new_id))?;
        previous.as_str().map(str::to_string)
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.document.len()))?;
        for (key, value) in &self.document {
            if *key == self.collection_key {
                map.serialize_entry(key, &self.entities)?;
            } else {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}
