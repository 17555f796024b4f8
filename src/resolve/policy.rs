use crate::config::DedupConfig;

/// Regeneration attempts per entity when the policy is not built from a config.
pub const DEFAULT_MAX_ID_ATTEMPTS: u32 = 16;

/// Maps an id to its grouping key by stripping one trailing variant marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdNormalizer {
    suffix_markers: Vec<String>,
}

impl IdNormalizer {
    /// Markers are tried in order; the first one the id ends with is stripped.
    /// Empty markers are ignored.
    pub fn new<I, S>(suffix_markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            suffix_markers: suffix_markers
                .into_iter()
                .map(Into::into)
                .filter(|m: &String| !m.is_empty())
                .collect(),
        }
    }

    pub fn normalize<'a>(&self, id: &'a str) -> &'a str {
        self.suffix_markers
            .iter()
            .find_map(|marker| id.strip_suffix(marker.as_str()))
            .unwrap_or(id)
    }
}

/// Decides from an entity's name whether it is a variant entry, i.e. one
/// whose id may be rewritten when it collides.
pub trait VariantClassifier {
    fn is_variant(&self, name: &str) -> bool;
}

impl<F> VariantClassifier for F
where
    F: Fn(&str) -> bool,
{
    fn is_variant(&self, name: &str) -> bool {
        self(name)
    }
}

/// Variant iff the name contains the marker (e.g. `Sword_uncommon`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMarker(pub String);

impl VariantClassifier for NameMarker {
    fn is_variant(&self, name: &str) -> bool {
        name.contains(self.0.as_str())
    }
}

/// Everything the resolver needs to decide what collides and what gets rewritten.
pub struct DuplicatePolicy {
    normalizer: IdNormalizer,
    classifier: Box<dyn VariantClassifier>,
    max_id_attempts: u32,
}

impl DuplicatePolicy {
    pub fn new(normalizer: IdNormalizer, classifier: impl VariantClassifier + 'static) -> Self {
        Self {
            normalizer,
            classifier: Box::new(classifier),
            max_id_attempts: DEFAULT_MAX_ID_ATTEMPTS,
        }
    }

    pub fn from_config(config: &DedupConfig) -> Self {
        Self::new(
            IdNormalizer::new(config.suffix_markers.iter().cloned()),
            NameMarker(config.variant_marker.clone()),
        )
        .with_max_id_attempts(config.max_id_attempts)
    }

    pub fn with_max_id_attempts(mut self, attempts: u32) -> Self {
        self.max_id_attempts = attempts;
        self
    }

    pub fn normalizer(&self) -> &IdNormalizer {
        &self.normalizer
    }

    pub fn is_variant(&self, name: &str) -> bool {
        self.classifier.is_variant(name)
    }

    pub fn max_id_attempts(&self) -> u32 {
        self.max_id_attempts
    }
}

impl Default for DuplicatePolicy {
    fn default() -> Self {
        Self::from_config(&DedupConfig::default())
    }
}
