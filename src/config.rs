use std::path::PathBuf;

/// Configuration for a duplicate-id pass over a catalog file.
#[derive(Debug, Clone)]
pub struct DedupConfig {
    /// Catalog document to read and, if anything changed, rewrite.
    pub catalog_path: PathBuf,
    /// Top-level key holding the name → record mapping.
    pub collection_key: String,
    /// Trailing id markers stripped before grouping (e.g. `-U`).
    pub suffix_markers: Vec<String>,
    /// Substring in an entity name that marks it as a rewritable variant.
    pub variant_marker: String,
    /// Spaces per indentation level when writing the catalog back.
    pub indent: usize,
    /// Regeneration attempts per entity before giving up on a unique id.
    pub max_id_attempts: u32,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("public/data/weapons.json"),
            collection_key: "weapons".to_string(),
            suffix_markers: vec!["-U".to_string()],
            variant_marker: "_uncommon".to_string(),
            indent: 2,
            max_id_attempts: 16,
        }
    }
}
