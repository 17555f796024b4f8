use std::path::{Path, PathBuf};

use catalog_dedup::{CatalogError, DedupConfig, IdSource, Resolution, run};

pub fn write_catalog(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("weapons.json");
    std::fs::write(&path, text).unwrap();
    path
}

pub fn config_for(path: &Path) -> DedupConfig {
    DedupConfig {
        catalog_path: path.to_path_buf(),
        ..DedupConfig::default()
    }
}

/// Run a pass and capture what it printed.
pub fn run_captured(
    config: &DedupConfig,
    ids: &mut dyn IdSource,
) -> (Result<Resolution, CatalogError>, String) {
    let mut out = Vec::new();
    let result = run(config, ids, &mut out);
    (result, String::from_utf8(out).unwrap())
}
