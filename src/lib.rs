pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod report;
pub mod resolve;
pub mod store;
pub mod testutil;

use std::io::Write;

pub use config::DedupConfig;
pub use error::{CatalogError, FormatError};
pub use id::{IdSource, OsUuidSource, SeededUuidSource};
pub use model::{Catalog, ChangeRecord};
pub use resolve::{
    DuplicatePolicy, IdNormalizer, NameMarker, Resolution, VariantClassifier, resolve,
};

/// One full pass over the configured catalog: load, resolve duplicates,
/// write the audit trail to `out`, and save the catalog back only if an
/// id was reassigned.
pub fn run(
    config: &DedupConfig,
    ids: &mut dyn IdSource,
    out: &mut dyn Write,
) -> Result<Resolution, CatalogError> {
    let mut catalog = store::load(&config.catalog_path, &config.collection_key)?;
    let policy = DuplicatePolicy::from_config(config);
    let resolution = resolve(&mut catalog, &policy, ids)?;

    report::write_audit(out, &resolution).map_err(CatalogError::Output)?;
    if resolution.changed() {
        store::save(&config.catalog_path, &catalog, config.indent)?;
    } else {
        tracing::info!(
            path = %config.catalog_path.display(),
            "no duplicate ids, catalog left untouched"
        );
    }
    report::write_summary(out, resolution.changed()).map_err(CatalogError::Output)?;

    Ok(resolution)
}
