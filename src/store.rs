use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;

use crate::error::{CatalogError, FormatError};
use crate::model::Catalog;

/// Read and validate the catalog document at `path`.
pub fn load(path: &Path, collection_key: &str) -> Result<Catalog, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse(&text, collection_key).map_err(|source| CatalogError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        entities = catalog.len(),
        "loaded catalog"
    );
    Ok(catalog)
}

pub fn parse(text: &str, collection_key: &str) -> Result<Catalog, FormatError> {
    let value: Value = serde_json::from_str(text)?;
    Catalog::from_value(value, collection_key)
}

/// Overwrite `path` with the catalog as pretty JSON (`indent` spaces per
/// level, key order preserved, trailing newline).
///
/// The new text goes to a sibling temp file that replaces `path` only once
/// it is fully written and synced; on failure `path` keeps its old contents.
pub fn save(path: &Path, catalog: &Catalog, indent: usize) -> Result<(), CatalogError> {
    replace_file(path, |writer| write_pretty(writer, catalog, indent)).map_err(|source| {
        CatalogError::Write {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::info!(path = %path.display(), entities = catalog.len(), "saved catalog");
    Ok(())
}

/// Write `path` through a temp file in the same directory, then rename it
/// into place. The temp file is removed if `write` or the rename fails.
fn replace_file<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// The exact text [`save`] would write.
pub fn to_pretty_json(catalog: &Catalog, indent: usize) -> io::Result<String> {
    let mut buf = Vec::new();
    write_pretty(&mut buf, catalog, indent)?;
    String::from_utf8(buf).map_err(io::Error::other)
}

fn write_pretty<W: Write>(mut writer: W, catalog: &Catalog, indent: usize) -> io::Result<()> {
    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut ser = Serializer::with_formatter(&mut writer, formatter);
    catalog.serialize(&mut ser)?;
    writer.write_all(b"\n")
}
