use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The catalog document does not have the shape the resolver relies on.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("top-level value is not an object")]
    NotAnObject,
    #[error("missing top-level `{key}` collection")]
    MissingCollection { key: String },
    #[error("`{key}` collection is not an object")]
    CollectionNotAnObject { key: String },
    #[error("entity `{name}` is not an object")]
    EntityNotAnObject { name: String },
    #[error("entity `{name}` has a non-string `id`")]
    IdNotAString { name: String },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed catalog {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
    #[error("failed to write catalog {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("random id source unavailable: {0}")]
    IdGeneration(#[source] io::Error),
    #[error("no unique id found for `{name}` after {attempts} attempts")]
    IdSpaceExhausted { name: String, attempts: u32 },
    #[error("failed to write audit trail: {0}")]
    Output(#[source] io::Error),
}
