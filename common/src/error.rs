use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading the signature catalog. All of them are fatal.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("cannot read signature catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("signature catalog is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("signature catalog must be a JSON object at the top level")]
    NotAnObject,
    #[error("signature for '{hint}' must be a string")]
    NonStringValue { hint: String },
    #[error("signature catalog contains an empty service hint")]
    EmptyHint,
}

/// Failures while loading the list of subdomains to check.
#[derive(Debug, Error)]
pub enum TargetsError {
    #[error("cannot read targets file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
