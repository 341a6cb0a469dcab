use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while loading the static fight datasets.
///
/// Queries over loaded data never fail; this is the only error surface.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("required dataset not found: {0:?}")]
    MissingDataset(PathBuf),
}

pub type Result<T> = std::result::Result<T, DataError>;
