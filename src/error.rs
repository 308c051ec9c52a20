//! Error types for document parsing and I/O.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Content was not parseable as either supported format.
    #[error("unparseable document: not JSON ({json}) nor YAML ({yaml})")]
    Parse {
        json: serde_json::Error,
        yaml: serde_yaml::Error,
    },

    #[error("error reading file '{path}': {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },

    #[error("yaml serialization failed: {0}")]
    Emit(#[from] serde_yaml::Error),
}
