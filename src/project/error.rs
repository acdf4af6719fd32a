use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Invalid JSON in {document}: {source}")]
    InvalidJson {
        document: &'static str,
        source: serde_json::Error,
    },

    #[error("Cannot serialize {document}: {source}")]
    Serialize {
        document: &'static str,
        source: serde_json::Error,
    },

    #[error("{0} must be a JSON object")]
    NotAnObject(&'static str),

    #[error("{document} is missing field `{field}`")]
    MissingField {
        document: &'static str,
        field: &'static str,
    },

    #[error("{document} has an invalid name `{name}`")]
    InvalidName {
        document: &'static str,
        name: String,
    },

    #[error("{document} has no dependency entry for {role}")]
    MissingDependency {
        document: &'static str,
        role: String,
    },
}
