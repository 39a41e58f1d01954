// File: crates/engine-graph/src/error.rs
// Summary: Errors raised while parsing graph inputs (category names, config, move lists).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("unknown chart category '{0}' (expected eval, time, speed, node, depth or tb)")]
    UnknownCategory(String),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;
