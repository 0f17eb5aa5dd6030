//! Pipeline error types
//!
//! Only two outcomes are user-visible: full success with a record
//! count, or full failure with the underlying description. Everything
//! recoverable inside extraction (missing fields, titleless groups) is
//! absorbed as empty defaults or dropped candidates and never reaches
//! this type.

use std::path::PathBuf;
use thiserror::Error;

use crate::http::HttpError;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("invalid ORCID iD: {id}")]
    InvalidId { id: String },

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write snapshot {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
