//! Snapshot artifact and persistence

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SyncError;
use crate::record::WorkRecord;

/// The persisted artifact of one pipeline run: a generation timestamp
/// plus the ordered works. Each run rebuilds it from scratch; there is
/// no merging with the previous snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// RFC 3339 UTC timestamp, millisecond precision
    pub updated: String,
    pub works: Vec<WorkRecord>,
}

impl Snapshot {
    pub fn new(works: Vec<WorkRecord>, now: DateTime<Utc>) -> Self {
        Self {
            updated: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            works,
        }
    }

    /// Serialize pretty-printed (2-space indent, struct key order, so
    /// snapshots diff cleanly under version control) and replace the
    /// target atomically: write a sibling temp file, then rename it
    /// over the target. A crash mid-write leaves the prior snapshot
    /// untouched.
    pub fn write(&self, path: &Path) -> Result<(), SyncError> {
        let json = serde_json::to_string_pretty(self)?;

        let tmp = temp_path(path);
        fs::write(&tmp, &json).map_err(|source| SyncError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, path).map_err(|source| SyncError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
