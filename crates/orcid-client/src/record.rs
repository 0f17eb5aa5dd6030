//! Work record domain model

use serde::{Deserialize, Serialize};

/// One publication from the works feed.
///
/// Every field except `title` may be empty; consumers of the snapshot
/// must treat them as potentially empty strings. Year, month and day
/// are kept as the plain digit tokens the feed carries rather than
/// parsed integers, since granularity varies per record (year-only
/// dates are common).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRecord {
    pub title: String,
    pub journal: String,
    /// 4-digit year, or empty when the record is undated
    pub year: String,
    /// 1-2 digit month, or empty
    pub month: String,
    /// 1-2 digit day, or empty
    pub day: String,
    /// First DOI-scheme external identifier found in the group
    pub doi: String,
    /// Comma-joined credit names in document order
    pub authors: String,
    /// Resolver link derived from `doi`; empty iff `doi` is empty
    pub url: String,
}
