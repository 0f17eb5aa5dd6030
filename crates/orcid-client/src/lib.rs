//! orcid-client: fetch and snapshot a researcher's ORCID works
//!
//! This library implements the full pipeline behind the `orcid-sync`
//! binary:
//! - Fetching the public works listing for an ORCID iD
//! - Tolerant extraction of work records from the activities XML
//! - Text normalization (entity decoding, markup stripping)
//! - Recency filtering and deterministic ordering
//! - Writing the `publications.json` snapshot
//!
//! The extractor is deliberately a best-effort regional scanner, not a
//! grammar-aware XML parser: the registry schema is versioned and
//! stable, and locally-scoped patterns survive attribute and structure
//! drift that would trip a strict parser. The trade-off is that it
//! cannot detect structurally invalid input; see [`scan`].

pub mod client;
pub mod error;
pub mod filter;
pub mod http;
pub mod identifiers;
pub mod record;
pub mod scan;
pub mod snapshot;
pub mod text;

// Re-export the pipeline surface for convenience
pub use client::OrcidClient;
pub use error::SyncError;
pub use filter::{select, RECENCY_WINDOW_YEARS};
pub use identifiers::{doi_url, is_valid_orcid_id, DOI_RESOLVER};
pub use record::WorkRecord;
pub use scan::scan_works;
pub use snapshot::Snapshot;
pub use text::normalize;
