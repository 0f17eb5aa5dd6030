//! ORCID public API client
//!
//! API docs: https://pub.orcid.org/v3.0
//! No authentication; single best-effort request, no retry.

use crate::error::SyncError;
use crate::http::{HttpClient, HttpError};
use crate::identifiers::is_valid_orcid_id;

pub const ORCID_API_BASE: &str = "https://pub.orcid.org/v3.0";

pub struct OrcidClient {
    client: HttpClient,
    base_url: String,
}

impl OrcidClient {
    pub fn new() -> Self {
        Self {
            client: HttpClient::new("orcid-sync/0.1"),
            base_url: ORCID_API_BASE.to_string(),
        }
    }

    /// Point the client at a different endpoint (tests, mirrors).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: HttpClient::default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the raw works listing XML for one researcher. The iD is
    /// validated up front so a typo fails fast instead of producing a
    /// registry 404.
    pub async fn fetch_works(&self, orcid_id: &str) -> Result<String, SyncError> {
        if !is_valid_orcid_id(orcid_id) {
            return Err(SyncError::InvalidId {
                id: orcid_id.to_string(),
            });
        }

        let url = format!("{}/{}/works", self.base_url, orcid_id);
        tracing::debug!(%url, "fetching works listing");

        let response = self.client.get(&url).await?;
        if response.status != 200 {
            return Err(HttpError::Status {
                status: response.status,
            }
            .into());
        }

        Ok(response.body)
    }
}

impl Default for OrcidClient {
    fn default() -> Self {
        Self::new()
    }
}
