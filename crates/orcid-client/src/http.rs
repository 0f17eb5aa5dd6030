//! HTTP client wrapper for registry requests

use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("request failed: {message}")]
    RequestFailed { message: String },
    #[error("unexpected status {status}")]
    Status { status: u16 },
    #[error("failed to read response body: {message}")]
    Body { message: String },
}

#[derive(Clone, Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// The registry does not enforce a timeout; we bound requests at
    /// 30 seconds so a stalled connection cannot hang the run.
    pub fn new(user_agent: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            user_agent: user_agent.to_string(),
        }
    }

    pub async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/xml")
            .send()
            .await
            .map_err(|e| HttpError::RequestFailed {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();

        let body = response.text().await.map_err(|e| HttpError::Body {
            message: e.to_string(),
        })?;

        Ok(HttpResponse { status, body })
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new("orcid-sync/0.1")
    }
}
