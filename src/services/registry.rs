use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::models::RawDonor;

/// Errors that can occur when reading from the donor registry
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("registry returned status {0}")]
    BadStatus(reqwest::StatusCode),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// HTTP client for the remote donor registry
///
/// Issues a single bounded-timeout read per match request; callers treat
/// any failure as an empty donor pool rather than an error.
pub struct RegistryClient {
    client: Client,
}

impl RegistryClient {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch the donor list from `<base_url>/api/donors`
    ///
    /// Sends `Authorization: Bearer <token>` when a token is supplied.
    /// Entries that do not look like donor records are skipped
    /// individually; a malformed entry never discards the whole list.
    pub async fn fetch_donors(
        &self,
        base_url: &str,
        token: Option<&str>,
    ) -> Result<Vec<RawDonor>, RegistryError> {
        let url = format!("{}/api/donors", base_url.trim_end_matches('/'));

        tracing::debug!("fetching donors from registry: {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(RegistryError::BadStatus(response.status()));
        }

        let json: Value = response.json().await?;
        let entries = json
            .as_array()
            .ok_or_else(|| RegistryError::InvalidResponse("expected a JSON array".into()))?;

        let donors: Vec<RawDonor> = entries
            .iter()
            .filter_map(|entry| serde_json::from_value(entry.clone()).ok())
            .collect();

        tracing::debug!(
            "registry returned {} donor records ({} entries)",
            donors.len(),
            entries.len()
        );

        Ok(donors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        // Construction must not touch the network
        let _client = RegistryClient::new(Duration::from_secs(5));
    }
}
