use std::time::Duration;

use crate::models::{DonorId, LocationValue, MatchRequest, NumericValue, RawDonor};
use crate::services::registry::RegistryClient;

/// Supplies the raw donor pool for a match request
///
/// Sources are tried in a fixed precedence order:
///
/// 1. a non-empty donor list in the request payload, used verbatim;
/// 2. the remote registry, when an endpoint is known from the request or
///    the process configuration; any failure degrades to an empty pool;
/// 3. a small built-in sample, so the matcher is exercisable with no
///    configuration at all.
pub struct DonorSource {
    registry: RegistryClient,
    registry_url: Option<String>,
    registry_token: Option<String>,
}

impl DonorSource {
    pub fn new(
        registry_url: Option<String>,
        registry_token: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            registry: RegistryClient::new(timeout),
            registry_url,
            registry_token,
        }
    }

    /// Obtain the donor pool for one match request
    ///
    /// Never fails: registry unavailability is logged and produces an empty
    /// pool, exactly once per request, with no retry.
    pub async fn fetch(&self, request: &MatchRequest) -> Vec<RawDonor> {
        if let Some(donors) = &request.donors {
            if !donors.is_empty() {
                tracing::debug!("using {} caller-supplied donors", donors.len());
                return donors.clone();
            }
        }

        let url = request
            .backend_url
            .as_deref()
            .or(self.registry_url.as_deref());
        let token = request
            .backend_token
            .as_deref()
            .or(self.registry_token.as_deref());

        if let Some(url) = url {
            return match self.registry.fetch_donors(url, token).await {
                Ok(donors) => {
                    if donors.is_empty() {
                        tracing::debug!("registry returned zero donors");
                    }
                    donors
                }
                Err(e) => {
                    tracing::warn!("registry fetch failed, proceeding with empty pool: {}", e);
                    Vec::new()
                }
            };
        }

        tracing::debug!("no registry configured, using built-in sample donors");
        sample_donors()
    }
}

/// Built-in fallback pool spanning the three valley cities
pub fn sample_donors() -> Vec<RawDonor> {
    vec![
        sample_donor(1, "Donor A", "Kathmandu", 27.7172, 85.3240),
        sample_donor(2, "Donor B", "Lalitpur", 27.6644, 85.3188),
        sample_donor(3, "Donor C", "Bhaktapur", 27.6710, 85.4298),
    ]
}

fn sample_donor(id: i64, name: &str, city: &str, latitude: f64, longitude: f64) -> RawDonor {
    RawDonor {
        id: Some(DonorId::Number(id)),
        name: Some(name.to_string()),
        city: Some(city.to_string()),
        location: Some(LocationValue::Pair(vec![
            NumericValue::Number(latitude),
            NumericValue::Number(longitude),
        ])),
        ..RawDonor::default()
    }
}
