use serde::{Deserialize, Deserializer, Serialize};

use crate::models::domain::{NumericValue, RawDonor};

/// Request to match donors for a blood request
///
/// The requester city is accepted under any of the keys `city`, `location`
/// or `city_name` for backward compatibility with older clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchRequest {
    #[serde(default, alias = "location", alias = "city_name")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_k")]
    pub k: Option<usize>,
    #[serde(default)]
    pub donors: Option<Vec<RawDonor>>,
    #[serde(default)]
    pub backend_url: Option<String>,
    #[serde(default)]
    pub backend_token: Option<String>,
}

/// Shortlist sizes arrive as JSON numbers or numeric strings; anything else
/// is a caller error. Fractional values truncate, negative values are
/// rejected.
fn deserialize_k<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumericValue>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(v) => {
            let n = v
                .as_f64()
                .ok_or_else(|| serde::de::Error::custom("k must be a non-negative integer"))?;
            if n < 0.0 {
                return Err(serde::de::Error::custom("k must be a non-negative integer"));
            }
            Ok(Some(n as usize))
        }
    }
}

/// Request to classify the urgency of a blood request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriorityRequest {
    #[serde(default)]
    pub reason: Option<String>,
}
