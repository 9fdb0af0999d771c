use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Donor identifier as supplied by the caller or registry
///
/// Registries disagree on whether ids are numbers or strings, so both are
/// accepted and echoed back unchanged in the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DonorId {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

/// A value that may arrive as a JSON number or as a numeric string
///
/// Coordinate fields from upstream registries come in both encodings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Number(f64),
    Text(String),
    /// Anything else (null, bool, nested structure); never coercible
    Other(serde_json::Value),
}

impl NumericValue {
    /// Coerce to a float. Returns `None` for empty or non-numeric strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Other(_) => None,
        }
    }

    /// A blank string counts as an absent value, not a malformed one
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Number(_) => false,
            Self::Text(s) => s.trim().is_empty(),
            Self::Other(_) => false,
        }
    }
}

/// The `location` field of a donor record: either an ordered
/// `[latitude, longitude]` pair or a city name
///
/// Unrecognized shapes are preserved as `Other` so one odd record drops on
/// its own during normalization instead of failing the whole payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationValue {
    Pair(Vec<NumericValue>),
    City(String),
    Other(serde_json::Value),
}

/// A donor record as supplied by the caller or the registry
///
/// Every field is optional; location information may appear in any of the
/// three encodings handled by [`crate::core::normalize`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawDonor {
    #[serde(default)]
    pub id: Option<DonorId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub last_donation_date: Option<String>,
    #[serde(default)]
    pub location: Option<LocationValue>,
    #[serde(default, alias = "lat")]
    pub latitude: Option<NumericValue>,
    #[serde(default, alias = "lon")]
    pub longitude: Option<NumericValue>,
    #[serde(default, alias = "city_name")]
    pub city: Option<String>,
}

/// A donor with fully resolved coordinates
///
/// Invariant: every `NormalizedDonor` in a candidate pool carries a valid
/// coordinate pair; partially resolved records are dropped during
/// normalization and never reach the ranker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedDonor {
    pub id: Option<DonorId>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub coordinates: Coordinates,
    pub blood_group: Option<String>,
    pub last_donation_date: Option<String>,
}

/// A ranked shortlist entry returned to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    pub id: Option<DonorId>,
    pub name: Option<String>,
    pub city: Option<String>,
    pub distance_km: f64,
    pub blood_group: Option<String>,
}

/// Urgency class assigned to a blood request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_value_coercion() {
        assert_eq!(NumericValue::Number(27.7).as_f64(), Some(27.7));
        assert_eq!(NumericValue::Text("85.324".into()).as_f64(), Some(85.324));
        assert_eq!(NumericValue::Text("  28.2 ".into()).as_f64(), Some(28.2));
        assert_eq!(NumericValue::Text("north".into()).as_f64(), None);
    }

    #[test]
    fn blank_strings_are_absent() {
        assert!(NumericValue::Text("   ".into()).is_blank());
        assert!(!NumericValue::Text("27.7".into()).is_blank());
        assert!(!NumericValue::Number(0.0).is_blank());
    }

    #[test]
    fn donor_deserializes_pair_location() {
        let donor: RawDonor =
            serde_json::from_str(r#"{"id": 1, "location": [27.7172, 85.324]}"#).unwrap();
        match donor.location {
            Some(LocationValue::Pair(pair)) => assert_eq!(pair.len(), 2),
            other => panic!("expected coordinate pair, got {:?}", other),
        }
        assert_eq!(donor.id, Some(DonorId::Number(1)));
    }

    #[test]
    fn donor_deserializes_string_location() {
        let donor: RawDonor = serde_json::from_str(r#"{"location": "Pokhara"}"#).unwrap();
        match donor.location {
            Some(LocationValue::City(city)) => assert_eq!(city, "Pokhara"),
            other => panic!("expected city name, got {:?}", other),
        }
    }

    #[test]
    fn donor_accepts_short_coordinate_aliases() {
        let donor: RawDonor = serde_json::from_str(r#"{"lat": "27.7", "lon": 85.3}"#).unwrap();
        assert_eq!(donor.latitude.unwrap().as_f64(), Some(27.7));
        assert_eq!(donor.longitude.unwrap().as_f64(), Some(85.3));
    }

    #[test]
    fn priority_serializes_as_capitalized_word() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), r#""High""#);
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), r#""Low""#);
    }
}
