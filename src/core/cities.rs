use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::Coordinates;

/// Reference coordinates for the cities served by the platform
///
/// Built once at first use and never mutated, so it is safe to share across
/// request handlers without locking.
static CITY_COORDS: LazyLock<HashMap<&'static str, Coordinates>> = LazyLock::new(|| {
    HashMap::from([
        ("Kathmandu", Coordinates::new(27.7172, 85.3240)),
        ("Lalitpur", Coordinates::new(27.6644, 85.3188)),
        ("Bhaktapur", Coordinates::new(27.6710, 85.4298)),
        ("Pokhara", Coordinates::new(28.2096, 83.9856)),
        ("Butwal", Coordinates::new(27.7000, 83.4500)),
        ("Biratnagar", Coordinates::new(26.4525, 87.2718)),
        ("Hetauda", Coordinates::new(27.4289, 85.0322)),
        ("Dharan", Coordinates::new(26.8122, 87.2836)),
        ("Janakpur", Coordinates::new(26.7083, 85.9230)),
        ("Birgunj", Coordinates::new(27.0000, 84.8667)),
        ("Nepalgunj", Coordinates::new(28.0583, 81.6174)),
        ("Mahendranagar", Coordinates::new(29.0556, 80.5144)),
        ("Chitwan", Coordinates::new(27.5292, 84.3542)),
    ])
});

/// Normalize a free-text city name to its canonical form
///
/// Strips everything outside `[A-Za-z0-9 ]`, trims surrounding whitespace
/// and title-cases each word. Returns `None` when nothing is left.
pub fn normalize_city(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    Some(title_case(cleaned))
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve a free-text city name to its canonical name and coordinates
///
/// Lookup is an exact match after normalization; there is no fuzzy or
/// partial matching. `None` means the city is unknown or the input was
/// missing or empty.
pub fn resolve_city(raw: Option<&str>) -> Option<(String, Coordinates)> {
    let canonical = normalize_city(raw?)?;
    let coordinates = CITY_COORDS.get(canonical.as_str()).copied()?;
    Some((canonical, coordinates))
}

/// Look up the reference coordinates for an already-canonical city name
pub fn city_coordinates(canonical: &str) -> Option<Coordinates> {
    CITY_COORDS.get(canonical).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_punctuation_and_case() {
        assert_eq!(normalize_city("  kathmandu!! ").as_deref(), Some("Kathmandu"));
        assert_eq!(normalize_city("POKHARA").as_deref(), Some("Pokhara"));
        assert_eq!(normalize_city("lalit-pur").as_deref(), Some("Lalitpur"));
    }

    #[test]
    fn normalization_is_idempotent() {
        let variants = ["Kathmandu", "kathmandu", " KATHMANDU. ", "kath-mandu"];
        for v in variants {
            assert_eq!(normalize_city(v).as_deref(), Some("Kathmandu"));
        }
    }

    #[test]
    fn empty_input_yields_none() {
        assert_eq!(normalize_city(""), None);
        assert_eq!(normalize_city("  !!! "), None);
        assert_eq!(resolve_city(None), None);
        assert_eq!(resolve_city(Some("")), None);
    }

    #[test]
    fn known_city_resolves() {
        let (name, coords) = resolve_city(Some("  kathmandu!! ")).unwrap();
        assert_eq!(name, "Kathmandu");
        assert!((coords.latitude - 27.7172).abs() < 1e-9);
        assert!((coords.longitude - 85.3240).abs() < 1e-9);
    }

    #[test]
    fn unknown_city_does_not_resolve() {
        assert!(resolve_city(Some("Atlantis")).is_none());
    }

    #[test]
    fn lookup_is_exact_after_normalization() {
        // No fuzzy matching: a prefix of a known city stays unresolved
        assert!(resolve_city(Some("Kath")).is_none());
        assert!(city_coordinates("kathmandu").is_none());
        assert!(city_coordinates("Kathmandu").is_some());
    }
}
