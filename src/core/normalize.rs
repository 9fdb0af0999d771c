use crate::core::cities::{city_coordinates, normalize_city};
use crate::models::{Coordinates, LocationValue, NormalizedDonor, RawDonor};

/// Convert a raw donor record into its canonical form
///
/// Location is resolved from the first source that yields both coordinates:
///
/// 1. a two-element `[latitude, longitude]` pair in the `location` field,
/// 2. explicit `latitude`/`longitude` fields,
/// 3. a city name looked up in the coordinate table.
///
/// Records that cannot be resolved return `None` and are excluded from the
/// candidate pool; one bad record never aborts a batch.
pub fn normalize_donor(raw: &RawDonor) -> Option<NormalizedDonor> {
    let (coordinates, city) = resolve_location(raw)?;

    Some(NormalizedDonor {
        id: raw.id.clone(),
        name: raw.name.clone().or_else(|| raw.email.clone()),
        city,
        coordinates,
        blood_group: raw.blood_group.clone(),
        last_donation_date: raw.last_donation_date.clone(),
    })
}

/// Pure resolution of a raw record to coordinates plus a display label
///
/// The label is informational only and never re-validated: it is the raw
/// city string unless the coordinate table was consulted, in which case it
/// is the canonical name.
fn resolve_location(raw: &RawDonor) -> Option<(Coordinates, Option<String>)> {
    // 1. Ordered coordinate pair. A malformed element drops the record
    //    rather than falling through to a different source.
    if let Some(LocationValue::Pair(pair)) = &raw.location {
        if pair.len() >= 2 {
            let latitude = pair[0].as_f64()?;
            let longitude = pair[1].as_f64()?;
            return Some((
                Coordinates::new(latitude, longitude),
                raw.city.clone(),
            ));
        }
    }

    let label = city_label(raw);

    // 2. Explicit latitude/longitude fields. Blank strings count as absent;
    //    present but non-numeric values drop the record.
    let latitude = raw.latitude.as_ref().filter(|v| !v.is_blank());
    let longitude = raw.longitude.as_ref().filter(|v| !v.is_blank());
    if let (Some(latitude), Some(longitude)) = (latitude, longitude) {
        let latitude = latitude.as_f64()?;
        let longitude = longitude.as_f64()?;
        return Some((Coordinates::new(latitude, longitude), label));
    }

    // 3. City name via the coordinate table
    if let Some(city) = &label {
        if let Some(canonical) = normalize_city(city) {
            if let Some(coordinates) = city_coordinates(&canonical) {
                return Some((coordinates, Some(canonical)));
            }
        }
    }

    None
}

/// Whichever city-like string the record carries, in resolution order
fn city_label(raw: &RawDonor) -> Option<String> {
    if let Some(LocationValue::City(city)) = &raw.location {
        return Some(city.clone());
    }
    raw.city.clone()
}
