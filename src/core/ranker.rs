use std::cmp::Ordering;

use crate::core::distance::haversine_distance;
use crate::models::{Coordinates, NormalizedDonor, RankedMatch};

/// Rank donors by great-circle distance from the request origin
///
/// Returns at most `k` entries, ascending by distance. The sort is stable,
/// so ties keep their original input order. A pool smaller than `k` is
/// returned whole; the result is never padded.
pub fn rank_donors(origin: Coordinates, donors: &[NormalizedDonor], k: usize) -> Vec<RankedMatch> {
    let mut ranked: Vec<RankedMatch> = donors
        .iter()
        .map(|donor| RankedMatch {
            id: donor.id.clone(),
            name: donor.name.clone(),
            city: donor.city.clone(),
            distance_km: haversine_distance(origin, donor.coordinates),
            blood_group: donor.blood_group.clone(),
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(k);

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donor_at(id: i64, latitude: f64, longitude: f64) -> NormalizedDonor {
        NormalizedDonor {
            id: Some(crate::models::DonorId::Number(id)),
            name: Some(format!("Donor {}", id)),
            city: None,
            coordinates: Coordinates::new(latitude, longitude),
            blood_group: Some("O+".to_string()),
            last_donation_date: None,
        }
    }

    const KATHMANDU: Coordinates = Coordinates::new(27.7172, 85.3240);

    #[test]
    fn orders_ascending_by_distance() {
        let donors = vec![
            donor_at(1, 28.2096, 83.9856), // Pokhara, ~142 km
            donor_at(2, 27.6644, 85.3188), // Lalitpur, ~6 km
            donor_at(3, 27.6710, 85.4298), // Bhaktapur, ~12 km
        ];

        let ranked = rank_donors(KATHMANDU, &donors, 10);

        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].distance_km <= pair[1].distance_km);
        }
        assert_eq!(ranked[0].id, Some(crate::models::DonorId::Number(2)));
    }

    #[test]
    fn truncates_to_k() {
        let donors: Vec<NormalizedDonor> = (0..20)
            .map(|i| donor_at(i, 27.7172 + (i as f64) * 0.01, 85.3240))
            .collect();

        assert_eq!(rank_donors(KATHMANDU, &donors, 5).len(), 5);
        assert_eq!(rank_donors(KATHMANDU, &donors, 0).len(), 0);
    }

    #[test]
    fn small_pool_returned_whole() {
        let donors = vec![donor_at(1, 27.6644, 85.3188)];
        assert_eq!(rank_donors(KATHMANDU, &donors, 10).len(), 1);
    }

    #[test]
    fn self_distance_is_zero() {
        let donors = vec![donor_at(1, 27.7172, 85.3240)];
        let ranked = rank_donors(KATHMANDU, &donors, 1);
        assert!(ranked[0].distance_km < 1e-6);
    }

    #[test]
    fn ties_keep_input_order() {
        // Two donors at the identical point: stable sort preserves order
        let donors = vec![
            donor_at(7, 27.6644, 85.3188),
            donor_at(8, 27.6644, 85.3188),
        ];

        let ranked = rank_donors(KATHMANDU, &donors, 2);
        assert_eq!(ranked[0].id, Some(crate::models::DonorId::Number(7)));
        assert_eq!(ranked[1].id, Some(crate::models::DonorId::Number(8)));
    }
}
