use crate::core::cities::resolve_city;
use crate::core::normalize::normalize_donor;
use crate::core::ranker::rank_donors;
use crate::models::{Coordinates, MatchRequest, MatchResponse, NormalizedDonor, RankedMatch, RawDonor};

/// The requester's city after successful resolution
#[derive(Debug, Clone)]
pub struct ResolvedCity {
    pub name: String,
    pub coordinates: Coordinates,
}

/// Donor proximity matching orchestrator
///
/// Composes city resolution, donor normalization and distance ranking into
/// the single externally visible match operation. Every failure mode
/// degrades to a structured result; nothing here returns an error upward.
#[derive(Debug, Clone)]
pub struct Matcher {
    default_k: usize,
}

impl Matcher {
    pub fn new(default_k: usize) -> Self {
        Self { default_k }
    }

    /// Resolve the requester city from whichever key the caller used
    ///
    /// `None` means the match must terminate early with the invalid-city
    /// result, before any donor source is consulted.
    pub fn resolve_origin(&self, request: &MatchRequest) -> Option<ResolvedCity> {
        let (name, coordinates) = resolve_city(request.city.as_deref())?;
        Some(ResolvedCity { name, coordinates })
    }

    /// Normalize a raw donor pool and rank it around the origin
    ///
    /// Unresolvable records are dropped independently; one bad record never
    /// aborts the batch.
    pub fn rank_pool(&self, origin: Coordinates, donors: &[RawDonor], k: usize) -> Vec<RankedMatch> {
        let pool: Vec<NormalizedDonor> = donors.iter().filter_map(normalize_donor).collect();

        let dropped = donors.len() - pool.len();
        if dropped > 0 {
            tracing::debug!(
                "dropped {} of {} donor records with unresolvable coordinates",
                dropped,
                donors.len()
            );
        }

        rank_donors(origin, &pool, k)
    }

    /// Run the full match pipeline over an already-fetched donor pool
    pub fn match_request(&self, request: &MatchRequest, donors: &[RawDonor]) -> MatchResponse {
        let Some(origin) = self.resolve_origin(request) else {
            return MatchResponse::invalid_city();
        };

        let k = request.k.unwrap_or(self.default_k);
        let nearest = self.rank_pool(origin.coordinates, donors, k);

        tracing::debug!(
            "matched {} of {} donors for {}",
            nearest.len(),
            donors.len(),
            origin.name
        );

        MatchResponse::matches(nearest)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(5)
    }
}
