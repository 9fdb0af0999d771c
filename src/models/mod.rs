// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Coordinates, DonorId, LocationValue, NormalizedDonor, NumericValue, Priority, RankedMatch,
    RawDonor,
};
pub use requests::{MatchRequest, PriorityRequest};
pub use responses::{ErrorResponse, HealthResponse, MatchResponse, PriorityResponse};
