// Service exports
pub mod donors;
pub mod registry;

pub use donors::{sample_donors, DonorSource};
pub use registry::{RegistryClient, RegistryError};
