pub mod controller;
pub mod router;
pub mod service;

pub use router::init_estimates_router;
pub use service::{EstimateService, ValidationError};
