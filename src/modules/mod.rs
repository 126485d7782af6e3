pub mod estimates;
pub mod health;
pub mod offers;

pub use self::estimates::{EstimateService, ValidationError};
pub use self::offers::OfferService;
