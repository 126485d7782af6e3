//! # Grillz Models
//!
//! Request and response DTOs for the Grillz quote API.
//!
//! # Modules
//!
//! - [`quotes`]: Estimate and offer payloads
//! - [`health`]: Liveness response
//!
//! # Example
//!
//! ```ignore
//! use grillz_models::{Arch, EstimateRequest};
//!
//! let request: EstimateRequest = serde_json::from_str(
//!     r#"{"arch": "upper", "selected_teeth": ["U1", "U2"]}"#,
//! )?;
//! assert_eq!(request.arch, Arch::Upper);
//! ```

pub mod health;
pub mod quotes;

// Re-export commonly used types at crate root for convenience
pub use health::HealthResponse;
pub use quotes::{
    Arch, EstimateRequest, EstimateResponse, LineItem, MetalType, PerToothRequest,
    SendOfferRequest, SendOfferResponse,
};
