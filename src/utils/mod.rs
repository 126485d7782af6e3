//! Utility modules for the Grillz quote API.
//!
//! - [`email`]: Outbound mail seam and the SMTP implementation
//! - [`errors`]: Error response schema and the shared [`errors::AppError`]

pub mod email;
pub mod errors;
