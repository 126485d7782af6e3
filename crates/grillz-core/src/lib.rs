//! # Grillz Core
//!
//! Core types, errors, and utilities for the Grillz quote API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`money`]: Fixed-point currency rounding
//! - [`serde`]: Custom serde deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use grillz_core::errors::AppError;
//! use grillz_core::money::round_money;
//!
//! let error = AppError::bad_request(anyhow::anyhow!("per_tooth tooth_id 'U2' is not in selected_teeth"));
//! let amount = round_money(dec!(19.995));
//! ```

pub mod errors;
pub mod money;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use money::{format_amount, round_money};
