//! # Grillz Quote API
//!
//! A small REST API built with Rust and Axum that prices custom grillz and
//! emails the resulting offer to the shop.
//!
//! ## Overview
//!
//! - **Estimates**: turn a selection of teeth and per-tooth add-ons into an
//!   itemized, deterministic price breakdown
//! - **Offers**: recompute the estimate server-side and email it to the
//!   owner, optionally with a receipt for the customer
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Helpers for the grillz-cli binary
//! ├── modules/          # Feature modules
//! │   ├── estimates/   # Validation and pricing
//! │   ├── offers/      # Recompute-then-email flow and templates
//! │   └── health/      # Liveness probe
//! └── utils/           # Mailer seam, error schema
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `router.rs`: Axum router configuration
//!
//! Configuration lives in `grillz-config`, DTOs in `grillz-models`, and the
//! error type and money helpers in `grillz-core`.
//!
//! ## Pricing
//!
//! An estimate is the sum of up to three line items, each rounded to cents:
//!
//! | Line | Amount | Shown |
//! |------|--------|-------|
//! | `Base (N teeth)` | base price x distinct selected teeth | always |
//! | `Arch fee (upper/lower/both)` | arch fee, both = upper + lower | when non-zero |
//! | `Add-ons` | sum of every per-tooth add-on price | when non-zero |
//!
//! Unknown add-on ids are priced at zero. Per-tooth entries must refer to a
//! selected tooth or the request is rejected with 400.
//!
//! ## Quick Start
//!
//! ```bash
//! BASE_PRICE_PER_TOOTH=50
//! ARCH_FEE_UPPER=0
//! ARCH_FEE_LOWER=0
//! SMTP_HOST=smtp.example.com
//! SMTP_USER=quotes@example.com
//! SMTP_PASS=app-password
//! EMAIL_TO=owner@example.com
//! ```
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:8000/swagger-ui`
//! - Scalar: `http://localhost:8000/scalar`
//!
//! ## Modules
//!
//! - [`cli`]: Command-line helpers
//! - [`docs`]: OpenAPI documentation setup
//! - [`logging`]: Tracing subscriber and request logging
//! - [`metrics`]: Prometheus metrics endpoint
//! - [`modules`]: Feature modules
//! - [`router`]: Main application router
//! - [`state`]: Shared application state
//! - [`utils`]: Shared utilities
//! - [`validator`]: Request validation extractor

pub mod cli;
pub mod docs;
pub mod logging;
pub mod metrics;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;

// Re-export workspace crates for convenience
pub use grillz_config;
pub use grillz_core;
pub use grillz_models;
