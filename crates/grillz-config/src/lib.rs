//! # Grillz Config
//!
//! Configuration types for the Grillz quote API.
//!
//! Every structure here is built once at startup from environment variables
//! and then passed explicitly to whatever needs it:
//!
//! - [`pricing`]: Price table, currency and disclaimer for estimates
//! - [`email`]: SMTP and recipient settings for offer notifications
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`rate_limit`]: Rate limiting for the offer endpoint
//! - [`server`]: Listen address
//!
//! Each type offers `from_env()` plus `from_lookup()`, which takes any
//! `Fn(&str) -> Option<String>` and is what the tests use.
//!
//! # Example
//!
//! ```ignore
//! use grillz_config::{CorsConfig, EmailConfig, PricingConfig};
//!
//! let pricing = PricingConfig::from_env();
//! let email = EmailConfig::from_env();
//! let cors = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod email;
pub mod pricing;
pub mod rate_limit;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use email::EmailConfig;
pub use pricing::PricingConfig;
pub use rate_limit::RateLimitConfig;
pub use server::ServerConfig;

/// Reads a variable and drops it when blank.
pub(crate) fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a variable, falling back to `default` with a warning when it is
/// set but unparseable.
pub(crate) fn parsed_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match non_empty(lookup, key) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Invalid value, using default");
            default
        }),
        None => default,
    }
}

/// Parses `true`/`1` (case-insensitive) as enabled.
pub(crate) fn flag_or<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, key)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(default)
}

#[cfg(test)]
pub(crate) fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: std::collections::HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}
