//! Rate limiting configuration for the offer endpoint.
//!
//! Sending an offer triggers outbound email, so it is throttled per client
//! IP. Estimates are cheap and stay unthrottled.
//!
//! # Configuration
//!
//! - `RATE_LIMIT_ENABLED`: Turn throttling on or off (default: true)
//! - `RATE_LIMIT_OFFER_PER_SECOND`: Seconds between token replenishments (default: 1)
//! - `RATE_LIMIT_OFFER_BURST_SIZE`: Burst size (default: 5)
//!
//! # Rate Limiting Strategy
//!
//! The rate limiter uses a token bucket algorithm:
//!
//! - One token is added every `offer_per_second` seconds
//! - Each request consumes one token
//! - Burst size defines the maximum tokens that can accumulate
//! - Requests are rejected with 429 when no tokens are available
//!
//! The client key comes from `X-Forwarded-For`, `X-Real-IP` or `Forwarded`
//! when a proxy sets them, otherwise from the peer address.

use governor::middleware::NoOpMiddleware;
use tower_governor::governor::{GovernorConfig, GovernorConfigBuilder};
use tower_governor::key_extractor::SmartIpKeyExtractor;

use crate::{flag_or, parsed_or};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub enabled: bool,

    /// Replenishment interval in seconds for the offer endpoint.
    pub offer_per_second: u64,

    /// Maximum number of offers a client can send back to back.
    pub offer_burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            offer_per_second: 1,
            offer_burst_size: 5,
        }
    }
}

impl RateLimitConfig {
    /// Falls back to default values if environment variables are not set
    /// or cannot be parsed.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            enabled: flag_or(&lookup, "RATE_LIMIT_ENABLED", defaults.enabled),
            offer_per_second: parsed_or(
                &lookup,
                "RATE_LIMIT_OFFER_PER_SECOND",
                defaults.offer_per_second,
            ),
            offer_burst_size: parsed_or(
                &lookup,
                "RATE_LIMIT_OFFER_BURST_SIZE",
                defaults.offer_burst_size,
            ),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Builds the governor config for the offer endpoint.
    ///
    /// Returns `None` when throttling is disabled or the configured values
    /// are zero, which governor rejects.
    #[must_use]
    pub fn offer_governor_config(
        &self,
    ) -> Option<GovernorConfig<SmartIpKeyExtractor, NoOpMiddleware>> {
        if !self.enabled {
            return None;
        }

        GovernorConfigBuilder::default()
            .per_second(self.offer_per_second)
            .burst_size(self.offer_burst_size)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
    }
}
