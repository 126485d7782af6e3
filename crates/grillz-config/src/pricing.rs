//! Price table for estimates.
//!
//! # Environment Variables
//!
//! - `CURRENCY`: ISO currency code (default: `USD`)
//! - `BASE_PRICE_PER_TOOTH`: Base price per selected tooth (default: 50)
//! - `ARCH_FEE_UPPER` / `ARCH_FEE_LOWER`: Flat fee per arch (default: 0)
//! - `ADDON_OPEN_FACE`, `ADDON_HEART`, `ADDON_BAR`: Add-on prices (default: 20, 20, 0)
//! - `ADDON_PRICES`: Extra or overriding entries as `id=price,id=price`
//! - `DISCLAIMER`: Text attached to every estimate
//!
//! Prices must be non-negative decimals; anything else falls back to the
//! default and is logged.

use std::collections::BTreeMap;

use grillz_core::money::parse_price;
use rust_decimal::Decimal;

use crate::non_empty;

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_DISCLAIMER: &str =
    "Estimate only. Final details and pricing are confirmed after review.";

/// Add-ons the storefront offers out of the box, with their env override
/// and default price.
const BUILTIN_ADDONS: [(&str, &str, i64); 3] = [
    ("open_face", "ADDON_OPEN_FACE", 20),
    ("heart", "ADDON_HEART", 20),
    ("bar", "ADDON_BAR", 0),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricingConfig {
    pub currency: String,
    pub base_price_per_tooth: Decimal,
    pub arch_fee_upper: Decimal,
    pub arch_fee_lower: Decimal,
    /// Add-on id to unit price. Ids not listed here price at zero.
    pub addon_prices: BTreeMap<String, Decimal>,
    pub disclaimer: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.to_string(),
            base_price_per_tooth: Decimal::from(50),
            arch_fee_upper: Decimal::ZERO,
            arch_fee_lower: Decimal::ZERO,
            addon_prices: BUILTIN_ADDONS
                .iter()
                .map(|(id, _, price)| (id.to_string(), Decimal::from(*price)))
                .collect(),
            disclaimer: DEFAULT_DISCLAIMER.to_string(),
        }
    }
}

impl PricingConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let mut addon_prices = BTreeMap::new();
        for (id, key, default) in BUILTIN_ADDONS {
            let price = price_or(&lookup, key, Decimal::from(default));
            addon_prices.insert(id.to_string(), price);
        }
        if let Some(raw) = non_empty(&lookup, "ADDON_PRICES") {
            addon_prices.extend(parse_addon_list(&raw));
        }

        Self {
            currency: non_empty(&lookup, "CURRENCY").unwrap_or(defaults.currency),
            base_price_per_tooth: price_or(
                &lookup,
                "BASE_PRICE_PER_TOOTH",
                defaults.base_price_per_tooth,
            ),
            arch_fee_upper: price_or(&lookup, "ARCH_FEE_UPPER", defaults.arch_fee_upper),
            arch_fee_lower: price_or(&lookup, "ARCH_FEE_LOWER", defaults.arch_fee_lower),
            addon_prices,
            disclaimer: non_empty(&lookup, "DISCLAIMER").unwrap_or(defaults.disclaimer),
        }
    }

    /// Unit price of an add-on; unknown ids are free.
    pub fn addon_price(&self, addon: &str) -> Decimal {
        self.addon_prices
            .get(addon)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }
}

fn price_or<F>(lookup: &F, key: &str, default: Decimal) -> Decimal
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, key) {
        Some(raw) => parse_price(&raw).unwrap_or_else(|| {
            tracing::warn!(key, value = %raw, "Invalid price, using default");
            default
        }),
        None => default,
    }
}

fn parse_addon_list(raw: &str) -> Vec<(String, Decimal)> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| {
            let parsed = entry
                .split_once('=')
                .map(|(id, price)| (id.trim(), parse_price(price)))
                .and_then(|(id, price)| match (id.is_empty(), price) {
                    (false, Some(price)) => Some((id.to_string(), price)),
                    _ => None,
                });
            if parsed.is_none() {
                tracing::warn!(entry, "Ignoring malformed ADDON_PRICES entry");
            }
            parsed
        })
        .collect()
}
