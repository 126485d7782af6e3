//! Currency amounts are `Decimal`s rounded to cents with banker's rounding.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places every amount is rounded to.
pub const MONEY_SCALE: u32 = 2;

/// Rounds an amount to cents, ties to even.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Renders an amount with exactly two decimals, e.g. `100.00`.
pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = round_money(amount);
    rounded.rescale(MONEY_SCALE);
    rounded.to_string()
}

/// Parses a non-negative price such as `"50"` or `"19.99"`.
pub fn parse_price(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim())
        .ok()
        .filter(|value| !value.is_sign_negative())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_money_ties_to_even() {
        assert_eq!(round_money(dec!(0.125)), dec!(0.12));
        assert_eq!(round_money(dec!(0.135)), dec!(0.14));
        assert_eq!(round_money(dec!(10.004)), dec!(10.00));
    }

    #[test]
    fn test_format_amount_pads() {
        assert_eq!(format_amount(dec!(100)), "100.00");
        assert_eq!(format_amount(dec!(7.5)), "7.50");
        assert_eq!(format_amount(dec!(0)), "0.00");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("50"), Some(dec!(50)));
        assert_eq!(parse_price(" 19.99 "), Some(dec!(19.99)));
        assert_eq!(parse_price("-1"), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price(""), None);
    }
}
