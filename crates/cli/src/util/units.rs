use alloy::primitives::{
    utils::{format_ether, parse_ether, UnitsError},
    U256,
};
use lister_core::generator::constants::DAY;

/// Converts an ether-per-day amount (e.g. `0.1`) to wei per second, truncating.
pub fn parse_ether_per_day(input: &str) -> Result<U256, UnitsError> {
    Ok(parse_ether(input.trim())? / U256::from(DAY))
}

/// Ether per day for a wei-per-second rate.
pub fn format_ether_per_day(wei_per_second: U256) -> String {
    format_ether(wei_per_second.saturating_mul(U256::from(DAY)))
}

#[cfg(test)]
mod tests {
    use super::{format_ether_per_day, parse_ether_per_day};
    use alloy::primitives::U256;
    use lister_core::generator::constants::*;

    #[test]
    fn converts_default_prices() {
        assert_eq!(
            parse_ether_per_day("0.1").unwrap(),
            U256::from(MIN_PRICE_PER_SECOND)
        );
        assert_eq!(
            parse_ether_per_day("5").unwrap(),
            U256::from(MAX_PRICE_PER_SECOND)
        );
        assert_eq!(
            parse_ether_per_day("0.2").unwrap(),
            U256::from(PRICE_STEP_PER_SECOND)
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_ether_per_day("cheap").is_err());
    }

    #[test]
    fn formats_per_day() {
        assert!(format_ether_per_day(U256::from(ETHER / DAY as u128)).starts_with("0.99999"));
    }
}
