//! Randomized listing parameters.

pub mod constants;
mod seed;
mod step_range;

pub use seed::ListingSeed;
pub use step_range::StepRange;

use crate::{listing::ListingParams, Result};
use alloy::primitives::U256;
use constants::*;
use rand::{rngs::StdRng, Rng};

/// Bounds the generator draws durations and prices from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingBounds {
    /// Seconds.
    pub duration: StepRange,
    /// Wei per second.
    pub price_per_second: StepRange,
}

impl ListingBounds {
    pub fn new(duration: StepRange, price_per_second: StepRange) -> Self {
        Self {
            duration,
            price_per_second,
        }
    }

    /// Durations of 3 to 15 days on a 12 hour grid; prices of 0.1 to 5 ether per
    /// day on a 0.2 ether per day grid.
    pub fn defaults() -> Result<Self> {
        Ok(Self {
            duration: StepRange::new(
                U256::from(MIN_DURATION_SECS),
                U256::from(MAX_DURATION_SECS),
                U256::from(DURATION_STEP_SECS),
            )?,
            price_per_second: StepRange::new(
                U256::from(MIN_PRICE_PER_SECOND),
                U256::from(MAX_PRICE_PER_SECOND),
                U256::from(PRICE_STEP_PER_SECOND),
            )?,
        })
    }
}

/// Draws a fresh [`ListingParams`] for every token. Payment token and private
/// renter are never randomized: every listing is public and priced in the
/// native currency.
#[derive(Debug)]
pub struct ListingGenerator<R = StdRng> {
    bounds: ListingBounds,
    rng: R,
}

impl<R: Rng> ListingGenerator<R> {
    pub fn new(bounds: ListingBounds, rng: R) -> Self {
        Self { bounds, rng }
    }

    pub fn bounds(&self) -> &ListingBounds {
        &self.bounds
    }

    pub fn next_listing(&mut self) -> ListingParams {
        let max_time_duration = self.bounds.duration.sample(&mut self.rng);
        let price_per_second = self.bounds.price_per_second.sample(&mut self.rng);
        ListingParams::native_public(max_time_duration, price_per_second)
    }
}

impl ListingGenerator<StdRng> {
    pub fn seeded(bounds: ListingBounds, seed: &ListingSeed) -> Self {
        Self::new(bounds, seed.rng())
    }
}

#[cfg(test)]
mod tests {
    use super::{constants::*, ListingBounds, ListingGenerator, ListingSeed};
    use alloy::primitives::{Address, U256};

    fn generator(seed: &str) -> ListingGenerator {
        ListingGenerator::seeded(
            ListingBounds::defaults().unwrap(),
            &ListingSeed::from_str_lossy(seed),
        )
    }

    #[test]
    fn durations_within_bounds_on_half_day_grid() {
        let mut listings = generator("1");
        for _ in 0..1_000 {
            let d = listings.next_listing().max_time_duration;
            assert!(d >= U256::from(3 * DAY));
            assert!(d < U256::from(15 * DAY));
            assert_eq!((d - U256::from(3 * DAY)) % U256::from(DAY / 2), U256::ZERO);
        }
    }

    #[test]
    fn prices_within_bounds_on_grid() {
        let mut listings = generator("2");
        let min = U256::from(MIN_PRICE_PER_SECOND);
        let max = U256::from(MAX_PRICE_PER_SECOND);
        let step = U256::from(PRICE_STEP_PER_SECOND);
        for _ in 0..1_000 {
            let p = listings.next_listing().price_per_second;
            assert!(p >= min && p < max);
            assert_eq!((p - min) % step, U256::ZERO);
        }
    }

    #[test]
    fn fixed_fields_never_change() {
        let mut listings = generator("3");
        for _ in 0..100 {
            let listing = listings.next_listing();
            assert_eq!(listing.payment_token_id, U256::ZERO);
            assert_eq!(listing.payment_token_address, Address::ZERO);
            assert_eq!(listing.private_renter, Address::ZERO);
        }
    }

    #[test]
    fn seeded_generators_agree() {
        let mut a = generator("0xdeadbeef");
        let mut b = generator("0xdeadbeef");
        for _ in 0..20 {
            assert_eq!(a.next_listing(), b.next_listing());
        }
    }

    #[test]
    fn default_grids() {
        let bounds = ListingBounds::defaults().unwrap();
        assert_eq!(bounds.duration.num_steps(), 24);
        assert_eq!(bounds.price_per_second.num_steps(), 24);
    }
}
