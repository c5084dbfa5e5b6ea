//! The marketplace lister: one transfer-with-data per token id, in order.

use crate::{
    generator::{
        constants::{DEFAULT_END_ID, DEFAULT_START_ID},
        ListingGenerator,
    },
    submitter::SubmitListing,
    Error, Result,
};
use alloy::primitives::U256;
use rand::{rngs::StdRng, Rng};
use std::{
    io::{Stdout, Write},
    ops::Range,
};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListerConfig {
    /// First token id to list.
    pub start_id: u64,
    /// One past the last token id to list.
    pub end_id: u64,
}

impl ListerConfig {
    pub fn token_ids(&self) -> Range<u64> {
        self.start_id..self.end_id
    }

    pub fn validate(&self) -> Result<()> {
        if self.start_id > self.end_id {
            return Err(Error::TokenRange(self.start_id, self.end_id));
        }
        Ok(())
    }
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            start_id: DEFAULT_START_ID,
            end_id: DEFAULT_END_ID,
        }
    }
}

/// Everything a listing run needs, passed in explicitly: the token range, the
/// parameter generator, the submitter (which owns the signing account and the
/// contract addresses) and where progress is printed.
pub struct Lister<S, R = StdRng, W = Stdout> {
    config: ListerConfig,
    generator: ListingGenerator<R>,
    submitter: S,
    progress: W,
}

impl<S, R> Lister<S, R, Stdout>
where
    S: SubmitListing,
    R: Rng,
{
    /// Prints progress to stdout; see [`Lister::with_progress`].
    pub fn new(
        config: ListerConfig,
        generator: ListingGenerator<R>,
        submitter: S,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            generator,
            submitter,
            progress: std::io::stdout(),
        })
    }
}

impl<S, R, W> Lister<S, R, W>
where
    S: SubmitListing,
    R: Rng,
    W: Write,
{
    pub fn with_progress<W2: Write>(self, progress: W2) -> Lister<S, R, W2> {
        Lister {
            config: self.config,
            generator: self.generator,
            submitter: self.submitter,
            progress,
        }
    }

    pub fn config(&self) -> &ListerConfig {
        &self.config
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub fn progress(&self) -> &W {
        &self.progress
    }

    /// Lists every token in `[start_id, end_id)` in ascending order, printing
    /// each id as it goes. Stops at the first failed submission and returns
    /// its error; tokens after it are never attempted.
    ///
    /// Returns the number of listings submitted.
    pub async fn run(&mut self) -> Result<u64> {
        info!(
            "listing tokens [{}, {})",
            self.config.start_id, self.config.end_id
        );

        let mut listed = 0;
        for token_id in self.config.token_ids() {
            writeln!(self.progress, "{token_id}")?;
            self.progress.flush()?;
            let listing = self.generator.next_listing();
            debug!("token {token_id}: {listing:?}");

            let tx_hash = self
                .submitter
                .submit_listing(U256::from(token_id), listing.encode())
                .await?;
            debug!("token {token_id} listed in tx {tx_hash}");
            listed += 1;
        }

        info!("listed {listed} tokens");
        Ok(listed)
    }
}

#[cfg(test)]
mod tests {
    use super::{Lister, ListerConfig};
    use crate::{
        error::Error,
        generator::{constants::*, ListingBounds, ListingGenerator, ListingSeed},
        listing::ListingParams,
        submitter::mock::MockSubmitter,
    };
    use rand::rngs::StdRng;
    use alloy::primitives::{Address, U256};

    fn lister(
        start_id: u64,
        end_id: u64,
        submitter: MockSubmitter,
    ) -> Lister<MockSubmitter, StdRng, Vec<u8>> {
        let generator = ListingGenerator::seeded(
            ListingBounds::defaults().unwrap(),
            &ListingSeed::from_str_lossy("1"),
        );
        let config = ListerConfig { start_id, end_id };
        Lister::new(config, generator, submitter)
            .unwrap()
            .with_progress(Vec::new())
    }

    fn ids(range: std::ops::Range<u64>) -> Vec<U256> {
        range.map(U256::from).collect()
    }

    #[test]
    fn defaults_match_deployment() {
        let config = ListerConfig::default();
        assert_eq!(config.token_ids(), DEFAULT_START_ID..DEFAULT_END_ID);
        assert_eq!(config.token_ids(), 2..243);
        assert!(config.validate().is_ok());
    }

    #[tokio::test]
    async fn single_token_range_submits_once() {
        let mut lister = lister(2, 3, MockSubmitter::new());
        let listed = lister.run().await.unwrap();
        assert_eq!(listed, 1);
        assert_eq!(String::from_utf8_lossy(lister.progress()), "2\n");

        let submitted = lister.submitter().submitted();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].0, U256::from(2));

        let listing = ListingParams::decode(&submitted[0].1).unwrap();
        assert!(listing.max_time_duration >= U256::from(MIN_DURATION_SECS));
        assert!(listing.max_time_duration < U256::from(MAX_DURATION_SECS));
        assert!(listing.price_per_second >= U256::from(MIN_PRICE_PER_SECOND));
        assert!(listing.price_per_second < U256::from(MAX_PRICE_PER_SECOND));
    }

    #[tokio::test]
    async fn submits_every_id_in_order() {
        let mut lister = lister(10, 30, MockSubmitter::new());
        assert_eq!(lister.run().await.unwrap(), 20);
        assert_eq!(lister.submitter().token_ids(), ids(10..30));

        let printed: Vec<u64> = String::from_utf8_lossy(lister.progress())
            .lines()
            .map(|l| l.parse().unwrap())
            .collect();
        assert_eq!(printed, (10..30).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn every_payload_is_public_native_listing() {
        let mut lister = lister(0, 50, MockSubmitter::new());
        lister.run().await.unwrap();
        for (_, data) in lister.submitter().submitted() {
            let listing = ListingParams::decode(&data).unwrap();
            assert_eq!(listing.payment_token_id, U256::ZERO);
            assert_eq!(listing.payment_token_address, Address::ZERO);
            assert_eq!(listing.private_renter, Address::ZERO);
        }
    }

    #[tokio::test]
    async fn halts_on_first_rejection() {
        let mut lister = lister(2, 10, MockSubmitter::rejecting(U256::from(5)));
        let err = lister.run().await.unwrap_err();
        assert!(matches!(
            err,
            Error::Submission { token_id, .. } if token_id == U256::from(5)
        ));
        // 5 was attempted; 6 and later never were
        assert_eq!(lister.submitter().token_ids(), ids(2..6));
        assert_eq!(String::from_utf8_lossy(lister.progress()), "2\n3\n4\n5\n");
    }

    #[tokio::test]
    async fn empty_range_submits_nothing() {
        let mut lister = lister(7, 7, MockSubmitter::new());
        assert_eq!(lister.run().await.unwrap(), 0);
        assert!(lister.submitter().submitted().is_empty());
    }

    #[test]
    fn rejects_inverted_range() {
        let generator = ListingGenerator::seeded(
            ListingBounds::defaults().unwrap(),
            &ListingSeed::from_str_lossy("1"),
        );
        let config = ListerConfig {
            start_id: 9,
            end_id: 3,
        };
        assert!(matches!(config.validate(), Err(Error::TokenRange(9, 3))));
        let res = Lister::new(config, generator, MockSubmitter::new());
        assert!(matches!(res, Err(Error::TokenRange(9, 3))));
    }
}
