use crate::{
    error::ListerError,
    util::{error::UtilError, parse_duration, parse_ether_per_day},
};
use alloy::primitives::{Address, U256};
use lister_core::{
    generator::{constants::*, ListingBounds, ListingGenerator, ListingSeed, StepRange},
    lister::ListerConfig,
    submitter::ListingTarget,
};
use std::time::Duration;
use tracing::info;

/// Token range, contract addresses and listing bounds shared by `list` and `preview`.
#[derive(Debug, Clone, clap::Args)]
pub struct ListingArgs {
    /// Test NFT contract whose tokens are listed.
    #[arg(long, default_value_t = DEFAULT_NFT_ADDRESS)]
    pub nft: Address,

    /// Rentable marketplace contract the tokens are transferred to.
    #[arg(long, default_value_t = DEFAULT_MARKETPLACE_ADDRESS)]
    pub marketplace: Address,

    /// First token id to list.
    #[arg(long, default_value_t = DEFAULT_START_ID)]
    pub start_id: u64,

    /// One past the last token id to list.
    #[arg(long, default_value_t = DEFAULT_END_ID)]
    pub end_id: u64,

    /// Shortest max rental duration (e.g. 3d, 72h).
    #[arg(long, default_value = "3d", value_parser = parse_duration)]
    pub min_duration: Duration,

    /// Upper bound (exclusive) of the max rental duration.
    #[arg(long, default_value = "15d", value_parser = parse_duration)]
    pub max_duration: Duration,

    /// Grid the duration is drawn on.
    #[arg(long, default_value = "12h", value_parser = parse_duration)]
    pub duration_step: Duration,

    /// Lowest price, in ether per day.
    #[arg(long, default_value = "0.1", value_parser = parse_ether_per_day)]
    pub min_price: U256,

    /// Upper bound (exclusive) of the price, in ether per day.
    #[arg(long, default_value = "5", value_parser = parse_ether_per_day)]
    pub max_price: U256,

    /// Grid the price is drawn on, in ether per day.
    #[arg(long, default_value = "0.2", value_parser = parse_ether_per_day)]
    pub price_step: U256,

    /// Seed for the listing parameters; decimal, 0x-prefixed hex, or any label.
    /// A random seed is used (and logged) when omitted.
    #[arg(long)]
    pub seed: Option<String>,
}

impl ListingArgs {
    pub fn config(&self) -> ListerConfig {
        ListerConfig {
            start_id: self.start_id,
            end_id: self.end_id,
        }
    }

    pub fn target(&self) -> ListingTarget {
        ListingTarget {
            nft: self.nft,
            marketplace: self.marketplace,
        }
    }

    /// Durations must be whole seconds; contracts count rental time in seconds.
    pub fn bounds(&self) -> Result<ListingBounds, ListerError> {
        let duration = StepRange::new(
            whole_secs("--min-duration", self.min_duration)?,
            whole_secs("--max-duration", self.max_duration)?,
            whole_secs("--duration-step", self.duration_step)?,
        )
        .map_err(lister_core::Error::from)?;
        let price_per_second = StepRange::new(self.min_price, self.max_price, self.price_step)
            .map_err(lister_core::Error::from)?;
        Ok(ListingBounds::new(duration, price_per_second))
    }

    pub fn seed(&self) -> ListingSeed {
        let seed = self
            .seed
            .as_deref()
            .map(ListingSeed::from_str_lossy)
            .unwrap_or_default();
        info!("listing seed: {:#x}", seed.as_u256());
        seed
    }

    pub fn generator(&self) -> Result<ListingGenerator, ListerError> {
        Ok(ListingGenerator::seeded(self.bounds()?, &self.seed()))
    }
}

fn whole_secs(flag: &'static str, duration: Duration) -> Result<U256, UtilError> {
    if duration.subsec_nanos() != 0 {
        return Err(UtilError::SubSecondDuration { flag, duration });
    }
    Ok(U256::from(duration.as_secs()))
}
