use super::ListingArgs;
use crate::{
    error::ListerError,
    util::{bold, format_ether_per_day},
};
use alloy::primitives::{Address, U256};
use lister_core::{
    generator::constants::DAY, listing::ListingParams, submitter::transfer_calldata,
};

#[derive(Debug, Clone, clap::Args)]
pub struct PreviewCliArgs {
    /// Token owner; when set, the full `safeTransferFrom` calldata is printed too.
    #[arg(long)]
    pub owner: Option<Address>,

    #[command(flatten)]
    pub listing: ListingArgs,
}

/// Generates and encodes the listings `list` would submit, without signing or
/// sending anything.
pub fn preview(args: PreviewCliArgs) -> Result<(), ListerError> {
    for line in render_all(&args)? {
        println!("{line}");
    }
    Ok(())
}

fn render_all(args: &PreviewCliArgs) -> Result<Vec<String>, ListerError> {
    let config = args.listing.config();
    config.validate()?;
    let marketplace = args.listing.target().marketplace;
    let mut generator = args.listing.generator()?;
    Ok(config
        .token_ids()
        .map(|token_id| {
            let listing = generator.next_listing();
            render(marketplace, token_id, &listing, args.owner)
        })
        .collect())
}

fn render(
    marketplace: Address,
    token_id: u64,
    listing: &ListingParams,
    owner: Option<Address>,
) -> String {
    let payload = listing.encode();
    let days = listing.max_time_duration / U256::from(DAY);
    let hours = listing.max_time_duration % U256::from(DAY) / U256::from(60 * 60);
    let mut out = vec![
        format!("{}", bold(token_id.to_string())),
        format!(
            "  max duration: {}s ({days}d {hours}h)",
            listing.max_time_duration
        ),
        format!(
            "  price:        {} wei/s ({} ether/day)",
            listing.price_per_second,
            format_ether_per_day(listing.price_per_second)
        ),
        format!("  payload:      {payload}"),
    ];
    if let Some(owner) = owner {
        let calldata = transfer_calldata(owner, marketplace, U256::from(token_id), payload);
        out.push(format!("  calldata:     {calldata}"));
    }
    out.join("\n")
}
