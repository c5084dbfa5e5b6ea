use super::ListingArgs;
use crate::{error::ListerError, util::AccountArgs};
use alloy::{network::EthereumWallet, providers::ProviderBuilder};
use lister_core::{lister::Lister, submitter::Erc721Submitter};
use tracing::info;
use url::Url;

#[derive(Debug, Clone, clap::Args)]
pub struct ListCliArgs {
    /// JSON-RPC endpoint of the target chain.
    #[arg(long, env = "RPC_URL", default_value = "http://localhost:8545")]
    pub rpc_url: Url,

    /// Fixed gas limit for every listing tx. Estimated per tx when omitted.
    #[arg(long)]
    pub gas_limit: Option<u64>,

    #[command(flatten)]
    pub account: AccountArgs,

    #[command(flatten)]
    pub listing: ListingArgs,
}

/// Lists every token in range on the marketplace, one transaction at a time.
pub async fn list(args: ListCliArgs) -> Result<(), ListerError> {
    let signer = args.account.load_signer()?;
    let owner = signer.address();
    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_http(args.rpc_url.to_owned());

    let submitter = Erc721Submitter::new(provider, args.listing.target(), owner)
        .with_gas_limit(args.gas_limit);
    info!(
        "listing tokens of {} on marketplace {} from {owner}",
        submitter.nft(),
        submitter.marketplace()
    );
    let mut lister = Lister::new(
        args.listing.config(),
        args.listing.generator()?,
        submitter,
    )?;

    let listed = lister.run().await?;
    info!("done: {listed} listings submitted from {owner}");
    Ok(())
}
