//! Submits encoded listings to the marketplace by transferring the token to it.

pub mod mock;

use crate::{
    generator::constants::{DEFAULT_MARKETPLACE_ADDRESS, DEFAULT_NFT_ADDRESS},
    Error, Result,
};
use alloy::{
    primitives::{Address, Bytes, TxHash, U256},
    providers::Provider,
    sol,
    sol_types::SolCall,
};
use async_trait::async_trait;
use tracing::debug;

sol! {
    #[sol(rpc)]
    interface IERC721 {
        function safeTransferFrom(address from, address to, uint256 tokenId, bytes data) external;
    }
}

/// Lists one token on the marketplace. Implementations return once the
/// listing has been accepted or rejected; they never retry.
#[async_trait]
pub trait SubmitListing {
    async fn submit_listing(&self, token_id: U256, data: Bytes) -> Result<TxHash>;
}

/// Calldata for `safeTransferFrom(from, to, tokenId, data)`.
pub fn transfer_calldata(from: Address, to: Address, token_id: U256, data: Bytes) -> Bytes {
    IERC721::safeTransferFromCall {
        from,
        to,
        tokenId: token_id,
        data,
    }
    .abi_encode()
    .into()
}

/// Where listings go: the NFT contract whose tokens are transferred and the
/// marketplace receiving them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingTarget {
    pub nft: Address,
    pub marketplace: Address,
}

impl Default for ListingTarget {
    fn default() -> Self {
        Self {
            nft: DEFAULT_NFT_ADDRESS,
            marketplace: DEFAULT_MARKETPLACE_ADDRESS,
        }
    }
}

/// Transfers tokens of an ERC-721 contract from `owner` to the marketplace.
/// The provider must sign for `owner`.
pub struct Erc721Submitter<P> {
    nft: IERC721::IERC721Instance<P>,
    owner: Address,
    marketplace: Address,
    gas_limit: Option<u64>,
}

impl<P: Provider> Erc721Submitter<P> {
    pub fn new(provider: P, target: ListingTarget, owner: Address) -> Self {
        Self {
            nft: IERC721::new(target.nft, provider),
            owner,
            marketplace: target.marketplace,
            gas_limit: None,
        }
    }

    /// Sends every listing with a fixed gas limit instead of the provider's estimate.
    /// A listing that would revert is then mined (and reported as reverted) rather
    /// than failing estimation.
    pub fn with_gas_limit(mut self, gas_limit: Option<u64>) -> Self {
        self.gas_limit = gas_limit;
        self
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    pub fn marketplace(&self) -> Address {
        self.marketplace
    }

    pub fn nft(&self) -> Address {
        *self.nft.address()
    }
}

#[async_trait]
impl<P: Provider> SubmitListing for Erc721Submitter<P> {
    async fn submit_listing(&self, token_id: U256, data: Bytes) -> Result<TxHash> {
        let mut call = self
            .nft
            .safeTransferFrom(self.owner, self.marketplace, token_id, data)
            .from(self.owner);
        if let Some(gas_limit) = self.gas_limit {
            call = call.gas(gas_limit);
        }
        let pending = call.send().await?;
        let tx_hash = *pending.tx_hash();
        debug!("listing tx sent for token {token_id}: {tx_hash}");

        let receipt = pending.get_receipt().await?;
        if !receipt.status() {
            return Err(Error::ListingReverted { token_id, tx_hash });
        }
        debug!(
            "listing tx for token {token_id} included in block {:?}",
            receipt.block_number
        );
        Ok(tx_hash)
    }
}
