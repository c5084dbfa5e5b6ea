use crate::Result;
use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::SolValue,
};

/// ABI schema of the listing payload: `(uint256,uint256,uint256,address,address)`.
type ListingTuple = (U256, U256, U256, Address, Address);

/// Rental terms attached to a token transfer. The marketplace contract decodes
/// these from the `data` argument of `safeTransferFrom` to register a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingParams {
    /// Longest rental the owner accepts, in seconds.
    pub max_time_duration: U256,
    /// Rental price in the payment token's smallest unit per second.
    pub price_per_second: U256,
    /// `0` selects the native currency.
    pub payment_token_id: U256,
    /// Zero address selects the native currency.
    pub payment_token_address: Address,
    /// Zero address leaves the listing publicly rentable.
    pub private_renter: Address,
}

impl ListingParams {
    /// Public listing priced in the native currency.
    pub fn native_public(max_time_duration: U256, price_per_second: U256) -> Self {
        Self {
            max_time_duration,
            price_per_second,
            payment_token_id: U256::ZERO,
            payment_token_address: Address::ZERO,
            private_renter: Address::ZERO,
        }
    }

    pub fn encode(&self) -> Bytes {
        let tuple: ListingTuple = (
            self.max_time_duration,
            self.price_per_second,
            self.payment_token_id,
            self.payment_token_address,
            self.private_renter,
        );
        tuple.abi_encode_params().into()
    }

    pub fn decode(data: &[u8]) -> Result<Self> {
        let (
            max_time_duration,
            price_per_second,
            payment_token_id,
            payment_token_address,
            private_renter,
        ) = ListingTuple::abi_decode_params(data)?;
        Ok(Self {
            max_time_duration,
            price_per_second,
            payment_token_id,
            payment_token_address,
            private_renter,
        })
    }
}
