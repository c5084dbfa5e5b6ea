use alloy::primitives::{keccak256, U256};
use rand::{rngs::StdRng, SeedableRng};

/// 32-byte seed for the listing generator's RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingSeed {
    seed: [u8; 32],
}

impl ListingSeed {
    pub fn random() -> Self {
        Self {
            seed: rand::random(),
        }
    }

    /// Interprets `seed` as a number in base 10, or base 16 when prefixed with `0x`.
    /// Strings that are not numbers are hashed, so any label works as a seed.
    pub fn from_str_lossy(seed: &str) -> Self {
        let parsed = match seed.strip_prefix("0x") {
            Some(hex) => U256::from_str_radix(hex, 16),
            None => U256::from_str_radix(seed, 10),
        };
        match parsed {
            Ok(n) => Self::from_u256(n),
            Err(_) => Self {
                seed: keccak256(seed.as_bytes()).0,
            },
        }
    }

    pub fn from_u256(seed: U256) -> Self {
        Self {
            seed: seed.to_be_bytes(),
        }
    }

    pub fn as_u256(&self) -> U256 {
        U256::from_be_bytes(self.seed)
    }

    pub fn rng(&self) -> StdRng {
        StdRng::from_seed(self.seed)
    }
}

impl Default for ListingSeed {
    fn default() -> Self {
        Self::random()
    }
}
