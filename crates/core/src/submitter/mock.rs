use super::SubmitListing;
use crate::{Error, Result};
use alloy::primitives::{keccak256, Bytes, TxHash, U256};
use async_trait::async_trait;
use std::sync::Mutex;

/// Records every submission instead of sending it. Optionally rejects one
/// token id, the way a reverting contract or a dropped RPC would.
#[derive(Debug, Default)]
pub struct MockSubmitter {
    submitted: Mutex<Vec<(U256, Bytes)>>,
    reject: Option<U256>,
}

impl MockSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(token_id: U256) -> Self {
        Self {
            reject: Some(token_id),
            ..Default::default()
        }
    }

    /// Token ids and payloads in submission order, including a rejected one.
    pub fn submitted(&self) -> Vec<(U256, Bytes)> {
        self.submitted.lock().expect("mock lock poisoned").clone()
    }

    pub fn token_ids(&self) -> Vec<U256> {
        self.submitted().into_iter().map(|(id, _)| id).collect()
    }
}

#[async_trait]
impl SubmitListing for MockSubmitter {
    async fn submit_listing(&self, token_id: U256, data: Bytes) -> Result<TxHash> {
        self.submitted
            .lock()
            .expect("mock lock poisoned")
            .push((token_id, data));
        if self.reject == Some(token_id) {
            return Err(Error::Submission {
                token_id,
                reason: "rejected by mock".to_owned(),
            });
        }
        Ok(keccak256(token_id.to_be_bytes::<32>()))
    }
}

#[cfg(test)]
mod tests {
    use super::MockSubmitter;
    use crate::submitter::SubmitListing;
    use alloy::primitives::{Bytes, U256};
    use std::sync::Arc;

    #[tokio::test]
    async fn records_rejected_submission() {
        let mock = MockSubmitter::rejecting(U256::from(1));
        assert!(mock.submit_listing(U256::from(1), Bytes::new()).await.is_err());
        assert_eq!(mock.token_ids(), vec![U256::from(1)]);
    }

    #[test]
    #[should_panic(expected = "mock lock poisoned")]
    fn poisoned_lock_surfaces() {
        let mock = Arc::new(MockSubmitter::new());
        let held = mock.clone();
        let _ = std::thread::spawn(move || {
            let _guard = held.submitted.lock().unwrap();
            panic!("poison the lock");
        })
        .join();
        mock.submitted();
    }
}
