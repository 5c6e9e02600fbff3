use anchor_lang::{prelude::*, solana_program::hash};
use arrayref::array_ref;

use crate::state::RaffleConfig;

/// Block confirmations the oracle waits for before answering.
pub const REQUEST_CONFIRMATIONS: u16 = 3;

/// Random words requested per draw.
pub const NUM_WORDS: u32 = 1;

/// A randomness request as handed to the VRF coordinator.
///
/// The coordinator picks the request up from the `RandomWordsRequested`
/// event and answers later through `fulfill_random_words`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RandomWordsRequest {
    /// Gas lane the oracle should answer on
    pub key_hash: [u8; 32],
    /// Subscription funding the request
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

impl RandomWordsRequest {
    pub fn new(config: &RaffleConfig) -> Self {
        Self {
            key_hash: config.key_hash,
            subscription_id: config.subscription_id,
            request_confirmations: REQUEST_CONFIRMATIONS,
            callback_gas_limit: config.callback_gas_limit,
            num_words: NUM_WORDS,
        }
    }

    /// Derives the identifier of this request for `requester`.
    ///
    /// The id is the first 8 bytes of sha256(key_hash || subscription_id ||
    /// requester || nonce), so two requests from the same raffle never share
    /// an id as long as the nonce advances. Zero is reserved and never returned.
    pub fn request_id(&self, requester: &Pubkey, nonce: u64) -> u64 {
        let digest = hash::hashv(&[
            &self.key_hash,
            &self.subscription_id.to_le_bytes(),
            requester.as_ref(),
            &nonce.to_le_bytes(),
        ]);
        let bytes = digest.to_bytes();
        u64::from_le_bytes(*array_ref![bytes, 0, 8]).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RaffleConfig {
        RaffleConfig {
            entrance_fee: 100,
            interval: 10,
            key_hash: [7u8; 32],
            subscription_id: 42,
            callback_gas_limit: 500_000,
            vrf_coordinator: Pubkey::new_unique(),
        }
    }

    #[test]
    fn request_uses_fixed_confirmations_and_word_count() {
        let request = RandomWordsRequest::new(&config());

        assert_eq!(request.key_hash, [7u8; 32]);
        assert_eq!(request.subscription_id, 42);
        assert_eq!(request.callback_gas_limit, 500_000);
        assert_eq!(request.request_confirmations, 3);
        assert_eq!(request.num_words, 1);
    }

    #[test]
    fn request_id_is_deterministic_and_nonzero() {
        let request = RandomWordsRequest::new(&config());
        let requester = Pubkey::new_unique();

        let id = request.request_id(&requester, 0);
        assert!(id > 0);
        assert_eq!(id, request.request_id(&requester, 0));
    }

    #[test]
    fn request_id_changes_with_nonce_and_requester() {
        let request = RandomWordsRequest::new(&config());
        let requester = Pubkey::new_unique();

        let first = request.request_id(&requester, 0);
        assert_ne!(first, request.request_id(&requester, 1));
        assert_ne!(first, request.request_id(&Pubkey::new_unique(), 0));
    }
}
