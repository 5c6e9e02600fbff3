use anchor_lang::prelude::*;

use crate::{error::RaffleError, vrf::RandomWordsRequest};

pub const RAFFLE_SEED: &[u8] = b"raffle";

/// Upper bound on entries per round. The players list is stored inline,
/// so this fixes the size of the raffle account.
pub const MAX_PLAYERS: usize = 200;

// Space calculation:
// 8 (discriminator) +
// 32 (authority) +
// 32 (vault) +
// 92 (config: 8 entrance_fee + 8 interval + 32 key_hash + 8 subscription_id
//     + 4 callback_gas_limit + 32 vrf_coordinator) +
// 1 (raffle_state) +
// 4 + 32 * MAX_PLAYERS (players) +
// 33 (recent_winner: Option<Pubkey>) +
// 8 (last_timestamp) +
// 9 (pending_request: Option<u64>) +
// 8 (request_nonce) +
// 1 (bump) +
// 1 (vault_bump)
pub const RAFFLE_ACCOUNT_SIZE: usize =
    8 + 32 + 32 + RAFFLE_CONFIG_SIZE + 1 + 4 + 32 * MAX_PLAYERS + 33 + 8 + 9 + 8 + 1 + 1;

pub const RAFFLE_CONFIG_SIZE: usize = 8 + 8 + 32 + 8 + 4 + 32;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RaffleState {
    Open = 0,
    Calculating = 1,
}

/// Parameters fixed when the raffle is created.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RaffleConfig {
    /// Minimum payment per entry, in lamports
    pub entrance_fee: u64,
    /// Seconds that must pass between draws
    pub interval: i64,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    /// The only signer allowed to deliver random words
    pub vrf_coordinator: Pubkey,
}

impl RaffleConfig {
    /// `min_entrance_fee` is the rent-exempt minimum of an empty account, so
    /// that any payout leaves the winner rent-exempt even from zero lamports.
    pub fn validate(&self, min_entrance_fee: u64) -> Result<()> {
        require!(
            self.entrance_fee > 0 && self.entrance_fee >= min_entrance_fee,
            RaffleError::InvalidEntranceFee
        );
        require!(self.interval >= 0, RaffleError::InvalidInterval);
        Ok(())
    }
}

#[account]
#[derive(Debug)]
pub struct Raffle {
    pub authority: Pubkey,
    pub vault: Pubkey,
    pub config: RaffleConfig,
    pub raffle_state: RaffleState,
    pub players: Vec<Pubkey>,
    pub recent_winner: Option<Pubkey>,
    pub last_timestamp: i64,
    pub pending_request: Option<u64>,
    pub request_nonce: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Raffle {
    pub fn new(
        authority: Pubkey,
        vault: Pubkey,
        config: RaffleConfig,
        now: i64,
        bump: u8,
        vault_bump: u8,
    ) -> Self {
        Self {
            authority,
            vault,
            config,
            raffle_state: RaffleState::Open,
            players: Vec::new(),
            recent_winner: None,
            last_timestamp: now,
            pending_request: None,
            request_nonce: 0,
            bump,
            vault_bump,
        }
    }

    /// Records an entry for `player`. Any amount above the fee stays in the pool.
    pub fn enter(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(
            self.raffle_state == RaffleState::Open,
            RaffleError::NotOpen
        );
        require!(
            amount >= self.config.entrance_fee,
            RaffleError::NotEnoughPaid
        );
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);

        self.players.push(player);
        Ok(())
    }

    /// Whether the automation trigger should close entry and request randomness.
    ///
    /// `balance` is the pooled balance held by the vault.
    pub fn upkeep_needed(&self, now: i64, balance: u64) -> bool {
        let is_open = self.raffle_state == RaffleState::Open;
        let time_passed = now.saturating_sub(self.last_timestamp) > self.config.interval;
        let has_players = !self.players.is_empty();
        let has_balance = balance > 0;

        is_open && time_passed && has_players && has_balance
    }

    /// Closes entry and opens a randomness request on behalf of `requester`.
    ///
    /// The predicate is evaluated again here; callers of the trigger are not trusted.
    /// Returns the request to hand to the coordinator together with its id.
    pub fn request_winner(
        &mut self,
        requester: &Pubkey,
        now: i64,
        balance: u64,
    ) -> Result<(RandomWordsRequest, u64)> {
        if !self.upkeep_needed(now, balance) {
            msg!(
                "Upkeep not needed: balance={}, players={}, raffle_state={}",
                balance,
                self.players.len(),
                self.raffle_state as u8
            );
            return err!(RaffleError::UpkeepNotNeeded);
        }

        let request = RandomWordsRequest::new(&self.config);
        let request_id = request.request_id(requester, self.request_nonce);

        self.request_nonce = self
            .request_nonce
            .checked_add(1)
            .ok_or(RaffleError::Overflow)?;
        self.raffle_state = RaffleState::Calculating;
        self.pending_request = Some(request_id);

        Ok((request, request_id))
    }

    /// Picks the winner from the first random word and reopens the raffle.
    ///
    /// Bookkeeping is reset before `payout` runs. If `payout` fails the error is
    /// returned with the raffle already reopened; on-chain the runtime discards
    /// the whole instruction, leaving the raffle calculating.
    pub fn settle<F>(
        &mut self,
        request_id: u64,
        random_words: &[u64],
        now: i64,
        payout: F,
    ) -> Result<Pubkey>
    where
        F: FnOnce(&Pubkey) -> Result<()>,
    {
        require!(
            self.raffle_state == RaffleState::Calculating,
            RaffleError::NotCalculating
        );
        require!(
            self.pending_request == Some(request_id),
            RaffleError::RequestIdMismatch
        );
        let random_word = *random_words.first().ok_or(RaffleError::NoRandomWords)?;
        require!(!self.players.is_empty(), RaffleError::NoPlayers);

        let index = random_word % self.players.len() as u64;
        let winner = self.players[index as usize];

        self.recent_winner = Some(winner);
        self.players.clear();
        self.last_timestamp = now;
        self.raffle_state = RaffleState::Open;
        self.pending_request = None;

        payout(&winner)?;

        Ok(winner)
    }

    pub fn entrance_fee(&self) -> u64 {
        self.config.entrance_fee
    }

    pub fn interval(&self) -> i64 {
        self.config.interval
    }

    pub fn player(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.players.get(index))
            .copied()
            .ok_or_else(|| error!(RaffleError::IndexOutOfRange))
    }

    pub fn number_of_players(&self) -> u64 {
        self.players.len() as u64
    }
}
