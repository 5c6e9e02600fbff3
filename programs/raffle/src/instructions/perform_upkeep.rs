use anchor_lang::prelude::*;

use crate::{
    state::{Raffle, Vault, RAFFLE_SEED, VAULT_SEED},
    utils::pooled_balance,
};

/// Event emitted when entry closes and a winner is requested
#[event]
pub struct RequestedRaffleWinner {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// Identifier the coordinator must answer with
    pub request_id: u64,
}

/// Randomness request picked up by the off-chain VRF coordinator
#[event]
pub struct RandomWordsRequested {
    pub raffle: Pubkey,
    pub request_id: u64,
    pub key_hash: [u8; 32],
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

/// Closes entry and requests randomness for the draw.
///
/// Anyone may call this; the upkeep predicate is re-checked here and the
/// call fails with `UpkeepNotNeeded` when it does not hold.
///
/// After execution:
/// - The raffle state is changed to Calculating
/// - The request id is stored as the pending request
pub fn perform_upkeep(ctx: Context<PerformUpkeep>, _perform_data: Vec<u8>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let balance = pooled_balance(&ctx.accounts.vault.to_account_info())?;
    let raffle_key = ctx.accounts.raffle.key();

    let (request, request_id) = ctx
        .accounts
        .raffle
        .request_winner(&raffle_key, now, balance)?;

    emit!(RandomWordsRequested {
        raffle: raffle_key,
        request_id,
        key_hash: request.key_hash,
        subscription_id: request.subscription_id,
        request_confirmations: request.request_confirmations,
        callback_gas_limit: request.callback_gas_limit,
        num_words: request.num_words,
    });

    emit!(RequestedRaffleWinner {
        raffle: raffle_key,
        request_id,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED, raffle.authority.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump = raffle.vault_bump,
    )]
    pub vault: Account<'info, Vault>,
}
