use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, Vault, RAFFLE_SEED, VAULT_SEED},
    utils::{pay_from_vault, pooled_balance},
};

/// Event emitted when a round is settled
#[event]
pub struct WinnerPicked {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The winner's address
    pub winner: Pubkey,
    /// Lamports paid out
    pub amount: u64,
}

/// Randomness callback delivered by the VRF coordinator.
///
/// The winner is `players[random_words[0] % players.len()]`. The raffle is
/// reopened before the pooled balance is paid to the `winner` account, which
/// must be the drawn player or the call fails with `TransferFailed`.
///
/// # Errors
/// - `OnlyCoordinatorCanFulfill` if the signer is not the configured coordinator
/// - `NotCalculating` if no draw is in progress
/// - `RequestIdMismatch` if `request_id` is not the pending request
/// - `NoRandomWords` if `random_words` is empty
/// - `TransferFailed` if the prize cannot be paid to `winner`
pub fn fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<u64>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let vault = ctx.accounts.vault.to_account_info();
    let recipient = ctx.accounts.winner.to_account_info();
    let amount = pooled_balance(&vault)?;

    let winner = ctx
        .accounts
        .raffle
        .settle(request_id, &random_words, now, |winner| {
            require_keys_eq!(*winner, *recipient.key, RaffleError::TransferFailed);
            pay_from_vault(&vault, &recipient, amount)
        })?;

    msg!("Raffle settled: winner={}, amount={}", winner, amount);

    emit!(WinnerPicked {
        raffle: ctx.accounts.raffle.key(),
        winner,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED, raffle.authority.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        mut,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump = raffle.vault_bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        constraint = vrf_coordinator.key() == raffle.config.vrf_coordinator
            @ RaffleError::OnlyCoordinatorCanFulfill,
    )]
    pub vrf_coordinator: Signer<'info>,

    /// CHECK: compared against the drawn player before any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}
