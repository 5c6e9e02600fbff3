use anchor_lang::prelude::*;

use crate::{
    state::{Raffle, Vault, RAFFLE_SEED, VAULT_SEED},
    utils::pooled_balance,
};

/// Answer to the automation service's poll.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct UpkeepCheck {
    pub upkeep_needed: bool,
    /// Passed through to `perform_upkeep`; always empty
    pub perform_data: Vec<u8>,
}

/// Read-only predicate polled by the automation service.
///
/// Upkeep is needed when the raffle is open, more than `interval` seconds
/// have passed since the last draw, there is at least one player and the
/// vault holds a positive pooled balance. `check_data` is ignored.
pub fn check_upkeep(ctx: Context<CheckUpkeep>, _check_data: Vec<u8>) -> Result<UpkeepCheck> {
    let now = Clock::get()?.unix_timestamp;
    let balance = pooled_balance(&ctx.accounts.vault.to_account_info())?;

    Ok(UpkeepCheck {
        upkeep_needed: ctx.accounts.raffle.upkeep_needed(now, balance),
        perform_data: Vec::new(),
    })
}

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
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
