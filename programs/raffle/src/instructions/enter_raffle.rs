use anchor_lang::prelude::*;

use crate::{
    error::RaffleError,
    state::{Raffle, Vault, RAFFLE_SEED, VAULT_SEED},
};

/// Event emitted when a player enters the raffle
#[event]
pub struct RaffleEntered {
    /// The pubkey of the raffle
    pub raffle: Pubkey,
    /// The entrant's address
    pub player: Pubkey,
    /// Amount paid in lamports
    pub amount: u64,
}

/// Instruction to buy one entry into the current round
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `amount` - Lamports paid for the entry. Anything above the entrance
///   fee is kept in the pool and not refunded.
///
/// # Errors
/// - `NotOpen` if a draw is in progress
/// - `NotEnoughPaid` if `amount` is below the entrance fee
/// - `RaffleFull` if the round already holds the maximum number of entries
///
/// # Implementation Notes
/// - Updates state before performing the transfer
/// - The vault balance is checked after the transfer
pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();
    ctx.accounts.raffle.enter(player, amount)?;

    let pre_transfer_balance = ctx.accounts.vault.to_account_info().lamports();

    // Transfer lamports from the player to the vault
    anchor_lang::solana_program::program::invoke(
        &anchor_lang::solana_program::system_instruction::transfer(
            &player,
            &ctx.accounts.vault.key(),
            amount,
        ),
        &[
            ctx.accounts.player.to_account_info(),
            ctx.accounts.system_program.to_account_info(),
            ctx.accounts.vault.to_account_info(),
        ],
    )?;

    let post_transfer_balance = ctx.accounts.vault.to_account_info().lamports();
    require!(
        post_transfer_balance
            == pre_transfer_balance
                .checked_add(amount)
                .ok_or(RaffleError::Overflow)?,
        RaffleError::TransferFailed
    );

    emit!(RaffleEntered {
        raffle: ctx.accounts.raffle.key(),
        player,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    #[account(
        mut,
        seeds = [RAFFLE_SEED, raffle.authority.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Receives the payment
    #[account(
        mut,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump = raffle.vault_bump,
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub player: Signer<'info>,

    pub system_program: Program<'info, System>,
}
