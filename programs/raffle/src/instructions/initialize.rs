use anchor_lang::prelude::*;

use crate::state::{
    Raffle, RaffleConfig, Vault, RAFFLE_ACCOUNT_SIZE, RAFFLE_SEED, VAULT_ACCOUNT_SIZE, VAULT_SEED,
};

/// Event emitted when a raffle is created
#[event]
pub struct RaffleInitialized {
    /// The pubkey of the created raffle
    pub raffle: Pubkey,
    /// The vault holding the pooled entrance fees
    pub vault: Pubkey,
    /// Entrance fee in lamports
    pub entrance_fee: u64,
    /// Seconds between draws
    pub interval: i64,
    /// The signer allowed to deliver randomness
    pub vrf_coordinator: Pubkey,
    /// When the raffle was created
    pub creation_time: i64,
}

/// Instruction to create a raffle and its vault
///
/// # Arguments
/// * `ctx` - The context object containing all required accounts
/// * `config` - Entrance fee, draw interval and randomness request parameters.
///   Fixed for the lifetime of the raffle.
///
/// # Errors
/// - `InvalidEntranceFee` if the fee is zero or below the rent-exempt minimum
///   of an empty account
/// - `InvalidInterval` if the interval is negative
///
/// # Account Validations
/// * Raffle - New PDA with seeds ["raffle", authority]
/// * Vault - New PDA with seeds ["vault", raffle_key]
/// * Authority - Pays for both accounts
///
/// # Implementation Notes
/// - Initializes the raffle in Open state with no players
/// - Starts the draw interval at the current timestamp
pub fn initialize(ctx: Context<Initialize>, config: RaffleConfig) -> Result<()> {
    config.validate(Rent::get()?.minimum_balance(0))?;

    let now = Clock::get()?.unix_timestamp;
    let raffle_key = ctx.accounts.raffle.key();
    let vault_key = ctx.accounts.vault.key();

    ctx.accounts.vault.raffle = raffle_key;
    ctx.accounts.vault.bump = ctx.bumps.vault;

    emit!(RaffleInitialized {
        raffle: raffle_key,
        vault: vault_key,
        entrance_fee: config.entrance_fee,
        interval: config.interval,
        vrf_coordinator: config.vrf_coordinator,
        creation_time: now,
    });

    ctx.accounts.raffle.set_inner(Raffle::new(
        ctx.accounts.authority.key(),
        vault_key,
        config,
        now,
        ctx.bumps.raffle,
        ctx.bumps.vault,
    ));

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = RAFFLE_ACCOUNT_SIZE,
        seeds = [RAFFLE_SEED, authority.key().as_ref()],
        bump
    )]
    pub raffle: Account<'info, Raffle>,

    #[account(
        init,
        payer = authority,
        space = VAULT_ACCOUNT_SIZE,
        seeds = [VAULT_SEED, raffle.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
