use anchor_lang::prelude::*;

use crate::{
    state::{Raffle, RaffleConfig, RaffleState, RAFFLE_SEED},
    vrf::{NUM_WORDS, REQUEST_CONFIRMATIONS},
};

// Read accessors. Each returns its value through the transaction return data.

/// Full creation-time configuration, including the randomness request parameters.
pub fn get_config(ctx: Context<ReadRaffle>) -> Result<RaffleConfig> {
    Ok(ctx.accounts.raffle.config.clone())
}

pub fn get_entrance_fee(ctx: Context<ReadRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.entrance_fee())
}

pub fn get_interval(ctx: Context<ReadRaffle>) -> Result<i64> {
    Ok(ctx.accounts.raffle.interval())
}

pub fn get_num_words(_ctx: Context<ReadRaffle>) -> Result<u32> {
    Ok(NUM_WORDS)
}

pub fn get_request_confirmations(_ctx: Context<ReadRaffle>) -> Result<u16> {
    Ok(REQUEST_CONFIRMATIONS)
}

pub fn get_raffle_state(ctx: Context<ReadRaffle>) -> Result<RaffleState> {
    Ok(ctx.accounts.raffle.raffle_state)
}

/// Fails with `IndexOutOfRange` when `index` is not below the player count.
pub fn get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
    ctx.accounts.raffle.player(index)
}

pub fn get_number_of_players(ctx: Context<ReadRaffle>) -> Result<u64> {
    Ok(ctx.accounts.raffle.number_of_players())
}

pub fn get_recent_winner(ctx: Context<ReadRaffle>) -> Result<Option<Pubkey>> {
    Ok(ctx.accounts.raffle.recent_winner)
}

pub fn get_last_timestamp(ctx: Context<ReadRaffle>) -> Result<i64> {
    Ok(ctx.accounts.raffle.last_timestamp)
}

pub fn get_pending_request(ctx: Context<ReadRaffle>) -> Result<Option<u64>> {
    Ok(ctx.accounts.raffle.pending_request)
}

#[derive(Accounts)]
pub struct ReadRaffle<'info> {
    #[account(
        seeds = [RAFFLE_SEED, raffle.authority.as_ref()],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,
}
