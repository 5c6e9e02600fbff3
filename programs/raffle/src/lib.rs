use anchor_lang::prelude::*;
use instructions::*;
use state::{RaffleConfig, RaffleState};

pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;
pub mod vrf;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod raffle {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, config: RaffleConfig) -> Result<()> {
        instructions::initialize::initialize(ctx, config)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        instructions::enter_raffle::enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>, check_data: Vec<u8>) -> Result<UpkeepCheck> {
        instructions::check_upkeep::check_upkeep(ctx, check_data)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>, perform_data: Vec<u8>) -> Result<()> {
        instructions::perform_upkeep::perform_upkeep(ctx, perform_data)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<u64>,
    ) -> Result<()> {
        instructions::fulfill_random_words::fulfill_random_words(ctx, request_id, random_words)
    }

    pub fn get_config(ctx: Context<ReadRaffle>) -> Result<RaffleConfig> {
        instructions::view::get_config(ctx)
    }

    pub fn get_entrance_fee(ctx: Context<ReadRaffle>) -> Result<u64> {
        instructions::view::get_entrance_fee(ctx)
    }

    pub fn get_interval(ctx: Context<ReadRaffle>) -> Result<i64> {
        instructions::view::get_interval(ctx)
    }

    pub fn get_num_words(ctx: Context<ReadRaffle>) -> Result<u32> {
        instructions::view::get_num_words(ctx)
    }

    pub fn get_request_confirmations(ctx: Context<ReadRaffle>) -> Result<u16> {
        instructions::view::get_request_confirmations(ctx)
    }

    pub fn get_raffle_state(ctx: Context<ReadRaffle>) -> Result<RaffleState> {
        instructions::view::get_raffle_state(ctx)
    }

    pub fn get_player(ctx: Context<ReadRaffle>, index: u64) -> Result<Pubkey> {
        instructions::view::get_player(ctx, index)
    }

    pub fn get_number_of_players(ctx: Context<ReadRaffle>) -> Result<u64> {
        instructions::view::get_number_of_players(ctx)
    }

    pub fn get_recent_winner(ctx: Context<ReadRaffle>) -> Result<Option<Pubkey>> {
        instructions::view::get_recent_winner(ctx)
    }

    pub fn get_last_timestamp(ctx: Context<ReadRaffle>) -> Result<i64> {
        instructions::view::get_last_timestamp(ctx)
    }

    pub fn get_pending_request(ctx: Context<ReadRaffle>) -> Result<Option<u64>> {
        instructions::view::get_pending_request(ctx)
    }
}
