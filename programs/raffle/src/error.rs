use anchor_lang::error_code;

#[error_code]
pub enum RaffleError {
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("Payment is below the entrance fee")]
    NotEnoughPaid,
    #[msg("Raffle is not open for entries")]
    NotOpen,
    #[msg("Upkeep conditions are not met")]
    UpkeepNotNeeded,
    #[msg("Prize transfer to the winner failed")]
    TransferFailed,
    #[msg("Player index is out of range")]
    IndexOutOfRange,
    #[msg("Raffle has reached the maximum number of entries")]
    RaffleFull,
    #[msg("Only the configured VRF coordinator can fulfill randomness")]
    OnlyCoordinatorCanFulfill,
    #[msg("Raffle is not waiting for randomness")]
    NotCalculating,
    #[msg("Request id does not match the pending randomness request")]
    RequestIdMismatch,
    #[msg("At least one random word is required")]
    NoRandomWords,
    #[msg("Raffle has no players")]
    NoPlayers,
    #[msg("Entrance fee must be positive and cover the rent-exempt minimum")]
    InvalidEntranceFee,
    #[msg("Interval must not be negative")]
    InvalidInterval,
}
