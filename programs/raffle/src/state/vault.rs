use anchor_lang::prelude::*;

pub const VAULT_SEED: &[u8] = b"vault";

// 8 discriminator, 32 pubkey, 1 bump
pub const VAULT_ACCOUNT_SIZE: usize = 8 + 32 + 1;

/// Program owned PDA holding the pooled entrance fees.
/// Everything above its rent-exempt minimum is paid to the next winner.
#[account]
pub struct Vault {
    pub raffle: Pubkey,
    pub bump: u8,
}
