use anchor_lang::prelude::*;

use crate::{error::RaffleError, state::VAULT_ACCOUNT_SIZE};

/// Lamports in the vault above its rent-exempt minimum.
pub fn pooled_balance(vault: &AccountInfo) -> Result<u64> {
    let rent_lamports = Rent::get()?.minimum_balance(VAULT_ACCOUNT_SIZE);
    Ok(vault.lamports().saturating_sub(rent_lamports))
}

/// Moves `amount` lamports out of the vault by direct debit.
/// This only works because the vault is a PDA owned by this program.
pub fn pay_from_vault(vault: &AccountInfo, recipient: &AccountInfo, amount: u64) -> Result<()> {
    vault
        .sub_lamports(amount)
        .map_err(|_| error!(RaffleError::TransferFailed))?;
    recipient
        .add_lamports(amount)
        .map_err(|_| error!(RaffleError::TransferFailed))?;
    Ok(())
}
