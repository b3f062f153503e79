use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::VAULT_SEED;
use crate::error::ErrorCode;
use crate::state::Vault;

/// Moves `amount` out of the vault's token holding. The vault PDA signs the
/// transfer. Shared by proposal execution and recurring payments; any failure
/// aborts the whole invocation, so callers commit spending only afterwards.
pub fn transfer_from_vault<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, Vault>,
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    amount: u64,
) -> Result<()> {
    require!(from.amount >= amount, ErrorCode::InsufficientBalance);

    let vault_bump = vault.bump;
    let vault_seeds = &[VAULT_SEED, &[vault_bump]];
    let vault_signer = &[&vault_seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: from.to_account_info(),
                to: to.to_account_info(),
                authority: vault.to_account_info(),
            },
            vault_signer,
        ),
        amount,
    )
    .map_err(|_| error!(ErrorCode::TransferFailed))
}
