use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct IsSigner<'info> {
    #[account(
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,
}

pub fn handler(ctx: Context<IsSigner>, address: Pubkey) -> Result<bool> {
    Ok(ctx.accounts.vault.is_signer(&address))
}
