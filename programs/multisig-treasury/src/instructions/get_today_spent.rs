use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct GetTodaySpent<'info> {
    #[account(
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,
}

pub fn handler(ctx: Context<GetTodaySpent>) -> Result<u64> {
    let now = Clock::get()?.slot;
    Ok(ctx.accounts.vault.spent_today(now))
}
