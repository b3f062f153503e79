use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
#[instruction(address: Pubkey)]
pub struct GetRole<'info> {
    #[account(
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        seeds = [MEMBER_SEED, address.as_ref(), vault.key().as_ref()],
        bump
    )]
    pub member: Option<Account<'info, Member>>,
}

pub fn handler(ctx: Context<GetRole>, _address: Pubkey) -> Result<Role> {
    // No member record means the default, unprivileged role.
    Ok(ctx
        .accounts
        .member
        .as_ref()
        .map_or(Role::Member, |member| member.role))
}
