use anchor_lang::prelude::*;

use crate::{constants::*, error::ErrorCode, events::*, state::*};

#[derive(Accounts)]
pub struct UpdateTimelock<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        seeds = [MEMBER_SEED, admin.key().as_ref(), vault.key().as_ref()],
        bump = admin_member.bump,
        constraint = admin_member.can(Operation::UpdateTimelock) @ ErrorCode::Unauthorized
    )]
    pub admin_member: Account<'info, Member>,
}

pub fn handler(
    ctx: Context<UpdateTimelock>,
    timelock_threshold: Option<u64>,
    timelock_delay: Option<u64>,
) -> Result<()> {
    let vault = &mut ctx.accounts.vault;

    if let Some(timelock_threshold) = timelock_threshold {
        vault.timelock_threshold = timelock_threshold;
    }
    if let Some(timelock_delay) = timelock_delay {
        vault.timelock_delay = timelock_delay;
    }

    emit!(TimelockUpdatedEvent {
        admin: ctx.accounts.admin.key(),
        timelock_threshold: vault.timelock_threshold,
        timelock_delay: vault.timelock_delay,
    });

    Ok(())
}
