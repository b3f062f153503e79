use anchor_lang::prelude::*;

use crate::{constants::*, error::ErrorCode, events::*, state::*};

#[derive(Accounts)]
pub struct UpdateLimits<'info> {
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
        constraint = admin_member.can(Operation::UpdateLimits) @ ErrorCode::Unauthorized
    )]
    pub admin_member: Account<'info, Member>,
}

pub fn handler(
    ctx: Context<UpdateLimits>,
    per_proposal_limit: Option<u64>,
    daily_limit: Option<u64>,
    weekly_limit: Option<u64>,
) -> Result<()> {
    let vault = &mut ctx.accounts.vault;

    if let Some(per_proposal_limit) = per_proposal_limit {
        vault.per_proposal_limit = per_proposal_limit;
    }
    if let Some(daily_limit) = daily_limit {
        vault.daily_limit = daily_limit;
    }
    if let Some(weekly_limit) = weekly_limit {
        vault.weekly_limit = weekly_limit;
    }

    emit!(LimitsUpdatedEvent {
        admin: ctx.accounts.admin.key(),
        per_proposal_limit: vault.per_proposal_limit,
        daily_limit: vault.daily_limit,
        weekly_limit: vault.weekly_limit,
    });

    Ok(())
}
