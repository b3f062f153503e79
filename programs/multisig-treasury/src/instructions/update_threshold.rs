use anchor_lang::prelude::*;

use crate::{constants::*, error::ErrorCode, events::*, state::*};

#[derive(Accounts)]
pub struct UpdateThreshold<'info> {
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
        constraint = admin_member.can(Operation::UpdateThreshold) @ ErrorCode::Unauthorized
    )]
    pub admin_member: Account<'info, Member>,
}

pub fn handler(ctx: Context<UpdateThreshold>, new_threshold: u8) -> Result<()> {
    let vault = &mut ctx.accounts.vault;

    require!(new_threshold >= 1, ErrorCode::ThresholdTooLow);
    require!(
        new_threshold as usize <= vault.signers.len(),
        ErrorCode::ThresholdTooHigh
    );

    vault.threshold = new_threshold;

    emit!(ThresholdUpdatedEvent {
        admin: ctx.accounts.admin.key(),
        threshold: new_threshold,
    });

    Ok(())
}
