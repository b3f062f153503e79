use anchor_lang::prelude::*;

use crate::{constants::*, error::ErrorCode, events::*, state::*};

#[derive(Accounts)]
#[instruction(target: Pubkey)]
pub struct SetRole<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        seeds = [MEMBER_SEED, admin.key().as_ref(), vault.key().as_ref()],
        bump = admin_member.bump,
        constraint = admin_member.can(Operation::SetRole) @ ErrorCode::Unauthorized
    )]
    pub admin_member: Account<'info, Member>,

    // init_if_needed: a role overwrite reuses the existing record, a first
    // assignment creates it (absent record reads as plain Member).
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + Member::INIT_SPACE,
        seeds = [MEMBER_SEED, target.as_ref(), vault.key().as_ref()],
        bump
    )]
    pub target_member: Account<'info, Member>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SetRole>, target: Pubkey, role: Role) -> Result<()> {
    let target_member = &mut ctx.accounts.target_member;
    target_member.user = target;
    target_member.role = role;
    target_member.vault = ctx.accounts.vault.key();
    target_member.bump = ctx.bumps.target_member;

    emit!(RoleChangedEvent {
        admin: ctx.accounts.admin.key(),
        target,
        role,
    });

    Ok(())
}
