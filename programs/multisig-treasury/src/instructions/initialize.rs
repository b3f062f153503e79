use anchor_lang::prelude::*;

use crate::{constants::*, error::ErrorCode, events::*, state::*};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    // A second initialize attempt fails here: the PDA already exists.
    #[account(
        init,
        payer = admin,
        space = 8 + Vault::INIT_SPACE,
        seeds = [VAULT_SEED],
        bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        init,
        payer = admin,
        space = 8 + Member::INIT_SPACE,
        seeds = [MEMBER_SEED, admin.key().as_ref(), vault.key().as_ref()],
        bump
    )]
    pub admin_member: Account<'info, Member>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    signers: Vec<Pubkey>,
    threshold: u8,
    per_proposal_limit: u64,
    daily_limit: u64,
    weekly_limit: u64,
    timelock_threshold: u64,
    timelock_delay: u64,
) -> Result<()> {
    require!(!signers.is_empty(), ErrorCode::NoSigners);
    require!(signers.len() <= MAX_SIGNERS, ErrorCode::TooManySigners);
    for (i, signer) in signers.iter().enumerate() {
        require!(!signers[..i].contains(signer), ErrorCode::SignerAlreadyExists);
    }
    require!(threshold >= 1, ErrorCode::ThresholdTooLow);
    require!(threshold as usize <= signers.len(), ErrorCode::ThresholdTooHigh);

    let now = Clock::get()?.slot;

    let vault = &mut ctx.accounts.vault;
    vault.admin = ctx.accounts.admin.key();
    vault.signers = signers;
    vault.threshold = threshold;
    vault.per_proposal_limit = per_proposal_limit;
    vault.daily_limit = daily_limit;
    vault.weekly_limit = weekly_limit;
    vault.timelock_threshold = timelock_threshold;
    vault.timelock_delay = timelock_delay;
    vault.next_proposal_id = 0;
    vault.next_payment_id = 0;
    vault.day_key = now / SLOTS_PER_DAY;
    vault.day_spent = 0;
    vault.week_key = now / SLOTS_PER_WEEK;
    vault.week_spent = 0;
    vault.bump = ctx.bumps.vault;

    let admin_member = &mut ctx.accounts.admin_member;
    admin_member.user = ctx.accounts.admin.key();
    admin_member.role = Role::Admin;
    admin_member.vault = vault.key();
    admin_member.bump = ctx.bumps.admin_member;

    emit!(VaultInitializedEvent {
        admin: vault.admin,
        signer_count: vault.signers.len() as u8,
        threshold,
        per_proposal_limit,
        daily_limit,
        weekly_limit,
    });

    Ok(())
}
