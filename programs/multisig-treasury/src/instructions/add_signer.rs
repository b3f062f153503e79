use anchor_lang::prelude::*;

use crate::{constants::*, error::ErrorCode, events::*, state::*};

#[derive(Accounts)]
pub struct AddSigner<'info> {
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
        constraint = admin_member.can(Operation::AddSigner) @ ErrorCode::Unauthorized
    )]
    pub admin_member: Account<'info, Member>,
}

pub fn handler(ctx: Context<AddSigner>, address: Pubkey) -> Result<()> {
    let vault = &mut ctx.accounts.vault;

    require!(!vault.is_signer(&address), ErrorCode::SignerAlreadyExists);
    require!(vault.signers.len() < MAX_SIGNERS, ErrorCode::TooManySigners);

    vault.signers.push(address);

    emit!(SignerAddedEvent {
        admin: ctx.accounts.admin.key(),
        signer: address,
        signer_count: vault.signers.len() as u8,
    });

    Ok(())
}
