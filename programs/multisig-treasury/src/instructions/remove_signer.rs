use anchor_lang::prelude::*;

use crate::{constants::*, error::ErrorCode, events::*, state::*};

#[derive(Accounts)]
pub struct RemoveSigner<'info> {
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
        constraint = admin_member.can(Operation::RemoveSigner) @ ErrorCode::Unauthorized
    )]
    pub admin_member: Account<'info, Member>,
}

pub fn handler(ctx: Context<RemoveSigner>, address: Pubkey) -> Result<()> {
    let vault = &mut ctx.accounts.vault;

    let position = vault
        .signers
        .iter()
        .position(|signer| *signer == address)
        .ok_or(ErrorCode::SignerNotFound)?;

    // The remaining set must still be able to meet the threshold.
    require!(
        vault.signers.len() - 1 >= vault.threshold as usize,
        ErrorCode::CannotRemoveSigner
    );

    vault.signers.remove(position);

    emit!(SignerRemovedEvent {
        admin: ctx.accounts.admin.key(),
        signer: address,
        signer_count: vault.signers.len() as u8,
    });

    Ok(())
}
