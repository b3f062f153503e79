use anchor_lang::prelude::*;

use crate::{constants::*, error::ErrorCode, events::*, state::*};

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct RejectProposal<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    // Only needed when the caller rejects as Admin rather than as the
    // original proposer.
    #[account(
        seeds = [MEMBER_SEED, caller.key().as_ref(), vault.key().as_ref()],
        bump
    )]
    pub caller_member: Option<Account<'info, Member>>,

    #[account(
        mut,
        seeds = [PROPOSAL_SEED, vault.key().as_ref(), &id.to_le_bytes()],
        bump = proposal.bump
    )]
    pub proposal: Account<'info, Proposal>,
}

pub fn handler(ctx: Context<RejectProposal>, id: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let proposal = &mut ctx.accounts.proposal;

    let is_admin = ctx
        .accounts
        .caller_member
        .as_ref()
        .map_or(false, |member| member.role == Role::Admin);
    require!(
        caller == proposal.proposer || is_admin,
        ErrorCode::Unauthorized
    );

    require!(
        proposal.status == ProposalStatus::Pending,
        ErrorCode::ProposalNotPending
    );

    proposal.status = ProposalStatus::Rejected;

    emit!(ProposalRejectedEvent { id, caller });

    Ok(())
}
