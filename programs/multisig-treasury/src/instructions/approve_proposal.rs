use anchor_lang::prelude::*;

use crate::{constants::*, error::ErrorCode, events::*, state::*};

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct ApproveProposal<'info> {
    pub signer: Signer<'info>,

    #[account(
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    // Optional: a signer added to the set without a role record holds the
    // default role and is turned away below, not by account validation.
    #[account(
        seeds = [MEMBER_SEED, signer.key().as_ref(), vault.key().as_ref()],
        bump
    )]
    pub signer_member: Option<Account<'info, Member>>,

    #[account(
        mut,
        seeds = [PROPOSAL_SEED, vault.key().as_ref(), &id.to_le_bytes()],
        bump = proposal.bump
    )]
    pub proposal: Account<'info, Proposal>,
}

pub fn handler(ctx: Context<ApproveProposal>, id: u64) -> Result<()> {
    let vault = &ctx.accounts.vault;
    let signer = ctx.accounts.signer.key();

    require!(vault.is_signer(&signer), ErrorCode::NotASigner);

    let role = ctx
        .accounts
        .signer_member
        .as_ref()
        .map_or(Role::Member, |member| member.role);
    require!(
        role >= required_role(Operation::ApproveProposal),
        ErrorCode::InsufficientRole
    );

    let proposal = &mut ctx.accounts.proposal;
    require!(
        proposal.status == ProposalStatus::Pending,
        ErrorCode::ProposalNotPending
    );

    // Lazy expiry: nothing flips the status in the background, the check
    // happens here.
    let now = Clock::get()?.slot;
    require!(!proposal.is_expired(now), ErrorCode::ProposalExpired);

    let ready = proposal.record_approval(signer, vault.threshold)?;
    let approvals = proposal.approvals.len() as u8;

    if ready {
        emit!(ProposalReadyEvent {
            id,
            signer,
            approvals,
        });
    } else {
        emit!(ProposalApprovedEvent {
            id,
            signer,
            approvals,
            threshold: vault.threshold,
        });
    }

    Ok(())
}
