use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, error::ErrorCode, events::*, state::*, transfer::transfer_from_vault};

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct ExecuteProposal<'info> {
    // Execution carries no role requirement: once approved and unlocked, any
    // identity may trigger the transfer.
    pub executor: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        seeds = [PROPOSAL_SEED, vault.key().as_ref(), &id.to_le_bytes()],
        bump = proposal.bump
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(
        mut,
        constraint = vault_token_account.owner == vault.key() @ ErrorCode::TransferFailed,
        constraint = vault_token_account.mint == proposal.token_mint @ ErrorCode::TransferFailed
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = recipient_token_account.owner == proposal.recipient @ ErrorCode::TransferFailed,
        constraint = recipient_token_account.mint == proposal.token_mint @ ErrorCode::TransferFailed
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ExecuteProposal>, id: u64) -> Result<()> {
    let now = Clock::get()?.slot;

    {
        let proposal = &ctx.accounts.proposal;
        match proposal.status {
            ProposalStatus::Approved => {}
            ProposalStatus::Executed => return Err(ErrorCode::ProposalAlreadyExecuted.into()),
            _ => return Err(ErrorCode::ProposalNotApproved.into()),
        }

        // An expired proposal is never executable, approvals notwithstanding.
        require!(!proposal.is_expired(now), ErrorCode::ProposalExpired);
        require!(proposal.is_unlocked(now), ErrorCode::TimelockNotExpired);

        ctx.accounts.vault.check_spending(proposal.amount, now)?;
    }

    let amount = ctx.accounts.proposal.amount;
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.vault_token_account,
        &ctx.accounts.recipient_token_account,
        amount,
    )?;

    // Spending is committed only once the transfer went through; a failed
    // transfer aborts the invocation and leaves both windows untouched.
    ctx.accounts.vault.commit_spending(amount, now)?;

    let proposal = &mut ctx.accounts.proposal;
    proposal.status = ProposalStatus::Executed;

    emit!(ProposalExecutedEvent {
        id,
        executor: ctx.accounts.executor.key(),
        recipient: proposal.recipient,
        token_mint: proposal.token_mint,
        amount,
        slot: now,
    });

    Ok(())
}
