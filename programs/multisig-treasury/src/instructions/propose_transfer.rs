use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{constants::*, error::ErrorCode, events::*, state::*};

#[derive(Accounts)]
pub struct ProposeTransfer<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        seeds = [MEMBER_SEED, proposer.key().as_ref(), vault.key().as_ref()],
        bump = proposer_member.bump,
        constraint = proposer_member.can(Operation::ProposeTransfer) @ ErrorCode::InsufficientRole
    )]
    pub proposer_member: Account<'info, Member>,

    #[account(
        init,
        payer = proposer,
        space = 8 + Proposal::INIT_SPACE,
        seeds = [
            PROPOSAL_SEED,
            vault.key().as_ref(),
            &vault.next_proposal_id.to_le_bytes()
        ],
        bump
    )]
    pub proposal: Account<'info, Proposal>,

    pub token_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<ProposeTransfer>,
    recipient: Pubkey,
    amount: u64,
    memo: String,
) -> Result<u64> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(memo.len() <= MAX_MEMO_LEN, ErrorCode::MemoTooLong);

    let vault = &mut ctx.accounts.vault;
    require!(
        amount <= vault.per_proposal_limit,
        ErrorCode::ExceedsProposalLimit
    );

    let now = Clock::get()?.slot;
    let id = vault.allocate_proposal_id()?;
    let unlock_slot = vault.compute_unlock(amount, now);

    let proposal = &mut ctx.accounts.proposal;
    proposal.id = id;
    proposal.proposer = ctx.accounts.proposer.key();
    proposal.recipient = recipient;
    proposal.token_mint = ctx.accounts.token_mint.key();
    proposal.amount = amount;
    proposal.memo = memo;
    proposal.approvals = Vec::new();
    proposal.status = ProposalStatus::Pending;
    proposal.created_at = now;
    proposal.expires_at = now
        .checked_add(PROPOSAL_EXPIRY_SLOTS)
        .ok_or(ErrorCode::ArithmeticOverflow)?;
    proposal.unlock_slot = unlock_slot;
    proposal.bump = ctx.bumps.proposal;

    emit!(ProposalCreatedEvent {
        id,
        proposer: proposal.proposer,
        recipient,
        token_mint: proposal.token_mint,
        amount,
        expires_at: proposal.expires_at,
        unlock_slot,
    });

    Ok(id)
}
