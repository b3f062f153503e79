use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct GetProposal<'info> {
    #[account(
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    // A missing record fails account validation here, which is this
    // platform's "proposal not found".
    #[account(
        seeds = [PROPOSAL_SEED, vault.key().as_ref(), &id.to_le_bytes()],
        bump = proposal.bump
    )]
    pub proposal: Account<'info, Proposal>,
}

pub fn handler(ctx: Context<GetProposal>, _id: u64) -> Result<ProposalView> {
    let now = Clock::get()?.slot;
    Ok(ctx.accounts.proposal.view(now))
}
