use anchor_lang::prelude::*;

mod constants;
pub mod error;
mod events;
mod instructions;
mod state;
mod transfer;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod multisig_treasury {
    use super::*;

    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        ctx: Context<Initialize>,
        signers: Vec<Pubkey>,
        threshold: u8,
        per_proposal_limit: u64,
        daily_limit: u64,
        weekly_limit: u64,
        timelock_threshold: u64,
        timelock_delay: u64,
    ) -> Result<()> {
        instructions::initialize::handler(
            ctx,
            signers,
            threshold,
            per_proposal_limit,
            daily_limit,
            weekly_limit,
            timelock_threshold,
            timelock_delay,
        )
    }

    pub fn set_role(ctx: Context<SetRole>, target: Pubkey, role: Role) -> Result<()> {
        instructions::set_role::handler(ctx, target, role)
    }

    pub fn add_signer(ctx: Context<AddSigner>, address: Pubkey) -> Result<()> {
        instructions::add_signer::handler(ctx, address)
    }

    pub fn remove_signer(ctx: Context<RemoveSigner>, address: Pubkey) -> Result<()> {
        instructions::remove_signer::handler(ctx, address)
    }

    pub fn update_threshold(ctx: Context<UpdateThreshold>, new_threshold: u8) -> Result<()> {
        instructions::update_threshold::handler(ctx, new_threshold)
    }

    pub fn update_limits(
        ctx: Context<UpdateLimits>,
        per_proposal_limit: Option<u64>,
        daily_limit: Option<u64>,
        weekly_limit: Option<u64>,
    ) -> Result<()> {
        instructions::update_limits::handler(ctx, per_proposal_limit, daily_limit, weekly_limit)
    }

    pub fn update_timelock(
        ctx: Context<UpdateTimelock>,
        timelock_threshold: Option<u64>,
        timelock_delay: Option<u64>,
    ) -> Result<()> {
        instructions::update_timelock::handler(ctx, timelock_threshold, timelock_delay)
    }

    pub fn propose_transfer(
        ctx: Context<ProposeTransfer>,
        recipient: Pubkey,
        amount: u64,
        memo: String,
    ) -> Result<u64> {
        instructions::propose_transfer::handler(ctx, recipient, amount, memo)
    }

    pub fn approve_proposal(ctx: Context<ApproveProposal>, id: u64) -> Result<()> {
        instructions::approve_proposal::handler(ctx, id)
    }

    pub fn reject_proposal(ctx: Context<RejectProposal>, id: u64) -> Result<()> {
        instructions::reject_proposal::handler(ctx, id)
    }

    pub fn execute_proposal(ctx: Context<ExecuteProposal>, id: u64) -> Result<()> {
        instructions::execute_proposal::handler(ctx, id)
    }

    pub fn schedule_payment(
        ctx: Context<SchedulePayment>,
        recipient: Pubkey,
        amount: u64,
        memo: String,
        interval: u64,
    ) -> Result<u64> {
        instructions::schedule_payment::handler(ctx, recipient, amount, memo, interval)
    }

    pub fn execute_recurring_payment(
        ctx: Context<ExecuteRecurringPayment>,
        id: u64,
    ) -> Result<()> {
        instructions::execute_recurring_payment::handler(ctx, id)
    }

    pub fn cancel_recurring_payment(
        ctx: Context<CancelRecurringPayment>,
        id: u64,
    ) -> Result<()> {
        instructions::cancel_recurring_payment::handler(ctx, id)
    }

    pub fn get_proposal(ctx: Context<GetProposal>, id: u64) -> Result<ProposalView> {
        instructions::get_proposal::handler(ctx, id)
    }

    pub fn get_role(ctx: Context<GetRole>, address: Pubkey) -> Result<Role> {
        instructions::get_role::handler(ctx, address)
    }

    pub fn get_today_spent(ctx: Context<GetTodaySpent>) -> Result<u64> {
        instructions::get_today_spent::handler(ctx)
    }

    pub fn is_signer(ctx: Context<IsSigner>, address: Pubkey) -> Result<bool> {
        instructions::is_signer::handler(ctx, address)
    }
}
