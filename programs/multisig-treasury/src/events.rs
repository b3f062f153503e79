use anchor_lang::prelude::*;

use crate::state::Role;

#[event]
pub struct VaultInitializedEvent {
    pub admin: Pubkey,
    pub signer_count: u8,
    pub threshold: u8,
    pub per_proposal_limit: u64,
    pub daily_limit: u64,
    pub weekly_limit: u64,
}

#[event]
pub struct RoleChangedEvent {
    pub admin: Pubkey,
    pub target: Pubkey,
    pub role: Role,
}

#[event]
pub struct SignerAddedEvent {
    pub admin: Pubkey,
    pub signer: Pubkey,
    pub signer_count: u8,
}

#[event]
pub struct SignerRemovedEvent {
    pub admin: Pubkey,
    pub signer: Pubkey,
    pub signer_count: u8,
}

#[event]
pub struct ThresholdUpdatedEvent {
    pub admin: Pubkey,
    pub threshold: u8,
}

#[event]
pub struct LimitsUpdatedEvent {
    pub admin: Pubkey,
    pub per_proposal_limit: u64,
    pub daily_limit: u64,
    pub weekly_limit: u64,
}

#[event]
pub struct TimelockUpdatedEvent {
    pub admin: Pubkey,
    pub timelock_threshold: u64,
    pub timelock_delay: u64,
}

#[event]
pub struct ProposalCreatedEvent {
    pub id: u64,
    pub proposer: Pubkey,
    pub recipient: Pubkey,
    pub token_mint: Pubkey,
    pub amount: u64,
    pub expires_at: u64,
    pub unlock_slot: u64,
}

/// Approval progress on a proposal that is still short of the threshold.
#[event]
pub struct ProposalApprovedEvent {
    pub id: u64,
    pub signer: Pubkey,
    pub approvals: u8,
    pub threshold: u8,
}

/// The approval threshold has been reached; the proposal is executable once
/// its timelock (if any) opens.
#[event]
pub struct ProposalReadyEvent {
    pub id: u64,
    pub signer: Pubkey,
    pub approvals: u8,
}

#[event]
pub struct ProposalExecutedEvent {
    pub id: u64,
    pub executor: Pubkey,
    pub recipient: Pubkey,
    pub token_mint: Pubkey,
    pub amount: u64,
    pub slot: u64,
}

#[event]
pub struct ProposalRejectedEvent {
    pub id: u64,
    pub caller: Pubkey,
}

#[event]
pub struct PaymentScheduledEvent {
    pub id: u64,
    pub proposer: Pubkey,
    pub recipient: Pubkey,
    pub token_mint: Pubkey,
    pub amount: u64,
    pub interval: u64,
    pub next_due_at: u64,
}

#[event]
pub struct PaymentExecutedEvent {
    pub id: u64,
    pub caller: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub execution_count: u64,
    pub next_due_at: u64,
}

#[event]
pub struct PaymentCancelledEvent {
    pub id: u64,
    pub caller: Pubkey,
}
