use anchor_lang::prelude::*;

use crate::constants::{MAX_MEMO_LEN, MAX_SIGNERS};
use crate::error::ErrorCode;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalStatus {
    Pending,
    Approved,
    Executed,
    Rejected,
    Expired,
}

impl ProposalStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ProposalStatus::Executed | ProposalStatus::Rejected | ProposalStatus::Expired
        )
    }
}

/// A transfer proposal. Records are kept after reaching a terminal status so
/// historical reads stay stable; `approvals` only ever grows.
#[account]
#[derive(InitSpace)]
pub struct Proposal {
    pub id: u64,
    pub proposer: Pubkey,
    pub recipient: Pubkey,
    pub token_mint: Pubkey,
    pub amount: u64,
    #[max_len(MAX_MEMO_LEN)]
    pub memo: String,
    #[max_len(MAX_SIGNERS)]
    pub approvals: Vec<Pubkey>,
    pub status: ProposalStatus,
    pub created_at: u64,
    pub expires_at: u64,
    /// Earliest slot at which execution is permitted; zero when no timelock
    /// applies.
    pub unlock_slot: u64,
    pub bump: u8,
}

/// Read-model returned by `get_proposal`. Expiry is reported lazily: a
/// Pending or Approved proposal past its expiry window reads as Expired.
/// The stored status is never rewritten to Expired; the window exists only
/// in this view and in the approve/execute guards.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct ProposalView {
    pub id: u64,
    pub proposer: Pubkey,
    pub recipient: Pubkey,
    pub token_mint: Pubkey,
    pub amount: u64,
    pub memo: String,
    pub approvals: Vec<Pubkey>,
    pub status: ProposalStatus,
    pub created_at: u64,
    pub expires_at: u64,
    pub unlock_slot: u64,
}

impl Proposal {
    pub fn is_expired(&self, now: u64) -> bool {
        now > self.expires_at
    }

    pub fn is_unlocked(&self, now: u64) -> bool {
        self.unlock_slot == 0 || now >= self.unlock_slot
    }

    pub fn has_approved(&self, signer: &Pubkey) -> bool {
        self.approvals.contains(signer)
    }

    /// Appends an approval and flips the proposal to Approved once the
    /// threshold is met. Returns whether the proposal is now ready.
    pub fn record_approval(&mut self, signer: Pubkey, threshold: u8) -> Result<bool> {
        require!(!self.has_approved(&signer), ErrorCode::AlreadyApproved);
        // Approval storage is sized for MAX_SIGNERS entries; a signer set
        // rotated mid-proposal cannot push the record past its allocation.
        require!(
            self.approvals.len() < MAX_SIGNERS,
            ErrorCode::TooManySigners
        );
        self.approvals.push(signer);
        if self.approvals.len() >= threshold as usize {
            self.status = ProposalStatus::Approved;
        }
        Ok(self.status == ProposalStatus::Approved)
    }

    pub fn effective_status(&self, now: u64) -> ProposalStatus {
        match self.status {
            ProposalStatus::Pending | ProposalStatus::Approved if self.is_expired(now) => {
                ProposalStatus::Expired
            }
            status => status,
        }
    }

    pub fn view(&self, now: u64) -> ProposalView {
        ProposalView {
            id: self.id,
            proposer: self.proposer,
            recipient: self.recipient,
            token_mint: self.token_mint,
            amount: self.amount,
            memo: self.memo.clone(),
            approvals: self.approvals.clone(),
            status: self.effective_status(now),
            created_at: self.created_at,
            expires_at: self.expires_at,
            unlock_slot: self.unlock_slot,
        }
    }
}
