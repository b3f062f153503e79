use anchor_lang::prelude::*;

use crate::constants::MAX_MEMO_LEN;
use crate::error::ErrorCode;

/// A standing payment executed on a pull basis: any caller may trigger it
/// once due; there is no autonomous timer. Deactivated only explicitly.
#[account]
#[derive(InitSpace)]
pub struct RecurringPayment {
    pub id: u64,
    pub proposer: Pubkey,
    pub recipient: Pubkey,
    pub token_mint: Pubkey,
    pub amount: u64,
    #[max_len(MAX_MEMO_LEN)]
    pub memo: String,
    pub interval: u64,
    pub next_due_at: u64,
    pub execution_count: u64,
    pub active: bool,
    pub bump: u8,
}

impl RecurringPayment {
    pub fn is_due(&self, now: u64) -> bool {
        self.active && now >= self.next_due_at
    }

    /// Advances the schedule after a successful execution. The due slot moves
    /// by exactly one interval from the previous due slot, not from `now`, so
    /// a late trigger does not drift the schedule.
    pub fn advance(&mut self) -> Result<()> {
        self.next_due_at = self
            .next_due_at
            .checked_add(self.interval)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.execution_count = self
            .execution_count
            .checked_add(1)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }
}
