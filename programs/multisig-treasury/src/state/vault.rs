use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::ErrorCode;

/// Singleton vault configuration and engine counters. Created once by
/// `initialize`, mutated only through Admin-gated instructions.
///
/// Spending accumulators use a rolling-window key: `day_key`/`week_key` hold
/// `slot / window_len` for the period the accumulator belongs to. A stored key
/// older than the current one means the window has rolled over and the
/// accumulator reads as zero; stale values are overwritten lazily on the next
/// commit, never by a background sweep.
#[account]
#[derive(InitSpace)]
pub struct Vault {
    pub admin: Pubkey,
    #[max_len(MAX_SIGNERS)]
    pub signers: Vec<Pubkey>,
    pub threshold: u8,
    pub per_proposal_limit: u64,
    pub daily_limit: u64,
    pub weekly_limit: u64,
    pub timelock_threshold: u64,
    pub timelock_delay: u64,
    pub next_proposal_id: u64,
    pub next_payment_id: u64,
    pub day_key: u64,
    pub day_spent: u64,
    pub week_key: u64,
    pub week_spent: u64,
    pub bump: u8,
}

impl Vault {
    pub fn is_signer(&self, address: &Pubkey) -> bool {
        self.signers.contains(address)
    }

    pub fn allocate_proposal_id(&mut self) -> Result<u64> {
        let id = self.next_proposal_id;
        self.next_proposal_id = id.checked_add(1).ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(id)
    }

    pub fn allocate_payment_id(&mut self) -> Result<u64> {
        let id = self.next_payment_id;
        self.next_payment_id = id.checked_add(1).ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(id)
    }

    /// Earliest slot at which a transfer of `amount` may execute. Zero means
    /// no timelock applies.
    pub fn compute_unlock(&self, amount: u64, now: u64) -> u64 {
        if amount <= self.timelock_threshold {
            0
        } else {
            now.saturating_add(self.timelock_delay)
        }
    }

    pub fn spent_today(&self, now: u64) -> u64 {
        if self.day_key == now / SLOTS_PER_DAY {
            self.day_spent
        } else {
            0
        }
    }

    pub fn spent_this_week(&self, now: u64) -> u64 {
        if self.week_key == now / SLOTS_PER_WEEK {
            self.week_spent
        } else {
            0
        }
    }

    /// Verifies that spending `amount` at `now` stays within both rolling
    /// windows. Read-only; the caller commits only after its transfer
    /// succeeds, so a failed transfer leaves no residue.
    pub fn check_spending(&self, amount: u64, now: u64) -> Result<()> {
        let daily = self
            .spent_today(now)
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        require!(daily <= self.daily_limit, ErrorCode::ExceedsDailyLimit);

        let weekly = self
            .spent_this_week(now)
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        require!(weekly <= self.weekly_limit, ErrorCode::ExceedsWeeklyLimit);

        Ok(())
    }

    /// Records a completed outflow in both windows, rolling stale
    /// accumulators forward first.
    pub fn commit_spending(&mut self, amount: u64, now: u64) -> Result<()> {
        let day_key = now / SLOTS_PER_DAY;
        if self.day_key != day_key {
            self.day_key = day_key;
            self.day_spent = 0;
        }
        self.day_spent = self
            .day_spent
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        let week_key = now / SLOTS_PER_WEEK;
        if self.week_key != week_key {
            self.week_key = week_key;
            self.week_spent = 0;
        }
        self.week_spent = self
            .week_spent
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;

        Ok(())
    }
}
