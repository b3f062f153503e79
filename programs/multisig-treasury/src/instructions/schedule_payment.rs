use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{constants::*, error::ErrorCode, events::*, state::*};

#[derive(Accounts)]
pub struct SchedulePayment<'info> {
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
        constraint = proposer_member.can(Operation::SchedulePayment) @ ErrorCode::InsufficientRole
    )]
    pub proposer_member: Account<'info, Member>,

    #[account(
        init,
        payer = proposer,
        space = 8 + RecurringPayment::INIT_SPACE,
        seeds = [
            PAYMENT_SEED,
            vault.key().as_ref(),
            &vault.next_payment_id.to_le_bytes()
        ],
        bump
    )]
    pub payment: Account<'info, RecurringPayment>,

    pub token_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<SchedulePayment>,
    recipient: Pubkey,
    amount: u64,
    memo: String,
    interval: u64,
) -> Result<u64> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require!(memo.len() <= MAX_MEMO_LEN, ErrorCode::MemoTooLong);
    require!(interval >= MIN_PAYMENT_INTERVAL, ErrorCode::IntervalTooShort);

    let now = Clock::get()?.slot;
    let vault = &mut ctx.accounts.vault;
    let id = vault.allocate_payment_id()?;

    let payment = &mut ctx.accounts.payment;
    payment.id = id;
    payment.proposer = ctx.accounts.proposer.key();
    payment.recipient = recipient;
    payment.token_mint = ctx.accounts.token_mint.key();
    payment.amount = amount;
    payment.memo = memo;
    payment.interval = interval;
    payment.next_due_at = now
        .checked_add(interval)
        .ok_or(ErrorCode::ArithmeticOverflow)?;
    payment.execution_count = 0;
    payment.active = true;
    payment.bump = ctx.bumps.payment;

    emit!(PaymentScheduledEvent {
        id,
        proposer: payment.proposer,
        recipient,
        token_mint: payment.token_mint,
        amount,
        interval,
        next_due_at: payment.next_due_at,
    });

    Ok(id)
}
