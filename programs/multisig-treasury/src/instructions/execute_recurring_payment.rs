use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, error::ErrorCode, events::*, state::*, transfer::transfer_from_vault};

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct ExecuteRecurringPayment<'info> {
    // Keeper model: any identity may trigger a due payment.
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    #[account(
        mut,
        seeds = [PAYMENT_SEED, vault.key().as_ref(), &id.to_le_bytes()],
        bump = payment.bump
    )]
    pub payment: Account<'info, RecurringPayment>,

    #[account(
        mut,
        constraint = vault_token_account.owner == vault.key() @ ErrorCode::TransferFailed,
        constraint = vault_token_account.mint == payment.token_mint @ ErrorCode::TransferFailed
    )]
    pub vault_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = recipient_token_account.owner == payment.recipient @ ErrorCode::TransferFailed,
        constraint = recipient_token_account.mint == payment.token_mint @ ErrorCode::TransferFailed
    )]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

pub fn handler(ctx: Context<ExecuteRecurringPayment>, id: u64) -> Result<()> {
    let now = Clock::get()?.slot;

    {
        let payment = &ctx.accounts.payment;
        require!(payment.active, ErrorCode::PaymentNotActive);
        require!(payment.is_due(now), ErrorCode::TimelockNotExpired);

        ctx.accounts.vault.check_spending(payment.amount, now)?;
    }

    let amount = ctx.accounts.payment.amount;
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.vault_token_account,
        &ctx.accounts.recipient_token_account,
        amount,
    )?;

    ctx.accounts.vault.commit_spending(amount, now)?;

    // Any failure above left the schedule untouched, so the same due payment
    // can simply be retried later.
    let payment = &mut ctx.accounts.payment;
    payment.advance()?;

    emit!(PaymentExecutedEvent {
        id,
        caller: ctx.accounts.caller.key(),
        recipient: payment.recipient,
        amount,
        execution_count: payment.execution_count,
        next_due_at: payment.next_due_at,
    });

    Ok(())
}
