use anchor_lang::prelude::*;

use crate::{constants::*, error::ErrorCode, events::*, state::*};

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct CancelRecurringPayment<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [VAULT_SEED],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,

    // Only needed when the caller cancels as Admin rather than as the
    // identity that scheduled the payment.
    #[account(
        seeds = [MEMBER_SEED, caller.key().as_ref(), vault.key().as_ref()],
        bump
    )]
    pub caller_member: Option<Account<'info, Member>>,

    #[account(
        mut,
        seeds = [PAYMENT_SEED, vault.key().as_ref(), &id.to_le_bytes()],
        bump = payment.bump
    )]
    pub payment: Account<'info, RecurringPayment>,
}

pub fn handler(ctx: Context<CancelRecurringPayment>, id: u64) -> Result<()> {
    let caller = ctx.accounts.caller.key();
    let payment = &mut ctx.accounts.payment;

    let is_admin = ctx
        .accounts
        .caller_member
        .as_ref()
        .map_or(false, |member| member.role == Role::Admin);
    require!(
        caller == payment.proposer || is_admin,
        ErrorCode::Unauthorized
    );

    require!(payment.active, ErrorCode::PaymentNotActive);
    payment.active = false;

    emit!(PaymentCancelledEvent { id, caller });

    Ok(())
}
