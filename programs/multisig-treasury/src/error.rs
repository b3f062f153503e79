use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    // --- initialization ---
    #[msg("Vault must be initialized with at least one signer")]
    NoSigners,
    #[msg("Signer set exceeds the maximum supported size")]
    TooManySigners,

    // --- authorization / roles ---
    #[msg("Caller is not authorized to perform this action")]
    Unauthorized,
    #[msg("Caller's role is insufficient for this action")]
    InsufficientRole,
    #[msg("Caller is not a member of the current signer set")]
    NotASigner,

    // --- proposal lifecycle ---
    #[msg("Proposal is not pending")]
    ProposalNotPending,
    #[msg("Proposal has not reached the approval threshold")]
    ProposalNotApproved,
    #[msg("Proposal has already been executed")]
    ProposalAlreadyExecuted,
    #[msg("Proposal has expired")]
    ProposalExpired,
    #[msg("Signer has already approved this proposal")]
    AlreadyApproved,

    // --- spending limits and time gates ---
    #[msg("Transfer would exceed the daily spending limit")]
    ExceedsDailyLimit,
    #[msg("Transfer would exceed the weekly spending limit")]
    ExceedsWeeklyLimit,
    #[msg("Amount exceeds the per-proposal limit")]
    ExceedsProposalLimit,
    #[msg("Timelock has not expired yet")]
    TimelockNotExpired,

    // --- configuration ---
    #[msg("Amount must be greater than zero")]
    InvalidAmount,
    #[msg("Memo exceeds the maximum length")]
    MemoTooLong,
    #[msg("Threshold must be at least one")]
    ThresholdTooLow,
    #[msg("Threshold cannot exceed the number of signers")]
    ThresholdTooHigh,
    #[msg("Signer is already in the signer set")]
    SignerAlreadyExists,
    #[msg("Signer is not in the signer set")]
    SignerNotFound,
    #[msg("Removing this signer would leave fewer signers than the threshold")]
    CannotRemoveSigner,
    #[msg("Recurring payment interval is below the minimum")]
    IntervalTooShort,
    #[msg("Recurring payment is not active")]
    PaymentNotActive,

    // --- token transfer ---
    #[msg("Vault holds insufficient funds for this transfer")]
    InsufficientBalance,
    #[msg("Token transfer failed")]
    TransferFailed,
    #[msg("Arithmetic overflow occurred")]
    ArithmeticOverflow,
}
