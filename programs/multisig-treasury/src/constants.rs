pub const VAULT_SEED: &[u8] = b"vault";
pub const MEMBER_SEED: &[u8] = b"member";
pub const PROPOSAL_SEED: &[u8] = b"proposal";
pub const PAYMENT_SEED: &[u8] = b"payment";

/// Upper bound on the signer set. Signers and approvals are stored inline in
/// their accounts, so the bound fixes account space.
pub const MAX_SIGNERS: usize = 10;

pub const MAX_MEMO_LEN: usize = 128;

// Spending windows and the proposal expiry window, measured in slots
// (~400ms each). The slot counter is the program's only clock.
pub const SLOTS_PER_DAY: u64 = 216_000;
pub const SLOTS_PER_WEEK: u64 = 7 * SLOTS_PER_DAY;
pub const PROPOSAL_EXPIRY_SLOTS: u64 = SLOTS_PER_WEEK;

// Minimum recurring payment interval in slots
pub const MIN_PAYMENT_INTERVAL: u64 = 720;
