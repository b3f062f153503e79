pub mod add_signer;
pub mod approve_proposal;
pub mod cancel_recurring_payment;
pub mod execute_proposal;
pub mod execute_recurring_payment;
pub mod get_proposal;
pub mod get_role;
pub mod get_today_spent;
pub mod initialize;
pub mod is_signer;
pub mod propose_transfer;
pub mod reject_proposal;
pub mod remove_signer;
pub mod schedule_payment;
pub mod set_role;
pub mod update_limits;
pub mod update_threshold;
pub mod update_timelock;

pub use add_signer::*;
pub use approve_proposal::*;
pub use cancel_recurring_payment::*;
pub use execute_proposal::*;
pub use execute_recurring_payment::*;
pub use get_proposal::*;
pub use get_role::*;
pub use get_today_spent::*;
pub use initialize::*;
pub use is_signer::*;
pub use propose_transfer::*;
pub use reject_proposal::*;
pub use remove_signer::*;
pub use schedule_payment::*;
pub use set_role::*;
pub use update_limits::*;
pub use update_threshold::*;
pub use update_timelock::*;
