use anchor_lang::prelude::*;

/// Permission levels, strictly ordered by privilege. A participant without a
/// member record holds `Member` implicitly.
#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug,
)]
pub enum Role {
    Member = 0,
    Treasurer = 1,
    Admin = 2,
}

/// Privileged operations, used to look up the role each entry point demands
/// instead of scattering ad hoc comparisons.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    SetRole,
    AddSigner,
    RemoveSigner,
    UpdateThreshold,
    UpdateLimits,
    UpdateTimelock,
    ProposeTransfer,
    ApproveProposal,
    SchedulePayment,
}

pub const fn required_role(operation: Operation) -> Role {
    match operation {
        Operation::SetRole
        | Operation::AddSigner
        | Operation::RemoveSigner
        | Operation::UpdateThreshold
        | Operation::UpdateLimits
        | Operation::UpdateTimelock => Role::Admin,
        Operation::ProposeTransfer | Operation::ApproveProposal | Operation::SchedulePayment => {
            Role::Treasurer
        }
    }
}

#[account]
#[derive(InitSpace)]
pub struct Member {
    pub user: Pubkey,
    pub role: Role,
    pub vault: Pubkey,
    pub bump: u8,
}

impl Member {
    pub fn can(&self, operation: Operation) -> bool {
        self.role >= required_role(operation)
    }
}
