use {
    anchor_lang::prelude::AccountInfo,
    multisig_treasury::{entry, ID as PROGRAM_ID},
    solana_program_test::*,
    solana_sdk::{
        entrypoint::{ProcessInstruction, ProgramResult},
        pubkey::Pubkey,
    },
};

// Type alias for the entry function pointer used to convert the entry
// function into a ProcessInstruction function pointer.
pub type ProgramEntry = for<'info> fn(
    program_id: &Pubkey,
    accounts: &'info [AccountInfo<'info>],
    instruction_data: &[u8],
) -> ProgramResult;

// Macro to convert the entry function into a ProcessInstruction function
// pointer.
#[macro_export]
macro_rules! convert_entry {
    ($entry:expr) => {
        unsafe { core::mem::transmute::<ProgramEntry, ProcessInstruction>($entry) }
    };
}

pub fn get_program_test() -> ProgramTest {
    ProgramTest::new(
        "multisig_treasury",
        PROGRAM_ID,
        processor!(convert_entry!(entry)),
    )
}

pub mod pdas {
    use multisig_treasury::{MEMBER_SEED, PAYMENT_SEED, PROPOSAL_SEED, VAULT_SEED};
    use solana_sdk::pubkey::Pubkey;

    pub fn vault() -> Pubkey {
        Pubkey::find_program_address(&[VAULT_SEED], &multisig_treasury::ID).0
    }

    pub fn member(user: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(
            &[MEMBER_SEED, user.as_ref(), vault().as_ref()],
            &multisig_treasury::ID,
        )
        .0
    }

    pub fn proposal(id: u64) -> Pubkey {
        Pubkey::find_program_address(
            &[PROPOSAL_SEED, vault().as_ref(), &id.to_le_bytes()],
            &multisig_treasury::ID,
        )
        .0
    }

    pub fn payment(id: u64) -> Pubkey {
        Pubkey::find_program_address(
            &[PAYMENT_SEED, vault().as_ref(), &id.to_le_bytes()],
            &multisig_treasury::ID,
        )
        .0
    }
}

pub mod errors {
    use multisig_treasury::error::ErrorCode;
    use solana_sdk::{instruction::InstructionError, transaction::TransactionError};

    pub fn code(error: ErrorCode) -> u32 {
        match anchor_lang::error::Error::from(error) {
            anchor_lang::error::Error::AnchorError(anchor_error) => {
                anchor_error.error_code_number
            }
            anchor_lang::error::Error::ProgramError(_) => unreachable!(),
        }
    }

    pub fn assert_custom_error<T: std::fmt::Debug>(
        result: Result<T, solana_program_test::BanksClientError>,
        expected: ErrorCode,
    ) {
        match result {
            Err(solana_program_test::BanksClientError::TransactionError(
                TransactionError::InstructionError(_, InstructionError::Custom(observed)),
            )) => {
                assert_eq!(observed, code(expected), "unexpected custom error code");
            }
            other => panic!("expected {:?}, got {:?}", expected, other),
        }
    }
}

pub mod token {
    use solana_program_test::ProgramTestContext;
    use solana_sdk::{
        program_pack::Pack,
        pubkey::Pubkey,
        signature::{Keypair, Signer},
        system_instruction,
        transaction::Transaction,
    };

    pub async fn create_mint(context: &mut ProgramTestContext) -> Pubkey {
        let mint = Keypair::new();
        let rent = context.banks_client.get_rent().await.unwrap();
        let payer = context.payer.pubkey();
        let blockhash = context.get_new_latest_blockhash().await.unwrap();

        let instructions = [
            system_instruction::create_account(
                &payer,
                &mint.pubkey(),
                rent.minimum_balance(spl_token::state::Mint::LEN),
                spl_token::state::Mint::LEN as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_mint(
                &spl_token::id(),
                &mint.pubkey(),
                &payer,
                None,
                6,
            )
            .unwrap(),
        ];
        let transaction = Transaction::new_signed_with_payer(
            &instructions,
            Some(&payer),
            &[&context.payer, &mint],
            blockhash,
        );
        context
            .banks_client
            .process_transaction(transaction)
            .await
            .unwrap();
        mint.pubkey()
    }

    pub async fn create_token_account(
        context: &mut ProgramTestContext,
        mint: &Pubkey,
        owner: &Pubkey,
    ) -> Pubkey {
        let account = Keypair::new();
        let rent = context.banks_client.get_rent().await.unwrap();
        let payer = context.payer.pubkey();
        let blockhash = context.get_new_latest_blockhash().await.unwrap();

        let instructions = [
            system_instruction::create_account(
                &payer,
                &account.pubkey(),
                rent.minimum_balance(spl_token::state::Account::LEN),
                spl_token::state::Account::LEN as u64,
                &spl_token::id(),
            ),
            spl_token::instruction::initialize_account3(
                &spl_token::id(),
                &account.pubkey(),
                mint,
                owner,
            )
            .unwrap(),
        ];
        let transaction = Transaction::new_signed_with_payer(
            &instructions,
            Some(&payer),
            &[&context.payer, &account],
            blockhash,
        );
        context
            .banks_client
            .process_transaction(transaction)
            .await
            .unwrap();
        account.pubkey()
    }

    pub async fn mint_to(
        context: &mut ProgramTestContext,
        mint: &Pubkey,
        destination: &Pubkey,
        amount: u64,
    ) {
        let payer = context.payer.pubkey();
        let blockhash = context.get_new_latest_blockhash().await.unwrap();
        let instruction = spl_token::instruction::mint_to(
            &spl_token::id(),
            mint,
            destination,
            &payer,
            &[],
            amount,
        )
        .unwrap();
        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&payer),
            &[&context.payer],
            blockhash,
        );
        context
            .banks_client
            .process_transaction(transaction)
            .await
            .unwrap();
    }

    pub async fn balance(context: &mut ProgramTestContext, token_account: &Pubkey) -> u64 {
        let account = context
            .banks_client
            .get_account(*token_account)
            .await
            .unwrap()
            .unwrap();
        spl_token::state::Account::unpack_from_slice(&account.data)
            .unwrap()
            .amount
    }
}

pub mod multisig_treasury_ix_interface {
    use {
        anchor_lang::{InstructionData, ToAccountMetas},
        multisig_treasury::{accounts as treasury_accounts, instruction as treasury_instruction},
        solana_sdk::{
            hash::Hash,
            instruction::Instruction,
            pubkey::Pubkey,
            signature::{Keypair, Signer},
            system_program,
            transaction::Transaction,
        },
    };

    use super::pdas;

    #[allow(clippy::too_many_arguments)]
    pub fn initialize_tx(
        admin: &Keypair,
        signers: Vec<Pubkey>,
        threshold: u8,
        per_proposal_limit: u64,
        daily_limit: u64,
        weekly_limit: u64,
        timelock_threshold: u64,
        timelock_delay: u64,
        recent_blockhash: Hash,
    ) -> Transaction {
        let accounts = treasury_accounts::Initialize {
            admin: admin.pubkey(),
            vault: pdas::vault(),
            admin_member: pdas::member(&admin.pubkey()),
            system_program: system_program::id(),
        };
        let data = treasury_instruction::Initialize {
            signers,
            threshold,
            per_proposal_limit,
            daily_limit,
            weekly_limit,
            timelock_threshold,
            timelock_delay,
        };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&admin.pubkey()));
        transaction.sign(&[admin], recent_blockhash);
        transaction
    }

    pub fn set_role_tx(
        admin: &Keypair,
        target: Pubkey,
        role: multisig_treasury::Role,
        recent_blockhash: Hash,
    ) -> Transaction {
        let accounts = treasury_accounts::SetRole {
            admin: admin.pubkey(),
            vault: pdas::vault(),
            admin_member: pdas::member(&admin.pubkey()),
            target_member: pdas::member(&target),
            system_program: system_program::id(),
        };
        let data = treasury_instruction::SetRole { target, role };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&admin.pubkey()));
        transaction.sign(&[admin], recent_blockhash);
        transaction
    }

    pub fn add_signer_tx(admin: &Keypair, address: Pubkey, recent_blockhash: Hash) -> Transaction {
        let accounts = treasury_accounts::AddSigner {
            admin: admin.pubkey(),
            vault: pdas::vault(),
            admin_member: pdas::member(&admin.pubkey()),
        };
        let data = treasury_instruction::AddSigner { address };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&admin.pubkey()));
        transaction.sign(&[admin], recent_blockhash);
        transaction
    }

    pub fn remove_signer_tx(
        admin: &Keypair,
        address: Pubkey,
        recent_blockhash: Hash,
    ) -> Transaction {
        let accounts = treasury_accounts::RemoveSigner {
            admin: admin.pubkey(),
            vault: pdas::vault(),
            admin_member: pdas::member(&admin.pubkey()),
        };
        let data = treasury_instruction::RemoveSigner { address };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&admin.pubkey()));
        transaction.sign(&[admin], recent_blockhash);
        transaction
    }

    pub fn update_threshold_tx(
        admin: &Keypair,
        new_threshold: u8,
        recent_blockhash: Hash,
    ) -> Transaction {
        let accounts = treasury_accounts::UpdateThreshold {
            admin: admin.pubkey(),
            vault: pdas::vault(),
            admin_member: pdas::member(&admin.pubkey()),
        };
        let data = treasury_instruction::UpdateThreshold { new_threshold };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&admin.pubkey()));
        transaction.sign(&[admin], recent_blockhash);
        transaction
    }

    pub fn update_limits_tx(
        admin: &Keypair,
        per_proposal_limit: Option<u64>,
        daily_limit: Option<u64>,
        weekly_limit: Option<u64>,
        recent_blockhash: Hash,
    ) -> Transaction {
        let accounts = treasury_accounts::UpdateLimits {
            admin: admin.pubkey(),
            vault: pdas::vault(),
            admin_member: pdas::member(&admin.pubkey()),
        };
        let data = treasury_instruction::UpdateLimits {
            per_proposal_limit,
            daily_limit,
            weekly_limit,
        };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&admin.pubkey()));
        transaction.sign(&[admin], recent_blockhash);
        transaction
    }

    pub fn update_timelock_tx(
        admin: &Keypair,
        timelock_threshold: Option<u64>,
        timelock_delay: Option<u64>,
        recent_blockhash: Hash,
    ) -> Transaction {
        let accounts = treasury_accounts::UpdateTimelock {
            admin: admin.pubkey(),
            vault: pdas::vault(),
            admin_member: pdas::member(&admin.pubkey()),
        };
        let data = treasury_instruction::UpdateTimelock {
            timelock_threshold,
            timelock_delay,
        };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&admin.pubkey()));
        transaction.sign(&[admin], recent_blockhash);
        transaction
    }

    pub fn propose_transfer_tx(
        proposer: &Keypair,
        proposal_id: u64,
        recipient: Pubkey,
        token_mint: Pubkey,
        amount: u64,
        memo: &str,
        recent_blockhash: Hash,
    ) -> Transaction {
        let accounts = treasury_accounts::ProposeTransfer {
            proposer: proposer.pubkey(),
            vault: pdas::vault(),
            proposer_member: pdas::member(&proposer.pubkey()),
            proposal: pdas::proposal(proposal_id),
            token_mint,
            system_program: system_program::id(),
        };
        let data = treasury_instruction::ProposeTransfer {
            recipient,
            amount,
            memo: memo.to_string(),
        };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction =
            Transaction::new_with_payer(&[instruction], Some(&proposer.pubkey()));
        transaction.sign(&[proposer], recent_blockhash);
        transaction
    }

    pub fn approve_proposal_tx(
        signer: &Keypair,
        signer_is_member: bool,
        proposal_id: u64,
        recent_blockhash: Hash,
    ) -> Transaction {
        let accounts = treasury_accounts::ApproveProposal {
            signer: signer.pubkey(),
            vault: pdas::vault(),
            signer_member: signer_is_member.then(|| pdas::member(&signer.pubkey())),
            proposal: pdas::proposal(proposal_id),
        };
        let data = treasury_instruction::ApproveProposal { id: proposal_id };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&signer.pubkey()));
        transaction.sign(&[signer], recent_blockhash);
        transaction
    }

    pub fn reject_proposal_tx(
        caller: &Keypair,
        caller_is_member: bool,
        proposal_id: u64,
        recent_blockhash: Hash,
    ) -> Transaction {
        let accounts = treasury_accounts::RejectProposal {
            caller: caller.pubkey(),
            vault: pdas::vault(),
            caller_member: caller_is_member.then(|| pdas::member(&caller.pubkey())),
            proposal: pdas::proposal(proposal_id),
        };
        let data = treasury_instruction::RejectProposal { id: proposal_id };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&caller.pubkey()));
        transaction.sign(&[caller], recent_blockhash);
        transaction
    }

    pub fn execute_proposal_tx(
        executor: &Keypair,
        proposal_id: u64,
        vault_token_account: Pubkey,
        recipient_token_account: Pubkey,
        recent_blockhash: Hash,
    ) -> Transaction {
        let accounts = treasury_accounts::ExecuteProposal {
            executor: executor.pubkey(),
            vault: pdas::vault(),
            proposal: pdas::proposal(proposal_id),
            vault_token_account,
            recipient_token_account,
            token_program: spl_token::id(),
        };
        let data = treasury_instruction::ExecuteProposal { id: proposal_id };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction =
            Transaction::new_with_payer(&[instruction], Some(&executor.pubkey()));
        transaction.sign(&[executor], recent_blockhash);
        transaction
    }

    pub fn schedule_payment_tx(
        proposer: &Keypair,
        payment_id: u64,
        recipient: Pubkey,
        token_mint: Pubkey,
        amount: u64,
        memo: &str,
        interval: u64,
        recent_blockhash: Hash,
    ) -> Transaction {
        let accounts = treasury_accounts::SchedulePayment {
            proposer: proposer.pubkey(),
            vault: pdas::vault(),
            proposer_member: pdas::member(&proposer.pubkey()),
            payment: pdas::payment(payment_id),
            token_mint,
            system_program: system_program::id(),
        };
        let data = treasury_instruction::SchedulePayment {
            recipient,
            amount,
            memo: memo.to_string(),
            interval,
        };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction =
            Transaction::new_with_payer(&[instruction], Some(&proposer.pubkey()));
        transaction.sign(&[proposer], recent_blockhash);
        transaction
    }

    pub fn execute_recurring_payment_tx(
        caller: &Keypair,
        payment_id: u64,
        vault_token_account: Pubkey,
        recipient_token_account: Pubkey,
        recent_blockhash: Hash,
    ) -> Transaction {
        let accounts = treasury_accounts::ExecuteRecurringPayment {
            caller: caller.pubkey(),
            vault: pdas::vault(),
            payment: pdas::payment(payment_id),
            vault_token_account,
            recipient_token_account,
            token_program: spl_token::id(),
        };
        let data = treasury_instruction::ExecuteRecurringPayment { id: payment_id };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&caller.pubkey()));
        transaction.sign(&[caller], recent_blockhash);
        transaction
    }

    pub fn get_proposal_tx(
        payer: &Keypair,
        proposal_id: u64,
        recent_blockhash: Hash,
    ) -> Transaction {
        let accounts = treasury_accounts::GetProposal {
            vault: pdas::vault(),
            proposal: pdas::proposal(proposal_id),
        };
        let data = treasury_instruction::GetProposal { id: proposal_id };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&payer.pubkey()));
        transaction.sign(&[payer], recent_blockhash);
        transaction
    }

    pub fn get_role_tx(
        payer: &Keypair,
        address: Pubkey,
        address_is_member: bool,
        recent_blockhash: Hash,
    ) -> Transaction {
        let accounts = treasury_accounts::GetRole {
            vault: pdas::vault(),
            member: address_is_member.then(|| pdas::member(&address)),
        };
        let data = treasury_instruction::GetRole { address };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&payer.pubkey()));
        transaction.sign(&[payer], recent_blockhash);
        transaction
    }

    pub fn get_today_spent_tx(payer: &Keypair, recent_blockhash: Hash) -> Transaction {
        let accounts = treasury_accounts::GetTodaySpent {
            vault: pdas::vault(),
        };
        let data = treasury_instruction::GetTodaySpent {};
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&payer.pubkey()));
        transaction.sign(&[payer], recent_blockhash);
        transaction
    }

    pub fn is_signer_tx(payer: &Keypair, address: Pubkey, recent_blockhash: Hash) -> Transaction {
        let accounts = treasury_accounts::IsSigner {
            vault: pdas::vault(),
        };
        let data = treasury_instruction::IsSigner { address };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&payer.pubkey()));
        transaction.sign(&[payer], recent_blockhash);
        transaction
    }

    pub fn cancel_recurring_payment_tx(
        caller: &Keypair,
        caller_is_member: bool,
        payment_id: u64,
        recent_blockhash: Hash,
    ) -> Transaction {
        let accounts = treasury_accounts::CancelRecurringPayment {
            caller: caller.pubkey(),
            vault: pdas::vault(),
            caller_member: caller_is_member.then(|| pdas::member(&caller.pubkey())),
            payment: pdas::payment(payment_id),
        };
        let data = treasury_instruction::CancelRecurringPayment { id: payment_id };
        let instruction = Instruction::new_with_bytes(
            multisig_treasury::ID,
            &data.data(),
            accounts.to_account_metas(None),
        );
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&caller.pubkey()));
        transaction.sign(&[caller], recent_blockhash);
        transaction
    }
}

pub mod accounts {
    use anchor_lang::AccountDeserialize;
    use solana_program_test::ProgramTestContext;
    use solana_sdk::pubkey::Pubkey;

    pub async fn read<T: AccountDeserialize>(
        context: &mut ProgramTestContext,
        address: &Pubkey,
    ) -> T {
        let account = context
            .banks_client
            .get_account(*address)
            .await
            .unwrap()
            .unwrap();
        T::try_deserialize(&mut account.data.as_slice()).unwrap()
    }
}

pub mod reads {
    use anchor_lang::AnchorDeserialize;
    use solana_program_test::ProgramTestContext;
    use solana_sdk::transaction::Transaction;

    /// Simulates a read-only instruction and returns its raw return data.
    pub async fn return_data(
        context: &mut ProgramTestContext,
        transaction: Transaction,
    ) -> Vec<u8> {
        let outcome = context
            .banks_client
            .simulate_transaction(transaction)
            .await
            .unwrap();
        if let Some(Err(error)) = outcome.result {
            panic!("read instruction failed: {:?}", error);
        }
        outcome
            .simulation_details
            .unwrap()
            .return_data
            .map(|data| data.data)
            .unwrap_or_default()
    }

    /// Decodes return data. Trailing zero bytes may be stripped from return
    /// data, so the buffer is padded back out before deserializing.
    pub fn decode<T: AnchorDeserialize>(mut data: Vec<u8>) -> T {
        data.extend_from_slice(&[0u8; 64]);
        T::deserialize(&mut data.as_slice()).unwrap()
    }
}

pub struct VaultFixture {
    pub context: ProgramTestContext,
    pub admin: solana_sdk::signature::Keypair,
    pub signer_b: solana_sdk::signature::Keypair,
    pub signer_c: solana_sdk::signature::Keypair,
    pub recipient: solana_sdk::signature::Keypair,
    pub mint: Pubkey,
    pub vault_token_account: Pubkey,
    pub recipient_token_account: Pubkey,
}

pub struct VaultParams {
    pub threshold: u8,
    pub per_proposal_limit: u64,
    pub daily_limit: u64,
    pub weekly_limit: u64,
    pub timelock_threshold: u64,
    pub timelock_delay: u64,
}

impl Default for VaultParams {
    fn default() -> Self {
        Self {
            threshold: 2,
            per_proposal_limit: 10_000,
            daily_limit: 1_000,
            weekly_limit: 100_000,
            timelock_threshold: 10_000,
            timelock_delay: 0,
        }
    }
}

/// Spins up the program with an initialized vault: three signers
/// (admin + two treasurers), a mint, and a funded vault token account.
pub async fn setup_vault(params: VaultParams) -> VaultFixture {
    use solana_sdk::signature::{Keypair, Signer};

    let mut context = get_program_test().start_with_context().await;

    let admin = Keypair::new();
    let signer_b = Keypair::new();
    let signer_c = Keypair::new();
    let recipient = Keypair::new();
    for key in [&admin, &signer_b, &signer_c, &recipient] {
        fund(&mut context, &key.pubkey(), 10_000_000_000).await;
    }

    let blockhash = context.get_new_latest_blockhash().await.unwrap();
    let tx = multisig_treasury_ix_interface::initialize_tx(
        &admin,
        vec![admin.pubkey(), signer_b.pubkey(), signer_c.pubkey()],
        params.threshold,
        params.per_proposal_limit,
        params.daily_limit,
        params.weekly_limit,
        params.timelock_threshold,
        params.timelock_delay,
        blockhash,
    );
    context.banks_client.process_transaction(tx).await.unwrap();

    for treasurer in [&signer_b, &signer_c] {
        let blockhash = context.get_new_latest_blockhash().await.unwrap();
        let tx = multisig_treasury_ix_interface::set_role_tx(
            &admin,
            treasurer.pubkey(),
            multisig_treasury::Role::Treasurer,
            blockhash,
        );
        context.banks_client.process_transaction(tx).await.unwrap();
    }

    let mint = token::create_mint(&mut context).await;
    let vault_token_account = token::create_token_account(&mut context, &mint, &pdas::vault()).await;
    token::mint_to(&mut context, &mint, &vault_token_account, 1_000_000).await;
    let recipient_token_account =
        token::create_token_account(&mut context, &mint, &recipient.pubkey()).await;

    VaultFixture {
        context,
        admin,
        signer_b,
        signer_c,
        recipient,
        mint,
        vault_token_account,
        recipient_token_account,
    }
}

/// Funds a throwaway keypair from the context payer.
pub async fn fund(
    context: &mut solana_program_test::ProgramTestContext,
    recipient: &solana_sdk::pubkey::Pubkey,
    lamports: u64,
) {
    let payer = solana_sdk::signer::Signer::pubkey(&context.payer);
    let blockhash = context.get_new_latest_blockhash().await.unwrap();
    let transaction = solana_sdk::transaction::Transaction::new_signed_with_payer(
        &[solana_sdk::system_instruction::transfer(
            &payer, recipient, lamports,
        )],
        Some(&payer),
        &[&context.payer],
        blockhash,
    );
    context
        .banks_client
        .process_transaction(transaction)
        .await
        .unwrap();
}
