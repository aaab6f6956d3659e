use borsh::{BorshDeserialize, BorshSerialize};
use litesvm::types::TransactionResult;
use litesvm::LiteSVM;
use sha2::{Digest, Sha256};
use solana_account::Account;
use solana_instruction::error::InstructionError;
use solana_instruction::Instruction;
use solana_keypair::Keypair;
use solana_message::Message;
use solana_native_token::LAMPORTS_PER_SOL;
use solana_pubkey::Pubkey;
use solana_signer::Signer;
use solana_transaction::Transaction;
use solana_transaction_error::TransactionError;
use std::path::PathBuf;

/// Anchor adds this to every `#[error_code]` ordinal.
pub const ERROR_CODE_OFFSET: u32 = 6000;

pub fn read_program(name: &str) -> Vec<u8> {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("..");
    path.push("target");
    path.push("deploy");
    path.push(format!("{}.so", name));
    std::fs::read(&path).unwrap_or_else(|_| panic!("Failed to read program from {:?}", path))
}

pub fn setup_svm(program_id: Pubkey, program_name: &str) -> LiteSVM {
    let mut svm = LiteSVM::new();
    svm.add_program(program_id, &read_program(program_name));
    svm
}

pub fn funded_keypair(svm: &mut LiteSVM) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), 10 * LAMPORTS_PER_SOL)
        .expect("Airdrop failed");
    keypair
}

/// Anchor instruction discriminator: `sha256("global:<name>")[..8]`.
pub fn discriminator(name: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(format!("global:{}", name).as_bytes());
    let result = hasher.finalize();
    let mut disc = [0u8; 8];
    disc.copy_from_slice(&result[..8]);
    disc
}

/// Discriminator followed by the Borsh-encoded arguments.
pub fn instruction_data<T: BorshSerialize>(name: &str, args: &T) -> Vec<u8> {
    let mut data = discriminator(name).to_vec();
    data.extend(borsh::to_vec(args).expect("Failed to encode arguments"));
    data
}

/// Sends `ix` paid by `payer`. Every call gets a fresh blockhash so a
/// repeated instruction is a new transaction, not a duplicate.
pub fn send(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> TransactionResult {
    svm.expire_blockhash();
    let mut all: Vec<&Keypair> = vec![payer];
    all.extend_from_slice(signers);

    let msg = Message::new(&[ix], Some(&payer.pubkey()));
    let tx = Transaction::new(all.as_slice(), msg, svm.latest_blockhash());
    svm.send_transaction(tx)
}

pub fn custom_error(result: &TransactionResult) -> Option<u32> {
    match result {
        Err(failed) => match &failed.err {
            TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(*code),
            _ => None,
        },
        Ok(_) => None,
    }
}

/// Asserts the transaction failed with the program error at `ordinal`.
pub fn assert_program_error(result: &TransactionResult, ordinal: u32) {
    assert_custom_error(result, ERROR_CODE_OFFSET + ordinal);
}

/// Asserts the transaction failed with the raw custom `code`, for
/// framework errors such as Anchor's account constraint codes.
pub fn assert_custom_error(result: &TransactionResult, code: u32) {
    assert_eq!(
        custom_error(result),
        Some(code),
        "unexpected result: {:?}",
        result
    );
}

pub fn account(svm: &LiteSVM, address: &Pubkey) -> Account {
    svm.get_account(address)
        .unwrap_or_else(|| panic!("No account at {}", address))
}

/// Decodes the Borsh body behind a `discriminator_len`-byte discriminator.
pub fn fetch<T: BorshDeserialize>(svm: &LiteSVM, address: &Pubkey, discriminator_len: usize) -> T {
    let data = account(svm, address).data;
    T::deserialize(&mut &data[discriminator_len..]).expect("Failed to decode account")
}
