//! Address derivation for consortium accounts
//!
//! Every account address is `find_program_address(seeds, program_id)`:
//!
//! - Consortium:  `[label, chairperson]`
//! - Member:      `[consortium, member identity]`
//! - Question:    `[consortium, question index as 4 big-endian bytes]`
//! - Answer:      `[question, answer index as 1 byte]`
//! - VoteReceipt: `[voter, question]`
//!
//! Authorization checks recompute these from the signer's identity rather
//! than trusting identities stored inside caller-supplied accounts.

use anchor_lang::prelude::*;

/// Zero-padded question counter seed.
pub fn question_index_seed(index: u32) -> [u8; 4] {
    index.to_be_bytes()
}

/// Single-byte answer index seed.
pub fn answer_index_seed(index: u8) -> [u8; 1] {
    [index]
}

/// Canonical address and bump for `seeds` under this program.
pub fn find(seeds: &[&[u8]]) -> (Pubkey, u8) {
    Pubkey::find_program_address(seeds, &crate::ID)
}

/// Whether `address` is the PDA of `seeds` with a previously stored bump.
pub fn matches(address: &Pubkey, seeds: &[&[u8]], bump: u8) -> bool {
    let bump_seed = [bump];
    let mut full: Vec<&[u8]> = seeds.to_vec();
    full.push(&bump_seed);

    Pubkey::create_program_address(&full, &crate::ID)
        .map(|derived| derived == *address)
        .unwrap_or(false)
}

pub fn consortium_address(label: &str, chairperson: &Pubkey) -> (Pubkey, u8) {
    find(&[label.as_bytes(), chairperson.as_ref()])
}

pub fn member_address(consortium: &Pubkey, identity: &Pubkey) -> (Pubkey, u8) {
    find(&[consortium.as_ref(), identity.as_ref()])
}

pub fn question_address(consortium: &Pubkey, index: u32) -> (Pubkey, u8) {
    find(&[consortium.as_ref(), &question_index_seed(index)])
}

pub fn answer_address(question: &Pubkey, index: u8) -> (Pubkey, u8) {
    find(&[question.as_ref(), &answer_index_seed(index)])
}

pub fn vote_receipt_address(voter: &Pubkey, question: &Pubkey) -> (Pubkey, u8) {
    find(&[voter.as_ref(), question.as_ref()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let chairperson = Pubkey::new_unique();
        assert_eq!(
            consortium_address("consortium", &chairperson),
            consortium_address("consortium", &chairperson)
        );
        assert_ne!(
            consortium_address("consortium", &chairperson).0,
            consortium_address("other", &chairperson).0
        );
    }

    #[test]
    fn question_counter_is_zero_padded_big_endian() {
        assert_eq!(question_index_seed(0), [0, 0, 0, 0]);
        assert_eq!(question_index_seed(1), [0, 0, 0, 1]);
        assert_eq!(question_index_seed(258), [0, 0, 1, 2]);

        let consortium = Pubkey::new_unique();
        let (expected, _) = Pubkey::find_program_address(
            &[consortium.as_ref(), &[0, 0, 0, 7]],
            &crate::ID,
        );
        assert_eq!(question_address(&consortium, 7).0, expected);
    }

    #[test]
    fn each_identity_gets_its_own_member_address() {
        let consortium = Pubkey::new_unique();
        let alice = Pubkey::new_unique();
        let bob = Pubkey::new_unique();

        assert_ne!(
            member_address(&consortium, &alice).0,
            member_address(&consortium, &bob).0
        );
        assert_ne!(
            member_address(&consortium, &alice).0,
            member_address(&Pubkey::new_unique(), &alice).0
        );
    }

    #[test]
    fn receipt_seed_order_matters() {
        let voter = Pubkey::new_unique();
        let question = Pubkey::new_unique();
        assert_ne!(
            vote_receipt_address(&voter, &question).0,
            vote_receipt_address(&question, &voter).0
        );
    }

    #[test]
    fn stored_bump_reproduces_the_address() {
        let consortium = Pubkey::new_unique();
        let identity = Pubkey::new_unique();
        let (address, bump) = member_address(&consortium, &identity);

        assert!(matches(
            &address,
            &[consortium.as_ref(), identity.as_ref()],
            bump
        ));
    }

    #[test]
    fn another_identity_does_not_reproduce_the_address() {
        let consortium = Pubkey::new_unique();
        let victim = Pubkey::new_unique();
        let attacker = Pubkey::new_unique();
        let (victim_member, bump) = member_address(&consortium, &victim);

        assert!(!matches(
            &victim_member,
            &[consortium.as_ref(), attacker.as_ref()],
            bump
        ));
    }
}
