//! State definitions for consortium governance
//!
//! Each account type carries a one-byte discriminator at offset 0 so a
//! scan over program accounts can classify them without trusting the
//! caller. Every account stores its PDA bump for cheap re-derivation.

use anchor_lang::prelude::*;

use crate::constants::{MAX_ANSWERS, MAX_ANSWER_LEN, MAX_LABEL_LEN, MAX_QUESTION_LEN};
use crate::error::ConsortiumError;

/// A chairperson-governed group of weighted members
#[account(discriminator = 1)]
#[derive(InitSpace)]
pub struct Consortium {
    /// Immutable after creation
    pub chairperson: Pubkey,
    /// Label used as the first PDA seed
    #[max_len(MAX_LABEL_LEN)]
    pub label: String,
    /// Number of questions raised; index of the next question
    pub question_count: u32,
    pub bump: u8,
}

impl Consortium {
    pub const SPACE: usize = Self::DISCRIMINATOR.len() + Self::INIT_SPACE;

    /// Index for the next question and the counter value after it.
    pub fn next_question(&self) -> Result<(u32, u32)> {
        let next = self
            .question_count
            .checked_add(1)
            .ok_or(ConsortiumError::IntegrityFault)?;
        Ok((self.question_count, next))
    }
}

/// Membership record; weight and privileges are fixed at creation
#[account(discriminator = 2)]
#[derive(InitSpace)]
pub struct Member {
    pub consortium: Pubkey,
    pub identity: Pubkey,
    pub weight: u32,
    pub can_propose: bool,
    pub bump: u8,
}

impl Member {
    pub const SPACE: usize = Self::DISCRIMINATOR.len() + Self::INIT_SPACE;

    pub fn ensure_proposer(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.identity, *signer, ConsortiumError::Unauthorized);
        require!(self.can_propose, ConsortiumError::Unauthorized);
        Ok(())
    }
}

#[account(discriminator = 3)]
#[derive(InitSpace)]
pub struct Question {
    pub consortium: Pubkey,
    pub index: u32,
    #[max_len(MAX_QUESTION_LEN)]
    pub text: String,
    /// Unix timestamp after which no answers or votes are accepted
    pub deadline: i64,
    pub answer_count: u8,
    pub resolved: bool,
    /// Only meaningful once `resolved` is set
    pub winning_index: u8,
    pub bump: u8,
}

impl Question {
    pub const SPACE: usize = Self::DISCRIMINATOR.len() + Self::INIT_SPACE;

    /// Open means unresolved and before the deadline.
    pub fn ensure_open(&self, now: i64) -> Result<()> {
        require!(!self.resolved, ConsortiumError::QuestionClosed);
        require!(now < self.deadline, ConsortiumError::DeadlinePassed);
        Ok(())
    }

    /// Index for the next answer and the counter value after it.
    pub fn next_answer(&self) -> Result<(u8, u8)> {
        require!(
            self.answer_count < MAX_ANSWERS,
            ConsortiumError::AnswerLimitReached
        );
        let next = self
            .answer_count
            .checked_add(1)
            .ok_or(ConsortiumError::IntegrityFault)?;
        Ok((self.answer_count, next))
    }
}

#[account(discriminator = 4)]
#[derive(InitSpace)]
pub struct Answer {
    pub question: Pubkey,
    pub index: u8,
    pub proposer: Pubkey,
    #[max_len(MAX_ANSWER_LEN)]
    pub text: String,
    /// Sum of the weights of every member who voted for this answer
    pub tally: u64,
    pub bump: u8,
}

impl Answer {
    pub const SPACE: usize = Self::DISCRIMINATOR.len() + Self::INIT_SPACE;

    /// Tally after adding `weight`. Overflow is an integrity fault, never a wrap.
    pub fn tally_with(&self, weight: u32) -> Result<u64> {
        let tally = self
            .tally
            .checked_add(u64::from(weight))
            .ok_or(ConsortiumError::IntegrityFault)?;
        Ok(tally)
    }
}

/// Write-once marker. Its existence at `[voter, question]` means the
/// voter has voted on that question; it is never updated.
#[account(discriminator = 5)]
#[derive(InitSpace)]
pub struct VoteReceipt {
    pub voter: Pubkey,
    pub question: Pubkey,
    pub answer: Pubkey,
    pub bump: u8,
}

impl VoteReceipt {
    pub const SPACE: usize = Self::DISCRIMINATOR.len() + Self::INIT_SPACE;
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::{Error, ERROR_CODE_OFFSET};

    fn code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(e) => panic!("unexpected program error: {:?}", e),
        }
    }

    fn expected(err: ConsortiumError) -> u32 {
        err as u32 + ERROR_CODE_OFFSET
    }

    fn question(answer_count: u8, resolved: bool, deadline: i64) -> Question {
        Question {
            consortium: Pubkey::new_unique(),
            index: 0,
            text: "What's the best fruit?".to_string(),
            deadline,
            answer_count,
            resolved,
            winning_index: 0,
            bump: 255,
        }
    }

    #[test]
    fn discriminators_are_single_distinct_bytes() {
        let discriminators = [
            Consortium::DISCRIMINATOR,
            Member::DISCRIMINATOR,
            Question::DISCRIMINATOR,
            Answer::DISCRIMINATOR,
            VoteReceipt::DISCRIMINATOR,
        ];
        for (i, disc) in discriminators.iter().enumerate() {
            assert_eq!(disc.len(), 1);
            assert_eq!(disc[0] as usize, i + 1);
        }
    }

    #[test]
    fn member_layout_is_fixed() {
        let member = Member {
            consortium: Pubkey::new_unique(),
            identity: Pubkey::new_unique(),
            weight: 150,
            can_propose: true,
            bump: 254,
        };
        let mut data = Vec::new();
        member.try_serialize(&mut data).unwrap();

        assert_eq!(data.len(), Member::SPACE);
        assert_eq!(data[0], 2);
        assert_eq!(&data[1..33], member.consortium.as_ref());
        assert_eq!(&data[33..65], member.identity.as_ref());
        assert_eq!(&data[65..69], &150u32.to_le_bytes());
        assert_eq!(data[69], 1);

        let decoded = Member::try_deserialize(&mut data.as_slice()).unwrap();
        assert_eq!(decoded.weight, 150);
        assert!(decoded.can_propose);
        assert_eq!(decoded.identity, member.identity);
    }

    #[test]
    fn decoding_rejects_other_entity_types() {
        let receipt = VoteReceipt {
            voter: Pubkey::new_unique(),
            question: Pubkey::new_unique(),
            answer: Pubkey::new_unique(),
            bump: 1,
        };
        let mut data = Vec::new();
        receipt.try_serialize(&mut data).unwrap();

        assert!(Member::try_deserialize(&mut data.as_slice()).is_err());
        assert!(VoteReceipt::try_deserialize(&mut data.as_slice()).is_ok());
    }

    #[test]
    fn text_fields_fit_declared_space() {
        let answer = Answer {
            question: Pubkey::new_unique(),
            index: 3,
            proposer: Pubkey::new_unique(),
            text: "x".repeat(MAX_ANSWER_LEN),
            tally: u64::MAX,
            bump: 1,
        };
        let mut data = Vec::new();
        answer.try_serialize(&mut data).unwrap();
        assert_eq!(data.len(), Answer::SPACE);
    }

    #[test]
    fn first_question_takes_index_zero() {
        let mut consortium = Consortium {
            chairperson: Pubkey::new_unique(),
            label: "consortium".to_string(),
            question_count: 0,
            bump: 255,
        };
        assert_eq!(consortium.next_question().unwrap(), (0, 1));

        consortium.question_count = u32::MAX;
        let err = consortium.next_question().unwrap_err();
        assert_eq!(code(err), expected(ConsortiumError::IntegrityFault));
    }

    #[test]
    fn proposer_needs_identity_and_privilege() {
        let identity = Pubkey::new_unique();
        let mut member = Member {
            consortium: Pubkey::new_unique(),
            identity,
            weight: 100,
            can_propose: true,
            bump: 255,
        };

        assert!(member.ensure_proposer(&identity).is_ok());

        let err = member.ensure_proposer(&Pubkey::new_unique()).unwrap_err();
        assert_eq!(code(err), expected(ConsortiumError::Unauthorized));

        member.can_propose = false;
        let err = member.ensure_proposer(&identity).unwrap_err();
        assert_eq!(code(err), expected(ConsortiumError::Unauthorized));
    }

    #[test]
    fn resolved_question_is_closed() {
        let err = question(0, true, i64::MAX).ensure_open(0).unwrap_err();
        assert_eq!(code(err), expected(ConsortiumError::QuestionClosed));
    }

    #[test]
    fn question_closes_at_deadline() {
        assert!(question(0, false, 100).ensure_open(99).is_ok());
        let err = question(0, false, 100).ensure_open(100).unwrap_err();
        assert_eq!(code(err), expected(ConsortiumError::DeadlinePassed));
    }

    #[test]
    fn answer_counter_is_bounded() {
        assert_eq!(question(0, false, i64::MAX).next_answer().unwrap(), (0, 1));
        assert_eq!(
            question(MAX_ANSWERS - 1, false, i64::MAX).next_answer().unwrap(),
            (MAX_ANSWERS - 1, MAX_ANSWERS)
        );

        let err = question(MAX_ANSWERS, false, i64::MAX)
            .next_answer()
            .unwrap_err();
        assert_eq!(code(err), expected(ConsortiumError::AnswerLimitReached));
    }

    #[test]
    fn tally_overflow_is_an_integrity_fault() {
        let mut answer = Answer {
            question: Pubkey::new_unique(),
            index: 0,
            proposer: Pubkey::new_unique(),
            text: "Blueberry".to_string(),
            tally: 250,
            bump: 255,
        };
        assert_eq!(answer.tally_with(100).unwrap(), 350);

        answer.tally = u64::MAX - 1;
        let err = answer.tally_with(2).unwrap_err();
        assert_eq!(code(err), expected(ConsortiumError::IntegrityFault));
    }
}
