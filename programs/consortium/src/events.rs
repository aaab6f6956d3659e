use anchor_lang::prelude::*;

#[event]
pub struct ConsortiumCreated {
    pub consortium: Pubkey,
    pub chairperson: Pubkey,
}

#[event]
pub struct MemberAdded {
    pub consortium: Pubkey,
    pub member: Pubkey,
    pub identity: Pubkey,
    pub weight: u32,
    pub can_propose: bool,
}

#[event]
pub struct QuestionAdded {
    pub consortium: Pubkey,
    pub question: Pubkey,
    pub index: u32,
    pub deadline: i64,
}

#[event]
pub struct AnswerProposed {
    pub question: Pubkey,
    pub answer: Pubkey,
    pub index: u8,
    pub proposer: Pubkey,
}

#[event]
pub struct VoteCast {
    pub question: Pubkey,
    pub answer: Pubkey,
    pub voter: Pubkey,
    pub weight: u32,
    /// Answer tally after this vote
    pub tally: u64,
}

#[event]
pub struct QuestionResolved {
    pub question: Pubkey,
    pub winning_index: u8,
    pub winning_tally: u64,
    pub answer_count: u8,
}
