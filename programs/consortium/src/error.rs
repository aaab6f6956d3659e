//! Error definitions
//!
//! Codes are `6000 + position`, and clients match on them. Append new
//! variants at the end; never reorder.

use anchor_lang::prelude::*;

#[error_code]
pub enum ConsortiumError {
    #[msg("Account already exists at the derived address")]
    AlreadyExists,
    #[msg("Unauthorized - signer or derived address mismatch")]
    Unauthorized,
    #[msg("Member has already voted on this question")]
    AlreadyVoted,
    #[msg("Question is resolved and closed")]
    QuestionClosed,
    #[msg("Answer accounts do not match the question's answer set")]
    IncompleteAnswerSet,
    #[msg("Question already resolved")]
    AlreadyResolved,
    #[msg("Integrity fault - counter or tally overflow")]
    IntegrityFault,
    #[msg("Member weight must be greater than zero")]
    InvalidWeight,
    #[msg("Consortium label too long")]
    LabelTooLong,
    #[msg("Text too long")]
    TextTooLong,
    #[msg("Question deadline has passed")]
    DeadlinePassed,
    #[msg("Question has reached the maximum number of answers")]
    AnswerLimitReached,
    #[msg("Question has no answers to tally")]
    NoAnswers,
}
