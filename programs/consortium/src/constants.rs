//! Limits for consortium accounts

/// A consortium label is used verbatim as a PDA seed, so it must fit in one.
pub const MAX_LABEL_LEN: usize = 32;

/// Maximum question text length in bytes
pub const MAX_QUESTION_LEN: usize = 128;

/// Maximum answer text length in bytes
pub const MAX_ANSWER_LEN: usize = 64;

/// Every answer must be passed to `resolve` in a single transaction.
pub const MAX_ANSWERS: u8 = 16;
