use anchor_lang::prelude::*;

#[error_code]
pub enum GameError {
    #[msg("Revealed hand and salt do not match the commitment")]
    CommitMismatch,
    #[msg("Signer is not a player in this game")]
    NotAPlayer,
    #[msg("Player has already committed a hand")]
    AlreadyCommitted,
    #[msg("Both players must commit before revealing")]
    CommitsPending,
    #[msg("Player has already revealed a hand")]
    AlreadyRevealed,
    #[msg("Opponent must be a different player")]
    InvalidOpponent,
}
