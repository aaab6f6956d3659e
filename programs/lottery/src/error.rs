use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Unauthorized - signer is not the lottery oracle")]
    Unauthorized,
    #[msg("Recipient did not submit the winning ticket")]
    NotWinner,
    #[msg("Player balance is below the ticket price")]
    InsufficientFunds,
    #[msg("No winner has been picked yet")]
    NotResolved,
    #[msg("Integrity fault - counter or balance out of range")]
    IntegrityFault,
    #[msg("Ticket price must be greater than zero")]
    InvalidTicketPrice,
    #[msg("Lottery is closed to new tickets")]
    LotteryClosed,
    #[msg("Winner index is not a sold ticket")]
    InvalidWinnerIndex,
    #[msg("Winner already selected")]
    WinnerAlreadySelected,
    #[msg("Prize already paid out")]
    AlreadyPaidOut,
}
