//! State definitions for the ticket lottery

use anchor_lang::prelude::*;

use crate::error::LotteryError;

#[account]
#[derive(InitSpace)]
pub struct Lottery {
    pub authority: Pubkey,
    /// The only key allowed to pick the winner
    pub oracle: Pubkey,
    pub lottery_id: u64,
    /// Lamports moved into the lottery per ticket
    pub ticket_price: u64,
    /// Tickets sold so far; index of the next ticket
    pub ticket_count: u32,
    pub winner_selected: bool,
    /// Only meaningful once `winner_selected` is set
    pub winner_index: u32,
    pub paid_out: bool,
    pub bump: u8,
}

impl Lottery {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// Tickets are sold until a winner is picked.
    pub fn ensure_open(&self) -> Result<()> {
        require!(!self.winner_selected, LotteryError::LotteryClosed);
        Ok(())
    }

    /// Index for the next ticket and the counter value after it.
    pub fn next_ticket(&self) -> Result<(u32, u32)> {
        let next = self
            .ticket_count
            .checked_add(1)
            .ok_or(LotteryError::IntegrityFault)?;
        Ok((self.ticket_count, next))
    }

    pub fn select_winner(&mut self, winner_index: u32) -> Result<()> {
        require!(!self.winner_selected, LotteryError::WinnerAlreadySelected);
        require!(
            winner_index < self.ticket_count,
            LotteryError::InvalidWinnerIndex
        );
        self.winner_index = winner_index;
        self.winner_selected = true;
        Ok(())
    }

    pub fn ensure_payable(&self) -> Result<()> {
        require!(self.winner_selected, LotteryError::NotResolved);
        require!(!self.paid_out, LotteryError::AlreadyPaidOut);
        Ok(())
    }

    /// Everything above the rent-exempt floor goes to the winner.
    pub fn prize(balance: u64, rent_floor: u64) -> Result<u64> {
        let prize = balance
            .checked_sub(rent_floor)
            .ok_or(LotteryError::IntegrityFault)?;
        Ok(prize)
    }
}

#[account]
#[derive(InitSpace)]
pub struct Ticket {
    pub lottery: Pubkey,
    /// Whoever paid for the ticket; receives the prize if it wins
    pub submitter: Pubkey,
    pub index: u32,
    pub bump: u8,
}

impl Ticket {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// The winning ticket pays only its own submitter.
    pub fn ensure_claimable(&self, winner_index: u32, recipient: &Pubkey) -> Result<()> {
        require!(self.index == winner_index, LotteryError::NotWinner);
        require_keys_eq!(self.submitter, *recipient, LotteryError::NotWinner);
        Ok(())
    }
}
