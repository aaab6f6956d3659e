use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::events::WinnerPicked;
use crate::state::Lottery;

#[derive(Accounts)]
pub struct PickWinner<'info> {
    pub oracle: Signer<'info>,

    #[account(
        mut,
        seeds = [b"lottery", lottery.authority.as_ref(), &lottery.lottery_id.to_le_bytes()],
        bump = lottery.bump,
        constraint = lottery.oracle == oracle.key() @ LotteryError::Unauthorized
    )]
    pub lottery: Account<'info, Lottery>,
}

impl<'info> PickWinner<'info> {
    pub fn pick_winner(&mut self, winner_index: u32) -> Result<()> {
        self.lottery.select_winner(winner_index)?;

        emit!(WinnerPicked {
            lottery: self.lottery.key(),
            winner_index,
        });
        msg!(
            "Oracle {} picked ticket #{} of {}",
            self.oracle.key(),
            winner_index,
            self.lottery.ticket_count
        );
        Ok(())
    }
}
