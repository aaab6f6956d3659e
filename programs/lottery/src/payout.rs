use anchor_lang::prelude::*;
use anchor_lang::Lamports;

use crate::events::PrizePaid;
use crate::state::{Lottery, Ticket};

// ---------------------------------------------------------------------------
// Payout
// ---------------------------------------------------------------------------
// Anyone may trigger the payout, but the lamports only go to the submitter of
// the ticket at [winner_index, lottery]. The lottery keeps its rent-exempt
// floor so the account survives as a record of the draw.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct Payout<'info> {
    #[account(
        mut,
        seeds = [b"lottery", lottery.authority.as_ref(), &lottery.lottery_id.to_le_bytes()],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        seeds = [&ticket.index.to_be_bytes(), lottery.key().as_ref()],
        bump = ticket.bump
    )]
    pub ticket: Account<'info, Ticket>,

    /// CHECK: Only receives lamports; must match the winning ticket's submitter.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

impl<'info> Payout<'info> {
    pub fn payout(&mut self) -> Result<()> {
        self.lottery.ensure_payable()?;

        let winner = self.winner.key();
        self.ticket
            .ensure_claimable(self.lottery.winner_index, &winner)?;

        let lottery_info = self.lottery.to_account_info();
        let rent_floor = Rent::get()?.minimum_balance(lottery_info.data_len());
        let amount = Lottery::prize(lottery_info.lamports(), rent_floor)?;

        self.lottery.sub_lamports(amount)?;
        self.winner.add_lamports(amount)?;
        self.lottery.paid_out = true;

        emit!(PrizePaid {
            lottery: self.lottery.key(),
            winner,
            amount,
        });
        msg!(
            "Paid {} lamports to {} for ticket #{}",
            amount,
            winner,
            self.ticket.index
        );
        Ok(())
    }
}
