use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::error::LotteryError;
use crate::events::TicketPurchased;
use crate::state::{Lottery, Ticket};

// ---------------------------------------------------------------------------
// Buy Ticket
// ---------------------------------------------------------------------------
// The ticket PDA is [ticket_count (big-endian), lottery], so a ticket index
// can only ever be issued once.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct BuyTicket<'info> {
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [b"lottery", lottery.authority.as_ref(), &lottery.lottery_id.to_le_bytes()],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    #[account(
        init,
        payer = player,
        space = Ticket::SPACE,
        seeds = [&lottery.ticket_count.to_be_bytes(), lottery.key().as_ref()],
        bump
    )]
    pub ticket: Account<'info, Ticket>,

    pub system_program: Program<'info, System>,
}

impl<'info> BuyTicket<'info> {
    pub fn buy_ticket(&mut self, bumps: &BuyTicketBumps) -> Result<()> {
        self.lottery.ensure_open()?;
        let price = self.lottery.ticket_price;
        require!(
            self.player.lamports() >= price,
            LotteryError::InsufficientFunds
        );
        let (index, next_count) = self.lottery.next_ticket()?;

        transfer(
            CpiContext::new(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.player.to_account_info(),
                    to: self.lottery.to_account_info(),
                },
            ),
            price,
        )?;

        let lottery = self.lottery.key();
        let submitter = self.player.key();
        self.ticket.set_inner(Ticket {
            lottery,
            submitter,
            index,
            bump: bumps.ticket,
        });
        self.lottery.ticket_count = next_count;

        emit!(TicketPurchased {
            lottery,
            ticket: self.ticket.key(),
            submitter,
            index,
        });
        msg!("Ticket #{} bought by {} for {} lamports", index, submitter, price);
        Ok(())
    }
}
