use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::events::LotteryCreated;
use crate::state::Lottery;

// ---------------------------------------------------------------------------
// Initialize Lottery
// ---------------------------------------------------------------------------
// One authority can run several lotteries side by side; the id keeps their
// addresses apart.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
#[instruction(lottery_id: u64)]
pub struct InitializeLottery<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = Lottery::SPACE,
        seeds = [b"lottery", authority.key().as_ref(), &lottery_id.to_le_bytes()],
        bump
    )]
    pub lottery: Account<'info, Lottery>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeLottery<'info> {
    pub fn initialize(
        &mut self,
        bumps: &InitializeLotteryBumps,
        lottery_id: u64,
        ticket_price: u64,
        oracle: Pubkey,
    ) -> Result<()> {
        require!(ticket_price > 0, LotteryError::InvalidTicketPrice);

        let authority = self.authority.key();
        self.lottery.set_inner(Lottery {
            authority,
            oracle,
            lottery_id,
            ticket_price,
            ticket_count: 0,
            winner_selected: false,
            winner_index: 0,
            paid_out: false,
            bump: bumps.lottery,
        });

        emit!(LotteryCreated {
            lottery: self.lottery.key(),
            authority,
            oracle,
            ticket_price,
        });
        msg!(
            "Lottery {} opened by {}: price {} lamports, oracle {}",
            lottery_id,
            authority,
            ticket_price,
            oracle
        );
        Ok(())
    }
}
