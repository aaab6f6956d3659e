//! Ticket Lottery - Anchor Program
//!
//! Players buy numbered tickets into a lottery account, an oracle picks
//! the winning index, and the pooled balance is paid to whoever submitted
//! that ticket.
//!
//! Payout trusts nothing the caller claims: the winning ticket must sit at
//! the address derived from the stored winning index, and the recipient
//! must be that ticket's submitter.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod buy_ticket;
pub mod error;
pub mod events;
pub mod initialize;
pub mod payout;
pub mod pick_winner;
pub mod state;

use buy_ticket::*;
use initialize::*;
use payout::*;
use pick_winner::*;

declare_id!("4R3uENpgLAvhFcDcbHRgvFgdoH7LnNYSLmVarc6RX3sN");

#[program]
pub mod lottery {
    use super::*;

    /// Open a lottery owned by the signer, with a fixed ticket price and
    /// the oracle allowed to pick the winner.
    pub fn initialize_lottery(
        ctx: Context<InitializeLottery>,
        lottery_id: u64,
        ticket_price: u64,
        oracle: Pubkey,
    ) -> Result<()> {
        ctx.accounts
            .initialize(&ctx.bumps, lottery_id, ticket_price, oracle)
    }

    /// Buy the next ticket. The price moves into the lottery account.
    pub fn buy_ticket(ctx: Context<BuyTicket>) -> Result<()> {
        ctx.accounts.buy_ticket(&ctx.bumps)
    }

    /// Record the winning ticket index. Oracle only, once.
    pub fn pick_winner(ctx: Context<PickWinner>, winner_index: u32) -> Result<()> {
        ctx.accounts.pick_winner(winner_index)
    }

    /// Pay the pooled balance to the winning ticket's submitter.
    pub fn payout(ctx: Context<Payout>) -> Result<()> {
        ctx.accounts.payout()
    }
}
