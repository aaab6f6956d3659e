//! Rock-Paper-Scissors - Anchor Program
//!
//! Two players commit to a hand by publishing `sha256(hand || salt)`, and
//! only reveal the hand once both commitments are on chain. Nobody can
//! pick a hand after seeing the opponent's, and nobody can change theirs
//! after committing.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod commit_hand;
pub mod error;
pub mod events;
pub mod new_game;
pub mod reveal_hand;
pub mod state;

use commit_hand::*;
use new_game::*;
use reveal_hand::*;

pub use state::{Hand, Outcome};

declare_id!("2rC4uyGkZYkw5ru2LamrHfBGmvYLcjgptw4xCjK4nVod");

#[program]
pub mod rock_paper_scissors {
    use super::*;

    /// Start a game between the signer and `player_two`.
    pub fn new_game(ctx: Context<NewGame>, game_id: u64, player_two: Pubkey) -> Result<()> {
        ctx.accounts.new_game(&ctx.bumps, game_id, player_two)
    }

    /// Store the signer's hand commitment: `sha256(hand || salt)`.
    pub fn commit_hand(ctx: Context<CommitHand>, digest: [u8; 32]) -> Result<()> {
        ctx.accounts.commit_hand(digest)
    }

    /// Open the signer's commitment. Settles the game on the second reveal.
    pub fn reveal_hand(ctx: Context<RevealHand>, hand: Hand, salt: [u8; 32]) -> Result<()> {
        ctx.accounts.reveal_hand(hand, salt)
    }
}
