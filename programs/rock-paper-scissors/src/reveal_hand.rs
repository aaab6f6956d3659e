use anchor_lang::prelude::*;

use crate::events::{GameSettled, HandRevealed};
use crate::state::{Game, Hand};

// ---------------------------------------------------------------------------
// Reveal Hand
// ---------------------------------------------------------------------------
// Reveals are rejected until both players have committed. The reveal that
// completes the pair settles the game.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct RevealHand<'info> {
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [b"game", game.players[0].as_ref(), &game.game_id.to_le_bytes()],
        bump = game.bump
    )]
    pub game: Account<'info, Game>,
}

impl<'info> RevealHand<'info> {
    pub fn reveal_hand(&mut self, hand: Hand, salt: [u8; 32]) -> Result<()> {
        let player = self.player.key();
        let slot = self.game.player_slot(&player)?;
        let outcome = self.game.reveal(slot, hand, &salt)?;

        let game = self.game.key();
        emit!(HandRevealed { game, player, hand });
        msg!("Player {} revealed {:?}", player, hand);

        if let Some(outcome) = outcome {
            emit!(GameSettled { game, outcome });
            msg!("Game {} settled: {:?}", self.game.game_id, outcome);
        }
        Ok(())
    }
}
