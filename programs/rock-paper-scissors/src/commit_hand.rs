use anchor_lang::prelude::*;

use crate::events::HandCommitted;
use crate::state::Game;

#[derive(Accounts)]
pub struct CommitHand<'info> {
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [b"game", game.players[0].as_ref(), &game.game_id.to_le_bytes()],
        bump = game.bump
    )]
    pub game: Account<'info, Game>,
}

impl<'info> CommitHand<'info> {
    pub fn commit_hand(&mut self, digest: [u8; 32]) -> Result<()> {
        let player = self.player.key();
        let slot = self.game.player_slot(&player)?;
        self.game.commit(slot, digest)?;

        emit!(HandCommitted {
            game: self.game.key(),
            player,
        });
        msg!("Player {} committed in game {}", player, self.game.game_id);
        Ok(())
    }
}
