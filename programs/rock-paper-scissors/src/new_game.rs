use anchor_lang::prelude::*;

use crate::error::GameError;
use crate::events::GameCreated;
use crate::state::Game;

// ---------------------------------------------------------------------------
// New Game
// ---------------------------------------------------------------------------
// Game PDA is [b"game", player_one, game_id]. Player one pays the rent.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
#[instruction(game_id: u64)]
pub struct NewGame<'info> {
    #[account(mut)]
    pub player_one: Signer<'info>,

    #[account(
        init,
        payer = player_one,
        space = Game::SPACE,
        seeds = [b"game", player_one.key().as_ref(), &game_id.to_le_bytes()],
        bump
    )]
    pub game: Account<'info, Game>,

    pub system_program: Program<'info, System>,
}

impl<'info> NewGame<'info> {
    pub fn new_game(&mut self, bumps: &NewGameBumps, game_id: u64, player_two: Pubkey) -> Result<()> {
        let player_one = self.player_one.key();
        require!(
            player_two != player_one && player_two != Pubkey::default(),
            GameError::InvalidOpponent
        );

        self.game.set_inner(Game {
            game_id,
            players: [player_one, player_two],
            commitments: [None, None],
            hands: [None, None],
            outcome: None,
            bump: bumps.game,
        });

        emit!(GameCreated {
            game: self.game.key(),
            player_one,
            player_two,
        });
        msg!("Game {}: {} vs {}", game_id, player_one, player_two);
        Ok(())
    }
}
