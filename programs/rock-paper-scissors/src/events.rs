use anchor_lang::prelude::*;

use crate::state::{Hand, Outcome};

#[event]
pub struct GameCreated {
    pub game: Pubkey,
    pub player_one: Pubkey,
    pub player_two: Pubkey,
}

#[event]
pub struct HandCommitted {
    pub game: Pubkey,
    pub player: Pubkey,
}

#[event]
pub struct HandRevealed {
    pub game: Pubkey,
    pub player: Pubkey,
    pub hand: Hand,
}

#[event]
pub struct GameSettled {
    pub game: Pubkey,
    pub outcome: Outcome,
}
