//! Game state and rules

use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;

use crate::error::GameError;

/// Serialized as its variant index, which is also the byte that gets hashed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    pub fn to_byte(self) -> u8 {
        match self {
            Hand::Rock => 0,
            Hand::Paper => 1,
            Hand::Scissors => 2,
        }
    }

    pub fn beats(self, other: Hand) -> bool {
        matches!(
            (self, other),
            (Hand::Rock, Hand::Scissors)
                | (Hand::Paper, Hand::Rock)
                | (Hand::Scissors, Hand::Paper)
        )
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum Outcome {
    PlayerOne,
    PlayerTwo,
    Draw,
}

impl Outcome {
    pub fn decide(one: Hand, two: Hand) -> Self {
        if one.beats(two) {
            Outcome::PlayerOne
        } else if two.beats(one) {
            Outcome::PlayerTwo
        } else {
            Outcome::Draw
        }
    }
}

/// `sha256(hand_byte || salt)`
pub fn commitment(hand: Hand, salt: &[u8; 32]) -> [u8; 32] {
    hashv(&[&[hand.to_byte()][..], &salt[..]]).to_bytes()
}

#[account]
#[derive(InitSpace)]
pub struct Game {
    pub game_id: u64,
    /// Player one created the game and seeds its address
    pub players: [Pubkey; 2],
    pub commitments: [Option<[u8; 32]>; 2],
    pub hands: [Option<Hand>; 2],
    /// Set once both hands are revealed
    pub outcome: Option<Outcome>,
    pub bump: u8,
}

impl Game {
    pub const SPACE: usize = 8 + Self::INIT_SPACE;

    /// 0 for player one, 1 for player two.
    pub fn player_slot(&self, signer: &Pubkey) -> Result<usize> {
        self.players
            .iter()
            .position(|player| player == signer)
            .ok_or_else(|| error!(GameError::NotAPlayer))
    }

    pub fn commit(&mut self, slot: usize, digest: [u8; 32]) -> Result<()> {
        require!(
            self.commitments[slot].is_none(),
            GameError::AlreadyCommitted
        );
        self.commitments[slot] = Some(digest);
        Ok(())
    }

    /// Opens the commitment in `slot`. Returns the outcome when this reveal
    /// completes the game.
    pub fn reveal(&mut self, slot: usize, hand: Hand, salt: &[u8; 32]) -> Result<Option<Outcome>> {
        let (Some(one), Some(two)) = (self.commitments[0], self.commitments[1]) else {
            return Err(GameError::CommitsPending.into());
        };
        require!(self.hands[slot].is_none(), GameError::AlreadyRevealed);

        let committed = if slot == 0 { one } else { two };
        require!(
            commitment(hand, salt) == committed,
            GameError::CommitMismatch
        );
        self.hands[slot] = Some(hand);

        if let [Some(one), Some(two)] = self.hands {
            let outcome = Outcome::decide(one, two);
            self.outcome = Some(outcome);
            return Ok(Some(outcome));
        }
        Ok(None)
    }
}
