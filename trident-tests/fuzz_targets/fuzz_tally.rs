//! Fuzz test for weighted vote tallying
//!
//! Generates random member weights and vote sequences (repeat voters
//! included) and runs them through the program's own tally code:
//! `Answer::tally_with` for each accepted vote and `winning_index` at
//! resolution. A u128 model computes what the result should be.

use std::collections::HashSet;

use anchor_lang::prelude::Pubkey;
use consortium::constants::MAX_ANSWERS;
use consortium::state::Answer;
use consortium::tally::winning_index;

/// One randomized round: who votes, with what weight, for which answer
#[derive(Debug, Clone)]
pub struct VoteFuzzData {
    pub weights: Vec<u32>,
    pub answer_count: u8,
    /// (member position, answer index); members may appear more than once
    pub votes: Vec<(usize, u8)>,
}

impl VoteFuzzData {
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = SplitMix(seed);
        let member_count = 1 + (rng.next() % 12) as usize;
        let answer_count = 1 + (rng.next() % MAX_ANSWERS as u64) as u8;

        let weights = (0..member_count)
            .map(|_| match rng.next() % 4 {
                // Small weights make ties likely
                0 | 1 => 1 + (rng.next() % 3) as u32,
                2 => 1 + (rng.next() % 1_000) as u32,
                _ => (rng.next() as u32).max(1),
            })
            .collect();

        let vote_count = (rng.next() % 24) as usize;
        let votes = (0..vote_count)
            .map(|_| {
                let member = (rng.next() % member_count as u64) as usize;
                let answer = (rng.next() % answer_count as u64) as u8;
                (member, answer)
            })
            .collect();

        Self {
            weights,
            answer_count,
            votes,
        }
    }
}

struct SplitMix(u64);

impl SplitMix {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E3779B97F4A7C15);
        let mut x = self.0;
        x = (x ^ (x >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        x = (x ^ (x >> 27)).wrapping_mul(0x94D049BB133111EB);
        x ^ (x >> 31)
    }
}

fn answer(index: u8, tally: u64) -> Answer {
    Answer {
        question: Pubkey::default(),
        index,
        proposer: Pubkey::default(),
        text: String::new(),
        tally,
        bump: 255,
    }
}

/// Replays the votes the way the program would: a member's first vote
/// creates their receipt, later ones are refused.
fn run_program(data: &VoteFuzzData) -> (Vec<u64>, Option<usize>) {
    let mut answers: Vec<Answer> = (0..data.answer_count).map(|i| answer(i, 0)).collect();
    let mut receipts = HashSet::new();

    for &(member, index) in &data.votes {
        if !receipts.insert(member) {
            continue;
        }
        let target = &mut answers[index as usize];
        target.tally = target
            .tally_with(data.weights[member])
            .expect("tally cannot overflow with u32 weights and few votes");
    }

    let tallies: Vec<u64> = answers.iter().map(|a| a.tally).collect();
    let winner = winning_index(&tallies);
    (tallies, winner)
}

fn run_model(data: &VoteFuzzData) -> (Vec<u128>, usize) {
    let mut tallies = vec![0u128; data.answer_count as usize];
    let mut voted = vec![false; data.weights.len()];

    for &(member, index) in &data.votes {
        if voted[member] {
            continue;
        }
        voted[member] = true;
        tallies[index as usize] += data.weights[member] as u128;
    }

    let best = tallies.iter().copied().max().unwrap_or(0);
    let winner = tallies.iter().position(|&t| t == best).unwrap_or(0);
    (tallies, winner)
}

/// Property: every tally is the sum of first-vote weights, and the winner
/// is the lowest index holding the maximum.
fn check_tally_property(data: &VoteFuzzData) -> bool {
    let (tallies, winner) = run_program(data);
    let (expected, expected_winner) = run_model(data);

    let sums_match = tallies
        .iter()
        .zip(expected.iter())
        .all(|(&got, &want)| got as u128 == want);
    sums_match && winner == Some(expected_winner)
}

/// Property: a tally at the top of the range is refused, never wrapped.
fn check_overflow_property(seed: u64) -> bool {
    let mut rng = SplitMix(seed);
    let weight = (rng.next() as u32).max(1);
    let headroom = rng.next() % weight as u64;
    let near_max = answer(0, u64::MAX - headroom);

    near_max.tally_with(weight).is_err()
}


// Entry point for trident fuzzer (when using full trident)
fn main() {
    let rounds = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(10_000);

    for seed in 0..rounds {
        let data = VoteFuzzData::from_seed(seed);
        assert!(check_tally_property(&data), "seed {}: {:?}", seed, data);
        assert!(check_overflow_property(seed), "seed {}", seed);
    }
    println!("Weighted tally fuzz: {} rounds passed", rounds);
}
