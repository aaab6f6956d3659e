//! Vote tallying for `resolve`
//!
//! The caller passes every answer of the question, in index order. Each
//! account is checked against the address the program would have derived
//! for that index before its tally is trusted.

use anchor_lang::prelude::*;

use crate::error::ConsortiumError;
use crate::pda;
use crate::state::Answer;

/// Position of the strictly greatest tally. The lowest index wins a tie.
/// `None` for an empty slice.
pub fn winning_index(tallies: &[u64]) -> Option<usize> {
    let mut winner: Option<(usize, u64)> = None;
    for (index, &tally) in tallies.iter().enumerate() {
        match winner {
            Some((_, best)) if tally <= best => {}
            _ => winner = Some((index, tally)),
        }
    }
    winner.map(|(index, _)| index)
}

/// Verify the answer at position `index` and return its tally.
pub fn answer_tally(
    question: &Pubkey,
    index: u8,
    address: &Pubkey,
    owner: &Pubkey,
    data: &[u8],
) -> Result<u64> {
    let (expected, _) = pda::answer_address(question, index);
    require_keys_eq!(expected, *address, ConsortiumError::IncompleteAnswerSet);
    require_keys_eq!(*owner, crate::ID, ConsortiumError::IncompleteAnswerSet);

    let answer = Answer::try_deserialize(&mut &data[..])
        .map_err(|_| error!(ConsortiumError::IncompleteAnswerSet))?;
    require_keys_eq!(answer.question, *question, ConsortiumError::IncompleteAnswerSet);
    require!(answer.index == index, ConsortiumError::IncompleteAnswerSet);

    Ok(answer.tally)
}

/// Tallies of the complete answer set, in index order.
pub fn collect_tallies(
    question: &Pubkey,
    answer_count: u8,
    answers: &[AccountInfo],
) -> Result<Vec<u64>> {
    require!(
        answers.len() == answer_count as usize,
        ConsortiumError::IncompleteAnswerSet
    );

    answers
        .iter()
        .enumerate()
        .map(|(index, info)| {
            let data = info.try_borrow_data()?;
            answer_tally(question, index as u8, info.key, info.owner, &data)
        })
        .collect()
}
