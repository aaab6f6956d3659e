use anchor_lang::prelude::*;

use crate::error::ConsortiumError;
use crate::events::QuestionResolved;
use crate::state::{Consortium, Question};
use crate::tally::{collect_tallies, winning_index};

// ---------------------------------------------------------------------------
// Resolve
// ---------------------------------------------------------------------------
// The chairperson passes every answer of the question as remaining accounts,
// in index order. Leaving one out (for example a strong rival) fails the
// whole call instead of producing a skewed winner.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct Resolve<'info> {
    pub chairperson: Signer<'info>,

    #[account(
        seeds = [consortium.label.as_bytes(), consortium.chairperson.as_ref()],
        bump = consortium.bump,
        constraint = consortium.chairperson == chairperson.key() @ ConsortiumError::Unauthorized
    )]
    pub consortium: Account<'info, Consortium>,

    #[account(
        mut,
        seeds = [consortium.key().as_ref(), &question.index.to_be_bytes()],
        bump = question.bump,
        constraint = question.consortium == consortium.key() @ ConsortiumError::Unauthorized
    )]
    pub question: Account<'info, Question>,
}

impl<'info> Resolve<'info> {
    pub fn resolve(&mut self, answers: &[AccountInfo<'info>]) -> Result<()> {
        require!(!self.question.resolved, ConsortiumError::AlreadyResolved);

        let question = self.question.key();
        let tallies = collect_tallies(&question, self.question.answer_count, answers)?;
        let winner = winning_index(&tallies).ok_or(ConsortiumError::NoAnswers)?;
        let winning_index =
            u8::try_from(winner).map_err(|_| error!(ConsortiumError::IntegrityFault))?;

        self.question.winning_index = winning_index;
        self.question.resolved = true;

        emit!(QuestionResolved {
            question,
            winning_index,
            winning_tally: tallies[winner],
            answer_count: self.question.answer_count,
        });
        msg!(
            "Question #{} resolved: answer #{} wins with {} of {} answers",
            self.question.index,
            winning_index,
            tallies[winner],
            tallies.len()
        );
        Ok(())
    }
}
