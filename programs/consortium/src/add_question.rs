use anchor_lang::prelude::*;

use crate::constants::MAX_QUESTION_LEN;
use crate::create::create_derived_account;
use crate::error::ConsortiumError;
use crate::events::QuestionAdded;
use crate::pda;
use crate::state::{Consortium, Question};

// ---------------------------------------------------------------------------
// Add Question
// ---------------------------------------------------------------------------
// The question PDA uses the counter value before the increment, so the first
// question sits at index 0.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct AddQuestion<'info> {
    #[account(mut)]
    pub chairperson: Signer<'info>,

    #[account(
        mut,
        seeds = [consortium.label.as_bytes(), consortium.chairperson.as_ref()],
        bump = consortium.bump,
        constraint = consortium.chairperson == chairperson.key() @ ConsortiumError::Unauthorized
    )]
    pub consortium: Account<'info, Consortium>,

    /// CHECK: Created by the handler at [consortium, question_count].
    #[account(mut)]
    pub question: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> AddQuestion<'info> {
    pub fn add_question(&mut self, text: String, deadline: i64) -> Result<()> {
        require!(text.len() <= MAX_QUESTION_LEN, ConsortiumError::TextTooLong);

        let (index, next_count) = self.consortium.next_question()?;
        let consortium = self.consortium.key();
        let index_seed = pda::question_index_seed(index);

        create_derived_account(
            &self.chairperson,
            &self.question,
            &self.system_program,
            &[consortium.as_ref(), &index_seed],
            Question::SPACE,
            ConsortiumError::AlreadyExists,
            |bump| Question {
                consortium,
                index,
                text,
                deadline,
                answer_count: 0,
                resolved: false,
                winning_index: 0,
                bump,
            },
        )?;

        self.consortium.question_count = next_count;

        emit!(QuestionAdded {
            consortium,
            question: self.question.key(),
            index,
            deadline,
        });
        msg!("Question #{} added, deadline {}", index, deadline);
        Ok(())
    }
}
