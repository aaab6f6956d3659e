use anchor_lang::prelude::*;

use crate::constants::MAX_ANSWER_LEN;
use crate::create::create_derived_account;
use crate::error::ConsortiumError;
use crate::events::AnswerProposed;
use crate::pda;
use crate::state::{Answer, Consortium, Member, Question};

// ---------------------------------------------------------------------------
// Add Answer
// ---------------------------------------------------------------------------
// The member record must be the one derived from the signer's own identity.
// Handing in a privileged member's record while signing as someone else
// fails the re-derivation.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct AddAnswer<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    #[account(
        seeds = [consortium.label.as_bytes(), consortium.chairperson.as_ref()],
        bump = consortium.bump,
    )]
    pub consortium: Account<'info, Consortium>,

    #[account(
        constraint = pda::matches(
            &member.key(),
            &[consortium.key().as_ref(), proposer.key().as_ref()],
            member.bump
        ) @ ConsortiumError::Unauthorized,
    )]
    pub member: Account<'info, Member>,

    #[account(
        mut,
        seeds = [consortium.key().as_ref(), &question.index.to_be_bytes()],
        bump = question.bump,
        constraint = question.consortium == consortium.key() @ ConsortiumError::Unauthorized
    )]
    pub question: Account<'info, Question>,

    /// CHECK: Created by the handler at [question, answer_count].
    #[account(mut)]
    pub answer: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> AddAnswer<'info> {
    pub fn add_answer(&mut self, text: String) -> Result<()> {
        let proposer = self.proposer.key();
        self.member.ensure_proposer(&proposer)?;
        self.question.ensure_open(Clock::get()?.unix_timestamp)?;
        require!(text.len() <= MAX_ANSWER_LEN, ConsortiumError::TextTooLong);

        let (index, next_count) = self.question.next_answer()?;
        let question = self.question.key();
        let index_seed = pda::answer_index_seed(index);

        create_derived_account(
            &self.proposer,
            &self.answer,
            &self.system_program,
            &[question.as_ref(), &index_seed],
            Answer::SPACE,
            ConsortiumError::AlreadyExists,
            |bump| Answer {
                question,
                index,
                proposer,
                text,
                tally: 0,
                bump,
            },
        )?;

        self.question.answer_count = next_count;

        emit!(AnswerProposed {
            question,
            answer: self.answer.key(),
            index,
            proposer,
        });
        msg!("Answer #{} proposed by {}", index, proposer);
        Ok(())
    }
}
