use anchor_lang::prelude::*;

use crate::create::create_derived_account;
use crate::error::ConsortiumError;
use crate::events::VoteCast;
use crate::pda;
use crate::state::{Answer, Consortium, Member, Question, VoteReceipt};

// ---------------------------------------------------------------------------
// Vote
// ---------------------------------------------------------------------------
// The weight comes from the member record derived from the signer. A record
// belonging to a heavier member is rejected because it does not re-derive
// from the signer's identity.
//
// The receipt at [voter, question] is created once and never touched again.
// If it already exists the member has voted, whatever it contains.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct Vote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [consortium.label.as_bytes(), consortium.chairperson.as_ref()],
        bump = consortium.bump,
    )]
    pub consortium: Account<'info, Consortium>,

    #[account(
        constraint = member.identity == voter.key() @ ConsortiumError::Unauthorized,
        constraint = pda::matches(
            &member.key(),
            &[consortium.key().as_ref(), voter.key().as_ref()],
            member.bump
        ) @ ConsortiumError::Unauthorized,
    )]
    pub member: Account<'info, Member>,

    #[account(
        seeds = [consortium.key().as_ref(), &question.index.to_be_bytes()],
        bump = question.bump,
        constraint = question.consortium == consortium.key() @ ConsortiumError::Unauthorized
    )]
    pub question: Account<'info, Question>,

    #[account(
        mut,
        seeds = [question.key().as_ref(), &[answer.index]],
        bump = answer.bump,
        constraint = answer.question == question.key() @ ConsortiumError::Unauthorized
    )]
    pub answer: Account<'info, Answer>,

    /// CHECK: Created by the handler at [voter, question]; must not exist yet.
    #[account(mut)]
    pub receipt: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> Vote<'info> {
    pub fn vote(&mut self) -> Result<()> {
        self.question.ensure_open(Clock::get()?.unix_timestamp)?;

        let weight = self.member.weight;
        let tally = self.answer.tally_with(weight)?;

        let voter = self.voter.key();
        let question = self.question.key();
        let answer = self.answer.key();

        create_derived_account(
            &self.voter,
            &self.receipt,
            &self.system_program,
            &[voter.as_ref(), question.as_ref()],
            VoteReceipt::SPACE,
            ConsortiumError::AlreadyVoted,
            |bump| VoteReceipt {
                voter,
                question,
                answer,
                bump,
            },
        )?;

        self.answer.tally = tally;

        emit!(VoteCast {
            question,
            answer,
            voter,
            weight,
            tally,
        });
        msg!(
            "Vote by {} for answer #{}: +{} (tally {})",
            voter,
            self.answer.index,
            weight,
            tally
        );
        Ok(())
    }
}
