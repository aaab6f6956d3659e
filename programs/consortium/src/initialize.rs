use anchor_lang::prelude::*;

use crate::constants::MAX_LABEL_LEN;
use crate::create::create_derived_account;
use crate::error::ConsortiumError;
use crate::events::ConsortiumCreated;
use crate::state::Consortium;

// ---------------------------------------------------------------------------
// Initialize Consortium
// ---------------------------------------------------------------------------
// Creates the consortium PDA at [label, chairperson]. The signer becomes the
// chairperson for good.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
#[instruction(label: String)]
pub struct InitializeConsortium<'info> {
    #[account(mut)]
    pub chairperson: Signer<'info>,

    /// CHECK: Created by the handler at [label, chairperson].
    #[account(mut)]
    pub consortium: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeConsortium<'info> {
    pub fn initialize(&mut self, label: String) -> Result<()> {
        require!(label.len() <= MAX_LABEL_LEN, ConsortiumError::LabelTooLong);

        let chairperson = self.chairperson.key();
        let consortium = create_derived_account(
            &self.chairperson,
            &self.consortium,
            &self.system_program,
            &[label.as_bytes(), chairperson.as_ref()],
            Consortium::SPACE,
            ConsortiumError::AlreadyExists,
            |bump| Consortium {
                chairperson,
                label: label.clone(),
                question_count: 0,
                bump,
            },
        )?;

        emit!(ConsortiumCreated {
            consortium: self.consortium.key(),
            chairperson,
        });
        msg!(
            "Consortium '{}' created by chairperson {}",
            consortium.label,
            chairperson
        );
        Ok(())
    }
}
