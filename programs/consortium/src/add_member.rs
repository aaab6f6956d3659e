use anchor_lang::prelude::*;

use crate::create::create_derived_account;
use crate::error::ConsortiumError;
use crate::events::MemberAdded;
use crate::state::{Consortium, Member};

// ---------------------------------------------------------------------------
// Add Member
// ---------------------------------------------------------------------------
// Only the stored chairperson may register members. The consortium itself is
// re-derived from its stored label and chairperson, so a look-alike account
// cannot stand in for it.
// ---------------------------------------------------------------------------

#[derive(Accounts)]
pub struct AddMember<'info> {
    #[account(mut)]
    pub chairperson: Signer<'info>,

    #[account(
        seeds = [consortium.label.as_bytes(), consortium.chairperson.as_ref()],
        bump = consortium.bump,
        constraint = consortium.chairperson == chairperson.key() @ ConsortiumError::Unauthorized
    )]
    pub consortium: Account<'info, Consortium>,

    /// CHECK: Created by the handler at [consortium, member_identity].
    #[account(mut)]
    pub member: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> AddMember<'info> {
    pub fn add_member(
        &mut self,
        weight: u32,
        can_propose: bool,
        member_identity: Pubkey,
    ) -> Result<()> {
        require!(weight > 0, ConsortiumError::InvalidWeight);

        let consortium = self.consortium.key();
        create_derived_account(
            &self.chairperson,
            &self.member,
            &self.system_program,
            &[consortium.as_ref(), member_identity.as_ref()],
            Member::SPACE,
            ConsortiumError::AlreadyExists,
            |bump| Member {
                consortium,
                identity: member_identity,
                weight,
                can_propose,
                bump,
            },
        )?;

        emit!(MemberAdded {
            consortium,
            member: self.member.key(),
            identity: member_identity,
            weight,
            can_propose,
        });
        msg!(
            "Member {} added with weight {} (can propose: {})",
            member_identity,
            weight,
            can_propose
        );
        Ok(())
    }
}
