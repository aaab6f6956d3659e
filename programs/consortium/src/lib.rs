//! Weighted Consortium Governance - Anchor Program
//!
//! A chairperson keeps a registry of members, each with a fixed voting
//! weight and a flag saying whether they may propose answers. The
//! chairperson raises questions, privileged members propose answers,
//! members cast weighted votes, and the chairperson resolves the winner.
//!
//! Every account lives at a seed-derived address. Authorization never
//! trusts a caller-supplied account on its own: the expected address is
//! re-derived from the signer's identity and compared.

#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod add_answer;
pub mod add_member;
pub mod add_question;
pub mod constants;
pub mod create;
pub mod error;
pub mod events;
pub mod initialize;
pub mod pda;
pub mod resolve;
pub mod state;
pub mod tally;
pub mod vote;

use add_answer::*;
use add_member::*;
use add_question::*;
use initialize::*;
use resolve::*;
use vote::*;

declare_id!("Hr3WN3MH63t15p4ddxsgQB4JgJXH4bJNXUgTBgHthbVZ");

#[program]
pub mod consortium {
    use super::*;

    /// Create a consortium chaired by the signer.
    pub fn initialize_consortium(ctx: Context<InitializeConsortium>, label: String) -> Result<()> {
        ctx.accounts.initialize(label)
    }

    /// Register a member with a voting weight. Chairperson only.
    pub fn add_member(
        ctx: Context<AddMember>,
        weight: u32,
        can_propose: bool,
        member_identity: Pubkey,
    ) -> Result<()> {
        ctx.accounts.add_member(weight, can_propose, member_identity)
    }

    /// Raise a new question. Chairperson only.
    pub fn add_question(ctx: Context<AddQuestion>, text: String, deadline: i64) -> Result<()> {
        ctx.accounts.add_question(text, deadline)
    }

    /// Propose an answer to an open question. Members with `can_propose` only.
    pub fn add_answer(ctx: Context<AddAnswer>, text: String) -> Result<()> {
        ctx.accounts.add_answer(text)
    }

    /// Cast the signer's weighted vote for one answer. Once per question.
    pub fn vote(ctx: Context<Vote>) -> Result<()> {
        ctx.accounts.vote()
    }

    /// Tally every answer of a question and record the winner.
    /// The answers are passed as remaining accounts, in index order.
    pub fn resolve<'info>(ctx: Context<'_, '_, '_, 'info, Resolve<'info>>) -> Result<()> {
        ctx.accounts.resolve(ctx.remaining_accounts)
    }
}
