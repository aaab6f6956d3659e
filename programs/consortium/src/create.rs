//! Creation of derived accounts
//!
//! Anchor's `init` reports an occupied address as a generic system error.
//! Consortium clients need `AlreadyExists` / `AlreadyVoted`, so accounts
//! are created here instead. The occupancy check runs at the moment of
//! creation, never from an earlier read.
//!
//! A derived address that only holds lamports is not occupied. Anyone can
//! pre-fund a predictable PDA, and `create_account` would refuse it, so
//! that case is funded up to rent, allocated and assigned instead.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::error::ConsortiumError;
use crate::pda;

/// Populated means some program owns it or it holds data.
pub fn is_populated(owner: &Pubkey, data_len: usize) -> bool {
    *owner != anchor_lang::system_program::ID || data_len > 0
}

/// Create `target` at the PDA of `seeds` and write `build(bump)` into it.
///
/// Fails `Unauthorized` if `target` is not that PDA and `occupied` if the
/// address is already populated.
pub fn create_derived_account<'info, T, F>(
    payer: &Signer<'info>,
    target: &UncheckedAccount<'info>,
    system_program: &Program<'info, System>,
    seeds: &[&[u8]],
    space: usize,
    occupied: ConsortiumError,
    build: F,
) -> Result<T>
where
    T: AccountSerialize,
    F: FnOnce(u8) -> T,
{
    let (expected, bump) = pda::find(seeds);
    require_keys_eq!(expected, target.key(), ConsortiumError::Unauthorized);
    if is_populated(target.owner, target.data_len()) {
        return Err(occupied.into());
    }

    let bump_seed = [bump];
    let mut signer_seeds: Vec<&[u8]> = seeds.to_vec();
    signer_seeds.push(&bump_seed);
    let signer = &[&signer_seeds[..]];

    let rent = Rent::get()?.minimum_balance(space);
    let current = target.lamports();

    if current == 0 {
        create_account(
            CpiContext::new_with_signer(
                system_program.to_account_info(),
                CreateAccount {
                    from: payer.to_account_info(),
                    to: target.to_account_info(),
                },
                signer,
            ),
            rent,
            space as u64,
            &crate::ID,
        )?;
    } else {
        let shortfall = rent.saturating_sub(current);
        if shortfall > 0 {
            transfer(
                CpiContext::new(
                    system_program.to_account_info(),
                    Transfer {
                        from: payer.to_account_info(),
                        to: target.to_account_info(),
                    },
                ),
                shortfall,
            )?;
        }
        allocate(
            CpiContext::new_with_signer(
                system_program.to_account_info(),
                Allocate {
                    account_to_allocate: target.to_account_info(),
                },
                signer,
            ),
            space as u64,
        )?;
        assign(
            CpiContext::new_with_signer(
                system_program.to_account_info(),
                Assign {
                    account_to_assign: target.to_account_info(),
                },
                signer,
            ),
            &crate::ID,
        )?;
    }

    let value = build(bump);
    let mut data = target.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    value.try_serialize(&mut writer)?;

    Ok(value)
}
