//! PDA derivation for vesting state and escrow accounts.
//!
//! - state  = PDA(VESTING_SEED, seed)
//! - escrow = PDA(mint, state)
//!
//! Both are pure; clients must keep the seed to find a contract again.
//!
//! Account constraints derive through [`pda_seed`], which clamps the seed to
//! the per-seed PDA limit so an oversized seed cannot abort address
//! derivation. Handlers then reject it with [`check_seed`].

use anchor_lang::prelude::*;

use crate::constants::{MAX_SEED_LEN, VESTING_SEED};
use crate::error::VestingError;

pub fn check_seed(seed: &str) -> core::result::Result<(), VestingError> {
    if seed.len() > MAX_SEED_LEN {
        return Err(VestingError::SeedTooLong);
    }
    Ok(())
}

/// Seed bytes as used in `seeds = [...]`, at most `MAX_SEED_LEN` long.
pub fn pda_seed(seed: &str) -> &[u8] {
    let bytes = seed.as_bytes();
    &bytes[..bytes.len().min(MAX_SEED_LEN)]
}

pub fn derive_state_address(
    program_id: &Pubkey,
    seed: &str,
) -> core::result::Result<(Pubkey, u8), VestingError> {
    check_seed(seed)?;
    Ok(Pubkey::find_program_address(
        &[VESTING_SEED, pda_seed(seed)],
        program_id,
    ))
}

pub fn derive_escrow_address(program_id: &Pubkey, mint: &Pubkey, state: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[mint.as_ref(), state.as_ref()], program_id)
}
