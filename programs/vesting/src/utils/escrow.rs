use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Transfer};

use crate::constants::VESTING_SEED;
use crate::utils::seeds::pda_seed;

/// Signing capability of the vesting state PDA over its escrow token account.
///
/// No key pair exists for the PDA; holding this value is the only way the
/// program moves or closes escrow funds.
pub struct EscrowAuthority<'a, 'info> {
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    seed: &'a [u8],
    bump: [u8; 1],
}

impl<'a, 'info> EscrowAuthority<'a, 'info> {
    pub fn new(
        authority: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        seed: &'a str,
        bump: u8,
    ) -> Self {
        Self {
            authority,
            token_program,
            seed: pda_seed(seed),
            bump: [bump],
        }
    }

    pub fn transfer(
        &self,
        escrow: AccountInfo<'info>,
        destination: AccountInfo<'info>,
        amount: u64,
    ) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[VESTING_SEED, self.seed, &self.bump]];
        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: escrow,
                    to: destination,
                    authority: self.authority.clone(),
                },
                signer_seeds,
            ),
            amount,
        )
    }

    /// Closes the (empty) escrow token account, sending its rent to `destination`.
    pub fn close(&self, escrow: AccountInfo<'info>, destination: AccountInfo<'info>) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[VESTING_SEED, self.seed, &self.bump]];
        token::close_account(CpiContext::new_with_signer(
            self.token_program.clone(),
            CloseAccount {
                account: escrow,
                destination,
                authority: self.authority.clone(),
            },
            signer_seeds,
        ))
    }
}
