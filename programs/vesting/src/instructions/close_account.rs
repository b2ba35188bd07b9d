use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::VESTING_SEED;
use crate::error::VestingError;
use crate::state::VestingScheduleHeader;
use crate::utils::escrow::EscrowAuthority;
use crate::utils::seeds::{check_seed, pda_seed};

pub fn close_account(ctx: Context<CloseAccount>, seed: String) -> Result<()> {
    check_seed(&seed)?;

    let vesting = &ctx.accounts.vesting_account;
    vesting.ensure_closable(
        &ctx.accounts.initializer.key(),
        ctx.accounts.vesting_token_account.amount,
    )?;

    EscrowAuthority::new(
        vesting.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        &seed,
        vesting.bump,
    )
    .close(
        ctx.accounts.vesting_token_account.to_account_info(),
        ctx.accounts.initializer.to_account_info(),
    )?;

    // The state account itself is closed to the initializer by the
    // `close` constraint on exit.
    msg!("Vesting '{}' closed", seed);
    emit!(VestingClosed {
        vesting_account: vesting.key(),
        initializer: vesting.initializer,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(seed: String)]
pub struct CloseAccount<'info> {
    #[account(
        mut,
        seeds = [VESTING_SEED, pda_seed(&seed)],
        bump = vesting_account.bump,
        close = initializer,
    )]
    pub vesting_account: Box<Account<'info, VestingScheduleHeader>>,

    #[account(mut)]
    pub initializer: Signer<'info>,

    #[account(constraint = mint.key() == vesting_account.mint @ VestingError::MintMismatch)]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [mint.key().as_ref(), vesting_account.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = vesting_account,
    )]
    pub vesting_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingClosed {
    pub vesting_account: Pubkey,
    pub initializer: Pubkey,
}
