use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::VESTING_SEED;
use crate::error::VestingError;
use crate::state::VestingScheduleHeader;
use crate::utils::escrow::EscrowAuthority;
use crate::utils::seeds::{check_seed, pda_seed};

/// Permissionless: funds can only go to the stored destination.
pub fn unlock(ctx: Context<Unlock>, seed: String) -> Result<()> {
    check_seed(&seed)?;

    // Capture the PDA's AccountInfo before taking the mutable borrow.
    let vesting_ai = ctx.accounts.vesting_account.to_account_info();
    let now = Clock::get()?.unix_timestamp;

    let vesting = &mut ctx.accounts.vesting_account;
    let amount = vesting.release_due(now)?;
    let remaining = vesting.outstanding()?;
    let bump = vesting.bump;

    let escrow_before = ctx.accounts.vesting_token_account.amount;
    require!(escrow_before >= amount, VestingError::BalanceMismatch);

    EscrowAuthority::new(
        vesting_ai,
        ctx.accounts.token_program.to_account_info(),
        &seed,
        bump,
    )
    .transfer(
        ctx.accounts.vesting_token_account.to_account_info(),
        ctx.accounts.dst_token_account.to_account_info(),
        amount,
    )?;

    ctx.accounts.vesting_token_account.reload()?;
    require!(
        ctx.accounts.vesting_token_account.amount == escrow_before - amount,
        VestingError::BalanceMismatch
    );

    msg!("Unlocked {} to {}, {} still vesting", amount, ctx.accounts.dst_token_account.key(), remaining);
    emit!(TokensUnlocked {
        vesting_account: ctx.accounts.vesting_account.key(),
        destination_token_account: ctx.accounts.dst_token_account.key(),
        amount,
        remaining,
        unlocked_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(seed: String)]
pub struct Unlock<'info> {
    #[account(
        mut,
        seeds = [VESTING_SEED, pda_seed(&seed)],
        bump = vesting_account.bump,
    )]
    pub vesting_account: Box<Account<'info, VestingScheduleHeader>>,

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

    #[account(
        mut,
        constraint = dst_token_account.key() == vesting_account.destination_token_account
            @ VestingError::InvalidDestination,
    )]
    pub dst_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensUnlocked {
    pub vesting_account: Pubkey,
    pub destination_token_account: Pubkey,
    pub amount: u64,
    pub remaining: u64,
    pub unlocked_at: i64,
}
