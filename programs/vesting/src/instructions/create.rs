use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::constants::{MAX_SCHEDULES, VESTING_SEED};
use crate::error::VestingError;
use crate::state::{VestingParties, VestingScheduleHeader};
use crate::utils::seeds::{check_seed, pda_seed};

pub fn create(
    ctx: Context<Create>,
    release_times: Vec<i64>,
    amounts: Vec<u64>,
    seed: String,
) -> Result<()> {
    check_seed(&seed)?;

    let parties = VestingParties {
        initializer: ctx.accounts.initializer.key(),
        destination_token_account_owner: ctx.accounts.dst_token_account_owner.key(),
        destination_token_account: ctx.accounts.dst_token_account.key(),
        mint: ctx.accounts.mint.key(),
    };
    let bump = ctx.bumps.vesting_account;

    let total = ctx
        .accounts
        .vesting_account
        .initialize(parties, bump, &release_times, &amounts)?;

    require!(
        ctx.accounts.src_token_account.amount >= total,
        VestingError::InsufficientFunds
    );

    let escrow_before = ctx.accounts.vesting_token_account.amount;
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.src_token_account.to_account_info(),
                to: ctx.accounts.vesting_token_account.to_account_info(),
                authority: ctx.accounts.initializer.to_account_info(),
            },
        ),
        total,
    )?;

    ctx.accounts.vesting_token_account.reload()?;
    let expected = escrow_before
        .checked_add(total)
        .ok_or(VestingError::MathOverflow)?;
    require!(
        ctx.accounts.vesting_token_account.amount == expected,
        VestingError::BalanceMismatch
    );

    msg!(
        "Vesting '{}' created: {} tranches, {} escrowed",
        seed,
        release_times.len(),
        total
    );
    emit!(VestingCreated {
        vesting_account: ctx.accounts.vesting_account.key(),
        initializer: parties.initializer,
        destination_token_account_owner: parties.destination_token_account_owner,
        destination_token_account: parties.destination_token_account,
        mint: parties.mint,
        schedule_count: release_times.len() as u32,
        total_amount: total,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(release_times: Vec<i64>, amounts: Vec<u64>, seed: String)]
pub struct Create<'info> {
    #[account(mut)]
    pub initializer: Signer<'info>,

    // init_if_needed so a second create on the same seed reaches the
    // handler and fails with AlreadyInitialized. Sized for the largest
    // schedule so the repeat passes Anchor's space check whatever its length.
    #[account(
        init_if_needed,
        payer = initializer,
        space = VestingScheduleHeader::space(MAX_SCHEDULES),
        seeds = [VESTING_SEED, pda_seed(&seed)],
        bump
    )]
    pub vesting_account: Box<Account<'info, VestingScheduleHeader>>,

    #[account(
        mut,
        constraint = src_token_account.mint == mint.key() @ VestingError::MintMismatch,
        constraint = src_token_account.owner == initializer.key() @ VestingError::Unauthorized,
    )]
    pub src_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: Only recorded as beneficiary; `dst_token_account` must be owned by it.
    pub dst_token_account_owner: UncheckedAccount<'info>,

    #[account(
        constraint = dst_token_account.mint == mint.key() @ VestingError::MintMismatch,
        constraint = dst_token_account.owner == dst_token_account_owner.key()
            @ VestingError::DestinationOwnerMismatch,
    )]
    pub dst_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = initializer,
        seeds = [mint.key().as_ref(), vesting_account.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = vesting_account,
    )]
    pub vesting_token_account: Box<Account<'info, TokenAccount>>,

    pub mint: Box<Account<'info, Mint>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[event]
pub struct VestingCreated {
    pub vesting_account: Pubkey,
    pub initializer: Pubkey,
    pub destination_token_account_owner: Pubkey,
    pub destination_token_account: Pubkey,
    pub mint: Pubkey,
    pub schedule_count: u32,
    pub total_amount: u64,
}
