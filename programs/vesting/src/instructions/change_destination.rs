use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::VESTING_SEED;
use crate::state::VestingScheduleHeader;
use crate::utils::seeds::{check_seed, pda_seed};

pub fn change_destination(ctx: Context<ChangeDestination>, seed: String) -> Result<()> {
    check_seed(&seed)?;

    let signer = ctx.accounts.current_dst_token_account_owner.key();
    let current = ctx.accounts.current_dst_token_account.key();
    let new_owner = ctx.accounts.new_dst_token_account_owner.key();
    let new_account = &ctx.accounts.new_dst_token_account;
    let (new_key, new_mint, new_account_owner) =
        (new_account.key(), new_account.mint, new_account.owner);

    let vesting = &mut ctx.accounts.vesting_account;
    vesting.change_destination(
        &signer,
        &current,
        new_owner,
        new_key,
        &new_mint,
        &new_account_owner,
    )?;

    msg!("Destination changed from {} to {}", current, new_key);
    emit!(DestinationChanged {
        vesting_account: vesting.key(),
        old_owner: signer,
        old_destination_token_account: current,
        new_owner,
        new_destination_token_account: new_key,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(seed: String)]
pub struct ChangeDestination<'info> {
    #[account(
        mut,
        seeds = [VESTING_SEED, pda_seed(&seed)],
        bump = vesting_account.bump,
    )]
    pub vesting_account: Box<Account<'info, VestingScheduleHeader>>,

    pub current_dst_token_account_owner: Signer<'info>,

    pub current_dst_token_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: Recorded as the new beneficiary; must own `new_dst_token_account`.
    pub new_dst_token_account_owner: UncheckedAccount<'info>,

    pub new_dst_token_account: Box<Account<'info, TokenAccount>>,
}

#[event]
pub struct DestinationChanged {
    pub vesting_account: Pubkey,
    pub old_owner: Pubkey,
    pub old_destination_token_account: Pubkey,
    pub new_owner: Pubkey,
    pub new_destination_token_account: Pubkey,
}
