use anchor_lang::prelude::*;

use crate::constants::VESTING_SEED;
use crate::state::VestingScheduleHeader;
use crate::utils::seeds::{check_seed, pda_seed};

/// Read-only preview of what `unlock` would release right now.
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, seed: String) -> Result<()> {
    check_seed(&seed)?;

    let vesting = &ctx.accounts.vesting_account;
    let now = Clock::get()?.unix_timestamp;

    emit!(VestingQuote {
        vesting_account: vesting.key(),
        now,
        releasable: vesting.releasable_at(now)?,
        outstanding: vesting.outstanding()?,
        next_release_time: vesting.next_release_time(),
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(seed: String)]
pub struct EmitVestingQuote<'info> {
    #[account(
        seeds = [VESTING_SEED, pda_seed(&seed)],
        bump = vesting_account.bump,
    )]
    pub vesting_account: Box<Account<'info, VestingScheduleHeader>>,
}

#[event]
pub struct VestingQuote {
    pub vesting_account: Pubkey,
    pub now: i64,
    pub releasable: u64,
    pub outstanding: u64,
    pub next_release_time: Option<i64>,
}
