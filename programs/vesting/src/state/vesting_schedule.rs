use anchor_lang::prelude::*;

use crate::constants::MAX_SCHEDULES;
use crate::error::VestingError;

/// One release tranche.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VestingSchedule {
    /// Unix seconds at or after which `amount` becomes releasable.
    pub release_time: i64,
    /// Unreleased amount; zeroed once paid out.
    pub amount: u64,
}

impl VestingSchedule {
    pub const SIZE: usize = 8 + 8;

    pub fn is_due(&self, now: i64) -> bool {
        self.amount > 0 && self.release_time <= now
    }

    /// Pairs release times with amounts, rejecting mismatched or out-of-range
    /// lengths. Order is preserved as supplied.
    pub fn build(
        release_times: &[i64],
        amounts: &[u64],
    ) -> core::result::Result<Vec<VestingSchedule>, VestingError> {
        if release_times.len() != amounts.len()
            || release_times.is_empty()
            || release_times.len() > MAX_SCHEDULES
        {
            return Err(VestingError::InvalidScheduleLength);
        }
        Ok(release_times
            .iter()
            .zip(amounts)
            .map(|(&release_time, &amount)| VestingSchedule {
                release_time,
                amount,
            })
            .collect())
    }
}

/// Vesting state PDA, one per seed.
#[account]
#[derive(Debug, Default)]
pub struct VestingScheduleHeader {
    /// Creator; signs `close_account` and receives the rent back.
    pub initializer: Pubkey,
    /// Current beneficiary.
    pub destination_token_account_owner: Pubkey,
    /// Token account credited by `unlock`.
    pub destination_token_account: Pubkey,
    /// Vested token mint, fixed at creation.
    pub mint: Pubkey,
    pub is_initialized: bool,
    /// Canonical bump of this PDA.
    pub bump: u8,
    /// Fixed length after creation; entries are only ever zeroed.
    pub schedules: Vec<VestingSchedule>,
}

/// Parties recorded by `create`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingParties {
    pub initializer: Pubkey,
    pub destination_token_account_owner: Pubkey,
    pub destination_token_account: Pubkey,
    pub mint: Pubkey,
}

impl VestingScheduleHeader {
    /// Account space for `schedule_count` tranches, discriminator included.
    pub const fn space(schedule_count: usize) -> usize {
        8 +  // discriminator
        32 + // initializer
        32 + // destination_token_account_owner
        32 + // destination_token_account
        32 + // mint
        1 +  // is_initialized
        1 +  // bump
        4 +  // schedules vec length
        VestingSchedule::SIZE * schedule_count
    }

    pub fn ensure_uninitialized(&self) -> core::result::Result<(), VestingError> {
        if self.is_initialized {
            return Err(VestingError::AlreadyInitialized);
        }
        Ok(())
    }

    /// Writes the header and schedule list. Validates before touching any
    /// field and returns the total amount that must be escrowed.
    pub fn initialize(
        &mut self,
        parties: VestingParties,
        bump: u8,
        release_times: &[i64],
        amounts: &[u64],
    ) -> core::result::Result<u64, VestingError> {
        self.ensure_uninitialized()?;
        let schedules = VestingSchedule::build(release_times, amounts)?;
        let total = sum_amounts(&schedules)?;
        if total == 0 {
            return Err(VestingError::ZeroTotalAmount);
        }

        self.initializer = parties.initializer;
        self.destination_token_account_owner = parties.destination_token_account_owner;
        self.destination_token_account = parties.destination_token_account;
        self.mint = parties.mint;
        self.bump = bump;
        self.schedules = schedules;
        self.is_initialized = true;
        Ok(total)
    }

    /// Sum of all unreleased amounts. Must equal the escrow balance.
    pub fn outstanding(&self) -> core::result::Result<u64, VestingError> {
        sum_amounts(&self.schedules)
    }

    /// Amount an `unlock` at `now` would release.
    pub fn releasable_at(&self, now: i64) -> core::result::Result<u64, VestingError> {
        self.schedules
            .iter()
            .filter(|s| s.is_due(now))
            .try_fold(0u64, |acc, s| {
                acc.checked_add(s.amount).ok_or(VestingError::MathOverflow)
            })
    }

    /// Zeroes every tranche due at `now` and returns the released total.
    /// Leaves the record untouched when nothing is due.
    pub fn release_due(&mut self, now: i64) -> core::result::Result<u64, VestingError> {
        let total = self.releasable_at(now)?;
        if total == 0 {
            return Err(VestingError::NothingToRelease);
        }
        for s in self.schedules.iter_mut() {
            if s.is_due(now) {
                s.amount = 0;
            }
        }
        Ok(total)
    }

    /// Earliest release time among tranches still holding funds.
    pub fn next_release_time(&self) -> Option<i64> {
        self.schedules
            .iter()
            .filter(|s| s.amount > 0)
            .map(|s| s.release_time)
            .min()
    }

    pub fn is_drained(&self) -> bool {
        self.schedules.iter().all(|s| s.amount == 0)
    }

    /// Points future unlocks at a new beneficiary. Only the current
    /// destination owner may do this; amounts are untouched.
    pub fn change_destination(
        &mut self,
        signer: &Pubkey,
        current_account: &Pubkey,
        new_owner: Pubkey,
        new_account: Pubkey,
        new_account_mint: &Pubkey,
        new_account_owner: &Pubkey,
    ) -> core::result::Result<(), VestingError> {
        if *signer != self.destination_token_account_owner {
            return Err(VestingError::Unauthorized);
        }
        if *current_account != self.destination_token_account {
            return Err(VestingError::InvalidDestination);
        }
        if *new_account_mint != self.mint {
            return Err(VestingError::MintMismatch);
        }
        if *new_account_owner != new_owner {
            return Err(VestingError::DestinationOwnerMismatch);
        }
        self.destination_token_account_owner = new_owner;
        self.destination_token_account = new_account;
        Ok(())
    }

    /// Close is allowed for the initializer once nothing is left in escrow.
    pub fn ensure_closable(
        &self,
        signer: &Pubkey,
        escrow_balance: u64,
    ) -> core::result::Result<(), VestingError> {
        if *signer != self.initializer {
            return Err(VestingError::Unauthorized);
        }
        if escrow_balance != 0 || !self.is_drained() {
            return Err(VestingError::NotYetFullyReleased);
        }
        Ok(())
    }
}

fn sum_amounts(schedules: &[VestingSchedule]) -> core::result::Result<u64, VestingError> {
    schedules.iter().try_fold(0u64, |acc, s| {
        acc.checked_add(s.amount).ok_or(VestingError::MathOverflow)
    })
}
