use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

pub use instructions::*;
pub use state::*;

declare_id!("cBvCy7Qi492GybgwLbARVPPTk3cBCKbatMZaZwZR8is");

#[program]
pub mod token_vesting {
    use super::*;

    /// Creates the vesting record for `seed` and moves `sum(amounts)` into escrow.
    pub fn create(
        ctx: Context<Create>,
        release_times: Vec<i64>,
        amounts: Vec<u64>,
        seed: String,
    ) -> Result<()> {
        instructions::create::create(ctx, release_times, amounts, seed)
    }

    /// Pays every due tranche to the stored destination. Callable by anyone.
    pub fn unlock(ctx: Context<Unlock>, seed: String) -> Result<()> {
        instructions::unlock::unlock(ctx, seed)
    }

    /// Current destination owner hands the beneficiary role to a new owner.
    pub fn change_destination(ctx: Context<ChangeDestination>, seed: String) -> Result<()> {
        instructions::change_destination::change_destination(ctx, seed)
    }

    /// Initializer reclaims rent once every tranche has been released.
    pub fn close_account(ctx: Context<CloseAccount>, seed: String) -> Result<()> {
        instructions::close_account::close_account(ctx, seed)
    }

    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>, seed: String) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote(ctx, seed)
    }
}
