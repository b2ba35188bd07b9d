use anchor_lang::prelude::*;

/// Custom error codes for the token vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Release times and amounts must have equal, non-zero length within the schedule cap")]
    InvalidScheduleLength,

    #[msg("Total vested amount must be greater than zero")]
    ZeroTotalAmount,

    #[msg("Seed exceeds the maximum PDA seed length")]
    SeedTooLong,

    #[msg("Source token account holds less than the total vested amount")]
    InsufficientFunds,

    #[msg("Vesting account is already initialized")]
    AlreadyInitialized,

    #[msg("No outstanding unlockable balance")]
    NothingToRelease,

    #[msg("Signer is not authorized for this vesting account")]
    Unauthorized,

    #[msg("Token account mint does not match the vesting mint")]
    MintMismatch,

    #[msg("Token account is not the stored destination")]
    InvalidDestination,

    #[msg("New destination token account is not owned by the new destination owner")]
    DestinationOwnerMismatch,

    #[msg("Escrow still holds unreleased tokens")]
    NotYetFullyReleased,

    #[msg("Escrow balance does not match the remaining schedule amounts")]
    BalanceMismatch,

    #[msg("Math overflow")]
    MathOverflow,
}
