//! Program-wide constants, fixed at deployment.

/// Salt prepended to the caller's seed when deriving the vesting state PDA.
pub const VESTING_SEED: &[u8] = b"vesting";

/// Max tranches per vesting contract. Bounded by the transaction size of
/// `create`, which carries every release time and amount inline.
pub const MAX_SCHEDULES: usize = 32;

/// Max caller seed length in bytes (per-seed PDA limit).
pub const MAX_SEED_LEN: usize = 32;
