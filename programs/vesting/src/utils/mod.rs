pub mod escrow;
pub mod seeds;
