pub mod create;
pub mod unlock;
pub mod change_destination;
pub mod close_account;
pub mod emit_vesting_quote;

pub use create::*;
pub use unlock::*;
pub use change_destination::*;
pub use close_account::*;
pub use emit_vesting_quote::*;
