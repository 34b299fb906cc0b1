//! Side Token - Pegged Token of the Side Chain
//!
//! Supply exists only as the side bridge mints it for confirmed deposits.
//! Holders move value back to the main chain, stake, or fund a vesting grant
//! by calling the token, which moves the tokens to the bridge and notifies
//! it through a `TokenHook` message in the same transaction.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
