//! Main Token - Canonical Token of the Main Chain
//!
//! A CW20-shaped token with owner controls layered over the shared ledger:
//! - capped supply with owner minting
//! - pause and per-account locks
//! - owner clawback (`Recover`) and `BurnFrom`
//! - `ApproveAndCall`, which sets an allowance and calls the spender in the
//!   same transaction (used to deposit into the main bridge in one step)
//! - a one-shot linear mint schedule that permanently replaces owner minting
//!
//! The balance policy is fixed at instantiation. `AllowNegative` lets burn and
//! recover overdraw a holder and carries no supply cap or account locks.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod schedule;
pub mod state;

pub use crate::error::ContractError;
pub use crate::schedule::LinearMintSchedule;
