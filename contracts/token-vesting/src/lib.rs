//! Token Vesting - Time-Released CW20 Grants
//!
//! A grant is funded by sending CW20 tokens to this contract with a
//! `CreateGrant` payload. The tokens stay locked here and are paid out to the
//! recipient as whole release intervals elapse, starting once the cliff has
//! passed and finishing with the exact remainder at the end of the duration.

pub mod contract;
pub mod error;
pub mod msg;
mod query;
pub mod schedule;
pub mod state;

pub use crate::error::ContractError;
pub use crate::schedule::VestingSchedule;
