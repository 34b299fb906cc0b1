//! Token Ledger - Balance and Allowance Accounting
//!
//! Storage layout and operations shared by the main and side token
//! contracts. Contracts layer their own access rules (owner, pause, lock,
//! bridge-only minting) on top and call into this crate for the accounting.
//!
//! Balances are signed. Under [`BalancePolicy::Strict`] no balance ever goes
//! below zero. Under [`BalancePolicy::AllowNegative`] burning and recovery may
//! overdraw a holder; transfers still require funds under both policies.

pub mod error;
pub mod handlers;
pub mod ledger;
pub mod msg;
pub mod state;

pub use crate::error::LedgerError;
pub use crate::state::{BalancePolicy, TokenInfo};
