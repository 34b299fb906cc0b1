//! Main Bridge - Main-Chain Half of the Token Bridge
//!
//! Holds main tokens deposited for minting on the side chain and releases
//! them again when a quorum of authorities attests to a redeem on the side
//! chain.
//!
//! ## Flows
//! 1. `Deposit` (or `ReceiveApproval` via the token's `ApproveAndCall`) locks
//!    main tokens and emits `deposited` with a deterministic deposit id
//! 2. Authorities mint on the side bridge, then `ConfirmDeposit` here
//! 3. `Withdraw` is signed by authorities for a side-chain redeem; the vote
//!    that reaches the threshold releases the tokens
//!
//! Authority substitution is two-phase: anyone files a
//! `ChangeAuthorityRequest`, then the remaining authorities confirm it with
//! `ChangeAuthority` on each bridge independently.
//!
//! ## Addresses
//! Both chains share one bech32 address space: the side bridge validates a
//! deposit beneficiary locally, and `Withdraw` validates the redeem owner
//! here before the first signature is recorded.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
