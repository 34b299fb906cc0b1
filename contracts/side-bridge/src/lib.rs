//! Side Bridge - Side-Chain Half of the Token Bridge
//!
//! Mints side tokens once a quorum of authorities replays a main-chain
//! deposit, and records redeems that the main bridge later pays out.
//!
//! ## Flows
//! 1. Authorities submit `Deposit` with the main bridge's deposit record; the
//!    vote that reaches the threshold mints to the beneficiary
//! 2. A holder calls `Redeem` on the side token, which moves the tokens here
//!    and delivers `OnRedeem`; the bridge emits `side_token_redeemed`
//! 3. After the main bridge releases the withdrawal, authorities
//!    `ConfirmRedeem` here and the held tokens are burned
//!
//! Staking and vesting are reachable only through the side token's hooks.
//!
//! ## Addresses
//! Both chains share one bech32 address space. A deposit's beneficiary is
//! validated as a local address before its first signature counts, and the
//! deposit id commits to it as written. The main bridge address is never
//! called from here and is kept as an opaque string.

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
