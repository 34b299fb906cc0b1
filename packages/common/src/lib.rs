//! Common - Shared Types and Utilities for the Token Bridge Contracts
//!
//! Both bridges must agree byte-for-byte on identifiers and on how authority
//! signatures are counted, so those pieces live here rather than in either
//! contract.

pub mod authority;
pub mod conversion;
pub mod descriptor;
pub mod hash;
pub mod hooks;
pub mod quorum;

pub use authority::{AuthorityError, AuthoritySet, MAX_AUTHORITIES};
pub use conversion::{ConversionError, ConversionRate};
pub use descriptor::{validate_descriptor, DescriptorError};
pub use hash::{bytes32_to_hex, keccak256, parse_hash};
pub use hooks::{ApprovalReceiveMsg, SideTokenHookMsg};
pub use quorum::{Quorum, Tally, Vote};
