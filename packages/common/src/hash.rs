//! Identifier hashing shared by the main and side bridges.
//!
//! Every identifier is `keccak256` over a sequence of 32-byte slots. The
//! first slot is a domain tag so ids of different kinds never collide.
//!
//! # Slot encoding
//! - integers: big-endian, left-padded to 32 bytes
//! - strings and addresses: `keccak256(utf8 bytes)`
//! - 32-byte hashes: copied as-is
//!
//! Both chains compute the same id from the same inputs; a side token id
//! supplied by a caller is only accepted if it matches the recomputed one.

use cosmwasm_std::{Binary, StdError, StdResult, Uint128};
use tiny_keccak::{Hasher, Keccak};

const SIDE_TOKEN_DOMAIN: &str = "SIDE_TOKEN";
const DEPOSIT_DOMAIN: &str = "DEPOSIT";
const REDEEM_DOMAIN: &str = "REDEEM";
const CHANGE_AUTHORITY_DOMAIN: &str = "CHANGE_AUTHORITY";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Accumulates 32-byte slots before hashing.
struct SlotEncoder {
    data: Vec<u8>,
}

impl SlotEncoder {
    fn new(domain: &str) -> Self {
        let encoder = SlotEncoder {
            data: Vec::with_capacity(32 * 8),
        };
        encoder.string(domain)
    }

    fn bytes32(mut self, value: &[u8; 32]) -> Self {
        self.data.extend_from_slice(value);
        self
    }

    fn u128(mut self, value: u128) -> Self {
        // u128 (16 bytes) lands in bytes 16-31 of the slot
        self.data.extend_from_slice(&[0u8; 16]);
        self.data.extend_from_slice(&value.to_be_bytes());
        self
    }

    fn u64(self, value: u64) -> Self {
        self.u128(value as u128)
    }

    fn string(self, value: &str) -> Self {
        let hashed = keccak256(value.as_bytes());
        self.bytes32(&hashed)
    }

    fn finish(self) -> [u8; 32] {
        keccak256(&self.data)
    }
}

/// Identifier of a token pairing across the two chains.
///
/// `chain_id` is the side chain the pegged token lives on.
pub fn side_token_id(
    chain_id: u64,
    name: &str,
    symbol: &str,
    conversion_rate: Uint128,
    conversion_rate_decimals: u8,
) -> [u8; 32] {
    SlotEncoder::new(SIDE_TOKEN_DOMAIN)
        .u64(chain_id)
        .string(name)
        .string(symbol)
        .u128(conversion_rate.u128())
        .u64(conversion_rate_decimals as u64)
        .finish()
}

/// Identifier of a main-chain deposit, recomputed by the side bridge before minting.
pub fn deposit_id(
    main_chain_id: u64,
    side_token_id: &[u8; 32],
    deposit_count: u64,
    beneficiary: &str,
    amount_mt: Uint128,
    amount_st: Uint128,
) -> [u8; 32] {
    SlotEncoder::new(DEPOSIT_DOMAIN)
        .u64(main_chain_id)
        .bytes32(side_token_id)
        .u64(deposit_count)
        .string(beneficiary)
        .u128(amount_mt.u128())
        .u128(amount_st.u128())
        .finish()
}

/// Identifier of a side-chain redeem request.
pub fn redeem_id(
    side_chain_id: u64,
    side_token_id: &[u8; 32],
    redeem_count: u64,
    owner: &str,
    amount: Uint128,
) -> [u8; 32] {
    SlotEncoder::new(REDEEM_DOMAIN)
        .u64(side_chain_id)
        .bytes32(side_token_id)
        .u64(redeem_count)
        .string(owner)
        .u128(amount.u128())
        .finish()
}

/// Identifier of an authority substitution request.
pub fn change_id(chain_id: u64, old_authority: &str, new_authority: &str, nonce: u64) -> [u8; 32] {
    SlotEncoder::new(CHANGE_AUTHORITY_DOMAIN)
        .u64(chain_id)
        .string(old_authority)
        .string(new_authority)
        .u64(nonce)
        .finish()
}

/// Parse a 32-byte hash out of a message field.
pub fn parse_hash(hash: &Binary) -> StdResult<[u8; 32]> {
    hash.to_vec().try_into().map_err(|_| {
        StdError::generic_err(format!(
            "Invalid hash length: expected 32 bytes, got {}",
            hash.len()
        ))
    })
}

/// Convert bytes32 to hex string with 0x prefix
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
