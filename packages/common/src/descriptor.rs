//! Bounds on the human-readable fields of a side token pairing.

use thiserror::Error;

pub const MAX_SIDE_TOKEN_NAME_LEN: usize = 64;
pub const MAX_SIDE_TOKEN_SYMBOL_LEN: usize = 7;

#[derive(Error, Debug, PartialEq)]
pub enum DescriptorError {
    #[error("Invalid side token name: must be 1-{max} characters")]
    InvalidName { max: usize },

    #[error("Invalid side token symbol: must be 1-{max} characters")]
    InvalidSymbol { max: usize },
}

pub fn validate_descriptor(name: &str, symbol: &str) -> Result<(), DescriptorError> {
    let name_len = name.chars().count();
    if name_len == 0 || name_len > MAX_SIDE_TOKEN_NAME_LEN {
        return Err(DescriptorError::InvalidName {
            max: MAX_SIDE_TOKEN_NAME_LEN,
        });
    }
    let symbol_len = symbol.chars().count();
    if symbol_len == 0 || symbol_len > MAX_SIDE_TOKEN_SYMBOL_LEN {
        return Err(DescriptorError::InvalidSymbol {
            max: MAX_SIDE_TOKEN_SYMBOL_LEN,
        });
    }
    Ok(())
}
