//! Fixed-point conversion between main-chain and side-chain token units.
//!
//! `amount_st = amount_mt * rate / 10^decimals`
//! `amount_mt = amount_st * 10^decimals / rate`, rejected when not exact.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Uint128, Uint256};
use thiserror::Error;

/// Largest supported `conversion_rate_decimals`.
pub const MAX_CONVERSION_DECIMALS: u8 = 18;

#[derive(Error, Debug, PartialEq)]
pub enum ConversionError {
    #[error("Invalid conversion rate: rate must be greater than zero")]
    ZeroRate,

    #[error("Invalid conversion rate: decimals {decimals} exceeds {max}")]
    DecimalsTooLarge { decimals: u8, max: u8 },

    #[error("Conversion overflow")]
    Overflow,

    #[error("Conversion of {amount} loses precision")]
    Lossy { amount: Uint128 },

    #[error("Conversion of {amount} rounds down to zero")]
    ZeroAmount { amount: Uint128 },
}

#[cw_serde]
#[derive(Copy)]
pub struct ConversionRate {
    pub rate: Uint128,
    pub decimals: u8,
}

impl ConversionRate {
    pub fn new(rate: Uint128, decimals: u8) -> Result<Self, ConversionError> {
        if rate.is_zero() {
            return Err(ConversionError::ZeroRate);
        }
        if decimals > MAX_CONVERSION_DECIMALS {
            return Err(ConversionError::DecimalsTooLarge {
                decimals,
                max: MAX_CONVERSION_DECIMALS,
            });
        }
        Ok(ConversionRate { rate, decimals })
    }

    fn scale(&self) -> Uint128 {
        Uint128::new(10u128.pow(self.decimals as u32))
    }

    /// Main-chain amount to side-chain amount, truncating.
    pub fn to_side(&self, amount_mt: Uint128) -> Result<Uint128, ConversionError> {
        let scaled = amount_mt.full_mul(self.rate) / Uint256::from(self.scale());
        let amount_st = Uint128::try_from(scaled).map_err(|_| ConversionError::Overflow)?;
        if amount_st.is_zero() {
            return Err(ConversionError::ZeroAmount { amount: amount_mt });
        }
        Ok(amount_st)
    }

    /// Side-chain amount back to main-chain amount. Any remainder is an error.
    pub fn to_main_exact(&self, amount_st: Uint128) -> Result<Uint128, ConversionError> {
        let numerator = amount_st.full_mul(self.scale());
        let rate = Uint256::from(self.rate);
        if !(numerator % rate).is_zero() {
            return Err(ConversionError::Lossy { amount: amount_st });
        }
        let amount_mt =
            Uint128::try_from(numerator / rate).map_err(|_| ConversionError::Overflow)?;
        if amount_mt.is_zero() {
            return Err(ConversionError::ZeroAmount { amount: amount_st });
        }
        Ok(amount_mt)
    }
}
