//! Linear mint schedule.
//!
//! After registration the owner can no longer mint at will. Instead
//! `amount_per_period` becomes mintable at the end of every whole period,
//! up to `minting_supply` in total.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

pub const SECONDS_IN_A_DAY: u64 = 86_400;

#[cw_serde]
pub struct LinearMintSchedule {
    /// Total this schedule may ever mint
    pub minting_supply: Uint128,
    pub amount_per_period: Uint128,
    pub period_length_in_days: u64,
    /// Registration time in seconds
    pub registered_at: u64,
    pub minted_so_far: Uint128,
    /// False once `minted_so_far == minting_supply`
    pub minting_status: bool,
}

impl LinearMintSchedule {
    pub fn new(
        minting_supply: Uint128,
        amount_per_period: Uint128,
        period_length_in_days: u64,
        registered_at: u64,
    ) -> Self {
        LinearMintSchedule {
            minting_supply,
            amount_per_period,
            period_length_in_days,
            registered_at,
            minted_so_far: Uint128::zero(),
            minting_status: true,
        }
    }

    pub fn period_length_seconds(&self) -> u64 {
        self.period_length_in_days.saturating_mul(SECONDS_IN_A_DAY)
    }

    /// Cumulative amount mintable at `at_timestamp` (seconds).
    pub fn mint_amount_at(&self, at_timestamp: u64) -> Uint128 {
        let period = self.period_length_seconds();
        if at_timestamp < self.registered_at || period == 0 {
            return Uint128::zero();
        }
        let periods = (at_timestamp - self.registered_at) / period;
        self.amount_per_period
            .saturating_mul(Uint128::from(periods))
            .min(self.minting_supply)
    }

    /// Amount that a mint at `at_timestamp` would issue.
    pub fn due_at(&self, at_timestamp: u64) -> Uint128 {
        self.mint_amount_at(at_timestamp)
            .saturating_sub(self.minted_so_far)
    }

    /// Record `amount` as minted.
    pub fn record_mint(&mut self, amount: Uint128) {
        self.minted_so_far += amount;
        if self.minted_so_far >= self.minting_supply {
            self.minting_status = false;
        }
    }
}
