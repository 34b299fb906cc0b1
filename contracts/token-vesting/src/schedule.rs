//! Release schedule of a single grant.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::error::ContractError;

pub const SECONDS_IN_A_DAY: u64 = 86_400;

#[cw_serde]
pub struct VestingSchedule {
    pub total_amount: Uint128,
    /// Seconds
    pub start: u64,
    pub cliff_in_days: u64,
    pub duration_in_days: u64,
    pub interval_in_days: u64,
}

impl VestingSchedule {
    pub fn new(
        total_amount: Uint128,
        start: u64,
        cliff_in_days: u64,
        duration_in_days: u64,
        interval_in_days: u64,
    ) -> Result<Self, ContractError> {
        if total_amount.is_zero() {
            return Err(ContractError::InvalidSchedule {
                reason: "amount must be greater than zero".to_string(),
            });
        }
        if interval_in_days == 0 {
            return Err(ContractError::InvalidSchedule {
                reason: "interval must be at least one day".to_string(),
            });
        }
        if interval_in_days > duration_in_days {
            return Err(ContractError::InvalidSchedule {
                reason: "interval cannot exceed duration".to_string(),
            });
        }
        if cliff_in_days > duration_in_days {
            return Err(ContractError::InvalidSchedule {
                reason: "cliff cannot exceed duration".to_string(),
            });
        }

        Ok(VestingSchedule {
            total_amount,
            start,
            cliff_in_days,
            duration_in_days,
            interval_in_days,
        })
    }

    fn days_after_start(&self, days: u64) -> u64 {
        self.start
            .saturating_add(days.saturating_mul(SECONDS_IN_A_DAY))
    }

    pub fn cliff_end(&self) -> u64 {
        self.days_after_start(self.cliff_in_days)
    }

    pub fn end(&self) -> u64 {
        self.days_after_start(self.duration_in_days)
    }

    /// Amount released per whole interval. The remainder of the integer
    /// division is paid with the final release.
    pub fn amount_per_interval(&self) -> Uint128 {
        let intervals = self.duration_in_days / self.interval_in_days.max(1);
        self.total_amount
            .checked_div(Uint128::from(intervals))
            .unwrap_or(self.total_amount)
    }

    /// Cumulative amount vested at `at_timestamp` (seconds).
    pub fn vested_at(&self, at_timestamp: u64) -> Uint128 {
        if at_timestamp < self.cliff_end() {
            return Uint128::zero();
        }
        if at_timestamp >= self.end() {
            return self.total_amount;
        }

        let interval = self.interval_in_days.max(1).saturating_mul(SECONDS_IN_A_DAY);
        let elapsed_intervals = at_timestamp.saturating_sub(self.start) / interval;
        self.amount_per_interval()
            .saturating_mul(Uint128::from(elapsed_intervals))
            .min(self.total_amount)
    }
}
