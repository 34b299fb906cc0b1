//! Message types for the token vesting contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw20::Cw20ReceiveMsg;

use crate::state::Grant;

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// CW20 hook; the payload is a [`ReceiveMsg`]
    Receive(Cw20ReceiveMsg),
    /// Pay out everything vested and not yet released. Callable by anyone.
    Release { grant_id: u64 },
}

#[cw_serde]
pub enum ReceiveMsg {
    /// Lock the sent tokens in a new grant for `recipient`
    CreateGrant {
        recipient: String,
        /// Seconds; defaults to the current block time
        start: Option<u64>,
        cliff_in_days: u64,
        duration_in_days: u64,
        interval_in_days: u64,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Grant)]
    Grant { grant_id: u64 },
    /// Vested and releasable amounts at `at_timestamp` (seconds)
    #[returns(ReleaseAmountResponse)]
    CalculateReleaseAmount { grant_id: u64, at_timestamp: u64 },
    #[returns(GrantsResponse)]
    GrantsByRecipient {
        recipient: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(GrantCountResponse)]
    GrantCount {},
}

#[cw_serde]
pub struct ReleaseAmountResponse {
    /// Cumulative amount vested
    pub vested: Uint128,
    /// `vested` minus what was already released
    pub releasable: Uint128,
}

#[cw_serde]
pub struct GrantsResponse {
    pub grants: Vec<Grant>,
}

#[cw_serde]
pub struct GrantCountResponse {
    pub count: u64,
}
