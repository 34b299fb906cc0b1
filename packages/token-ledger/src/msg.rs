use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Int128, Uint128};

#[cw_serde]
pub struct BalanceResponse {
    /// Negative only under the `AllowNegative` policy
    pub balance: Int128,
}

#[cw_serde]
pub struct AllowanceResponse {
    pub allowance: Uint128,
}
