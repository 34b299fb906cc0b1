//! Query handlers for the main bridge contract.

use common::{bytes32_to_hex, hash, parse_hash};
use cosmwasm_std::{Binary, Deps, StdError, StdResult, Uint128};

use crate::msg::{
    AuthoritiesResponse, ChangeRequestResponse, ConfigResponse, DepositResponse, HashResponse,
    IsAuthorityResponse, StakedAmountResponse, WithdrawResponse,
};
use crate::state::{
    SideTokenRecord, CHANGE_REQUESTS, CHANGE_SIGNATURES, CONFIG, DEPOSITS, DEPOSIT_CONFIRMATIONS,
    SIDE_BRIDGE, SIDE_TOKENS, STAKES, TOTAL_LOCKED, WITHDRAWS, WITHDRAW_SIGNATURES,
};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let side_bridge = SIDE_BRIDGE.may_load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        admin: config.admin,
        main_chain_id: config.main_chain_id,
        token: config.token,
        paused: config.paused,
        side_bridge: side_bridge.map(|s| s.side_bridge),
        total_locked: TOTAL_LOCKED.may_load(deps.storage)?.unwrap_or_default(),
    })
}

pub fn query_side_token(deps: Deps, side_token_id: Binary) -> StdResult<SideTokenRecord> {
    let id = parse_hash(&side_token_id)?;
    SIDE_TOKENS
        .may_load(deps.storage, &id)?
        .ok_or_else(|| StdError::not_found(format!("side token {}", bytes32_to_hex(&id))))
}

pub fn query_hash_side_token_id(
    side_chain_id: u64,
    name: String,
    symbol: String,
    conversion_rate: Uint128,
    conversion_rate_decimals: u8,
) -> StdResult<HashResponse> {
    let id = hash::side_token_id(
        side_chain_id,
        &name,
        &symbol,
        conversion_rate,
        conversion_rate_decimals,
    );
    Ok(HashResponse {
        hash: Binary::from(id.to_vec()),
        hex: bytes32_to_hex(&id),
    })
}

pub fn query_deposit(deps: Deps, deposit_id: Binary) -> StdResult<DepositResponse> {
    let id = parse_hash(&deposit_id)?;
    let deposit = DEPOSITS
        .may_load(deps.storage, &id)?
        .ok_or_else(|| StdError::not_found(format!("deposit {}", bytes32_to_hex(&id))))?;
    Ok(DepositResponse {
        deposit,
        confirmations: DEPOSIT_CONFIRMATIONS.tally(deps.storage, &id)?,
    })
}

pub fn query_withdraw(deps: Deps, redeem_id: Binary) -> StdResult<WithdrawResponse> {
    let id = parse_hash(&redeem_id)?;
    let withdraw = WITHDRAWS.may_load(deps.storage, &id)?;
    let tally = WITHDRAW_SIGNATURES.tally(deps.storage, &id)?;
    Ok(WithdrawResponse {
        withdrawn: withdraw.as_ref().map(|w| w.withdrawn).unwrap_or(false),
        withdraw,
        signed_count: tally.signed_count,
    })
}

pub fn query_staked_amount(deps: Deps, staker: String) -> StdResult<StakedAmountResponse> {
    let staker = deps.api.addr_validate(&staker)?;
    Ok(StakedAmountResponse {
        amount: STAKES.may_load(deps.storage, &staker)?.unwrap_or_default(),
    })
}

pub fn query_authorities(deps: Deps) -> StdResult<AuthoritiesResponse> {
    Ok(AuthoritiesResponse {
        authorities: SIDE_BRIDGE.may_load(deps.storage)?.map(|s| s.authorities),
    })
}

pub fn query_is_authority(deps: Deps, address: String) -> StdResult<IsAuthorityResponse> {
    let address = deps.api.addr_validate(&address)?;
    let is_authority = SIDE_BRIDGE
        .may_load(deps.storage)?
        .map(|s| s.authorities.contains(&address))
        .unwrap_or(false);
    Ok(IsAuthorityResponse { is_authority })
}

pub fn query_change_request(deps: Deps, change_id: Binary) -> StdResult<ChangeRequestResponse> {
    let id = parse_hash(&change_id)?;
    let request = CHANGE_REQUESTS
        .may_load(deps.storage, &id)?
        .ok_or_else(|| StdError::not_found(format!("change request {}", bytes32_to_hex(&id))))?;
    Ok(ChangeRequestResponse {
        request,
        signed_count: CHANGE_SIGNATURES.tally(deps.storage, &id)?.signed_count,
    })
}
