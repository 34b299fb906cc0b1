//! Query handlers for the side bridge contract.

use common::{bytes32_to_hex, hash, parse_hash, AuthoritySet};
use cosmwasm_std::{Addr, Binary, Deps, Order, StdError, StdResult, Uint128};

use crate::msg::{
    ConfigResponse, DepositResponse, HashResponse, IsAuthorityResponse, OperatorsResponse,
    RedeemResponse, StakedAmountResponse, VestCountResponse,
};
use crate::state::{
    SideTokenRecord, VestInfo, AUTHORITIES, CONFIG, DEPOSITS, DEPOSIT_SIGNATURES, OPERATORS,
    REDEEMS, REDEEM_CONFIRMATIONS, SIDE_TOKENS, STAKES, VESTS, VEST_COUNTS,
};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        main_chain_id: config.main_chain_id,
        main_bridge: config.main_bridge,
        side_chain_id: config.side_chain_id,
        vesting_contract: config.vesting_contract,
        paused: config.paused,
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
    let deposit = DEPOSITS.may_load(deps.storage, &id)?;
    Ok(DepositResponse {
        minted: deposit.as_ref().map(|d| d.minted).unwrap_or(false),
        deposit,
        signed_count: DEPOSIT_SIGNATURES.tally(deps.storage, &id)?.signed_count,
    })
}

pub fn query_redeem(deps: Deps, redeem_id: Binary) -> StdResult<RedeemResponse> {
    let id = parse_hash(&redeem_id)?;
    let redeem = REDEEMS
        .may_load(deps.storage, &id)?
        .ok_or_else(|| StdError::not_found(format!("redeem {}", bytes32_to_hex(&id))))?;
    Ok(RedeemResponse {
        redeem,
        confirmations: REDEEM_CONFIRMATIONS.tally(deps.storage, &id)?,
    })
}

pub fn query_staked_amount(
    deps: Deps,
    side_token_id: Binary,
    staker: String,
) -> StdResult<StakedAmountResponse> {
    let id = parse_hash(&side_token_id)?;
    let staker = deps.api.addr_validate(&staker)?;
    Ok(StakedAmountResponse {
        amount: STAKES
            .may_load(deps.storage, (id.as_slice(), &staker))?
            .unwrap_or_default(),
    })
}

pub fn query_vest_count(deps: Deps, owner: String) -> StdResult<VestCountResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    Ok(VestCountResponse {
        count: VEST_COUNTS.may_load(deps.storage, &owner)?.unwrap_or_default(),
    })
}

pub fn query_vest_info(deps: Deps, owner: String, index: u64) -> StdResult<VestInfo> {
    let owner = deps.api.addr_validate(&owner)?;
    VESTS.load(deps.storage, (&owner, index))
}

pub fn query_authorities(deps: Deps) -> StdResult<AuthoritySet> {
    AUTHORITIES.load(deps.storage)
}

pub fn query_is_authority(deps: Deps, address: String) -> StdResult<IsAuthorityResponse> {
    let address = deps.api.addr_validate(&address)?;
    Ok(IsAuthorityResponse {
        is_authority: AUTHORITIES.load(deps.storage)?.contains(&address),
    })
}

pub fn query_operators(deps: Deps) -> StdResult<OperatorsResponse> {
    let operators = OPERATORS
        .keys(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<Addr>>>()?;
    Ok(OperatorsResponse { operators })
}
