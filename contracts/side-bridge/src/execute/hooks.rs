//! Callbacks delivered by side tokens after they move a holder's tokens to
//! the bridge.

use common::{bytes32_to_hex, hash, parse_hash, SideTokenHookMsg};
use cosmwasm_std::{
    to_json_binary, Binary, DepsMut, Env, Event, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;
use token_vesting::msg::{GrantCountResponse, QueryMsg as VestingQueryMsg, ReceiveMsg};

use super::{ensure_not_paused, load_side_token};
use crate::error::ContractError;
use crate::state::{
    Config, RedeemRecord, RedeemStatus, SideTokenRecord, VestInfo, REDEEMS, SIDE_TOKENS,
    SIDE_TOKEN_IDS, STAKES, VESTS, VEST_COUNTS,
};

/// Entry point for `TokenHook`. The sender identifies the side token.
pub fn execute_token_hook(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    hook: SideTokenHookMsg,
) -> Result<Response, ContractError> {
    let config = ensure_not_paused(deps.storage)?;
    let token_id = SIDE_TOKEN_IDS
        .may_load(deps.storage, &info.sender)?
        .ok_or(ContractError::NotSideToken)?;
    let token_id = parse_hash(&token_id)?;
    let side_token = load_side_token(deps.storage, &token_id)?;

    match hook {
        SideTokenHookMsg::OnRedeem { owner, amount } => {
            on_redeem(deps, &config, token_id, side_token, owner, amount)
        }
        SideTokenHookMsg::OnStake { staker, amount } => {
            on_stake(deps, &token_id, staker, amount)
        }
        SideTokenHookMsg::OnUnstake { staker, amount } => {
            on_unstake(deps, &token_id, &side_token, staker, amount)
        }
        SideTokenHookMsg::OnVest {
            owner,
            amount,
            cliff_in_days,
            duration_in_days,
            interval_in_days,
        } => on_vest(
            deps,
            &env,
            &config,
            &token_id,
            &side_token,
            owner,
            amount,
            cliff_in_days,
            duration_in_days,
            interval_in_days,
        ),
    }
}

fn ensure_positive(amount: Uint128, what: &str) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: format!("{} amount must be greater than zero", what),
        });
    }
    Ok(())
}

// ============================================================================
// Redeem
// ============================================================================

/// Record a redeem for the main bridge to pay out. The tokens stay with the
/// bridge until `ConfirmRedeem` burns them.
fn on_redeem(
    deps: DepsMut,
    config: &Config,
    token_id: [u8; 32],
    mut side_token: SideTokenRecord,
    owner: String,
    amount_st: Uint128,
) -> Result<Response, ContractError> {
    ensure_positive(amount_st, "redeem")?;
    let owner = deps.api.addr_validate(&owner)?;
    let amount_mt = side_token.conversion.to_main_exact(amount_st)?;

    side_token.redeem_count += 1;
    let redeem_count = side_token.redeem_count;
    SIDE_TOKENS.save(deps.storage, &token_id, &side_token)?;

    let redeem_id = hash::redeem_id(
        config.side_chain_id,
        &token_id,
        redeem_count,
        owner.as_str(),
        amount_st,
    );
    REDEEMS.save(
        deps.storage,
        &redeem_id,
        &RedeemRecord {
            redeem_id: Binary::from(redeem_id.to_vec()),
            side_token_id: side_token.side_token_id.clone(),
            redeem_count,
            owner: owner.clone(),
            amount_st,
            amount_mt,
            status: RedeemStatus::Requested,
        },
    )?;

    let id_hex = bytes32_to_hex(&redeem_id);
    Ok(Response::new()
        .add_event(
            Event::new("side_token_redeemed")
                .add_attribute("redeem_id", &id_hex)
                .add_attribute("side_token_id", bytes32_to_hex(&token_id))
                .add_attribute("redeem_count", redeem_count.to_string())
                .add_attribute("owner", owner.as_str())
                .add_attribute("amount_st", amount_st)
                .add_attribute("amount_mt", amount_mt),
        )
        .add_attribute("action", "redeem")
        .add_attribute("redeem_id", id_hex)
        .add_attribute("owner", owner))
}

// ============================================================================
// Staking
// ============================================================================

fn on_stake(
    deps: DepsMut,
    token_id: &[u8; 32],
    staker: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_positive(amount, "stake")?;
    let staker = deps.api.addr_validate(&staker)?;
    let key = (token_id.as_slice(), &staker);
    let staked = STAKES.may_load(deps.storage, key)?.unwrap_or_default() + amount;
    STAKES.save(deps.storage, key, &staked)?;

    Ok(Response::new()
        .add_event(
            Event::new("side_token_staked")
                .add_attribute("side_token_id", bytes32_to_hex(token_id))
                .add_attribute("staker", staker.as_str())
                .add_attribute("amount", amount)
                .add_attribute("staked", staked),
        )
        .add_attribute("action", "stake")
        .add_attribute("staker", staker)
        .add_attribute("amount", amount))
}

fn on_unstake(
    deps: DepsMut,
    token_id: &[u8; 32],
    side_token: &SideTokenRecord,
    staker: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_positive(amount, "unstake")?;
    let staker = deps.api.addr_validate(&staker)?;
    let key = (token_id.as_slice(), &staker);
    let staked = STAKES.may_load(deps.storage, key)?.unwrap_or_default();
    if staked < amount {
        return Err(ContractError::InsufficientStake {
            staked,
            requested: amount,
        });
    }
    let remaining = staked - amount;
    if remaining.is_zero() {
        STAKES.remove(deps.storage, key);
    } else {
        STAKES.save(deps.storage, key, &remaining)?;
    }

    let payout = WasmMsg::Execute {
        contract_addr: side_token.side_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: staker.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(payout)
        .add_event(
            Event::new("side_token_unstaked")
                .add_attribute("side_token_id", bytes32_to_hex(token_id))
                .add_attribute("staker", staker.as_str())
                .add_attribute("amount", amount)
                .add_attribute("staked", remaining),
        )
        .add_attribute("action", "unstake")
        .add_attribute("staker", staker)
        .add_attribute("amount", amount))
}

// ============================================================================
// Vesting
// ============================================================================

/// Forward the tokens to the vesting contract as a new grant for `owner`.
///
/// The grant id is the vesting contract's grant count before the send; the
/// send runs in the same transaction, so nothing can take that id first.
#[allow(clippy::too_many_arguments)]
fn on_vest(
    deps: DepsMut,
    env: &Env,
    config: &Config,
    token_id: &[u8; 32],
    side_token: &SideTokenRecord,
    owner: String,
    amount: Uint128,
    cliff_in_days: u64,
    duration_in_days: u64,
    interval_in_days: u64,
) -> Result<Response, ContractError> {
    ensure_positive(amount, "vest")?;
    let vesting_contract = config
        .vesting_contract
        .clone()
        .ok_or(ContractError::VestingNotConfigured)?;
    let owner = deps.api.addr_validate(&owner)?;

    let next: GrantCountResponse = deps
        .querier
        .query_wasm_smart(vesting_contract.as_str(), &VestingQueryMsg::GrantCount {})?;

    let index = VEST_COUNTS.may_load(deps.storage, &owner)?.unwrap_or_default();
    VEST_COUNTS.save(deps.storage, &owner, &(index + 1))?;
    VESTS.save(
        deps.storage,
        (&owner, index),
        &VestInfo {
            side_token_id: side_token.side_token_id.clone(),
            vesting_contract: vesting_contract.clone(),
            grant_id: next.count,
            amount,
            cliff_in_days,
            duration_in_days,
            interval_in_days,
            created_at: env.block.time.seconds(),
        },
    )?;

    let fund = WasmMsg::Execute {
        contract_addr: side_token.side_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Send {
            contract: vesting_contract.to_string(),
            amount,
            msg: to_json_binary(&ReceiveMsg::CreateGrant {
                recipient: owner.to_string(),
                start: None,
                cliff_in_days,
                duration_in_days,
                interval_in_days,
            })?,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(fund)
        .add_event(
            Event::new("side_token_vested")
                .add_attribute("side_token_id", bytes32_to_hex(token_id))
                .add_attribute("owner", owner.as_str())
                .add_attribute("index", index.to_string())
                .add_attribute("grant_id", next.count.to_string())
                .add_attribute("amount", amount),
        )
        .add_attribute("action", "vest")
        .add_attribute("owner", owner)
        .add_attribute("amount", amount))
}
