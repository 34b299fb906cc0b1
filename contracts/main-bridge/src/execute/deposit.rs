//! Locking main tokens for the side chain, and deposit confirmation.

use common::{bytes32_to_hex, hash, parse_hash, ApprovalReceiveMsg, Vote};
use cosmwasm_std::{
    to_json_binary, Addr, Binary, DepsMut, Env, Event, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use super::{ensure_authority, ensure_not_paused, ensure_owner, load_side_token};
use crate::error::ContractError;
use crate::state::{
    Config, DepositRecord, DepositStatus, DEPOSITS, DEPOSIT_CONFIRMATIONS, SIDE_BRIDGE,
    SIDE_TOKENS, TOTAL_LOCKED,
};

// ============================================================================
// Deposit
// ============================================================================

/// Record a deposit and pull `amount` from `depositor` into the bridge.
///
/// Pulling is a `TransferFrom` sub-message, so a missing allowance rolls
/// the whole deposit back.
fn lock_deposit(
    deps: DepsMut,
    env: &Env,
    config: &Config,
    depositor: Addr,
    beneficiary: String,
    side_token_id: &Binary,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if !SIDE_BRIDGE.exists(deps.storage) {
        return Err(ContractError::SideBridgeNotRegistered);
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "deposit amount must be greater than zero".to_string(),
        });
    }
    if beneficiary.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "beneficiary cannot be empty".to_string(),
        });
    }

    let token_id = parse_hash(side_token_id)?;
    let mut side_token = load_side_token(deps.storage, &token_id)?;
    let amount_st = side_token.conversion.to_side(amount)?;

    side_token.deposit_count += 1;
    let deposit_count = side_token.deposit_count;
    SIDE_TOKENS.save(deps.storage, &token_id, &side_token)?;

    let deposit_id = hash::deposit_id(
        config.main_chain_id,
        &token_id,
        deposit_count,
        &beneficiary,
        amount,
        amount_st,
    );
    DEPOSITS.save(
        deps.storage,
        &deposit_id,
        &DepositRecord {
            deposit_id: Binary::from(deposit_id.to_vec()),
            side_token_id: side_token_id.clone(),
            deposit_count,
            depositor: depositor.clone(),
            beneficiary: beneficiary.clone(),
            amount_mt: amount,
            amount_st,
            status: DepositStatus::Initiated,
        },
    )?;

    let locked = TOTAL_LOCKED.may_load(deps.storage)?.unwrap_or_default() + amount;
    TOTAL_LOCKED.save(deps.storage, &locked)?;

    let pull = WasmMsg::Execute {
        contract_addr: config.token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: depositor.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    };

    let deposit_hex = bytes32_to_hex(&deposit_id);
    let event = Event::new("deposited")
        .add_attribute("deposit_id", &deposit_hex)
        .add_attribute("side_token_id", bytes32_to_hex(&token_id))
        .add_attribute("deposit_count", deposit_count.to_string())
        .add_attribute("depositor", depositor.as_str())
        .add_attribute("beneficiary", &beneficiary)
        .add_attribute("amount_mt", amount)
        .add_attribute("amount_st", amount_st);

    Ok(Response::new()
        .add_message(pull)
        .add_event(event)
        .add_attribute("action", "deposit")
        .add_attribute("deposit_id", deposit_hex)
        .add_attribute("depositor", depositor)
        .add_attribute("amount", amount))
}

pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    side_token_id: Binary,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = ensure_not_paused(deps.storage)?;
    let beneficiary = info.sender.to_string();
    lock_deposit(
        deps,
        &env,
        &config,
        info.sender,
        beneficiary,
        &side_token_id,
        amount,
    )
}

/// `ApproveAndCall` path: the main token has just approved this bridge for
/// `approval.amount` on behalf of `approval.sender`.
pub fn execute_receive_approval(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    approval: ApprovalReceiveMsg,
) -> Result<Response, ContractError> {
    let config = ensure_not_paused(deps.storage)?;
    if info.sender != config.token {
        return Err(ContractError::NotMainToken);
    }
    let depositor = deps.api.addr_validate(&approval.sender)?;
    let beneficiary = depositor.to_string();
    lock_deposit(
        deps,
        &env,
        &config,
        depositor,
        beneficiary,
        &approval.data,
        approval.amount,
    )
}

pub fn execute_owner_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    beneficiary: String,
    side_token_id: Binary,
    amount: Uint128,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;
    let config = ensure_not_paused(deps.storage)?;
    lock_deposit(
        deps,
        &env,
        &config,
        info.sender,
        beneficiary,
        &side_token_id,
        amount,
    )
}

// ============================================================================
// Confirmation
// ============================================================================

/// Authority confirmation that a deposit was minted on the side chain.
///
/// Repeat and post-quorum confirmations succeed without changing anything.
pub fn execute_confirm_deposit(
    deps: DepsMut,
    info: MessageInfo,
    deposit_id: Binary,
) -> Result<Response, ContractError> {
    let side = ensure_authority(deps.storage, &info.sender)?;
    let id = parse_hash(&deposit_id)?;
    let mut deposit = DEPOSITS
        .may_load(deps.storage, &id)?
        .ok_or_else(|| ContractError::DepositNotFound {
            deposit_id: bytes32_to_hex(&id),
        })?;

    let vote = DEPOSIT_CONFIRMATIONS.record(
        deps.storage,
        &id,
        &info.sender,
        side.authorities.required_signatures,
    )?;

    let id_hex = bytes32_to_hex(&id);
    let mut response = Response::new()
        .add_attribute("action", "confirm_deposit")
        .add_attribute("deposit_id", &id_hex)
        .add_attribute("authority", info.sender.as_str())
        .add_attribute("vote", vote.as_str())
        .add_attribute("signed_count", vote.signed_count().to_string());

    match vote {
        Vote::Counted(_) => {
            deposit.status = DepositStatus::AwaitingConfirmation;
            DEPOSITS.save(deps.storage, &id, &deposit)?;
        }
        Vote::Reached(_) => {
            deposit.status = DepositStatus::Confirmed;
            DEPOSITS.save(deps.storage, &id, &deposit)?;
            response = response.add_event(
                Event::new("deposit_confirmed")
                    .add_attribute("deposit_id", &id_hex)
                    .add_attribute("beneficiary", &deposit.beneficiary)
                    .add_attribute("amount_mt", deposit.amount_mt)
                    .add_attribute("amount_st", deposit.amount_st),
            );
        }
        Vote::Duplicate(_) | Vote::AlreadyFinalized(_) => {}
    }

    Ok(response)
}
