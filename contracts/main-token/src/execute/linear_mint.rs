//! Linear mint registration and scheduled minting.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};
use token_ledger::ledger;
use token_ledger::state::TOKEN_INFO;

use super::{ensure_not_paused, ensure_owner};
use crate::error::ContractError;
use crate::schedule::LinearMintSchedule;
use crate::state::LINEAR_MINT;

/// Register the one-shot schedule. Owner minting is disabled from here on.
pub fn execute_register_linear_mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    minting_supply: Uint128,
    amount_per_period: Uint128,
    period_length_in_days: u64,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;
    ensure_not_paused(deps.storage)?;
    if LINEAR_MINT.exists(deps.storage) {
        return Err(ContractError::LinearMintAlreadyRegistered);
    }
    if minting_supply.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "minting supply must be greater than zero".to_string(),
        });
    }
    if amount_per_period.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "amount per period must be greater than zero".to_string(),
        });
    }
    if period_length_in_days == 0 {
        return Err(ContractError::InvalidAmount {
            reason: "period length must be at least one day".to_string(),
        });
    }

    let token = TOKEN_INFO.load(deps.storage)?;
    if let Some(max_supply) = token.max_supply {
        let remaining = max_supply.saturating_sub(token.total_supply);
        if minting_supply > remaining {
            return Err(ContractError::LinearMintExceedsMaxSupply {
                minting_supply,
                remaining,
            });
        }
    }

    let schedule = LinearMintSchedule::new(
        minting_supply,
        amount_per_period,
        period_length_in_days,
        env.block.time.seconds(),
    );
    LINEAR_MINT.save(deps.storage, &schedule)?;

    Ok(Response::new()
        .add_attribute("action", "register_linear_mint")
        .add_attribute("minting_supply", minting_supply)
        .add_attribute("amount_per_period", amount_per_period)
        .add_attribute("period_length_in_days", period_length_in_days.to_string())
        .add_attribute("registered_at", schedule.registered_at.to_string()))
}

/// Mint everything released by the schedule and not yet minted, to the owner.
pub fn execute_linear_mint(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let config = ensure_not_paused(deps.storage)?;
    let mut schedule = LINEAR_MINT
        .may_load(deps.storage)?
        .ok_or(ContractError::LinearMintNotRegistered)?;
    if !schedule.minting_status {
        return Err(ContractError::LinearMintFinished);
    }

    let amount = schedule.due_at(env.block.time.seconds());
    if amount.is_zero() {
        return Err(ContractError::NothingToMint);
    }

    let events = ledger::mint(deps.storage, &config.owner, amount)?;
    schedule.record_mint(amount);
    LINEAR_MINT.save(deps.storage, &schedule)?;

    Ok(Response::new()
        .add_events(events)
        .add_attribute("action", "linear_mint")
        .add_attribute("minted_amount", amount)
        .add_attribute("minted_so_far", schedule.minted_so_far)
        .add_attribute("minting_status", schedule.minting_status.to_string()))
}
