//! Storage-level token operations.
//!
//! Each operation either applies fully or returns an error before writing,
//! and returns the events describing the balance change.

use cosmwasm_std::{Addr, Event, Int128, StdResult, Storage, Uint128};

use crate::error::LedgerError;
use crate::state::{BalancePolicy, TokenInfo, ALLOWANCES, BALANCES, TOKEN_INFO};

/// Counterparty recorded for mints and burns.
pub const NULL_ACCOUNT: &str = "null";

const MAX_NAME_LEN: usize = 64;
const MAX_SYMBOL_LEN: usize = 12;

// ============================================================================
// Setup
// ============================================================================

/// Store token metadata and credit `initial_supply` to `owner`.
pub fn initialize(
    storage: &mut dyn Storage,
    mut info: TokenInfo,
    owner: &Addr,
    initial_supply: Uint128,
) -> Result<Vec<Event>, LedgerError> {
    let name_len = info.name.chars().count();
    if name_len == 0 || name_len > MAX_NAME_LEN {
        return Err(LedgerError::InvalidTokenInfo {
            reason: format!("name must be 1-{} characters", MAX_NAME_LEN),
        });
    }
    let symbol_len = info.symbol.chars().count();
    if symbol_len == 0 || symbol_len > MAX_SYMBOL_LEN {
        return Err(LedgerError::InvalidTokenInfo {
            reason: format!("symbol must be 1-{} characters", MAX_SYMBOL_LEN),
        });
    }
    if let Some(max_supply) = info.max_supply {
        if initial_supply > max_supply {
            return Err(LedgerError::InitialSupplyExceedsMax {
                initial_supply,
                max_supply,
            });
        }
    }

    info.total_supply = Uint128::zero();
    TOKEN_INFO.save(storage, &info)?;

    if initial_supply.is_zero() {
        return Ok(vec![]);
    }
    mint(storage, owner, initial_supply)
}

// ============================================================================
// Balances
// ============================================================================

pub fn balance_of(storage: &dyn Storage, addr: &Addr) -> StdResult<Int128> {
    Ok(BALANCES
        .may_load(storage, addr)?
        .unwrap_or_else(Int128::zero))
}

fn signed(amount: Uint128) -> Result<i128, LedgerError> {
    i128::try_from(amount.u128()).map_err(|_| LedgerError::Overflow)
}

fn credit(storage: &mut dyn Storage, addr: &Addr, amount: Uint128) -> Result<(), LedgerError> {
    let balance = balance_of(storage, addr)?.i128();
    let updated = balance
        .checked_add(signed(amount)?)
        .ok_or(LedgerError::Overflow)?;
    BALANCES.save(storage, addr, &Int128::new(updated))?;
    Ok(())
}

/// Subtract `amount` from `addr`. With `allow_overdraft` the balance may go negative.
fn debit(
    storage: &mut dyn Storage,
    addr: &Addr,
    amount: Uint128,
    allow_overdraft: bool,
) -> Result<(), LedgerError> {
    let balance = balance_of(storage, addr)?;
    let required = signed(amount)?;
    if !allow_overdraft && balance.i128() < required {
        return Err(LedgerError::InsufficientFunds {
            balance,
            required: amount,
        });
    }
    let updated = balance
        .i128()
        .checked_sub(required)
        .ok_or(LedgerError::Overflow)?;
    BALANCES.save(storage, addr, &Int128::new(updated))?;
    Ok(())
}

fn ensure_nonzero(amount: Uint128) -> Result<(), LedgerError> {
    if amount.is_zero() {
        return Err(LedgerError::InvalidZeroAmount);
    }
    Ok(())
}

/// Move `amount` between holders. Requires funds under every policy.
pub fn transfer(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<Event, LedgerError> {
    ensure_nonzero(amount)?;
    debit(storage, from, amount, false)?;
    credit(storage, to, amount)?;
    Ok(transfer_event(from.as_str(), to.as_str(), amount))
}

/// Create `amount` for `to`, bounded by the max supply.
pub fn mint(storage: &mut dyn Storage, to: &Addr, amount: Uint128) -> Result<Vec<Event>, LedgerError> {
    ensure_nonzero(amount)?;
    let mut info = TOKEN_INFO.load(storage)?;
    let total_supply = info
        .total_supply
        .checked_add(amount)
        .map_err(|_| LedgerError::Overflow)?;
    if let Some(max_supply) = info.max_supply {
        if total_supply > max_supply {
            return Err(LedgerError::MaxSupplyExceeded { max_supply });
        }
    }
    info.total_supply = total_supply;
    TOKEN_INFO.save(storage, &info)?;
    credit(storage, to, amount)?;

    Ok(vec![
        transfer_event(NULL_ACCOUNT, to.as_str(), amount),
        Event::new("minted")
            .add_attribute("recipient", to.as_str())
            .add_attribute("amount", amount),
    ])
}

/// Destroy `amount` held by `from`.
///
/// Under `AllowNegative` the holder may be overdrawn; total supply never
/// goes below zero under either policy.
pub fn burn(storage: &mut dyn Storage, from: &Addr, amount: Uint128) -> Result<Vec<Event>, LedgerError> {
    ensure_nonzero(amount)?;
    let mut info = TOKEN_INFO.load(storage)?;
    let total_supply = info.total_supply;
    info.total_supply =
        total_supply
            .checked_sub(amount)
            .map_err(|_| LedgerError::BurnExceedsSupply {
                total_supply,
                amount,
            })?;
    debit(
        storage,
        from,
        amount,
        info.policy == BalancePolicy::AllowNegative,
    )?;
    TOKEN_INFO.save(storage, &info)?;

    Ok(vec![
        transfer_event(from.as_str(), NULL_ACCOUNT, amount),
        Event::new("burn")
            .add_attribute("from", from.as_str())
            .add_attribute("value", amount),
    ])
}

/// Forced move from `holder` back to `owner`.
pub fn recover(
    storage: &mut dyn Storage,
    holder: &Addr,
    owner: &Addr,
    amount: Uint128,
) -> Result<Vec<Event>, LedgerError> {
    ensure_nonzero(amount)?;
    let policy = TOKEN_INFO.load(storage)?.policy;
    debit(
        storage,
        holder,
        amount,
        policy == BalancePolicy::AllowNegative,
    )?;
    credit(storage, owner, amount)?;

    Ok(vec![
        transfer_event(holder.as_str(), owner.as_str(), amount),
        Event::new("recover")
            .add_attribute("from", holder.as_str())
            .add_attribute("to", owner.as_str())
            .add_attribute("value", amount),
    ])
}

// ============================================================================
// Allowances
// ============================================================================

pub fn allowance_of(storage: &dyn Storage, owner: &Addr, spender: &Addr) -> StdResult<Uint128> {
    Ok(ALLOWANCES
        .may_load(storage, (owner, spender))?
        .unwrap_or_default())
}

/// Set the allowance to exactly `amount`.
pub fn approve(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<Event, LedgerError> {
    ALLOWANCES.save(storage, (owner, spender), &amount)?;
    Ok(approval_event(owner, spender, amount))
}

pub fn increase_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<Event, LedgerError> {
    ensure_nonzero(amount)?;
    let allowance = allowance_of(storage, owner, spender)?
        .checked_add(amount)
        .map_err(|_| LedgerError::Overflow)?;
    approve(storage, owner, spender, allowance)
}

pub fn decrease_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<Event, LedgerError> {
    ensure_nonzero(amount)?;
    let allowance = allowance_of(storage, owner, spender)?.saturating_sub(amount);
    approve(storage, owner, spender, allowance)
}

/// Deduct `amount` from the spender's allowance over `owner`.
pub fn spend_allowance(
    storage: &mut dyn Storage,
    owner: &Addr,
    spender: &Addr,
    amount: Uint128,
) -> Result<(), LedgerError> {
    let allowance = allowance_of(storage, owner, spender)?;
    if allowance < amount {
        return Err(LedgerError::InsufficientAllowance {
            allowance,
            required: amount,
        });
    }
    ALLOWANCES.save(storage, (owner, spender), &(allowance - amount))?;
    Ok(())
}

// ============================================================================
// Events
// ============================================================================

pub fn transfer_event(from: &str, to: &str, amount: Uint128) -> Event {
    Event::new("transfer")
        .add_attribute("from", from)
        .add_attribute("to", to)
        .add_attribute("value", amount)
}

fn approval_event(owner: &Addr, spender: &Addr, amount: Uint128) -> Event {
    Event::new("approval")
        .add_attribute("owner", owner.as_str())
        .add_attribute("spender", spender.as_str())
        .add_attribute("value", amount)
}
