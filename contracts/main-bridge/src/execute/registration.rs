//! Side bridge and side token registration.

use common::{bytes32_to_hex, hash, parse_hash, validate_descriptor, AuthoritySet, ConversionRate};
use cosmwasm_std::{Addr, Binary, DepsMut, Event, MessageInfo, Response, StdResult, Uint128};

use super::{ensure_not_paused, ensure_owner};
use crate::error::ContractError;
use crate::state::{SideBridgeConfig, SideTokenRecord, SIDE_BRIDGE, SIDE_TOKENS};

pub fn execute_register_side_bridge(
    deps: DepsMut,
    info: MessageInfo,
    side_bridge: String,
    required_signatures: u32,
    authorities: Vec<String>,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;
    ensure_not_paused(deps.storage)?;
    if SIDE_BRIDGE.exists(deps.storage) {
        return Err(ContractError::SideBridgeAlreadyRegistered);
    }

    let side_bridge = deps.api.addr_validate(&side_bridge)?;
    let authorities = authorities
        .iter()
        .map(|a| deps.api.addr_validate(a))
        .collect::<StdResult<Vec<Addr>>>()?;
    let authorities = AuthoritySet::new(authorities, required_signatures)?;

    SIDE_BRIDGE.save(
        deps.storage,
        &SideBridgeConfig {
            side_bridge: side_bridge.clone(),
            authorities: authorities.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "register_side_bridge")
        .add_attribute("side_bridge", side_bridge)
        .add_attribute("authorities", authorities.len().to_string())
        .add_attribute("required_signatures", required_signatures.to_string()))
}

#[allow(clippy::too_many_arguments)]
pub fn execute_register_side_token(
    deps: DepsMut,
    info: MessageInfo,
    side_chain_id: u64,
    name: String,
    symbol: String,
    conversion_rate: Uint128,
    conversion_rate_decimals: u8,
    side_token_id: Binary,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;
    validate_descriptor(&name, &symbol)?;
    let conversion = ConversionRate::new(conversion_rate, conversion_rate_decimals)?;

    let supplied = parse_hash(&side_token_id)?;
    let computed = hash::side_token_id(
        side_chain_id,
        &name,
        &symbol,
        conversion_rate,
        conversion_rate_decimals,
    );
    if computed != supplied {
        return Err(ContractError::SideTokenIdMismatch {
            computed: bytes32_to_hex(&computed),
            supplied: bytes32_to_hex(&supplied),
        });
    }
    if SIDE_TOKENS.has(deps.storage, &computed) {
        return Err(ContractError::SideTokenAlreadyRegistered {
            side_token_id: bytes32_to_hex(&computed),
        });
    }

    SIDE_TOKENS.save(
        deps.storage,
        &computed,
        &SideTokenRecord {
            side_token_id: Binary::from(computed.to_vec()),
            side_chain_id,
            name: name.clone(),
            symbol: symbol.clone(),
            conversion,
            deposit_count: 0,
        },
    )?;

    let id_hex = bytes32_to_hex(&computed);
    let event = Event::new("side_token_registered")
        .add_attribute("side_token_id", &id_hex)
        .add_attribute("side_chain_id", side_chain_id.to_string())
        .add_attribute("name", &name)
        .add_attribute("symbol", &symbol)
        .add_attribute("conversion_rate", conversion_rate)
        .add_attribute("conversion_rate_decimals", conversion_rate_decimals.to_string());

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "register_side_token")
        .add_attribute("side_token_id", id_hex))
}
