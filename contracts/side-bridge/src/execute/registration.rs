//! Side token registration and acknowledgement.

use common::{bytes32_to_hex, hash, parse_hash, validate_descriptor, ConversionRate};
use cosmwasm_std::{Binary, DepsMut, Event, MessageInfo, Response, Uint128};
use cw20::{Cw20QueryMsg, TokenInfoResponse};

use super::{ensure_owner, load_side_token};
use crate::error::ContractError;
use crate::state::{SideTokenRecord, CONFIG, OPERATORS, SIDE_TOKENS, SIDE_TOKEN_IDS};

/// Register `side_token` under the id both bridges derive from its
/// descriptor. Name and symbol come from the token itself.
pub fn execute_register_side_token(
    deps: DepsMut,
    info: MessageInfo,
    side_token_id: Binary,
    side_token: String,
    conversion_rate: Uint128,
    conversion_rate_decimals: u8,
) -> Result<Response, ContractError> {
    let config = ensure_owner(deps.storage, &info.sender)?;
    let side_token = deps.api.addr_validate(&side_token)?;
    if SIDE_TOKEN_IDS.has(deps.storage, &side_token) {
        return Err(ContractError::SideTokenContractRegistered {
            address: side_token.to_string(),
        });
    }

    let token_info: TokenInfoResponse = deps
        .querier
        .query_wasm_smart(side_token.as_str(), &Cw20QueryMsg::TokenInfo {})?;
    validate_descriptor(&token_info.name, &token_info.symbol)?;
    let conversion = ConversionRate::new(conversion_rate, conversion_rate_decimals)?;

    let supplied = parse_hash(&side_token_id)?;
    let computed = hash::side_token_id(
        config.side_chain_id,
        &token_info.name,
        &token_info.symbol,
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

    let id = Binary::from(computed.to_vec());
    SIDE_TOKENS.save(
        deps.storage,
        &computed,
        &SideTokenRecord {
            side_token_id: id.clone(),
            side_token: side_token.clone(),
            name: token_info.name.clone(),
            symbol: token_info.symbol.clone(),
            conversion,
            acknowledged: false,
            redeem_count: 0,
        },
    )?;
    SIDE_TOKEN_IDS.save(deps.storage, &side_token, &id)?;

    let id_hex = bytes32_to_hex(&computed);
    Ok(Response::new()
        .add_event(
            Event::new("side_token_registered")
                .add_attribute("side_token_id", &id_hex)
                .add_attribute("side_token", side_token.as_str())
                .add_attribute("name", &token_info.name)
                .add_attribute("symbol", &token_info.symbol)
                .add_attribute("conversion_rate", conversion_rate)
                .add_attribute("conversion_rate_decimals", conversion_rate_decimals.to_string()),
        )
        .add_attribute("action", "register_side_token")
        .add_attribute("side_token_id", id_hex))
}

pub fn execute_acknowledge_side_token(
    deps: DepsMut,
    info: MessageInfo,
    side_token_id: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner && !OPERATORS.has(deps.storage, &info.sender) {
        return Err(ContractError::UnauthorizedOperator);
    }

    let id = parse_hash(&side_token_id)?;
    let mut record = load_side_token(deps.storage, &id)?;
    if record.acknowledged {
        return Err(ContractError::SideTokenAlreadyAcknowledged {
            side_token_id: bytes32_to_hex(&id),
        });
    }
    record.acknowledged = true;
    SIDE_TOKENS.save(deps.storage, &id, &record)?;

    Ok(Response::new()
        .add_event(
            Event::new("side_token_acknowledged")
                .add_attribute("side_token_id", bytes32_to_hex(&id))
                .add_attribute("side_token", record.side_token.as_str()),
        )
        .add_attribute("action", "acknowledge_side_token")
        .add_attribute("by", info.sender))
}
