use cosmwasm_std::{Deps, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{GrantCountResponse, GrantsResponse, ReleaseAmountResponse};
use crate::state::{Grant, GRANTS, GRANTS_BY_RECIPIENT, GRANT_COUNT};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

fn load_grant(deps: Deps, grant_id: u64) -> StdResult<Grant> {
    GRANTS
        .may_load(deps.storage, grant_id)?
        .ok_or_else(|| StdError::not_found(format!("grant {}", grant_id)))
}

pub fn query_grant(deps: Deps, grant_id: u64) -> StdResult<Grant> {
    load_grant(deps, grant_id)
}

pub fn query_calculate_release_amount(
    deps: Deps,
    grant_id: u64,
    at_timestamp: u64,
) -> StdResult<ReleaseAmountResponse> {
    let grant = load_grant(deps, grant_id)?;
    let vested = grant.schedule.vested_at(at_timestamp);
    Ok(ReleaseAmountResponse {
        vested,
        releasable: vested.saturating_sub(grant.released),
    })
}

pub fn query_grants_by_recipient(
    deps: Deps,
    recipient: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<GrantsResponse> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let grants = GRANTS_BY_RECIPIENT
        .prefix(&recipient)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|id| load_grant(deps, id?))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(GrantsResponse { grants })
}

pub fn query_grant_count(deps: Deps) -> StdResult<GrantCountResponse> {
    Ok(GrantCountResponse {
        count: GRANT_COUNT.may_load(deps.storage)?.unwrap_or_default(),
    })
}
