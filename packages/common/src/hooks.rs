//! Callback messages sent from token contracts to the contracts they call into.
//!
//! Shaped after `cw20::Cw20ReceiveMsg`: the payload type is public, the
//! wrapping execute variant is private and applied by `into_cosmos_msg`.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Binary, CosmosMsg, StdResult, Uint128, WasmMsg};

/// Sent by a side token to its bridge after moving the caller's tokens.
///
/// The bridge identifies the side token by the message sender.
#[cw_serde]
pub enum SideTokenHookMsg {
    /// `amount` was moved from `owner` to the bridge for redemption on the main chain
    OnRedeem { owner: String, amount: Uint128 },
    /// `amount` was moved from `staker` to the bridge
    OnStake { staker: String, amount: Uint128 },
    /// `staker` asks for `amount` of stake back
    OnUnstake { staker: String, amount: Uint128 },
    /// `amount` was moved from `owner` to the bridge to fund a vesting grant
    OnVest {
        owner: String,
        amount: Uint128,
        cliff_in_days: u64,
        duration_in_days: u64,
        interval_in_days: u64,
    },
}

#[cw_serde]
enum SideBridgeHookExecuteMsg {
    TokenHook(SideTokenHookMsg),
}

impl SideTokenHookMsg {
    pub fn into_binary(self) -> StdResult<Binary> {
        to_json_binary(&SideBridgeHookExecuteMsg::TokenHook(self))
    }

    pub fn into_cosmos_msg<T: Into<String>>(self, bridge: T) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: bridge.into(),
            msg: self.into_binary()?,
            funds: vec![],
        }
        .into())
    }
}

/// Sent by `ApproveAndCall` to the spender right after the allowance is set.
#[cw_serde]
pub struct ApprovalReceiveMsg {
    /// Account that granted the allowance
    pub sender: String,
    pub amount: Uint128,
    /// Opaque payload chosen by the approver
    pub data: Binary,
}

#[cw_serde]
enum ApprovalReceiverExecuteMsg {
    ReceiveApproval(ApprovalReceiveMsg),
}

impl ApprovalReceiveMsg {
    pub fn into_binary(self) -> StdResult<Binary> {
        to_json_binary(&ApprovalReceiverExecuteMsg::ReceiveApproval(self))
    }

    pub fn into_cosmos_msg<T: Into<String>>(self, spender: T) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: spender.into(),
            msg: self.into_binary()?,
            funds: vec![],
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;

    #[cw_serde]
    enum BridgeMsg {
        TokenHook(SideTokenHookMsg),
    }

    #[cw_serde]
    enum SpenderMsg {
        ReceiveApproval(ApprovalReceiveMsg),
    }

    #[test]
    fn test_hook_is_wrapped_in_token_hook_variant() {
        let hook = SideTokenHookMsg::OnStake {
            staker: "alice".to_string(),
            amount: Uint128::new(5),
        };
        let parsed: BridgeMsg = from_json(hook.clone().into_binary().unwrap()).unwrap();
        assert_eq!(parsed, BridgeMsg::TokenHook(hook));
    }

    #[test]
    fn test_approval_is_wrapped_in_receive_approval_variant() {
        let approval = ApprovalReceiveMsg {
            sender: "alice".to_string(),
            amount: Uint128::new(7),
            data: Binary::from(b"payload".to_vec()),
        };
        let parsed: SpenderMsg = from_json(approval.clone().into_binary().unwrap()).unwrap();
        assert_eq!(parsed, SpenderMsg::ReceiveApproval(approval));
    }
}
