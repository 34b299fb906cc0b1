//! Integration tests for the side token contract
//!
//! A recording bridge stands in for the side bridge so hook delivery can be
//! observed without the full bridge.

use common::SideTokenHookMsg;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult,
    Uint128, WasmMsg,
};
use cw20::TokenInfoResponse;
use cw_multi_test::{App, ContractWrapper, Executor};
use cw_storage_plus::Item;

use side_token::contract::{execute, instantiate, query};
use side_token::msg::{BridgeResponse, ExecuteMsg, InstantiateMsg, QueryMsg};
use token_ledger::msg::BalanceResponse;

// ============================================================================
// Recording bridge
// ============================================================================

const HOOKS: Item<Vec<SideTokenHookMsg>> = Item::new("hooks");

#[cosmwasm_schema::cw_serde]
enum BridgeExecuteMsg {
    TokenHook(SideTokenHookMsg),
    MintTo { token: String, recipient: String, amount: Uint128 },
}

#[cosmwasm_schema::cw_serde]
enum BridgeQueryMsg {
    Hooks {},
}

fn bridge_execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: BridgeExecuteMsg,
) -> StdResult<Response> {
    match msg {
        BridgeExecuteMsg::TokenHook(hook) => {
            let mut hooks = HOOKS.may_load(deps.storage)?.unwrap_or_default();
            hooks.push(hook.clone());
            HOOKS.save(deps.storage, &hooks)?;

            // return unstaked tokens straight away
            if let SideTokenHookMsg::OnUnstake { staker, amount } = hook {
                return Ok(Response::new().add_message(WasmMsg::Execute {
                    contract_addr: info.sender.to_string(),
                    msg: to_json_binary(&ExecuteMsg::Transfer {
                        recipient: staker,
                        amount,
                    })?,
                    funds: vec![],
                }));
            }
            Ok(Response::new())
        }
        BridgeExecuteMsg::MintTo {
            token,
            recipient,
            amount,
        } => Ok(Response::new().add_message(WasmMsg::Execute {
            contract_addr: token,
            msg: to_json_binary(&ExecuteMsg::Mint { recipient, amount })?,
            funds: vec![],
        })),
    }
}

fn bridge_instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::new())
}

fn bridge_query(deps: Deps, _env: Env, msg: BridgeQueryMsg) -> StdResult<Binary> {
    match msg {
        BridgeQueryMsg::Hooks {} => {
            to_json_binary(&HOOKS.may_load(deps.storage)?.unwrap_or_default())
        }
    }
}

// ============================================================================
// Test Setup
// ============================================================================

struct TestEnv {
    app: App,
    token: Addr,
    bridge: Addr,
    owner: Addr,
    alice: Addr,
    bob: Addr,
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");

    let bridge_code = app.store_code(Box::new(ContractWrapper::new(
        bridge_execute,
        bridge_instantiate,
        bridge_query,
    )));
    let bridge = app
        .instantiate_contract(bridge_code, owner.clone(), &Empty {}, &[], "bridge", None)
        .unwrap();

    let token_code = app.store_code(Box::new(ContractWrapper::new(execute, instantiate, query)));
    let token = app
        .instantiate_contract(
            token_code,
            owner.clone(),
            &InstantiateMsg {
                name: "Side Token".to_string(),
                symbol: "STK".to_string(),
                decimals: 18,
                side_bridge: bridge.to_string(),
            },
            &[],
            "side-token",
            None,
        )
        .unwrap();

    let mut env = TestEnv {
        app,
        token,
        bridge,
        owner,
        alice: Addr::unchecked("terra1alice"),
        bob: Addr::unchecked("terra1bob"),
    };
    let alice = env.alice.clone();
    mint(&mut env, &alice, 1_000);
    env
}

fn mint(env: &mut TestEnv, to: &Addr, amount: u128) {
    env.app
        .execute_contract(
            env.owner.clone(),
            env.bridge.clone(),
            &BridgeExecuteMsg::MintTo {
                token: env.token.to_string(),
                recipient: to.to_string(),
                amount: Uint128::new(amount),
            },
            &[],
        )
        .unwrap();
}

fn balance(env: &TestEnv, address: &Addr) -> i128 {
    let res: BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.token,
            &QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance.i128()
}

fn hooks(env: &TestEnv) -> Vec<SideTokenHookMsg> {
    env.app
        .wrap()
        .query_wasm_smart(&env.bridge, &BridgeQueryMsg::Hooks {})
        .unwrap()
}

// ============================================================================
// Minting
// ============================================================================

#[test]
fn test_supply_starts_at_zero_and_bridge_mints() {
    let env = setup();
    let info: TokenInfoResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.token, &QueryMsg::TokenInfo {})
        .unwrap();
    assert_eq!(info.total_supply, Uint128::new(1_000));
    assert_eq!(balance(&env, &env.alice), 1_000);

    let bridge: BridgeResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.token, &QueryMsg::Bridge {})
        .unwrap();
    assert_eq!(bridge.side_bridge, env.bridge);
    assert_eq!(bridge.owner, env.owner);
}

#[test]
fn test_mint_by_non_bridge_fails() {
    let mut env = setup();
    for sender in [env.owner.clone(), env.alice.clone()] {
        let res = env.app.execute_contract(
            sender,
            env.token.clone(),
            &ExecuteMsg::Mint {
                recipient: env.bob.to_string(),
                amount: Uint128::new(1),
            },
            &[],
        );
        assert!(res
            .unwrap_err()
            .root_cause()
            .to_string()
            .contains("only the side bridge can mint"));
    }
}

#[test]
fn test_instantiate_with_invalid_bridge_fails() {
    let mut app = App::default();
    let code_id = app.store_code(Box::new(ContractWrapper::new(execute, instantiate, query)));
    let res = app.instantiate_contract(
        code_id,
        Addr::unchecked("terra1owner"),
        &InstantiateMsg {
            name: "Side Token".to_string(),
            symbol: "STK".to_string(),
            decimals: 18,
            side_bridge: "".to_string(),
        },
        &[],
        "side-token",
        None,
    );
    assert!(res.is_err());
}

// ============================================================================
// Transfer With Fee
// ============================================================================

#[test]
fn test_transfer_with_fee_pays_both_legs() {
    let mut env = setup();
    let collector = Addr::unchecked("terra1collector");

    let res = env
        .app
        .execute_contract(
            env.alice.clone(),
            env.token.clone(),
            &ExecuteMsg::TransferWithFee {
                recipient: env.bob.to_string(),
                amount: Uint128::new(100),
                fee_collector: collector.to_string(),
                fee: Uint128::new(5),
            },
            &[],
        )
        .unwrap();

    assert_eq!(balance(&env, &env.alice), 895);
    assert_eq!(balance(&env, &env.bob), 100);
    assert_eq!(balance(&env, &collector), 5);

    let record = res
        .events
        .iter()
        .find(|e| e.ty == "wasm-transferred_with_fee")
        .expect("transferred_with_fee event");
    let fee = record.attributes.iter().find(|a| a.key == "fee").unwrap();
    assert_eq!(fee.value, "5");
    let transfers = res
        .events
        .iter()
        .filter(|e| e.ty == "wasm-transfer")
        .count();
    assert_eq!(transfers, 2);
}

#[test]
fn test_transfer_with_fee_requires_amount_plus_fee() {
    let mut env = setup();

    let res = env.app.execute_contract(
        env.alice.clone(),
        env.token.clone(),
        &ExecuteMsg::TransferWithFee {
            recipient: env.bob.to_string(),
            amount: Uint128::new(996),
            fee_collector: "terra1collector".to_string(),
            fee: Uint128::new(5),
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Insufficient funds for transfer with fee"));
    assert_eq!(balance(&env, &env.alice), 1_000);
}

#[test]
fn test_transfer_with_zero_fee() {
    let mut env = setup();
    env.app
        .execute_contract(
            env.alice.clone(),
            env.token.clone(),
            &ExecuteMsg::TransferWithFee {
                recipient: env.bob.to_string(),
                amount: Uint128::new(1_000),
                fee_collector: "terra1collector".to_string(),
                fee: Uint128::zero(),
            },
            &[],
        )
        .unwrap();
    assert_eq!(balance(&env, &env.bob), 1_000);
}

// ============================================================================
// Bridge Hooks
// ============================================================================

#[test]
fn test_redeem_moves_tokens_and_notifies_bridge() {
    let mut env = setup();
    env.app
        .execute_contract(
            env.alice.clone(),
            env.token.clone(),
            &ExecuteMsg::Redeem {
                amount: Uint128::new(400),
            },
            &[],
        )
        .unwrap();

    assert_eq!(balance(&env, &env.alice), 600);
    assert_eq!(balance(&env, &env.bridge), 400);
    assert_eq!(
        hooks(&env),
        vec![SideTokenHookMsg::OnRedeem {
            owner: env.alice.to_string(),
            amount: Uint128::new(400),
        }]
    );
}

#[test]
fn test_redeem_more_than_balance_fails_without_hook() {
    let mut env = setup();
    let res = env.app.execute_contract(
        env.alice.clone(),
        env.token.clone(),
        &ExecuteMsg::Redeem {
            amount: Uint128::new(1_001),
        },
        &[],
    );
    assert!(res.is_err());
    assert!(hooks(&env).is_empty());
}

#[test]
fn test_stake_then_unstake_round_trip() {
    let mut env = setup();
    env.app
        .execute_contract(
            env.alice.clone(),
            env.token.clone(),
            &ExecuteMsg::Stake {
                amount: Uint128::new(300),
            },
            &[],
        )
        .unwrap();
    assert_eq!(balance(&env, &env.alice), 700);

    env.app
        .execute_contract(
            env.alice.clone(),
            env.token.clone(),
            &ExecuteMsg::Unstake {
                amount: Uint128::new(300),
            },
            &[],
        )
        .unwrap();
    assert_eq!(balance(&env, &env.alice), 1_000);
    assert_eq!(balance(&env, &env.bridge), 0);

    let recorded = hooks(&env);
    assert_eq!(recorded.len(), 2);
    assert_eq!(
        recorded[1],
        SideTokenHookMsg::OnUnstake {
            staker: env.alice.to_string(),
            amount: Uint128::new(300),
        }
    );
}

#[test]
fn test_vest_forwards_schedule() {
    let mut env = setup();
    env.app
        .execute_contract(
            env.alice.clone(),
            env.token.clone(),
            &ExecuteMsg::Vest {
                amount: Uint128::new(120),
                cliff_in_days: 30,
                duration_in_days: 360,
                interval_in_days: 30,
            },
            &[],
        )
        .unwrap();

    assert_eq!(balance(&env, &env.bridge), 120);
    assert_eq!(
        hooks(&env),
        vec![SideTokenHookMsg::OnVest {
            owner: env.alice.to_string(),
            amount: Uint128::new(120),
            cliff_in_days: 30,
            duration_in_days: 360,
            interval_in_days: 30,
        }]
    );
}

// ============================================================================
// Ownership
// ============================================================================

#[test]
fn test_transfer_ownership_owner_only() {
    let mut env = setup();
    let res = env.app.execute_contract(
        env.alice.clone(),
        env.token.clone(),
        &ExecuteMsg::TransferOwnership {
            new_owner: env.alice.to_string(),
        },
        &[],
    );
    assert!(res.is_err());

    env.app
        .execute_contract(
            env.owner.clone(),
            env.token.clone(),
            &ExecuteMsg::TransferOwnership {
                new_owner: env.bob.to_string(),
            },
            &[],
        )
        .unwrap();
    let bridge: BridgeResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.token, &QueryMsg::Bridge {})
        .unwrap();
    assert_eq!(bridge.owner, env.bob);
}
