//! Integration tests for the side bridge with a live side token and vesting contract

use common::{hash, parse_hash, AuthoritySet};
use cosmwasm_std::{Addr, Binary, Empty, Uint128};
use cw20::TokenInfoResponse;
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use side_bridge::msg::{
    ConfigResponse, DepositResponse, ExecuteMsg, InstantiateMsg, OperatorsResponse, QueryMsg,
    RedeemResponse, StakedAmountResponse, VestCountResponse,
};
use side_bridge::state::{RedeemStatus, SideTokenRecord, VestInfo};
use token_ledger::msg::BalanceResponse;

const MAIN_CHAIN_ID: u64 = 1;
const SIDE_CHAIN_ID: u64 = 2;
const DAY: u64 = 86_400;

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        side_bridge::contract::execute,
        side_bridge::contract::instantiate,
        side_bridge::contract::query,
    ))
}

fn contract_side_token() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        side_token::contract::execute,
        side_token::contract::instantiate,
        side_token::contract::query,
    ))
}

fn contract_vesting() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        token_vesting::contract::execute,
        token_vesting::contract::instantiate,
        token_vesting::contract::query,
    ))
}

struct TestEnv {
    app: App,
    bridge: Addr,
    token: Addr,
    vesting: Addr,
    owner: Addr,
    alice: Addr,
    authorities: Vec<Addr>,
    side_token_id: Binary,
}

fn authority_strings(authorities: &[Addr]) -> Vec<String> {
    authorities.iter().map(|a| a.to_string()).collect()
}

fn bridge_instantiate_msg(
    authorities: Vec<String>,
    required_signatures: u32,
    vesting: Option<&Addr>,
) -> InstantiateMsg {
    InstantiateMsg {
        main_chain_id: MAIN_CHAIN_ID,
        main_bridge: "terra1mainbridge".to_string(),
        side_chain_id: SIDE_CHAIN_ID,
        required_signatures,
        authorities,
        vesting_contract: vesting.map(|v| v.to_string()),
    }
}

/// Bridge with a registered but unacknowledged side token.
fn setup_unacknowledged() -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let authorities = vec![
        Addr::unchecked("terra1auth1"),
        Addr::unchecked("terra1auth2"),
        Addr::unchecked("terra1auth3"),
    ];

    let vesting_code = app.store_code(contract_vesting());
    let vesting = app
        .instantiate_contract(
            vesting_code,
            owner.clone(),
            &token_vesting::msg::InstantiateMsg {},
            &[],
            "vesting",
            None,
        )
        .unwrap();

    let bridge_code = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code,
            owner.clone(),
            &bridge_instantiate_msg(authority_strings(&authorities), 2, Some(&vesting)),
            &[],
            "side-bridge",
            None,
        )
        .unwrap();

    let token_code = app.store_code(contract_side_token());
    let token = app
        .instantiate_contract(
            token_code,
            owner.clone(),
            &side_token::msg::InstantiateMsg {
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

    let side_token_id = Binary::from(
        hash::side_token_id(SIDE_CHAIN_ID, "Side Token", "STK", Uint128::new(3), 0).to_vec(),
    );
    app.execute_contract(
        owner.clone(),
        bridge.clone(),
        &ExecuteMsg::RegisterSideToken {
            side_token_id: side_token_id.clone(),
            side_token: token.to_string(),
            conversion_rate: Uint128::new(3),
            conversion_rate_decimals: 0,
        },
        &[],
    )
    .unwrap();

    TestEnv {
        app,
        bridge,
        token,
        vesting,
        owner,
        alice: Addr::unchecked("terra1alice"),
        authorities,
        side_token_id,
    }
}

fn setup() -> TestEnv {
    let mut env = setup_unacknowledged();
    env.app
        .execute_contract(
            env.owner.clone(),
            env.bridge.clone(),
            &ExecuteMsg::AcknowledgeSideToken {
                side_token_id: env.side_token_id.clone(),
            },
            &[],
        )
        .unwrap();
    env
}

/// Fields of a main-chain deposit of `amount_mt` to alice at rate 3.
fn deposit_msg(env: &TestEnv, count: u64, amount_mt: u128) -> ExecuteMsg {
    let token_id = parse_hash(&env.side_token_id).unwrap();
    let amount_st = Uint128::new(amount_mt * 3);
    let deposit_id = hash::deposit_id(
        MAIN_CHAIN_ID,
        &token_id,
        count,
        env.alice.as_str(),
        Uint128::new(amount_mt),
        amount_st,
    );
    ExecuteMsg::Deposit {
        side_token_id: env.side_token_id.clone(),
        deposit_id: Binary::from(deposit_id.to_vec()),
        deposit_count: count,
        beneficiary: env.alice.to_string(),
        amount_mt: Uint128::new(amount_mt),
        amount_st,
        source_tx_hash: Binary::from(vec![count as u8; 32]),
    }
}

fn sign(env: &mut TestEnv, signer: usize, msg: &ExecuteMsg) -> anyhow::Result<AppResponse> {
    env.app
        .execute_contract(env.authorities[signer].clone(), env.bridge.clone(), msg, &[])
}

/// Mint `amount_mt * 3` side tokens to alice through a full quorum.
fn fund_alice(env: &mut TestEnv, count: u64, amount_mt: u128) {
    let msg = deposit_msg(env, count, amount_mt);
    sign(env, 0, &msg).unwrap();
    sign(env, 1, &msg).unwrap();
}

fn token_exec(
    env: &mut TestEnv,
    sender: &Addr,
    msg: &side_token::msg::ExecuteMsg,
) -> anyhow::Result<AppResponse> {
    env.app
        .execute_contract(sender.clone(), env.token.clone(), msg, &[])
}

fn balance(env: &TestEnv, address: &Addr) -> i128 {
    let res: BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.token,
            &side_token::msg::QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
    res.balance.i128()
}

fn total_supply(env: &TestEnv) -> Uint128 {
    let info: TokenInfoResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.token, &side_token::msg::QueryMsg::TokenInfo {})
        .unwrap();
    info.total_supply
}

fn config(env: &TestEnv) -> ConfigResponse {
    env.app
        .wrap()
        .query_wasm_smart(&env.bridge, &QueryMsg::Config {})
        .unwrap()
}

fn event_attr(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .find(|e| e.ty == ty)
        .and_then(|e| e.attributes.iter().find(|a| a.key == key))
        .map(|a| a.value.clone())
}

fn has_event(res: &AppResponse, ty: &str) -> bool {
    res.events.iter().any(|e| e.ty == ty)
}

fn err_text(res: anyhow::Result<AppResponse>) -> String {
    res.unwrap_err().root_cause().to_string()
}

fn redeem(env: &mut TestEnv, amount: u128) -> anyhow::Result<AppResponse> {
    let alice = env.alice.clone();
    token_exec(
        env,
        &alice,
        &side_token::msg::ExecuteMsg::Redeem {
            amount: Uint128::new(amount),
        },
    )
}

fn redeem_id_from(res: &AppResponse) -> Binary {
    let hex_id = event_attr(res, "wasm-side_token_redeemed", "redeem_id").unwrap();
    Binary::from(hex::decode(hex_id.trim_start_matches("0x")).unwrap())
}

// ============================================================================
// Instantiate
// ============================================================================

#[test]
fn test_instantiate() {
    let env = setup();
    let cfg = config(&env);
    assert_eq!(cfg.owner, env.owner);
    assert_eq!(cfg.main_chain_id, MAIN_CHAIN_ID);
    assert_eq!(cfg.side_chain_id, SIDE_CHAIN_ID);
    assert_eq!(cfg.main_bridge, "terra1mainbridge");
    assert_eq!(cfg.vesting_contract, Some(env.vesting.clone()));
    assert!(!cfg.paused);

    let set: AuthoritySet = env
        .app
        .wrap()
        .query_wasm_smart(&env.bridge, &QueryMsg::Authorities {})
        .unwrap();
    assert_eq!(set.authorities, env.authorities);
    assert_eq!(set.required_signatures, 2);
}

#[test]
fn test_instantiate_rejects_invalid_authority_sets() {
    let mut app = App::default();
    let code_id = app.store_code(contract_bridge());
    let three: Vec<String> = vec!["terra1a".into(), "terra1b".into(), "terra1c".into()];
    let too_many: Vec<String> = (0..256).map(|i| format!("terra1auth{}", i)).collect();

    let cases = vec![
        (three.clone(), 1, "not a majority"),
        (three.clone(), 3, "leaves no spare authority"),
        (three, 0, "greater than zero"),
        (too_many, 200, "at most 255"),
    ];
    for (authorities, required, expected) in cases {
        let res = app.instantiate_contract(
            code_id,
            Addr::unchecked("terra1owner"),
            &bridge_instantiate_msg(authorities, required, None),
            &[],
            "side-bridge",
            None,
        );
        let err = res.unwrap_err().root_cause().to_string();
        assert!(err.contains(expected), "expected {}, got: {}", expected, err);
    }
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_register_side_token_reads_descriptor() {
    let env = setup_unacknowledged();
    let record: SideTokenRecord = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.bridge,
            &QueryMsg::SideToken {
                side_token_id: env.side_token_id.clone(),
            },
        )
        .unwrap();
    assert_eq!(record.side_token, env.token);
    assert_eq!(record.name, "Side Token");
    assert_eq!(record.symbol, "STK");
    assert!(!record.acknowledged);
}

#[test]
fn test_register_side_token_rejects_wrong_id_and_duplicates() {
    let mut env = setup_unacknowledged();

    // token contract already registered under its own id
    let wrong = Binary::from(
        hash::side_token_id(MAIN_CHAIN_ID, "Side Token", "STK", Uint128::new(3), 0).to_vec(),
    );
    let res = env.app.execute_contract(
        env.owner.clone(),
        env.bridge.clone(),
        &ExecuteMsg::RegisterSideToken {
            side_token_id: wrong,
            side_token: env.token.to_string(),
            conversion_rate: Uint128::new(3),
            conversion_rate_decimals: 0,
        },
        &[],
    );
    assert!(err_text(res).contains("already registered"));

    let res = env.app.execute_contract(
        env.alice.clone(),
        env.bridge.clone(),
        &ExecuteMsg::RegisterSideToken {
            side_token_id: env.side_token_id.clone(),
            side_token: env.token.to_string(),
            conversion_rate: Uint128::new(3),
            conversion_rate_decimals: 0,
        },
        &[],
    );
    assert!(err_text(res).contains("only owner"));
}

#[test]
fn test_register_side_token_id_mismatch() {
    let mut env = setup_unacknowledged();
    let token_code = env.app.store_code(contract_side_token());
    let other = env
        .app
        .instantiate_contract(
            token_code,
            env.owner.clone(),
            &side_token::msg::InstantiateMsg {
                name: "Other Token".to_string(),
                symbol: "OTK".to_string(),
                decimals: 18,
                side_bridge: env.bridge.to_string(),
            },
            &[],
            "other-token",
            None,
        )
        .unwrap();

    let res = env.app.execute_contract(
        env.owner.clone(),
        env.bridge.clone(),
        &ExecuteMsg::RegisterSideToken {
            side_token_id: env.side_token_id.clone(),
            side_token: other.to_string(),
            conversion_rate: Uint128::new(3),
            conversion_rate_decimals: 0,
        },
        &[],
    );
    let err = err_text(res);
    assert!(err.contains("Side token id mismatch"), "got: {}", err);
}

#[test]
fn test_acknowledge_by_operator() {
    let mut env = setup_unacknowledged();
    let operator = Addr::unchecked("terra1operator");

    let ack = ExecuteMsg::AcknowledgeSideToken {
        side_token_id: env.side_token_id.clone(),
    };
    let res = env
        .app
        .execute_contract(operator.clone(), env.bridge.clone(), &ack, &[]);
    assert!(err_text(res).contains("owner or an operator"));

    env.app
        .execute_contract(
            env.owner.clone(),
            env.bridge.clone(),
            &ExecuteMsg::AddOperator {
                operator: operator.to_string(),
            },
            &[],
        )
        .unwrap();
    let ops: OperatorsResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.bridge, &QueryMsg::Operators {})
        .unwrap();
    assert_eq!(ops.operators, vec![operator.clone()]);

    let res = env
        .app
        .execute_contract(operator.clone(), env.bridge.clone(), &ack, &[])
        .unwrap();
    assert!(has_event(&res, "wasm-side_token_acknowledged"));

    let res = env
        .app
        .execute_contract(operator.clone(), env.bridge.clone(), &ack, &[]);
    assert!(err_text(res).contains("already acknowledged"));

    env.app
        .execute_contract(
            env.owner.clone(),
            env.bridge.clone(),
            &ExecuteMsg::RemoveOperator {
                operator: operator.to_string(),
            },
            &[],
        )
        .unwrap();
    let ops: OperatorsResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.bridge, &QueryMsg::Operators {})
        .unwrap();
    assert!(ops.operators.is_empty());
}

// ============================================================================
// Deposits
// ============================================================================

#[test]
fn test_deposit_against_unacknowledged_token_fails() {
    let mut env = setup_unacknowledged();
    let msg = deposit_msg(&env, 1, 10);
    let err = err_text(sign(&mut env, 0, &msg));
    assert!(err.contains("not acknowledged"), "got: {}", err);
}

#[test]
fn test_deposit_mints_at_threshold_once() {
    let mut env = setup();
    let msg = deposit_msg(&env, 1, 100);

    let res = sign(&mut env, 0, &msg).unwrap();
    assert!(!has_event(&res, "wasm-side_token_minted"));
    assert_eq!(balance(&env, &env.alice), 0);

    // same authority again
    sign(&mut env, 0, &msg).unwrap();
    assert_eq!(balance(&env, &env.alice), 0);

    let res = sign(&mut env, 1, &msg).unwrap();
    assert_eq!(
        event_attr(&res, "wasm-side_token_minted", "amount_st").as_deref(),
        Some("300")
    );
    assert_eq!(balance(&env, &env.alice), 300);
    assert_eq!(total_supply(&env), Uint128::new(300));

    let res = sign(&mut env, 2, &msg).unwrap();
    assert!(!has_event(&res, "wasm-side_token_minted"));
    assert_eq!(balance(&env, &env.alice), 300);

    let ExecuteMsg::Deposit { deposit_id, .. } = msg else {
        unreachable!()
    };
    let status: DepositResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.bridge, &QueryMsg::Deposit { deposit_id })
        .unwrap();
    assert!(status.minted);
    assert_eq!(status.signed_count, 2);
    assert_eq!(status.deposit.unwrap().amount_st, Uint128::new(300));
}

#[test]
fn test_deposit_rejects_tampered_payload() {
    let mut env = setup();

    let ExecuteMsg::Deposit {
        side_token_id,
        deposit_id,
        deposit_count,
        beneficiary,
        amount_mt,
        amount_st,
        source_tx_hash,
    } = deposit_msg(&env, 1, 100)
    else {
        unreachable!()
    };

    // inflated side amount
    let inflated = ExecuteMsg::Deposit {
        side_token_id: side_token_id.clone(),
        deposit_id: deposit_id.clone(),
        deposit_count,
        beneficiary: beneficiary.clone(),
        amount_mt,
        amount_st: amount_st + Uint128::new(1),
        source_tx_hash: source_tx_hash.clone(),
    };
    let err = err_text(sign(&mut env, 0, &inflated));
    assert!(err.contains("Side amount mismatch"), "got: {}", err);

    // id that does not commit to the payload
    let wrong_id = ExecuteMsg::Deposit {
        side_token_id: side_token_id.clone(),
        deposit_id: Binary::from(vec![5u8; 32]),
        deposit_count,
        beneficiary: beneficiary.clone(),
        amount_mt,
        amount_st,
        source_tx_hash: source_tx_hash.clone(),
    };
    let err = err_text(sign(&mut env, 0, &wrong_id));
    assert!(err.contains("Deposit id mismatch"), "got: {}", err);

    // second signer disagrees on the source transaction
    let first = ExecuteMsg::Deposit {
        side_token_id: side_token_id.clone(),
        deposit_id: deposit_id.clone(),
        deposit_count,
        beneficiary: beneficiary.clone(),
        amount_mt,
        amount_st,
        source_tx_hash,
    };
    sign(&mut env, 0, &first).unwrap();
    let diverging = ExecuteMsg::Deposit {
        side_token_id,
        deposit_id,
        deposit_count,
        beneficiary,
        amount_mt,
        amount_st,
        source_tx_hash: Binary::from(vec![0xee; 32]),
    };
    let err = err_text(sign(&mut env, 1, &diverging));
    assert!(err.contains("does not match the first signature"), "got: {}", err);
}

#[test]
fn test_deposit_to_foreign_address_rejected() {
    let mut env = setup();
    let token_id = parse_hash(&env.side_token_id).unwrap();
    // ids commit to the beneficiary as written on the main chain
    let beneficiary = "Terra1NotLocal";
    let amount_mt = Uint128::new(100);
    let amount_st = Uint128::new(300);
    let deposit_id =
        hash::deposit_id(MAIN_CHAIN_ID, &token_id, 1, beneficiary, amount_mt, amount_st);
    let msg = ExecuteMsg::Deposit {
        side_token_id: env.side_token_id.clone(),
        deposit_id: Binary::from(deposit_id.to_vec()),
        deposit_count: 1,
        beneficiary: beneficiary.to_string(),
        amount_mt,
        amount_st,
        source_tx_hash: Binary::from(vec![1u8; 32]),
    };

    assert!(sign(&mut env, 0, &msg).is_err());

    let status: DepositResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.bridge,
            &QueryMsg::Deposit {
                deposit_id: Binary::from(deposit_id.to_vec()),
            },
        )
        .unwrap();
    assert!(status.deposit.is_none());
    assert_eq!(status.signed_count, 0);
}

#[test]
fn test_deposit_requires_authority() {
    let mut env = setup();
    let msg = deposit_msg(&env, 1, 100);
    let res = env
        .app
        .execute_contract(env.alice.clone(), env.bridge.clone(), &msg, &[]);
    assert!(err_text(res).contains("not an authority"));
}

// ============================================================================
// Redeems
// ============================================================================

#[test]
fn test_redeem_records_request() {
    let mut env = setup();
    fund_alice(&mut env, 1, 100);

    let res = redeem(&mut env, 30).unwrap();
    assert_eq!(
        event_attr(&res, "wasm-side_token_redeemed", "amount_mt").as_deref(),
        Some("10")
    );
    assert_eq!(balance(&env, &env.alice), 270);
    assert_eq!(balance(&env, &env.bridge), 30);

    let redeem_id = redeem_id_from(&res);
    let expected = hash::redeem_id(
        SIDE_CHAIN_ID,
        &parse_hash(&env.side_token_id).unwrap(),
        1,
        env.alice.as_str(),
        Uint128::new(30),
    );
    assert_eq!(redeem_id.to_vec(), expected.to_vec());

    let status: RedeemResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.bridge, &QueryMsg::Redeem { redeem_id })
        .unwrap();
    assert_eq!(status.redeem.status, RedeemStatus::Requested);
    assert_eq!(status.redeem.owner, env.alice);
    assert_eq!(status.confirmations.signed_count, 0);
}

#[test]
fn test_redeem_with_money_loss_rejected() {
    let mut env = setup();
    fund_alice(&mut env, 1, 100);

    let err = err_text(redeem(&mut env, 31));
    assert!(err.contains("loses precision"), "got: {}", err);
    assert_eq!(balance(&env, &env.alice), 300);
    assert_eq!(balance(&env, &env.bridge), 0);
}

#[test]
fn test_confirm_redeem_burns_once() {
    let mut env = setup();
    fund_alice(&mut env, 1, 100);
    let redeem_id = redeem_id_from(&redeem(&mut env, 30).unwrap());
    let confirm = ExecuteMsg::ConfirmRedeem {
        redeem_id: redeem_id.clone(),
    };

    sign(&mut env, 0, &confirm).unwrap();
    assert_eq!(total_supply(&env), Uint128::new(300));

    let res = sign(&mut env, 1, &confirm).unwrap();
    assert!(has_event(&res, "wasm-side_token_redeem_confirmed"));
    assert_eq!(total_supply(&env), Uint128::new(270));
    assert_eq!(balance(&env, &env.bridge), 0);

    sign(&mut env, 2, &confirm).unwrap();
    assert_eq!(total_supply(&env), Uint128::new(270));

    let status: RedeemResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.bridge, &QueryMsg::Redeem { redeem_id })
        .unwrap();
    assert_eq!(status.redeem.status, RedeemStatus::Confirmed);
    assert!(status.confirmations.finalized);
}

#[test]
fn test_confirm_unknown_redeem_fails() {
    let mut env = setup();
    let msg = ExecuteMsg::ConfirmRedeem {
        redeem_id: Binary::from(vec![3u8; 32]),
    };
    let err = err_text(sign(&mut env, 0, &msg));
    assert!(err.contains("Redeem not found"), "got: {}", err);
}

#[test]
fn test_token_hook_only_from_side_token() {
    let mut env = setup();
    let res = env.app.execute_contract(
        env.alice.clone(),
        env.bridge.clone(),
        &ExecuteMsg::TokenHook(common::SideTokenHookMsg::OnStake {
            staker: env.alice.to_string(),
            amount: Uint128::new(1),
        }),
        &[],
    );
    assert!(err_text(res).contains("not a registered side token"));
}

// ============================================================================
// Staking & Vesting
// ============================================================================

fn staked(env: &TestEnv) -> Uint128 {
    let res: StakedAmountResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.bridge,
            &QueryMsg::StakedAmount {
                side_token_id: env.side_token_id.clone(),
                staker: env.alice.to_string(),
            },
        )
        .unwrap();
    res.amount
}

#[test]
fn test_stake_and_unstake_through_token() {
    let mut env = setup();
    fund_alice(&mut env, 1, 100);
    let alice = env.alice.clone();

    let res = token_exec(
        &mut env,
        &alice,
        &side_token::msg::ExecuteMsg::Stake {
            amount: Uint128::new(100),
        },
    )
    .unwrap();
    assert!(res.events.iter().any(|e| e.ty == "wasm-side_token_staked"));
    assert_eq!(staked(&env), Uint128::new(100));
    assert_eq!(balance(&env, &alice), 200);

    let err = err_text(token_exec(
        &mut env,
        &alice,
        &side_token::msg::ExecuteMsg::Unstake {
            amount: Uint128::new(150),
        },
    ));
    assert!(err.contains("Insufficient stake"), "got: {}", err);

    token_exec(
        &mut env,
        &alice,
        &side_token::msg::ExecuteMsg::Unstake {
            amount: Uint128::new(40),
        },
    )
    .unwrap();
    assert_eq!(staked(&env), Uint128::new(60));
    assert_eq!(balance(&env, &alice), 240);
}

#[test]
fn test_vest_creates_grant() {
    let mut env = setup();
    fund_alice(&mut env, 1, 100);
    let alice = env.alice.clone();

    token_exec(
        &mut env,
        &alice,
        &side_token::msg::ExecuteMsg::Vest {
            amount: Uint128::new(90),
            cliff_in_days: 0,
            duration_in_days: 30,
            interval_in_days: 10,
        },
    )
    .unwrap();
    assert_eq!(balance(&env, &alice), 210);
    assert_eq!(balance(&env, &env.vesting), 90);

    let count: VestCountResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.bridge,
            &QueryMsg::VestCount {
                owner: alice.to_string(),
            },
        )
        .unwrap();
    assert_eq!(count.count, 1);

    let info: VestInfo = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.bridge,
            &QueryMsg::VestInfo {
                owner: alice.to_string(),
                index: 0,
            },
        )
        .unwrap();
    assert_eq!(info.grant_id, 0);
    assert_eq!(info.amount, Uint128::new(90));
    assert_eq!(info.vesting_contract, env.vesting);

    env.app.update_block(|block| {
        block.time = block.time.plus_seconds(10 * DAY);
        block.height += 10;
    });
    env.app
        .execute_contract(
            Addr::unchecked("terra1anyone"),
            env.vesting.clone(),
            &token_vesting::msg::ExecuteMsg::Release { grant_id: 0 },
            &[],
        )
        .unwrap();
    assert_eq!(balance(&env, &alice), 240);
}

#[test]
fn test_vest_with_invalid_schedule_rolls_back() {
    let mut env = setup();
    fund_alice(&mut env, 1, 100);
    let alice = env.alice.clone();

    let res = token_exec(
        &mut env,
        &alice,
        &side_token::msg::ExecuteMsg::Vest {
            amount: Uint128::new(90),
            cliff_in_days: 0,
            duration_in_days: 10,
            interval_in_days: 20,
        },
    );
    assert!(err_text(res).contains("Invalid vesting schedule"));
    assert_eq!(balance(&env, &alice), 300);

    let count: VestCountResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.bridge,
            &QueryMsg::VestCount {
                owner: alice.to_string(),
            },
        )
        .unwrap();
    assert_eq!(count.count, 0);
}

#[test]
fn test_set_vesting_contract() {
    let mut env = setup();
    let replacement = Addr::unchecked("terra1newvesting");
    let res = env.app.execute_contract(
        env.alice.clone(),
        env.bridge.clone(),
        &ExecuteMsg::SetVestingContract {
            vesting_contract: replacement.to_string(),
        },
        &[],
    );
    assert!(err_text(res).contains("only owner"));

    env.app
        .execute_contract(
            env.owner.clone(),
            env.bridge.clone(),
            &ExecuteMsg::SetVestingContract {
                vesting_contract: replacement.to_string(),
            },
            &[],
        )
        .unwrap();
    assert_eq!(config(&env).vesting_contract, Some(replacement));
}

// ============================================================================
// Pause
// ============================================================================

#[test]
fn test_pause_requires_quorum() {
    let mut env = setup();
    fund_alice(&mut env, 1, 100);
    let pause = ExecuteMsg::PauseBridge {
        tx_hash: Binary::from(vec![0xaa; 32]),
    };

    sign(&mut env, 0, &pause).unwrap();
    assert!(!config(&env).paused);
    let res = sign(&mut env, 1, &pause).unwrap();
    assert!(has_event(&res, "wasm-bridge_paused"));
    assert!(config(&env).paused);

    let err = err_text(redeem(&mut env, 30));
    assert!(err.contains("Bridge is paused"), "got: {}", err);
    let alice = env.alice.clone();
    let err = err_text(token_exec(
        &mut env,
        &alice,
        &side_token::msg::ExecuteMsg::Stake {
            amount: Uint128::new(1),
        },
    ));
    assert!(err.contains("Bridge is paused"), "got: {}", err);

    // in-flight deposits still mint
    fund_alice(&mut env, 2, 10);
    assert_eq!(balance(&env, &env.alice), 330);

    // late vote on the finalized hash is a no-op, a fresh pause is a conflict
    sign(&mut env, 2, &pause).unwrap();
    let again = ExecuteMsg::PauseBridge {
        tx_hash: Binary::from(vec![0xab; 32]),
    };
    assert!(err_text(sign(&mut env, 0, &again)).contains("Bridge is paused"));

    let resume = ExecuteMsg::ResumeBridge {
        tx_hash: Binary::from(vec![0xbb; 32]),
    };
    sign(&mut env, 1, &resume).unwrap();
    sign(&mut env, 2, &resume).unwrap();
    assert!(!config(&env).paused);
    redeem(&mut env, 30).unwrap();
}

#[test]
fn test_pause_by_non_authority_fails() {
    let mut env = setup();
    let res = env.app.execute_contract(
        env.owner.clone(),
        env.bridge.clone(),
        &ExecuteMsg::PauseBridge {
            tx_hash: Binary::from(vec![0xaa; 32]),
        },
        &[],
    );
    assert!(err_text(res).contains("not an authority"));

    let resume = ExecuteMsg::ResumeBridge {
        tx_hash: Binary::from(vec![0xbb; 32]),
    };
    assert!(err_text(sign(&mut env, 0, &resume)).contains("Bridge is not paused"));
}

// ============================================================================
// Authority Changes & Ownership
// ============================================================================

#[test]
fn test_change_authority_on_side_quorum() {
    let mut env = setup();
    let change_id = Binary::from(
        hash::change_id(MAIN_CHAIN_ID, "terra1auth3", "terra1auth4", 0).to_vec(),
    );
    let change = ExecuteMsg::ChangeAuthority {
        change_id: change_id.clone(),
        old_authority: "terra1auth3".to_string(),
        new_authority: "terra1auth4".to_string(),
    };

    let err = err_text(sign(&mut env, 2, &change));
    assert!(err.contains("cannot vote on its replacement"), "got: {}", err);

    sign(&mut env, 0, &change).unwrap();
    let diverging = ExecuteMsg::ChangeAuthority {
        change_id,
        old_authority: "terra1auth3".to_string(),
        new_authority: "terra1auth5".to_string(),
    };
    assert!(err_text(sign(&mut env, 1, &diverging)).contains("does not match"));

    let res = sign(&mut env, 1, &change).unwrap();
    assert!(has_event(&res, "wasm-authority_changed"));

    let set: AuthoritySet = env
        .app
        .wrap()
        .query_wasm_smart(&env.bridge, &QueryMsg::Authorities {})
        .unwrap();
    assert_eq!(
        set.authorities,
        vec![
            Addr::unchecked("terra1auth1"),
            Addr::unchecked("terra1auth2"),
            Addr::unchecked("terra1auth4"),
        ]
    );
}

#[test]
fn test_change_authority_validates_first_vote() {
    let mut env = setup();
    let change = ExecuteMsg::ChangeAuthority {
        change_id: Binary::from(vec![1u8; 32]),
        old_authority: "terra1stranger".to_string(),
        new_authority: "terra1auth4".to_string(),
    };
    assert!(err_text(sign(&mut env, 0, &change)).contains("Not an authority"));
}

#[test]
fn test_transfer_ownership() {
    let mut env = setup();
    let new_owner = Addr::unchecked("terra1newowner");
    env.app
        .execute_contract(
            env.owner.clone(),
            env.bridge.clone(),
            &ExecuteMsg::TransferOwnership {
                new_owner: new_owner.to_string(),
            },
            &[],
        )
        .unwrap();
    assert_eq!(config(&env).owner, new_owner);
}
