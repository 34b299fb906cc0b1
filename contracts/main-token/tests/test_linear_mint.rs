//! Linear mint schedule tests

use cosmwasm_std::{Addr, Empty, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor};

use main_token::contract::{execute, instantiate, query};
use main_token::msg::{ExecuteMsg, InstantiateMsg, MintAmountResponse, QueryMsg};
use main_token::schedule::{LinearMintSchedule, SECONDS_IN_A_DAY};
use token_ledger::msg::BalanceResponse;

fn contract_token() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}

struct TestEnv {
    app: App,
    token: Addr,
    owner: Addr,
}

fn setup(initial_supply: u128, max_supply: Option<u128>) -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let code_id = app.store_code(contract_token());
    let token = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                name: "Main Token".to_string(),
                symbol: "MTK".to_string(),
                decimals: 6,
                initial_supply: Uint128::new(initial_supply),
                max_supply: max_supply.map(Uint128::new),
                balance_policy: None,
            },
            &[],
            "main-token",
            None,
        )
        .unwrap();
    TestEnv { app, token, owner }
}

fn register(env: &mut TestEnv, minting_supply: u128, per_period: u128, days: u64) {
    env.app
        .execute_contract(
            env.owner.clone(),
            env.token.clone(),
            &ExecuteMsg::RegisterLinearMint {
                minting_supply: Uint128::new(minting_supply),
                amount_per_period: Uint128::new(per_period),
                period_length_in_days: days,
            },
            &[],
        )
        .unwrap();
}

fn advance_days(app: &mut App, days: u64) {
    app.update_block(|block| {
        block.time = block.time.plus_seconds(days * SECONDS_IN_A_DAY);
        block.height += days;
    });
}

fn owner_balance(env: &TestEnv) -> i128 {
    let res: BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.token,
            &QueryMsg::Balance {
                address: env.owner.to_string(),
            },
        )
        .unwrap();
    res.balance.i128()
}

fn linear_mint(env: &mut TestEnv) -> Result<(), String> {
    env.app
        .execute_contract(
            Addr::unchecked("terra1anyone"),
            env.token.clone(),
            &ExecuteMsg::LinearMint {},
            &[],
        )
        .map(|_| ())
        .map_err(|e| e.root_cause().to_string())
}

#[test]
fn test_register_disables_owner_mint() {
    let mut env = setup(0, None);
    register(&mut env, 100, 10, 1);

    let res = env.app.execute_contract(
        env.owner.clone(),
        env.token.clone(),
        &ExecuteMsg::Mint {
            amount: Uint128::new(1),
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Minting is disabled"));
}

#[test]
fn test_register_twice_fails() {
    let mut env = setup(0, None);
    register(&mut env, 100, 10, 1);

    let res = env.app.execute_contract(
        env.owner.clone(),
        env.token.clone(),
        &ExecuteMsg::RegisterLinearMint {
            minting_supply: Uint128::new(100),
            amount_per_period: Uint128::new(10),
            period_length_in_days: 1,
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("already registered"));
}

#[test]
fn test_register_by_non_owner_fails() {
    let mut env = setup(0, None);
    let res = env.app.execute_contract(
        Addr::unchecked("terra1mallory"),
        env.token.clone(),
        &ExecuteMsg::RegisterLinearMint {
            minting_supply: Uint128::new(100),
            amount_per_period: Uint128::new(10),
            period_length_in_days: 1,
        },
        &[],
    );
    assert!(res.is_err());
}

#[test]
fn test_register_rejects_zero_values() {
    let mut env = setup(0, None);
    for (supply, per_period, days) in [(0u128, 10u128, 1u64), (100, 0, 1), (100, 10, 0)] {
        let res = env.app.execute_contract(
            env.owner.clone(),
            env.token.clone(),
            &ExecuteMsg::RegisterLinearMint {
                minting_supply: Uint128::new(supply),
                amount_per_period: Uint128::new(per_period),
                period_length_in_days: days,
            },
            &[],
        );
        assert!(res.is_err());
    }
}

#[test]
fn test_register_beyond_max_supply_fails() {
    let mut env = setup(900, Some(1_000));
    let res = env.app.execute_contract(
        env.owner.clone(),
        env.token.clone(),
        &ExecuteMsg::RegisterLinearMint {
            minting_supply: Uint128::new(101),
            amount_per_period: Uint128::new(10),
            period_length_in_days: 1,
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("exceeds remaining capacity"));

    register(&mut env, 100, 10, 1);
}

#[test]
fn test_mint_before_first_period_fails() {
    let mut env = setup(0, None);
    register(&mut env, 100, 10, 7);

    let err = linear_mint(&mut env).unwrap_err();
    assert!(err.contains("Nothing to mint"), "got: {}", err);

    advance_days(&mut env.app, 6);
    assert!(linear_mint(&mut env).is_err());
}

#[test]
fn test_mint_releases_whole_periods() {
    let mut env = setup(0, None);
    register(&mut env, 100, 10, 7);

    advance_days(&mut env.app, 7);
    linear_mint(&mut env).unwrap();
    assert_eq!(owner_balance(&env), 10);

    // second call in the same period has nothing to mint
    assert!(linear_mint(&mut env).is_err());

    advance_days(&mut env.app, 20);
    linear_mint(&mut env).unwrap();
    assert_eq!(owner_balance(&env), 30);
}

#[test]
fn test_mint_stops_at_minting_supply() {
    let mut env = setup(0, None);
    register(&mut env, 95, 10, 1);

    advance_days(&mut env.app, 365);
    let res = env
        .app
        .execute_contract(
            Addr::unchecked("terra1anyone"),
            env.token.clone(),
            &ExecuteMsg::LinearMint {},
            &[],
        )
        .unwrap();
    let wasm = res.events.iter().find(|e| e.ty == "wasm").unwrap();
    let status = wasm
        .attributes
        .iter()
        .find(|a| a.key == "minting_status")
        .unwrap();
    assert_eq!(status.value, "false");
    assert_eq!(owner_balance(&env), 95);

    let err = linear_mint(&mut env).unwrap_err();
    assert!(err.contains("Linear mint finished"), "got: {}", err);

    let schedule: Option<LinearMintSchedule> = env
        .app
        .wrap()
        .query_wasm_smart(&env.token, &QueryMsg::LinearMintSchedule {})
        .unwrap();
    let schedule = schedule.unwrap();
    assert_eq!(schedule.minted_so_far, Uint128::new(95));
    assert!(!schedule.minting_status);
}

#[test]
fn test_mint_while_paused_fails() {
    let mut env = setup(0, None);
    register(&mut env, 100, 10, 1);
    advance_days(&mut env.app, 2);

    env.app
        .execute_contract(
            env.owner.clone(),
            env.token.clone(),
            &ExecuteMsg::Pause {},
            &[],
        )
        .unwrap();
    let err = linear_mint(&mut env).unwrap_err();
    assert!(err.contains("paused"), "got: {}", err);
}

#[test]
fn test_calculate_mint_amount_query() {
    let mut env = setup(0, None);
    register(&mut env, 100, 10, 1);
    let now = env.app.block_info().time.seconds();

    let at = |env: &TestEnv, ts: u64| -> Uint128 {
        let res: MintAmountResponse = env
            .app
            .wrap()
            .query_wasm_smart(
                &env.token,
                &QueryMsg::CalculateMintAmount { at_timestamp: ts },
            )
            .unwrap();
        res.amount
    };

    assert_eq!(at(&env, now), Uint128::zero());
    assert_eq!(at(&env, now + SECONDS_IN_A_DAY), Uint128::new(10));
    assert_eq!(at(&env, now + 3 * SECONDS_IN_A_DAY + 5), Uint128::new(30));
    assert_eq!(at(&env, now + 1_000 * SECONDS_IN_A_DAY), Uint128::new(100));
}

#[test]
fn test_calculate_mint_amount_unregistered_fails() {
    let env = setup(0, None);
    let res: Result<MintAmountResponse, _> = env.app.wrap().query_wasm_smart(
        &env.token,
        &QueryMsg::CalculateMintAmount { at_timestamp: 0 },
    );
    assert!(res.is_err());

    let schedule: Option<LinearMintSchedule> = env
        .app
        .wrap()
        .query_wasm_smart(&env.token, &QueryMsg::LinearMintSchedule {})
        .unwrap();
    assert!(schedule.is_none());
}
