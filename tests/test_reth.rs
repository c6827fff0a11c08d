//! Integration tests for the rETH bindings.
//!
//! Run with: `cargo test --test test_reth -- --ignored`

mod common;

use alloy::primitives::{address, U256};
use rocketpool_mcp::{
    rocketpool::tokens,
    types::{wei_to_eth, CallOpts},
    AppError, ETHEREUM_MAINNET_CHAIN_ID, ROCKET_TOKEN_RETH,
};
use rust_decimal::Decimal;

/// Test that the exchange rate is above 1 ETH per rETH.
#[tokio::test]
#[ignore = "Requires network access and environment variables"]
async fn test_exchange_rate() {
    let rp = skip_if_no_rpc!();

    let rate = tokens::get_reth_exchange_rate(&rp, &CallOpts::default()).await.unwrap();
    assert!(rate > Decimal::ONE, "Exchange rate should be > 1, got {}", rate);

    // The cache is populated after the first lookup
    assert!(rp.registry().cached(ROCKET_TOKEN_RETH).await.is_some());
}

/// Test that the ETH value of 1 rETH agrees with the exchange rate.
#[tokio::test]
#[ignore = "Requires network access and environment variables"]
async fn test_eth_value_matches_exchange_rate() {
    let rp = skip_if_no_rpc!();
    let opts = CallOpts::default();
    let one = U256::from(10u64).pow(U256::from(18u64));

    let rate = tokens::get_reth_exchange_rate(&rp, &opts).await.unwrap();
    let eth_value = tokens::get_eth_value_of_reth(&rp, one, &opts).await.unwrap();

    assert_eq!(wei_to_eth(eth_value).unwrap(), rate);
}

/// Test supply, collateral and the collateral rate.
#[tokio::test]
#[ignore = "Requires network access and environment variables"]
async fn test_supply_and_collateral() {
    let rp = skip_if_no_rpc!();
    let opts = CallOpts::default();

    let supply = tokens::get_reth_total_supply(&rp, &opts).await.unwrap();
    let collateral = tokens::get_reth_total_collateral(&rp, &opts).await.unwrap();
    let collateral_rate = tokens::get_reth_collateral_rate(&rp, &opts).await.unwrap();
    let eth_balance = tokens::get_reth_contract_eth_balance(&rp, &opts).await.unwrap();

    assert!(supply > U256::ZERO);
    assert!(collateral >= eth_balance);
    assert!(collateral_rate >= Decimal::ZERO);
}

/// Test balance of an address that never held rETH.
#[tokio::test]
#[ignore = "Requires network access and environment variables"]
async fn test_balance_of_unused_address() {
    let rp = skip_if_no_rpc!();
    let unused = address!("0000000000000000000000000000000000000001");

    let balance = tokens::get_reth_balance(&rp, unused, &CallOpts::default()).await.unwrap();
    assert_eq!(balance, U256::ZERO);
}

/// Test reads pinned to a historical block.
#[tokio::test]
#[ignore = "Requires network access and environment variables"]
async fn test_pinned_block_read() {
    let rp = skip_if_no_rpc!();
    if rp.client().chain_id().await.unwrap() != ETHEREUM_MAINNET_CHAIN_ID {
        eprintln!("Skipping test: pinned block is a mainnet block");
        return;
    }

    // Mainnet block after the Atlas upgrade
    let opts = CallOpts::at_block(18_000_000u64);
    let rate = tokens::get_reth_exchange_rate(&rp, &opts).await.unwrap();
    assert!(rate > Decimal::ONE);

    // Pinned lookups do not touch the cache
    assert!(rp.registry().cached(ROCKET_TOKEN_RETH).await.is_none());
}

/// Test that an unknown contract name is reported as not found.
#[tokio::test]
#[ignore = "Requires network access and environment variables"]
async fn test_unknown_contract_name() {
    let rp = skip_if_no_rpc!();

    let result = rp.contract_address("rocketDoesNotExist", &CallOpts::default()).await;
    assert!(
        matches!(result, Err(AppError::ContractNotFound(ref name)) if name == "rocketDoesNotExist"),
        "Expected ContractNotFound, got {:?}",
        result
    );
}
