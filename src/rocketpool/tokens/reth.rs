//! RocketTokenRETH bindings.
//!
//! The exchange rate and collateral figures are read from the contract;
//! nothing here derives them locally.

use alloy::{
    primitives::{Address, U256},
    rpc::types::TransactionReceipt,
};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    error::{AppError, Result},
    ethereum::{
        constants::ROCKET_TOKEN_RETH,
        contracts::{
            rocket_token_reth::IRocketTokenRETH::IRocketTokenRETHInstance, IRocketTokenRETH,
        },
        HttpProvider,
    },
    rocketpool::{estimate_gas, send_and_confirm, tokens::erc20, RocketPool},
    types::{wei_to_eth, CallOpts, GasInfo, TransactOpts},
};

/// Get the rETH contract ETH balance.
pub async fn get_reth_contract_eth_balance(rp: &RocketPool, opts: &CallOpts) -> Result<U256> {
    let address = reth_address(rp, opts).await?;
    erc20::contract_eth_balance(rp, address, opts, "Could not get rETH contract ETH balance")
        .await
}

/// Get the rETH total supply.
pub async fn get_reth_total_supply(rp: &RocketPool, opts: &CallOpts) -> Result<U256> {
    let address = reth_address(rp, opts).await?;
    erc20::total_supply(rp, address, opts, "Could not get rETH total supply").await
}

/// Get the rETH balance of an address.
pub async fn get_reth_balance(rp: &RocketPool, address: Address, opts: &CallOpts) -> Result<U256> {
    let reth = reth_address(rp, opts).await?;
    erc20::balance_of(rp, reth, address, opts, "Could not get rETH balance").await
}

/// Get the ETH value of an amount of rETH.
pub async fn get_eth_value_of_reth(
    rp: &RocketPool,
    reth_amount: U256,
    opts: &CallOpts,
) -> Result<U256> {
    let contract = rocket_token_reth(rp, opts).await?;
    opts.apply(contract.getEthValue(reth_amount))
        .call()
        .await
        .map_err(AppError::contract("Could not get ETH value of rETH amount"))
}

/// Get the rETH value of an amount of ETH.
pub async fn get_reth_value_of_eth(
    rp: &RocketPool,
    eth_amount: U256,
    opts: &CallOpts,
) -> Result<U256> {
    let contract = rocket_token_reth(rp, opts).await?;
    opts.apply(contract.getRethValue(eth_amount))
        .call()
        .await
        .map_err(AppError::contract("Could not get rETH value of ETH amount"))
}

/// Get the current ETH : rETH exchange rate.
pub async fn get_reth_exchange_rate(rp: &RocketPool, opts: &CallOpts) -> Result<Decimal> {
    let contract = rocket_token_reth(rp, opts).await?;
    let rate = opts
        .apply(contract.getExchangeRate())
        .call()
        .await
        .map_err(AppError::contract("Could not get rETH exchange rate"))?;
    wei_to_eth(rate)
}

/// Get the total amount of ETH collateral available for rETH burns.
pub async fn get_reth_total_collateral(rp: &RocketPool, opts: &CallOpts) -> Result<U256> {
    let contract = rocket_token_reth(rp, opts).await?;
    opts.apply(contract.getTotalCollateral())
        .call()
        .await
        .map_err(AppError::contract("Could not get rETH total collateral"))
}

/// Get the rETH collateralization rate.
pub async fn get_reth_collateral_rate(rp: &RocketPool, opts: &CallOpts) -> Result<Decimal> {
    let contract = rocket_token_reth(rp, opts).await?;
    let rate = opts
        .apply(contract.getCollateralRate())
        .call()
        .await
        .map_err(AppError::contract("Could not get rETH collateral rate"))?;
    wei_to_eth(rate)
}

/// Estimate the gas of transferring rETH.
pub async fn estimate_transfer_reth_gas(
    rp: &RocketPool,
    to: Address,
    amount: U256,
    opts: &TransactOpts,
) -> Result<GasInfo> {
    rp.client().require_signer()?;
    let reth = reth_address(rp, &CallOpts::default()).await?;
    erc20::estimate_transfer_gas(
        rp,
        reth,
        to,
        amount,
        opts,
        "Could not estimate the gas required to transfer rETH",
    )
    .await
}

/// Transfer rETH.
pub async fn transfer_reth(
    rp: &RocketPool,
    to: Address,
    amount: U256,
    opts: &TransactOpts,
) -> Result<TransactionReceipt> {
    rp.client().require_signer()?;
    let reth = reth_address(rp, &CallOpts::default()).await?;
    info!(to = %to, amount = %amount, "Transferring rETH");
    erc20::transfer(rp, reth, to, amount, opts, "Could not transfer rETH").await
}

/// Estimate the gas of burning rETH for ETH.
pub async fn estimate_burn_reth_gas(
    rp: &RocketPool,
    amount: U256,
    opts: &TransactOpts,
) -> Result<GasInfo> {
    let from = rp.client().require_signer()?;
    let contract = rocket_token_reth(rp, &CallOpts::default()).await?;
    estimate_gas(
        opts.apply(contract.burn(amount)),
        from,
        "Could not estimate the gas required to burn rETH",
    )
    .await
}

/// Burn rETH for ETH.
pub async fn burn_reth(
    rp: &RocketPool,
    amount: U256,
    opts: &TransactOpts,
) -> Result<TransactionReceipt> {
    rp.client().require_signer()?;
    let contract = rocket_token_reth(rp, &CallOpts::default()).await?;
    info!(amount = %amount, "Burning rETH");
    send_and_confirm(opts.apply(contract.burn(amount)), "Could not burn rETH").await
}

async fn reth_address(rp: &RocketPool, opts: &CallOpts) -> Result<Address> {
    let address = rp.contract_address(ROCKET_TOKEN_RETH, opts).await?;
    debug!(address = %address, "Using rETH contract");
    Ok(address)
}

async fn rocket_token_reth(
    rp: &RocketPool,
    opts: &CallOpts,
) -> Result<IRocketTokenRETHInstance<HttpProvider>> {
    let address = reth_address(rp, opts).await?;
    Ok(IRocketTokenRETH::new(address, rp.provider().clone()))
}
