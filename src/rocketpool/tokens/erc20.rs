//! ERC-20 helpers shared by the Rocket Pool token bindings.
//!
//! Each helper takes the token address and the error prefix the caller
//! wants on failure.

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
    rpc::types::TransactionReceipt,
};
use tracing::debug;

use crate::{
    error::{AppError, Result},
    ethereum::contracts::IERC20,
    rocketpool::{estimate_gas, send_and_confirm, RocketPool},
    types::{CallOpts, GasInfo, TransactOpts},
};

/// ETH balance held by a token contract.
pub async fn contract_eth_balance(
    rp: &RocketPool,
    token: Address,
    opts: &CallOpts,
    context: &'static str,
) -> Result<U256> {
    let request = rp.provider().get_balance(token);
    let balance = match opts.block {
        Some(block) => request.block_id(block).await,
        None => request.await,
    };
    balance.map_err(|e| AppError::contract(context)(e.into()))
}

/// Total supply of a token.
pub async fn total_supply(
    rp: &RocketPool,
    token: Address,
    opts: &CallOpts,
    context: &'static str,
) -> Result<U256> {
    let contract = IERC20::new(token, rp.provider().clone());
    opts.apply(contract.totalSupply()).call().await.map_err(AppError::contract(context))
}

/// Token balance of `account`.
pub async fn balance_of(
    rp: &RocketPool,
    token: Address,
    account: Address,
    opts: &CallOpts,
    context: &'static str,
) -> Result<U256> {
    debug!(token = %token, account = %account, "Querying token balance");

    let contract = IERC20::new(token, rp.provider().clone());
    opts.apply(contract.balanceOf(account)).call().await.map_err(AppError::contract(context))
}

/// Estimate the gas of transferring `amount` tokens to `to`.
pub async fn estimate_transfer_gas(
    rp: &RocketPool,
    token: Address,
    to: Address,
    amount: U256,
    opts: &TransactOpts,
    context: &'static str,
) -> Result<GasInfo> {
    let from = rp.client().require_signer()?;
    let contract = IERC20::new(token, rp.provider().clone());
    estimate_gas(opts.apply(contract.transfer(to, amount)), from, context).await
}

/// Transfer `amount` tokens to `to` and wait for the receipt.
pub async fn transfer(
    rp: &RocketPool,
    token: Address,
    to: Address,
    amount: U256,
    opts: &TransactOpts,
    context: &'static str,
) -> Result<TransactionReceipt> {
    rp.client().require_signer()?;
    debug!(token = %token, to = %to, amount = %amount, "Transferring tokens");

    let contract = IERC20::new(token, rp.provider().clone());
    send_and_confirm(opts.apply(contract.transfer(to, amount)), context).await
}
