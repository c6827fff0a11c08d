//! RocketNodeDeposit bindings.

use alloy::primitives::{Address, TxHash, B256, U256};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::{
    error::{AppError, Result},
    ethereum::{
        constants::ROCKET_NODE_DEPOSIT,
        contracts::{
            rocket_node_deposit::IRocketNodeDeposit::IRocketNodeDepositInstance,
            IRocketNodeDeposit,
        },
        HttpProvider,
    },
    rocketpool::{estimate_gas, RocketPool},
    types::{eth_to_wei, CallOpts, GasInfo, TransactOpts, ValidatorPubkey, ValidatorSignature},
};

/// Arguments of a node deposit.
#[derive(Debug, Clone)]
pub struct DepositParams {
    /// ETH bonded by the node for the new minipool, in wei.
    pub bond_amount: U256,
    /// Lowest commission the node accepts, as a fraction (e.g. `0.05`).
    pub minimum_node_fee: Decimal,
    /// Validator public key.
    pub validator_pubkey: ValidatorPubkey,
    /// Validator deposit signature.
    pub validator_signature: ValidatorSignature,
    /// Root of the deposit data.
    pub deposit_data_root: B256,
    /// Salt used to derive the minipool address.
    pub salt: U256,
    /// Minipool address the caller derived from `salt`.
    pub expected_minipool_address: Address,
}

/// Estimate the gas of a node deposit.
pub async fn estimate_deposit_gas(
    rp: &RocketPool,
    params: &DepositParams,
    opts: &TransactOpts,
) -> Result<GasInfo> {
    let from = rp.client().require_signer()?;
    let contract = rocket_node_deposit(rp, &CallOpts::default()).await?;
    let minimum_node_fee = eth_to_wei(params.minimum_node_fee)?;

    let call = opts.apply(contract.deposit(
        params.bond_amount,
        minimum_node_fee,
        params.validator_pubkey.to_bytes(),
        params.validator_signature.to_bytes(),
        params.deposit_data_root,
        params.salt,
        params.expected_minipool_address,
    ));
    estimate_gas(call, from, "Could not estimate the gas required to make a node deposit").await
}

/// Make a node deposit.
///
/// `opts.value` carries the ETH sent with the deposit. Returns the
/// transaction hash once the transaction has been broadcast.
pub async fn deposit(
    rp: &RocketPool,
    params: &DepositParams,
    opts: &TransactOpts,
) -> Result<TxHash> {
    rp.client().require_signer()?;
    let contract = rocket_node_deposit(rp, &CallOpts::default()).await?;
    let minimum_node_fee = eth_to_wei(params.minimum_node_fee)?;

    info!(
        bond_amount = %params.bond_amount,
        minimum_node_fee = %params.minimum_node_fee,
        pubkey = %params.validator_pubkey,
        minipool = %params.expected_minipool_address,
        "Making node deposit"
    );

    let pending = opts
        .apply(contract.deposit(
            params.bond_amount,
            minimum_node_fee,
            params.validator_pubkey.to_bytes(),
            params.validator_signature.to_bytes(),
            params.deposit_data_root,
            params.salt,
            params.expected_minipool_address,
        ))
        .send()
        .await
        .map_err(AppError::contract("Could not make node deposit"))?;

    let tx_hash = *pending.tx_hash();
    info!(tx_hash = %tx_hash, "Node deposit submitted");
    Ok(tx_hash)
}

/// Get the amount of ETH in the node's deposit credit bank.
pub async fn get_node_deposit_credit(
    rp: &RocketPool,
    node_address: Address,
    opts: &CallOpts,
) -> Result<U256> {
    debug!(node = %node_address, "Querying node deposit credit");

    let contract = rocket_node_deposit(rp, opts).await?;
    opts.apply(contract.getNodeDepositCredit(node_address))
        .call()
        .await
        .map_err(AppError::contract("Could not get node deposit credit"))
}

async fn rocket_node_deposit(
    rp: &RocketPool,
    opts: &CallOpts,
) -> Result<IRocketNodeDepositInstance<HttpProvider>> {
    let address = rp.contract_address(ROCKET_NODE_DEPOSIT, opts).await?;
    Ok(IRocketNodeDeposit::new(address, rp.provider().clone()))
}
