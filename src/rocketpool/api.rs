//! Read-only Rocket Pool queries used by the MCP server.

use alloy::{
    primitives::{Address, U256},
    providers::Provider,
};
use async_trait::async_trait;
use tracing::debug;

use crate::{
    error::{AppError, Result},
    ethereum::constants::ROCKET_TOKEN_RETH,
    rocketpool::{node, tokens, RocketPool},
    types::{
        display_address, CallOpts, ConversionDirection, GasEstimate, NodeDepositCredit,
        RethBalance, RethConversion, RethStats, TransactOpts,
    },
};

/// Trait for the queries exposed as MCP tools.
///
/// Allows the server to run against a live deployment or a mock in tests.
#[async_trait]
pub trait RocketPoolApi: Send + Sync {
    /// Snapshot of the rETH contract's accounting.
    async fn reth_stats(&self) -> Result<RethStats>;

    /// rETH balance of `address` and its ETH value.
    async fn reth_balance(&self, address: Address) -> Result<RethBalance>;

    /// Convert `amount` between ETH and rETH using the contract's rate.
    async fn convert(&self, amount: U256, direction: ConversionDirection)
        -> Result<RethConversion>;

    /// Deposit credit of a node.
    async fn node_deposit_credit(&self, node_address: Address) -> Result<NodeDepositCredit>;

    /// Gas needed to burn `amount` rETH from the configured wallet.
    async fn estimate_burn(&self, amount: U256) -> Result<GasEstimate>;

    /// Gas needed to transfer `amount` rETH from the configured wallet to `to`.
    async fn estimate_transfer(&self, to: Address, amount: U256) -> Result<GasEstimate>;
}

impl RocketPool {
    /// Options pinning several reads to the current block so they agree.
    async fn snapshot(&self) -> Result<CallOpts> {
        let block = self
            .provider()
            .get_block_number()
            .await
            .map_err(|e| AppError::contract("Could not get latest block number")(e.into()))?;
        debug!(block, "Reading at pinned block");
        Ok(CallOpts::at_block(block))
    }
}

#[async_trait]
impl RocketPoolApi for RocketPool {
    async fn reth_stats(&self) -> Result<RethStats> {
        let opts = self.snapshot().await?;
        let contract = self.contract_address(ROCKET_TOKEN_RETH, &opts).await?;

        let (exchange_rate, collateral_rate, total_collateral, total_supply, eth_balance) =
            tokio::try_join!(
                tokens::get_reth_exchange_rate(self, &opts),
                tokens::get_reth_collateral_rate(self, &opts),
                tokens::get_reth_total_collateral(self, &opts),
                tokens::get_reth_total_supply(self, &opts),
                tokens::get_reth_contract_eth_balance(self, &opts),
            )?;

        Ok(RethStats {
            contract: display_address(contract),
            exchange_rate: exchange_rate.normalize().to_string(),
            collateral_rate: collateral_rate.normalize().to_string(),
            total_collateral: total_collateral.into(),
            total_supply: total_supply.into(),
            contract_eth_balance: eth_balance.into(),
        })
    }

    async fn reth_balance(&self, address: Address) -> Result<RethBalance> {
        let opts = self.snapshot().await?;
        let balance = tokens::get_reth_balance(self, address, &opts).await?;
        let eth_value = tokens::get_eth_value_of_reth(self, balance, &opts).await?;

        Ok(RethBalance {
            address: display_address(address),
            balance: balance.into(),
            eth_value: eth_value.into(),
        })
    }

    async fn convert(
        &self,
        amount: U256,
        direction: ConversionDirection,
    ) -> Result<RethConversion> {
        let opts = CallOpts::default();
        let amount_out = match direction {
            ConversionDirection::RethToEth => {
                tokens::get_eth_value_of_reth(self, amount, &opts).await?
            }
            ConversionDirection::EthToReth => {
                tokens::get_reth_value_of_eth(self, amount, &opts).await?
            }
        };

        Ok(RethConversion { direction, amount_in: amount.into(), amount_out: amount_out.into() })
    }

    async fn node_deposit_credit(&self, node_address: Address) -> Result<NodeDepositCredit> {
        let credit =
            node::get_node_deposit_credit(self, node_address, &CallOpts::default()).await?;

        Ok(NodeDepositCredit { node_address: display_address(node_address), credit: credit.into() })
    }

    async fn estimate_burn(&self, amount: U256) -> Result<GasEstimate> {
        let from = self.client().require_signer()?;
        let gas = tokens::estimate_burn_reth_gas(self, amount, &TransactOpts::default()).await?;

        Ok(GasEstimate { operation: "burn_reth".to_string(), from: display_address(from), gas })
    }

    async fn estimate_transfer(&self, to: Address, amount: U256) -> Result<GasEstimate> {
        let from = self.client().require_signer()?;
        let gas =
            tokens::estimate_transfer_reth_gas(self, to, amount, &TransactOpts::default()).await?;

        Ok(GasEstimate {
            operation: "transfer_reth".to_string(),
            from: display_address(from),
            gas,
        })
    }
}
