//! Response types for rETH and node deposit queries.

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::{
    ethereum::constants::ETH_DECIMALS,
    types::{format_units, GasInfo},
};

/// An on-chain amount in both base units and ether-style units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Human-readable amount (18 decimals).
    pub formatted: String,
    /// Raw amount in base units (wei).
    pub raw: String,
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self { formatted: format_units(value, ETH_DECIMALS), raw: value.to_string() }
    }
}

/// Snapshot of the rETH contract's on-chain accounting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RethStats {
    /// rETH contract address.
    pub contract: String,
    /// ETH value of 1 rETH.
    pub exchange_rate: String,
    /// Share of rETH supply backed by collateral held in the contract.
    pub collateral_rate: String,
    /// ETH collateral available for burns.
    pub total_collateral: Amount,
    /// Total rETH supply.
    pub total_supply: Amount,
    /// ETH held directly by the rETH contract.
    pub contract_eth_balance: Amount,
}

/// rETH balance of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RethBalance {
    /// Account address.
    pub address: String,
    /// rETH balance.
    pub balance: Amount,
    /// ETH value of the balance at the current exchange rate.
    pub eth_value: Amount,
}

/// Direction of an ETH / rETH conversion quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversionDirection {
    /// rETH amount in, ETH value out.
    #[default]
    RethToEth,
    /// ETH amount in, rETH value out.
    EthToReth,
}

impl std::str::FromStr for ConversionDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "reth_to_eth" => Ok(ConversionDirection::RethToEth),
            "eth_to_reth" => Ok(ConversionDirection::EthToReth),
            _ => Err(format!(
                "Invalid conversion direction: {} (use reth_to_eth or eth_to_reth)",
                s
            )),
        }
    }
}

/// Result of converting between ETH and rETH via the contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RethConversion {
    /// Conversion direction.
    pub direction: ConversionDirection,
    /// Amount supplied.
    pub amount_in: Amount,
    /// Amount the contract reports in the other denomination.
    pub amount_out: Amount,
}

/// ETH held in a node's deposit credit bank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDepositCredit {
    /// Node address.
    pub node_address: String,
    /// Credit balance.
    pub credit: Amount,
}

/// Gas estimate for a transaction the node wallet would send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GasEstimate {
    /// Operation that was estimated.
    pub operation: String,
    /// Sender used for the estimate.
    pub from: String,
    /// Gas figures.
    #[serde(flatten)]
    pub gas: GasInfo,
}

/// Format an address the way responses show it.
pub fn display_address(address: Address) -> String {
    format!("{address:?}")
}
