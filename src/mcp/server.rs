//! MCP server implementation.

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use rmcp::{
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{Implementation, ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::Serialize;

use crate::{
    config::Config,
    error::AppError,
    ethereum::constants::ETH_DECIMALS,
    rocketpool::{RocketPool, RocketPoolApi},
    types::{parse_units, ConversionDirection},
};

/// Rocket Pool MCP Server.
///
/// Provides read-only tools for rETH accounting, node deposit credit and
/// gas estimates. Nothing is broadcast on-chain.
#[derive(Clone)]
pub struct RocketPoolServer {
    api: Arc<dyn RocketPoolApi>,
    tool_router: ToolRouter<Self>,
}

impl RocketPoolServer {
    /// Create a server backed by the deployment described in `config`.
    ///
    /// Note: no network calls are made during startup. Contract addresses
    /// are resolved when the first tool is invoked.
    pub fn new(config: Config) -> Result<Self, AppError> {
        tracing::info!("Initializing Rocket Pool MCP Server");

        let rocket_pool = RocketPool::from_config(&config)?;

        tracing::info!(
            rocket_storage = %config.rocket_storage_address,
            signer = ?rocket_pool.client().signer(),
            "Rocket Pool MCP Server initialized successfully"
        );

        Ok(Self::with_api(Arc::new(rocket_pool)))
    }

    /// Create a server on top of any [`RocketPoolApi`] implementation.
    pub fn with_api(api: Arc<dyn RocketPoolApi>) -> Self {
        Self { api, tool_router: Self::tool_router() }
    }
}

/// Input parameters for the get_reth_balance tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetRethBalanceInput {
    /// Account address to query (0x...).
    pub address: String,
}

/// Input parameters for the convert_reth tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct ConvertRethInput {
    /// Amount to convert (human-readable, e.g., "1.5").
    pub amount: String,
    /// "reth_to_eth" or "eth_to_reth". Defaults to "reth_to_eth".
    #[serde(default)]
    pub direction: Option<String>,
}

/// Input parameters for the get_node_deposit_credit tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct GetNodeDepositCreditInput {
    /// Node operator address (0x...).
    pub node_address: String,
}

/// Input parameters for the estimate_reth_burn tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct EstimateRethBurnInput {
    /// rETH amount to burn (human-readable, e.g., "0.5").
    pub amount: String,
}

/// Input parameters for the estimate_reth_transfer tool.
#[derive(Debug, Clone, serde::Deserialize, schemars::JsonSchema)]
pub struct EstimateRethTransferInput {
    /// Recipient address (0x...).
    pub to: String,
    /// rETH amount to transfer (human-readable, e.g., "0.5").
    pub amount: String,
}

/// Parse and validate an Ethereum address from a string.
fn parse_address(s: &str) -> Result<Address, AppError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(AppError::InvalidAddress("Address cannot be empty".to_string()));
    }

    if !trimmed.starts_with("0x") && !trimmed.starts_with("0X") {
        return Err(AppError::InvalidAddress(format!("Address must start with '0x': {}", s)));
    }

    // 0x + 40 hex chars
    if trimmed.len() != 42 {
        return Err(AppError::InvalidAddress(format!(
            "Address must be 42 characters (0x + 40 hex chars), got {}: {}",
            trimmed.len(),
            s
        )));
    }

    trimmed
        .parse::<Address>()
        .map_err(|e| AppError::InvalidAddress(format!("Invalid address format '{}': {}", s, e)))
}

/// Parse a positive ETH/rETH amount into base units.
fn parse_amount(s: &str) -> Result<U256, McpError> {
    let amount = parse_units(s, ETH_DECIMALS)?;
    if amount == U256::ZERO {
        return Err(McpError::invalid_params("Amount must be greater than zero", None));
    }
    Ok(amount)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value).map_err(|e| McpError::internal_error(e.to_string(), None))
}

#[tool_router]
impl RocketPoolServer {
    /// Get the rETH exchange rate, collateral rate, total collateral and supply.
    #[tool(
        description = "Get rETH contract accounting: ETH exchange rate, collateral rate, total collateral, total supply and contract ETH balance"
    )]
    pub async fn get_reth_stats(&self) -> Result<String, McpError> {
        tracing::info!("get_reth_stats called");

        let stats = self.api.reth_stats().await?;
        to_json(&stats)
    }

    /// Query the rETH balance of an account and its ETH value.
    #[tool(description = "Query the rETH balance of an address and its current ETH value")]
    pub async fn get_reth_balance(
        &self,
        Parameters(input): Parameters<GetRethBalanceInput>,
    ) -> Result<String, McpError> {
        tracing::info!(address = %input.address, "get_reth_balance called");

        let address = parse_address(&input.address)?;
        let balance = self.api.reth_balance(address).await?;
        to_json(&balance)
    }

    /// Convert between ETH and rETH using the contract's exchange rate.
    #[tool(
        description = "Convert an amount between ETH and rETH using the on-chain rETH exchange rate. Direction: reth_to_eth (default) or eth_to_reth."
    )]
    pub async fn convert_reth(
        &self,
        Parameters(input): Parameters<ConvertRethInput>,
    ) -> Result<String, McpError> {
        tracing::info!(
            amount = %input.amount,
            direction = ?input.direction,
            "convert_reth called"
        );

        let amount = parse_amount(&input.amount)?;
        let direction = input
            .direction
            .as_ref()
            .map(|s| s.parse::<ConversionDirection>().map_err(|e| McpError::invalid_params(e, None)))
            .transpose()?
            .unwrap_or_default();

        let conversion = self.api.convert(amount, direction).await?;
        to_json(&conversion)
    }

    /// Query a node's deposit credit.
    #[tool(
        description = "Get the ETH held in a Rocket Pool node's deposit credit bank, usable to reduce the ETH required for future deposits"
    )]
    pub async fn get_node_deposit_credit(
        &self,
        Parameters(input): Parameters<GetNodeDepositCreditInput>,
    ) -> Result<String, McpError> {
        tracing::info!(node = %input.node_address, "get_node_deposit_credit called");

        let node_address = parse_address(&input.node_address)?;
        let credit = self.api.node_deposit_credit(node_address).await?;
        to_json(&credit)
    }

    /// Estimate the gas needed to burn rETH from the configured wallet.
    #[tool(
        description = "Estimate the gas needed to burn rETH for ETH from the configured wallet. The transaction is NOT sent."
    )]
    pub async fn estimate_reth_burn(
        &self,
        Parameters(input): Parameters<EstimateRethBurnInput>,
    ) -> Result<String, McpError> {
        tracing::info!(amount = %input.amount, "estimate_reth_burn called");

        let amount = parse_amount(&input.amount)?;
        let estimate = self.api.estimate_burn(amount).await?;
        to_json(&estimate)
    }

    /// Estimate the gas needed to transfer rETH from the configured wallet.
    #[tool(
        description = "Estimate the gas needed to transfer rETH from the configured wallet. The transaction is NOT sent."
    )]
    pub async fn estimate_reth_transfer(
        &self,
        Parameters(input): Parameters<EstimateRethTransferInput>,
    ) -> Result<String, McpError> {
        tracing::info!(to = %input.to, amount = %input.amount, "estimate_reth_transfer called");

        let to = parse_address(&input.to)?;
        let amount = parse_amount(&input.amount)?;
        let estimate = self.api.estimate_transfer(to, amount).await?;
        to_json(&estimate)
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for RocketPoolServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "rocketpool-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Rocket Pool MCP Server. Provides rETH exchange rate, collateral and balance \
                 queries, node deposit credit lookups, and gas estimates for rETH burns and \
                 transfers."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::Result,
        types::{
            display_address, Amount, GasEstimate, GasInfo, NodeDepositCredit, RethBalance,
            RethConversion, RethStats,
        },
    };
    use async_trait::async_trait;
    use rmcp::model::ErrorCode;

    /// Fixed-rate stand-in for a deployment: 1 rETH = 1.1 ETH.
    struct MockApi {
        signer: Option<Address>,
    }

    const RATE_NUM: u64 = 11;
    const RATE_DEN: u64 = 10;

    #[async_trait]
    impl RocketPoolApi for MockApi {
        async fn reth_stats(&self) -> Result<RethStats> {
            Ok(RethStats {
                contract: display_address(Address::repeat_byte(0xae)),
                exchange_rate: "1.1".to_string(),
                collateral_rate: "0.05".to_string(),
                total_collateral: U256::from(5u64).into(),
                total_supply: U256::from(100u64).into(),
                contract_eth_balance: U256::from(2u64).into(),
            })
        }

        async fn reth_balance(&self, address: Address) -> Result<RethBalance> {
            let balance = U256::from(10u64).pow(U256::from(18u64));
            Ok(RethBalance {
                address: display_address(address),
                balance: balance.into(),
                eth_value: (balance * U256::from(RATE_NUM) / U256::from(RATE_DEN)).into(),
            })
        }

        async fn convert(
            &self,
            amount: U256,
            direction: ConversionDirection,
        ) -> Result<RethConversion> {
            let amount_out = match direction {
                ConversionDirection::RethToEth => amount * U256::from(RATE_NUM) / U256::from(RATE_DEN),
                ConversionDirection::EthToReth => amount * U256::from(RATE_DEN) / U256::from(RATE_NUM),
            };
            Ok(RethConversion { direction, amount_in: amount.into(), amount_out: amount_out.into() })
        }

        async fn node_deposit_credit(&self, node_address: Address) -> Result<NodeDepositCredit> {
            Ok(NodeDepositCredit {
                node_address: display_address(node_address),
                credit: Amount::from(U256::ZERO),
            })
        }

        async fn estimate_burn(&self, _amount: U256) -> Result<GasEstimate> {
            let from = self.signer.ok_or_else(|| AppError::Wallet("no signer".into()))?;
            Ok(GasEstimate {
                operation: "burn_reth".to_string(),
                from: display_address(from),
                gas: GasInfo::from_estimate(60_000)?,
            })
        }

        async fn estimate_transfer(&self, _to: Address, _amount: U256) -> Result<GasEstimate> {
            let from = self.signer.ok_or_else(|| AppError::Wallet("no signer".into()))?;
            Ok(GasEstimate {
                operation: "transfer_reth".to_string(),
                from: display_address(from),
                gas: GasInfo::from_estimate(52_000)?,
            })
        }
    }

    fn server(signer: Option<Address>) -> RocketPoolServer {
        RocketPoolServer::with_api(Arc::new(MockApi { signer }))
    }

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_address() {
        assert!(parse_address("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045").is_ok());
        assert!(parse_address("").is_err());
        assert!(parse_address("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045").is_err());
        assert!(parse_address("0x1234").is_err());
        assert!(parse_address("0xZZZZ6BF26964aF9D7eEd9e03E53415D37aA96045").is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1").unwrap(), U256::from(10u64).pow(U256::from(18u64)));
        assert_eq!(parse_amount("0").unwrap_err().code, ErrorCode::INVALID_PARAMS);
        assert_eq!(parse_amount("-1").unwrap_err().code, ErrorCode::INVALID_PARAMS);
        assert_eq!(parse_amount("0x10").unwrap_err().code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_get_reth_stats() {
        let json = server(None).get_reth_stats().await.unwrap();
        let parsed = parse(&json);

        assert_eq!(parsed["exchange_rate"], "1.1");
        assert_eq!(parsed["collateral_rate"], "0.05");
        assert_eq!(parsed["total_supply"]["raw"], "100");
        assert!(parsed.get("contract_eth_balance").is_some());
    }

    #[tokio::test]
    async fn test_get_reth_balance() {
        let input = GetRethBalanceInput {
            address: "0x0000000000000000000000000000000000000001".to_string(),
        };
        let json = server(None).get_reth_balance(Parameters(input)).await.unwrap();
        let parsed = parse(&json);

        assert_eq!(parsed["balance"]["formatted"], "1");
        assert_eq!(parsed["eth_value"]["formatted"], "1.1");
    }

    #[tokio::test]
    async fn test_get_reth_balance_invalid_address() {
        let input = GetRethBalanceInput { address: "not-an-address".to_string() };
        let err = server(None).get_reth_balance(Parameters(input)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_convert_reth_default_direction() {
        let input = ConvertRethInput { amount: "2".to_string(), direction: None };
        let json = server(None).convert_reth(Parameters(input)).await.unwrap();
        let parsed = parse(&json);

        assert_eq!(parsed["direction"], "reth_to_eth");
        assert_eq!(parsed["amount_in"]["formatted"], "2");
        assert_eq!(parsed["amount_out"]["formatted"], "2.2");
    }

    #[tokio::test]
    async fn test_convert_reth_eth_to_reth() {
        let input =
            ConvertRethInput { amount: "1.1".to_string(), direction: Some("eth_to_reth".into()) };
        let json = server(None).convert_reth(Parameters(input)).await.unwrap();
        let parsed = parse(&json);

        assert_eq!(parsed["direction"], "eth_to_reth");
        assert_eq!(parsed["amount_out"]["formatted"], "1");
    }

    #[tokio::test]
    async fn test_convert_reth_invalid_direction() {
        let input = ConvertRethInput { amount: "1".to_string(), direction: Some("up".into()) };
        let err = server(None).convert_reth(Parameters(input)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_get_node_deposit_credit() {
        let input = GetNodeDepositCreditInput {
            node_address: "0x0000000000000000000000000000000000000005".to_string(),
        };
        let json = server(None).get_node_deposit_credit(Parameters(input)).await.unwrap();
        let parsed = parse(&json);

        assert_eq!(parsed["node_address"], "0x0000000000000000000000000000000000000005");
        assert_eq!(parsed["credit"]["raw"], "0");
    }

    #[tokio::test]
    async fn test_estimate_reth_burn() {
        let signer = Address::repeat_byte(0x11);
        let input = EstimateRethBurnInput { amount: "0.5".to_string() };
        let json = server(Some(signer)).estimate_reth_burn(Parameters(input)).await.unwrap();
        let parsed = parse(&json);

        assert_eq!(parsed["operation"], "burn_reth");
        assert_eq!(parsed["estimated_gas_limit"], 60_000);
        assert_eq!(parsed["safe_gas_limit"], 90_000);
    }

    #[tokio::test]
    async fn test_estimate_reth_burn_without_wallet() {
        let input = EstimateRethBurnInput { amount: "0.5".to_string() };
        let err = server(None).estimate_reth_burn(Parameters(input)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_estimate_reth_transfer() {
        let signer = Address::repeat_byte(0x11);
        let input = EstimateRethTransferInput {
            to: "0x0000000000000000000000000000000000000002".to_string(),
            amount: "1".to_string(),
        };
        let json = server(Some(signer)).estimate_reth_transfer(Parameters(input)).await.unwrap();
        let parsed = parse(&json);

        assert_eq!(parsed["operation"], "transfer_reth");
        assert_eq!(parsed["safe_gas_limit"], 78_000);
    }

    #[test]
    fn test_server_info() {
        let info = server(None).get_info();
        assert_eq!(info.server_info.name, "rocketpool-mcp");
        assert!(!info.server_info.version.is_empty());
    }
}
