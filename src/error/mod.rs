//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions.

use alloy::primitives::TxHash;
use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport errors.
    #[error("Transport error: {0}")]
    Transport(String),

    /// A contract call or transaction failed.
    ///
    /// `context` names the operation that failed; `source` is the error
    /// reported by the RPC/ABI layer.
    #[error("{context}: {source}")]
    Contract {
        /// Static description of the failed operation.
        context: &'static str,
        /// Underlying contract error.
        #[source]
        source: alloy::contract::Error,
    },

    /// A contract name resolved to the zero address in RocketStorage.
    #[error("Contract not found: {0}")]
    ContractNotFound(String),

    /// Invalid Ethereum address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Wallet-related errors.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric overflow during conversion.
    #[error("Numeric overflow: {0}")]
    NumericOverflow(String),

    /// Estimated gas is above the block gas limit we are willing to use.
    #[error("Estimated gas of {estimated} is greater than the maximum gas limit of {max}")]
    GasLimitExceeded { estimated: u64, max: u64 },

    /// Transaction was mined but reverted.
    #[error("Transaction {0:#x} reverted")]
    TransactionReverted(TxHash),
}

impl AppError {
    /// Build a mapper that wraps an alloy contract error with a static context.
    ///
    /// Intended for `.map_err(AppError::contract("Could not burn rETH"))`.
    pub fn contract(context: &'static str) -> impl FnOnce(alloy::contract::Error) -> Self {
        move |source| AppError::Contract { context, source }
    }
}

impl From<alloy::transports::TransportError> for AppError {
    fn from(err: alloy::transports::TransportError) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<alloy::signers::local::LocalSignerError> for AppError {
    fn from(err: alloy::signers::local::LocalSignerError) -> Self {
        AppError::Wallet(err.to_string())
    }
}

impl From<alloy::hex::FromHexError> for AppError {
    fn from(err: alloy::hex::FromHexError) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<AppError> for McpError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::InvalidAddress(_) | AppError::Parse(_) | AppError::NumericOverflow(_) => {
                McpError::invalid_params(err.to_string(), None)
            }
            AppError::Config(_) | AppError::Wallet(_) => {
                McpError::invalid_request(err.to_string(), None)
            }
            _ => McpError::internal_error(err.to_string(), None),
        }
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::b256;
    use rmcp::model::ErrorCode;
    use std::error::Error as _;

    fn unknown_function() -> alloy::contract::Error {
        alloy::contract::Error::UnknownFunction("getExchangeRate".to_string())
    }

    #[test]
    fn test_contract_error_display_has_context_and_cause() {
        let err = AppError::contract("Could not get rETH exchange rate")(unknown_function());
        let msg = err.to_string();
        assert!(msg.starts_with("Could not get rETH exchange rate: "));
        assert!(msg.contains("getExchangeRate"));
    }

    #[test]
    fn test_contract_error_keeps_source() {
        let err = AppError::contract("Could not burn rETH")(unknown_function());
        assert!(err.source().is_some());
        match err {
            AppError::Contract { context, .. } => assert_eq!(context, "Could not burn rETH"),
            _ => panic!("Expected Contract error"),
        }
    }

    #[test]
    fn test_contract_not_found_display() {
        let err = AppError::ContractNotFound("rocketTokenRETH".to_string());
        assert_eq!(err.to_string(), "Contract not found: rocketTokenRETH");
    }

    #[test]
    fn test_gas_limit_exceeded_display() {
        let err = AppError::GasLimitExceeded { estimated: 40_000_000, max: 30_000_000 };
        assert_eq!(
            err.to_string(),
            "Estimated gas of 40000000 is greater than the maximum gas limit of 30000000"
        );
    }

    #[test]
    fn test_transaction_reverted_display() {
        let hash = b256!("00000000000000000000000000000000000000000000000000000000000000ab");
        let err = AppError::TransactionReverted(hash);
        assert_eq!(
            err.to_string(),
            "Transaction 0x00000000000000000000000000000000000000000000000000000000000000ab reverted"
        );
    }

    #[test]
    fn test_app_error_config_display() {
        let err = AppError::Config("Missing RPC URL".to_string());
        assert_eq!(err.to_string(), "Configuration error: Missing RPC URL");
    }

    #[test]
    fn test_app_error_to_mcp_error_invalid_params() {
        let err = AppError::InvalidAddress("bad address".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code, ErrorCode::INVALID_PARAMS);

        let err = AppError::Parse("parse failed".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code, ErrorCode::INVALID_PARAMS);

        let err = AppError::NumericOverflow("overflow".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_app_error_to_mcp_error_invalid_request() {
        let err = AppError::Config("config error".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code, ErrorCode::INVALID_REQUEST);

        let err = AppError::Wallet("no signer".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code, ErrorCode::INVALID_REQUEST);
    }

    #[test]
    fn test_app_error_to_mcp_error_internal_error() {
        let err = AppError::contract("Could not get rETH total supply")(unknown_function());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code, ErrorCode::INTERNAL_ERROR);
        assert!(mcp_err.message.contains("Could not get rETH total supply"));

        let err = AppError::ContractNotFound("rocketNodeDeposit".to_string());
        let mcp_err: McpError = err.into();
        assert_eq!(mcp_err.code, ErrorCode::INTERNAL_ERROR);
        assert!(mcp_err.data.is_none());
    }

    #[test]
    fn test_from_hex_error() {
        let hex_err = alloy::hex::decode("zz").unwrap_err();
        let app_err: AppError = hex_err.into();
        assert!(matches!(app_err, AppError::Parse(_)));
    }
}
