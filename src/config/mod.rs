//! Configuration management module.
//!
//! Handles loading configuration from environment variables.

use std::{env, time::Duration};

use alloy::primitives::Address;

use crate::{
    error::AppError,
    ethereum::constants::{DEFAULT_CONTRACT_CACHE_TTL, MAINNET_ROCKET_STORAGE_ADDRESS},
};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ethereum JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Private key for signing (hex string, optional 0x prefix).
    ///
    /// Read-only queries work without it.
    pub private_key: Option<String>,
    /// Address of the RocketStorage registry contract.
    pub rocket_storage_address: Address,
    /// How long a resolved contract address stays cached.
    pub contract_cache_ttl: Duration,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Create a configuration for the given RPC endpoint with mainnet defaults.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            private_key: None,
            rocket_storage_address: MAINNET_ROCKET_STORAGE_ADDRESS,
            contract_cache_ttl: DEFAULT_CONTRACT_CACHE_TTL,
            log_level: "info".to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ETHEREUM_RPC_URL`: Ethereum JSON-RPC endpoint
    ///
    /// Optional environment variables:
    /// - `ETHEREUM_PRIVATE_KEY`: Private key used to sign transactions
    /// - `ROCKET_STORAGE_ADDRESS`: RocketStorage address (default: mainnet deployment)
    /// - `CONTRACT_CACHE_TTL_SECS`: Contract address cache TTL (default: 300)
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let rpc_url = env::var("ETHEREUM_RPC_URL").map_err(|_| {
            AppError::Config("ETHEREUM_RPC_URL environment variable not set".into())
        })?;

        let private_key = env::var("ETHEREUM_PRIVATE_KEY").ok().filter(|k| !k.trim().is_empty());

        let rocket_storage_address = match env::var("ROCKET_STORAGE_ADDRESS") {
            Ok(raw) => raw.trim().parse::<Address>().map_err(|e| {
                AppError::Config(format!("Invalid ROCKET_STORAGE_ADDRESS '{}': {}", raw, e))
            })?,
            Err(_) => MAINNET_ROCKET_STORAGE_ADDRESS,
        };

        let contract_cache_ttl = match env::var("CONTRACT_CACHE_TTL_SECS") {
            Ok(raw) => Duration::from_secs(raw.trim().parse::<u64>().map_err(|e| {
                AppError::Config(format!("Invalid CONTRACT_CACHE_TTL_SECS '{}': {}", raw, e))
            })?),
            Err(_) => DEFAULT_CONTRACT_CACHE_TTL,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self { rpc_url, private_key, rocket_storage_address, contract_cache_ttl, log_level })
    }

    /// Set the signing key.
    pub fn with_private_key(mut self, private_key: impl Into<String>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    /// Point the bindings at a different RocketStorage deployment.
    pub fn with_rocket_storage(mut self, address: Address) -> Self {
        self.rocket_storage_address = address;
        self
    }
}
