//! Common utilities for integration tests.

#![allow(dead_code)]

use rocketpool_mcp::{Config, RocketPool, RocketPoolServer};

/// Load configuration from the environment, if an RPC endpoint is set.
pub fn test_config() -> Option<Config> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let rpc_url = std::env::var("ETHEREUM_RPC_URL").ok()?;
    if rpc_url.is_empty() {
        return None;
    }

    let mut config = Config::from_env().ok()?;
    config.log_level = "warn".to_string();
    Some(config)
}

/// Helper to create a Rocket Pool handle from environment variables.
pub fn create_test_pool() -> Option<RocketPool> {
    RocketPool::from_config(&test_config()?).ok()
}

/// Helper to create a test server from environment variables.
pub fn create_test_server() -> Option<RocketPoolServer> {
    RocketPoolServer::new(test_config()?).ok()
}

/// Skip test if the Rocket Pool handle cannot be created (missing env vars).
#[macro_export]
macro_rules! skip_if_no_rpc {
    () => {
        match common::create_test_pool() {
            Some(rp) => rp,
            None => {
                eprintln!("Skipping test: ETHEREUM_RPC_URL not set");
                return;
            }
        }
    };
}

/// Skip test if server cannot be created (missing env vars).
#[macro_export]
macro_rules! skip_if_no_server {
    () => {
        match common::create_test_server() {
            Some(server) => server,
            None => {
                eprintln!("Skipping test: ETHEREUM_RPC_URL not set");
                return;
            }
        }
    };
}
