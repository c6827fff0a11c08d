//! Rocket Pool bindings and MCP server.
//!
//! Typed async bindings for Rocket Pool network contracts, resolved by name
//! through RocketStorage, plus a Model Context Protocol server exposing
//! read-only rETH and node queries.
//!
//! # Features
//!
//! - **Node deposits**: Make node deposits, estimate their gas, and query deposit credit
//! - **rETH**: Supply, balances, ETH/rETH conversion, exchange and collateral rates, transfers and burns
//! - **Contract registry**: Name-based address resolution with a per-name cache
//!
//! # Example
//!
//! ```rust,ignore
//! use rocketpool_mcp::{rocketpool::tokens, types::CallOpts, Config, RocketPool};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let rp = RocketPool::from_config(&config)?;
//!     let rate = tokens::get_reth_exchange_rate(&rp, &CallOpts::default()).await?;
//!     println!("1 rETH = {rate} ETH");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod ethereum;
pub mod mcp;
pub mod rocketpool;
pub mod types;

pub use config::Config;
pub use error::{AppError, Result};
pub use ethereum::constants::*;
pub use mcp::RocketPoolServer;
pub use rocketpool::RocketPool;
