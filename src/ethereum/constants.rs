//! Ethereum network constants.
//!
//! Contains chain IDs, the RocketStorage deployment and Rocket Pool contract names.

use std::time::Duration;

use alloy::primitives::{address, Address};

// ============================================================================
// Chain IDs
// ============================================================================

/// Ethereum Mainnet chain ID.
pub const ETHEREUM_MAINNET_CHAIN_ID: u64 = 1;

// ============================================================================
// Rocket Pool Registry
// ============================================================================

/// RocketStorage address on Ethereum Mainnet.
pub const MAINNET_ROCKET_STORAGE_ADDRESS: Address =
    address!("1d8f8f00cfa6758d7be78336684788fb0ee0fa46");

/// Prefix of the RocketStorage key holding a contract's current address.
pub const CONTRACT_ADDRESS_KEY_PREFIX: &str = "contract.address";

/// Default lifetime of a resolved contract address.
pub const DEFAULT_CONTRACT_CACHE_TTL: Duration = Duration::from_secs(300);

// ============================================================================
// Rocket Pool Contract Names
// ============================================================================

/// Name of the node deposit contract in RocketStorage.
pub const ROCKET_NODE_DEPOSIT: &str = "rocketNodeDeposit";

/// Name of the rETH token contract in RocketStorage.
pub const ROCKET_TOKEN_RETH: &str = "rocketTokenRETH";

// ============================================================================
// Gas
// ============================================================================

/// Multiplier applied to a gas estimate to get a safe gas limit.
pub const GAS_LIMIT_MULTIPLIER: f64 = 1.5;

/// Largest gas limit a transaction may request.
pub const MAX_GAS_LIMIT: u64 = 30_000_000;

/// Number of decimals used by ETH and rETH.
pub const ETH_DECIMALS: u8 = 18;

/// How long to wait for a submitted transaction to be mined.
pub const TX_RECEIPT_TIMEOUT: Duration = Duration::from_secs(120);
