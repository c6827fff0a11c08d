//! Token contract bindings.

pub mod erc20;
pub mod reth;

pub use reth::*;
