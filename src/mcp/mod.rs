//! MCP server module.
//!
//! Exposes read-only Rocket Pool queries as MCP tools.

pub mod server;

pub use server::RocketPoolServer;
pub use server::{
    ConvertRethInput, EstimateRethBurnInput, EstimateRethTransferInput,
    GetNodeDepositCreditInput, GetRethBalanceInput,
};
