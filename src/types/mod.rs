//! Type definitions module.
//!
//! Contains shared types used across the application.

pub mod gas;
pub mod opts;
pub mod reth;
pub mod units;
pub mod validator;

pub use gas::GasInfo;
pub use opts::{CallOpts, TransactOpts};
pub use reth::*;
pub use units::{eth_to_wei, format_units, parse_units, wei_to_eth};
pub use validator::{ValidatorPubkey, ValidatorSignature};
