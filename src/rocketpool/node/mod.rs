//! Node operator contract bindings.

pub mod deposit;

pub use deposit::{deposit, estimate_deposit_gas, get_node_deposit_credit, DepositParams};
