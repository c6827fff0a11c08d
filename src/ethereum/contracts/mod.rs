//! Smart contract bindings.

pub mod erc20;
pub mod rocket_node_deposit;
pub mod rocket_storage;
pub mod rocket_token_reth;

pub use erc20::IERC20;
pub use rocket_node_deposit::IRocketNodeDeposit;
pub use rocket_storage::IRocketStorage;
pub use rocket_token_reth::IRocketTokenRETH;
