//! Per-call options for reads and transactions.

use alloy::{
    contract::{CallBuilder, CallDecoder},
    eips::BlockId,
    primitives::U256,
    providers::Provider,
};

/// Options for read-only calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallOpts {
    /// Block to run the call against. `None` means latest.
    pub block: Option<BlockId>,
}

impl CallOpts {
    /// Pin calls to a specific block.
    pub fn at_block(block: impl Into<BlockId>) -> Self {
        Self { block: Some(block.into()) }
    }

    /// Apply the options to a call.
    pub(crate) fn apply<P, D>(&self, call: CallBuilder<P, D>) -> CallBuilder<P, D>
    where
        P: Provider,
        D: CallDecoder,
    {
        match self.block {
            Some(block) => call.block(block),
            None => call,
        }
    }
}

/// Options for state-changing transactions.
///
/// Unset fields are filled in by the provider (nonce, fees, gas limit).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactOpts {
    /// ETH sent with the transaction, in wei.
    pub value: Option<U256>,
    /// Explicit gas limit, usually [`GasInfo::safe_gas_limit`](crate::types::GasInfo).
    pub gas_limit: Option<u64>,
    /// EIP-1559 max fee per gas, in wei.
    pub max_fee_per_gas: Option<u128>,
    /// EIP-1559 max priority fee per gas, in wei.
    pub max_priority_fee_per_gas: Option<u128>,
    /// Explicit nonce.
    pub nonce: Option<u64>,
}

impl TransactOpts {
    /// Send `value` wei with the transaction.
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = Some(value);
        self
    }

    /// Use an explicit gas limit.
    pub fn with_gas_limit(mut self, gas_limit: u64) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    /// Apply the options to a call.
    pub(crate) fn apply<P, D>(&self, mut call: CallBuilder<P, D>) -> CallBuilder<P, D>
    where
        P: Provider,
        D: CallDecoder,
    {
        if let Some(value) = self.value {
            call = call.value(value);
        }
        if let Some(gas) = self.gas_limit {
            call = call.gas(gas);
        }
        if let Some(max_fee) = self.max_fee_per_gas {
            call = call.max_fee_per_gas(max_fee);
        }
        if let Some(priority_fee) = self.max_priority_fee_per_gas {
            call = call.max_priority_fee_per_gas(priority_fee);
        }
        if let Some(nonce) = self.nonce {
            call = call.nonce(nonce);
        }
        call
    }
}
