//! Gas estimation results.

use serde::{Deserialize, Serialize};

use crate::{
    error::{AppError, Result},
    ethereum::constants::{GAS_LIMIT_MULTIPLIER, MAX_GAS_LIMIT},
};

/// Gas estimate for a transaction, with headroom for state changes
/// between estimation and inclusion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GasInfo {
    /// Gas reported by `eth_estimateGas`.
    pub estimated_gas_limit: u64,
    /// Estimate scaled by [`GAS_LIMIT_MULTIPLIER`], capped at [`MAX_GAS_LIMIT`].
    pub safe_gas_limit: u64,
}

impl GasInfo {
    /// Derive the safe limit from a raw estimate.
    pub fn from_estimate(estimated_gas_limit: u64) -> Result<Self> {
        if estimated_gas_limit > MAX_GAS_LIMIT {
            return Err(AppError::GasLimitExceeded {
                estimated: estimated_gas_limit,
                max: MAX_GAS_LIMIT,
            });
        }

        let safe_gas_limit =
            ((estimated_gas_limit as f64 * GAS_LIMIT_MULTIPLIER) as u64).min(MAX_GAS_LIMIT);

        Ok(Self { estimated_gas_limit, safe_gas_limit })
    }
}
