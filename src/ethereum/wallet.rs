//! Node wallet used to sign deposit and rETH transactions.

use alloy::{primitives::Address, signers::local::PrivateKeySigner};

use crate::error::{AppError, Result};

/// Local signing wallet.
///
/// `Debug` prints the address only.
#[derive(Clone)]
pub struct WalletManager {
    signer: PrivateKeySigner,
}

impl WalletManager {
    /// Create a wallet from a hex private key, with or without a `0x` prefix.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        let key = private_key.trim();
        let key = key.strip_prefix("0x").unwrap_or(key);

        let signer: PrivateKeySigner =
            key.parse().map_err(|e: alloy::signers::local::LocalSignerError| {
                AppError::Wallet(e.to_string())
            })?;

        tracing::info!(address = %signer.address(), "Node wallet loaded");

        Ok(Self { signer })
    }

    /// Load the wallet from an optional configured key.
    ///
    /// Returns `Ok(None)` when no key is configured.
    pub fn from_optional_key(private_key: Option<&str>) -> Result<Option<Self>> {
        private_key.map(Self::from_private_key).transpose()
    }

    /// Get the wallet address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get the signer for transaction signing.
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}

impl std::fmt::Debug for WalletManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletManager").field("address", &self.address()).finish()
    }
}
