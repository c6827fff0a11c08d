//! Ethereum RPC client.

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    transports::http::reqwest::Url,
};
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::{
    error::{AppError, Result},
    ethereum::WalletManager,
};

/// Type alias for the type-erased HTTP provider.
pub type HttpProvider = DynProvider;

/// Ethereum RPC client wrapper with lazy initialization.
///
/// When built with a wallet, transactions sent through the provider are
/// signed locally by that wallet.
#[derive(Clone)]
pub struct EthereumClient {
    /// The underlying provider.
    provider: HttpProvider,
    /// RPC URL for logging.
    rpc_url: String,
    /// Address of the signing wallet, if any.
    signer: Option<Address>,
    /// Lazily initialized chain ID.
    chain_id: Arc<OnceCell<u64>>,
}

impl EthereumClient {
    /// Create a read-only Ethereum client.
    ///
    /// Note: This does NOT make any network calls. The connection is
    /// established lazily when the first operation is performed.
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url = parse_rpc_url(rpc_url)?;
        let provider = ProviderBuilder::new().connect_http(url).erased();

        tracing::info!(rpc_url = %rpc_url, "Ethereum client created (read-only)");

        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
            signer: None,
            chain_id: Arc::new(OnceCell::new()),
        })
    }

    /// Create an Ethereum client that signs transactions with `wallet`.
    pub fn with_wallet(rpc_url: &str, wallet: &WalletManager) -> Result<Self> {
        let url = parse_rpc_url(rpc_url)?;
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(wallet.signer().clone()))
            .connect_http(url)
            .erased();

        tracing::info!(
            rpc_url = %rpc_url,
            signer = %wallet.address(),
            "Ethereum client created with signer"
        );

        Ok(Self {
            provider,
            rpc_url: rpc_url.to_string(),
            signer: Some(wallet.address()),
            chain_id: Arc::new(OnceCell::new()),
        })
    }

    /// Wrap an already-built provider.
    ///
    /// `signer` must be the address the provider signs for, if any.
    pub fn from_provider(provider: HttpProvider, signer: Option<Address>) -> Self {
        Self {
            provider,
            rpc_url: "<custom provider>".to_string(),
            signer,
            chain_id: Arc::new(OnceCell::new()),
        }
    }

    /// Get the chain ID (fetches from network on first call).
    pub async fn chain_id(&self) -> Result<u64> {
        self.chain_id
            .get_or_try_init(|| async {
                let chain_id = self.provider.get_chain_id().await?;
                tracing::info!(chain_id = chain_id, rpc_url = %self.rpc_url, "Connected to Ethereum node");
                Ok(chain_id)
            })
            .await
            .copied()
    }

    /// Get the underlying provider.
    pub fn provider(&self) -> &HttpProvider {
        &self.provider
    }

    /// Address of the signing wallet, if one is configured.
    pub fn signer(&self) -> Option<Address> {
        self.signer
    }

    /// Address of the signing wallet, or an error for read-only clients.
    pub fn require_signer(&self) -> Result<Address> {
        self.signer.ok_or_else(|| {
            AppError::Wallet("No signing key configured (set ETHEREUM_PRIVATE_KEY)".into())
        })
    }
}

fn parse_rpc_url(rpc_url: &str) -> Result<Url> {
    rpc_url.parse().map_err(|_| AppError::Config(format!("Invalid RPC URL: {}", rpc_url)))
}
