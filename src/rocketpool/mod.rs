//! Rocket Pool contract bindings.
//!
//! Each binding resolves its contract through [`ContractRegistry`], encodes
//! the typed arguments into an ABI call or transaction and hands back the
//! decoded result. Failures carry a prefix naming the operation.

pub mod api;
pub mod node;
pub mod registry;
pub mod tokens;

use std::{sync::Arc, time::Duration};

use alloy::{
    contract::{CallBuilder, CallDecoder},
    primitives::Address,
    providers::{PendingTransactionError, Provider},
    rpc::types::TransactionReceipt,
};
#[cfg(test)]
use alloy::providers::mock::Asserter;
use tracing::info;

use crate::{
    config::Config,
    error::{AppError, Result},
    ethereum::{
        constants::{DEFAULT_CONTRACT_CACHE_TTL, TX_RECEIPT_TIMEOUT},
        EthereumClient, HttpProvider, WalletManager,
    },
    types::{CallOpts, GasInfo},
};

pub use api::RocketPoolApi;
pub use registry::{storage_key, ContractRegistry};

/// Handle to a Rocket Pool deployment.
///
/// Cheap to clone; clones share the contract address cache.
#[derive(Clone)]
pub struct RocketPool {
    client: Arc<EthereumClient>,
    registry: Arc<ContractRegistry>,
}

impl RocketPool {
    /// Create a handle for the deployment whose RocketStorage lives at `storage_address`.
    pub fn new(client: Arc<EthereumClient>, storage_address: Address) -> Self {
        Self::with_cache_ttl(client, storage_address, DEFAULT_CONTRACT_CACHE_TTL)
    }

    /// Same as [`RocketPool::new`] with a custom contract address cache TTL.
    pub fn with_cache_ttl(
        client: Arc<EthereumClient>,
        storage_address: Address,
        cache_ttl: Duration,
    ) -> Self {
        let registry =
            Arc::new(ContractRegistry::new(client.provider().clone(), storage_address, cache_ttl));
        Self { client, registry }
    }

    /// Build the client, optional wallet, and registry from configuration.
    ///
    /// Note: no network calls are made here.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = match WalletManager::from_optional_key(config.private_key.as_deref())? {
            Some(wallet) => EthereumClient::with_wallet(&config.rpc_url, &wallet)?,
            None => EthereumClient::new(&config.rpc_url)?,
        };

        Ok(Self::with_cache_ttl(
            Arc::new(client),
            config.rocket_storage_address,
            config.contract_cache_ttl,
        ))
    }

    /// Underlying Ethereum client.
    pub fn client(&self) -> &EthereumClient {
        &self.client
    }

    /// Underlying provider.
    pub fn provider(&self) -> &HttpProvider {
        self.client.provider()
    }

    /// Contract address registry.
    pub fn registry(&self) -> &ContractRegistry {
        &self.registry
    }

    /// Resolve the address of a network contract by name.
    pub async fn contract_address(&self, name: &str, opts: &CallOpts) -> Result<Address> {
        self.registry.resolve(name, opts).await
    }
}

impl std::fmt::Debug for RocketPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RocketPool")
            .field("registry", &self.registry)
            .field("signer", &self.client.signer())
            .finish()
    }
}

/// Estimate gas for `call` sent from `from`.
pub(crate) async fn estimate_gas<P, D>(
    call: CallBuilder<P, D>,
    from: Address,
    context: &'static str,
) -> Result<GasInfo>
where
    P: Provider,
    D: CallDecoder,
{
    let estimate = call.from(from).estimate_gas().await.map_err(AppError::contract(context))?;
    GasInfo::from_estimate(estimate)
}

/// Send `call` and wait for it to be mined.
///
/// A receipt with a failed status is returned as [`AppError::TransactionReverted`].
pub(crate) async fn send_and_confirm<P, D>(
    call: CallBuilder<P, D>,
    context: &'static str,
) -> Result<TransactionReceipt>
where
    P: Provider,
    D: CallDecoder,
{
    let pending = call.send().await.map_err(AppError::contract(context))?;
    info!(tx_hash = %pending.tx_hash(), "Transaction submitted");

    let receipt = pending.with_timeout(Some(TX_RECEIPT_TIMEOUT)).get_receipt().await;
    confirm_receipt(receipt, context)
}

/// Check the outcome of waiting for a receipt.
fn confirm_receipt(
    receipt: std::result::Result<TransactionReceipt, PendingTransactionError>,
    context: &'static str,
) -> Result<TransactionReceipt> {
    let receipt = receipt.map_err(|e| AppError::contract(context)(e.into()))?;
    if !receipt.status() {
        return Err(AppError::TransactionReverted(receipt.transaction_hash));
    }

    info!(
        tx_hash = %receipt.transaction_hash,
        gas_used = receipt.gas_used,
        "Transaction confirmed"
    );
    Ok(receipt)
}

/// A pool over a mocked transport. Responses are served from the returned
/// [`Asserter`] in FIFO order.
#[cfg(test)]
pub(crate) fn mocked_pool(signer: Option<Address>) -> (RocketPool, Asserter) {
    use crate::ethereum::constants::MAINNET_ROCKET_STORAGE_ADDRESS;
    use alloy::providers::ProviderBuilder;

    let asserter = Asserter::new();
    let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone()).erased();
    let client = Arc::new(EthereumClient::from_provider(provider, signer));
    (RocketPool::new(client, MAINNET_ROCKET_STORAGE_ADDRESS), asserter)
}
