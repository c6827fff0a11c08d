//! Contract address resolution through RocketStorage.
//!
//! Rocket Pool contracts are upgradeable: the current address of each
//! network contract is stored in RocketStorage under
//! `keccak256("contract.address" ++ name)`. Resolved addresses are cached
//! per name for a TTL.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use alloy::primitives::{keccak256, Address, B256};
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info};

use crate::{
    error::{AppError, Result},
    ethereum::{
        constants::CONTRACT_ADDRESS_KEY_PREFIX,
        contracts::{rocket_storage::IRocketStorage::IRocketStorageInstance, IRocketStorage},
        HttpProvider,
    },
    types::CallOpts,
};

/// RocketStorage key holding the address of contract `name`.
pub fn storage_key(name: &str) -> B256 {
    keccak256([CONTRACT_ADDRESS_KEY_PREFIX.as_bytes(), name.as_bytes()].concat())
}

/// A resolved address and when it was fetched.
#[derive(Debug, Clone, Copy)]
struct CachedAddress {
    address: Address,
    resolved_at: Instant,
}

impl CachedAddress {
    fn new(address: Address) -> Self {
        Self { address, resolved_at: Instant::now() }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.resolved_at.elapsed() > ttl
    }
}

/// Cache slot for one contract name. Holding its lock serializes lookups
/// of that name.
type Slot = Arc<AsyncMutex<Option<CachedAddress>>>;

/// Resolves Rocket Pool contract names to addresses.
pub struct ContractRegistry {
    /// RocketStorage contract.
    storage: IRocketStorageInstance<HttpProvider>,
    /// Cache TTL.
    cache_ttl: Duration,
    /// One slot per contract name resolved since the last invalidation.
    slots: Mutex<HashMap<String, Slot>>,
}

impl ContractRegistry {
    /// Create a registry backed by the RocketStorage contract at `storage_address`.
    pub fn new(provider: HttpProvider, storage_address: Address, cache_ttl: Duration) -> Self {
        Self {
            storage: IRocketStorage::new(storage_address, provider),
            cache_ttl,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Address of the RocketStorage contract.
    pub fn storage_address(&self) -> Address {
        *self.storage.address()
    }

    /// Cache TTL.
    pub fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }

    /// Resolve the current address of contract `name`.
    ///
    /// With a pinned block in `opts`, the lookup runs at that block and the
    /// cache is neither read nor updated.
    pub async fn resolve(&self, name: &str, opts: &CallOpts) -> Result<Address> {
        if opts.block.is_some() {
            return self.fetch(name, opts).await;
        }

        let slot = self.slot(name);
        let mut cached = slot.lock().await;

        // Another task may have filled the slot while we waited for the lock
        if let Some(entry) = cached.as_ref().filter(|e| !e.is_expired(self.cache_ttl)) {
            return Ok(entry.address);
        }

        let address = self.fetch(name, opts).await?;
        *cached = Some(CachedAddress::new(address));
        Ok(address)
    }

    /// Drop the cached address of `name`, forcing the next resolve to hit the chain.
    ///
    /// The slot itself is removed, so names that are no longer used do not
    /// accumulate.
    pub async fn invalidate(&self, name: &str) {
        let removed = self.lock_slots().remove(name);
        if let Some(slot) = removed {
            // Tasks still holding the old slot must not serve the stale entry
            if slot.lock().await.take().is_some() {
                info!(contract = name, "Invalidated cached contract address");
            }
        }
    }

    /// Cached, unexpired address of `name`, if any.
    pub async fn cached(&self, name: &str) -> Option<Address> {
        let slot = self.slot(name);
        let cached = slot.lock().await;
        (*cached).filter(|e| !e.is_expired(self.cache_ttl)).map(|e| e.address)
    }

    fn slot(&self, name: &str) -> Slot {
        self.lock_slots().entry(name.to_string()).or_default().clone()
    }

    fn lock_slots(&self) -> std::sync::MutexGuard<'_, HashMap<String, Slot>> {
        self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    async fn fetch(&self, name: &str, opts: &CallOpts) -> Result<Address> {
        debug!(contract = name, block = ?opts.block, "Resolving contract address");

        let address = opts
            .apply(self.storage.getAddress(storage_key(name)))
            .call()
            .await
            .map_err(AppError::contract("Could not load contract address from RocketStorage"))?;

        if address == Address::ZERO {
            return Err(AppError::ContractNotFound(name.to_string()));
        }

        debug!(contract = name, address = %address, "Resolved contract address");
        Ok(address)
    }
}

impl std::fmt::Debug for ContractRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContractRegistry")
            .field("storage", self.storage.address())
            .field("cache_ttl", &self.cache_ttl)
            .finish()
    }
}
