use std::sync::Arc;

use interlock_gate::CapabilityValidator;
use interlock_host::{Contract, Deployed, Host};
use interlock_store::Store;
use interlock_types::Address;

use crate::config::InterlockConfig;
use crate::error::SdkResult;
use crate::reader::StoreReader;
use crate::writer::StoreWriter;

/// High-level Interlock API.
///
/// Owns one host and one validator; every reader and writer it hands out
/// shares both.
pub struct Interlock {
    config: InterlockConfig,
    host: Arc<Host>,
    validator: Arc<CapabilityValidator>,
}

impl Interlock {
    /// Start with a fresh host.
    pub fn new(config: InterlockConfig) -> Self {
        Self::with_host(config, Arc::new(Host::new()))
    }

    /// Attach to an existing host.
    pub fn with_host(config: InterlockConfig, host: Arc<Host>) -> Self {
        let validator = Arc::new(CapabilityValidator::new(config.validator.clone()));
        tracing::debug!(strategy = %config.validator.strategy, "interlock initialised");
        Self {
            config,
            host,
            validator,
        }
    }

    pub fn config(&self) -> &InterlockConfig {
        &self.config
    }

    pub fn host(&self) -> &Arc<Host> {
        &self.host
    }

    pub fn validator(&self) -> &Arc<CapabilityValidator> {
        &self.validator
    }

    // ---- Deployment ----

    /// Deploy an empty Store.
    pub fn deploy_store(&self) -> Deployed<Store> {
        self.host.deploy(Store::new())
    }

    /// Deploy any contract.
    pub fn deploy<C: Contract + 'static>(&self, contract: C) -> Deployed<C> {
        self.host.deploy(contract)
    }

    // ---- Access ----

    /// An unbound reader.
    pub fn reader(&self) -> StoreReader {
        StoreReader::new(Arc::clone(&self.host), Arc::clone(&self.validator))
    }

    /// An unbound writer.
    pub fn writer(&self) -> StoreWriter {
        StoreWriter::new(Arc::clone(&self.host), Arc::clone(&self.validator))
    }

    /// Run the configured conformance check without binding anything.
    pub fn validate(&self, address: &Address) -> SdkResult<()> {
        Ok(self.validator.validate(&self.host, address)?)
    }
}

impl Default for Interlock {
    fn default() -> Self {
        Self::new(InterlockConfig::default())
    }
}

impl std::fmt::Debug for Interlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interlock")
            .field("host", &self.host)
            .field("validator", &self.validator)
            .finish()
    }
}
