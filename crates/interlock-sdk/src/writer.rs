use std::sync::Arc;

use interlock_crypto::SELECTORS;
use interlock_gate::CapabilityValidator;
use interlock_host::{Deployed, Host};
use interlock_store::StoreInterface;
use interlock_types::{Address, Call};

use crate::binding::StoreBinding;
use crate::error::SdkResult;

/// Write-only view of a validated Store.
#[derive(Debug)]
pub struct StoreWriter {
    binding: StoreBinding,
}

impl StoreWriter {
    /// An unbound component that validates through `validator` and reaches
    /// stores deployed on `host`.
    pub fn new(host: Arc<Host>, validator: Arc<CapabilityValidator>) -> Self {
        Self {
            binding: StoreBinding::new(host, validator),
        }
    }

    /// Validate and bind to `address`. On failure the previous binding stays.
    pub fn set_store(&mut self, address: Address) -> SdkResult<()> {
        self.binding.set_store(address)
    }

    /// Bind to a statically known Store without a runtime check.
    pub fn bind<C: StoreInterface>(&mut self, store: &Deployed<C>) -> SdkResult<()> {
        self.binding.bind(store)
    }

    /// The bound address, if any.
    pub fn store(&self) -> Option<Address> {
        self.binding.handle()
    }

    /// Returns `true` once a store has been accepted.
    pub fn is_bound(&self) -> bool {
        self.binding.is_bound()
    }

    /// Overwrite the bound Store's value. Fails with `EmptyHandle` when
    /// unbound.
    pub fn write_store_value(&self, value: i64) -> SdkResult<()> {
        self.binding
            .forward(&Call::new(SELECTORS.set_value).with_int(value))
            .map(drop)
    }
}
