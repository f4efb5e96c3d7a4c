use std::sync::Arc;

use interlock_crypto::SELECTORS;
use interlock_gate::CapabilityValidator;
use interlock_host::{Deployed, Host, InvocationError};
use interlock_store::StoreInterface;
use interlock_types::{Address, Call};

use crate::error::{SdkError, SdkResult};

/// The reference a Reader or Writer holds to its Store.
///
/// Two states: unbound (`handle() == None`) and bound. Only a successful
/// [`set_store`](Self::set_store) or [`bind`](Self::bind) changes the
/// handle; a failed attempt leaves it exactly as it was. The binding stores
/// the address only and looks the instance up through the host on every
/// forwarded call.
pub struct StoreBinding {
    host: Arc<Host>,
    validator: Arc<CapabilityValidator>,
    handle: Option<Address>,
}

impl StoreBinding {
    /// An unbound binding.
    pub fn new(host: Arc<Host>, validator: Arc<CapabilityValidator>) -> Self {
        Self {
            host,
            validator,
            handle: None,
        }
    }

    /// The currently bound address.
    pub fn handle(&self) -> Option<Address> {
        self.handle
    }

    /// Returns `true` in the bound state.
    pub fn is_bound(&self) -> bool {
        self.handle.is_some()
    }

    /// Validate an opaque address and, on success, bind to it.
    pub fn set_store(&mut self, address: Address) -> SdkResult<()> {
        self.validator.validate(&self.host, &address)?;
        let previous = self.handle.replace(address);
        tracing::debug!(%address, ?previous, "bound validated store");
        Ok(())
    }

    /// Bind to a contract whose type already proves the Store interface.
    ///
    /// No conformance check runs. The handle must have been issued by this
    /// binding's host, otherwise its type says nothing about the instance
    /// living at the same address here.
    pub fn bind<C: StoreInterface>(&mut self, store: &Deployed<C>) -> SdkResult<()> {
        let address = store.address();
        if !self.host.issued(store) {
            return Err(InvocationError::ForeignHandle(address).into());
        }
        let previous = self.handle.replace(address);
        tracing::debug!(%address, ?previous, "bound statically typed store");
        Ok(())
    }

    /// Forward a call to the bound store, committing its effects.
    pub(crate) fn forward(&self, call: &Call) -> SdkResult<Vec<u8>> {
        let address = self.handle.ok_or(SdkError::EmptyHandle)?;
        tracing::trace!(%address, selector = %call.selector(), "forwarding call");
        self.host.invoke(&address, call).map_err(|err| {
            if err.is_revert_with(SELECTORS.empty_store) {
                SdkError::EmptyStore
            } else {
                SdkError::Invocation(err)
            }
        })
    }
}

impl std::fmt::Debug for StoreBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreBinding")
            .field("handle", &self.handle)
            .field("validator", &self.validator)
            .finish()
    }
}
