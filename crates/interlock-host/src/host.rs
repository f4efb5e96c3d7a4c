use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use interlock_types::{Address, Call};

use crate::contract::{CallMode, Contract};
use crate::error::{InvocationError, InvocationResult};

/// Source of per-host identities. Addresses repeat across hosts, so a typed
/// handle also records which host issued it.
static NEXT_HOST_ID: AtomicU64 = AtomicU64::new(1);

/// Typed handle returned by [`Host::deploy`].
///
/// Carries the address plus the static type of the contract deployed there,
/// so code that holds a `Deployed<C>` knows at compile time what surface the
/// address implements. The type is only meaningful on the issuing host; see
/// [`Host::issued`]. Dropping the handle does not undeploy anything.
pub struct Deployed<C> {
    address: Address,
    host: u64,
    _contract: PhantomData<fn() -> C>,
}

impl<C> Deployed<C> {
    /// The deployment address.
    pub fn address(&self) -> Address {
        self.address
    }
}

impl<C> Clone for Deployed<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Deployed<C> {}

impl<C> PartialEq for Deployed<C> {
    fn eq(&self, other: &Self) -> bool {
        self.address == other.address && self.host == other.host
    }
}

impl<C> Eq for Deployed<C> {}

impl<C> fmt::Debug for Deployed<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deployed")
            .field("address", &self.address)
            .field("host", &self.host)
            .finish()
    }
}

/// In-memory instance host.
///
/// Maps addresses to live contract instances. Instances stay deployed for
/// the lifetime of the host. The instance table lock is released before any
/// contract code runs, so contracts may be invoked concurrently.
pub struct Host {
    id: u64,
    instances: RwLock<HashMap<Address, Arc<dyn Contract>>>,
    nonce: AtomicU64,
}

impl Host {
    /// Create a host with no deployed instances.
    pub fn new() -> Self {
        Self {
            id: NEXT_HOST_ID.fetch_add(1, Ordering::Relaxed),
            instances: RwLock::new(HashMap::new()),
            nonce: AtomicU64::new(1),
        }
    }

    /// Deploy a contract at a fresh address.
    pub fn deploy<C>(&self, contract: C) -> Deployed<C>
    where
        C: Contract + 'static,
    {
        let nonce = self.nonce.fetch_add(1, Ordering::Relaxed);
        let address = Address::derive(nonce);
        tracing::debug!(%address, contract = contract.name(), nonce, "deployed instance");
        self.instances
            .write()
            .expect("lock poisoned")
            .insert(address, Arc::new(contract));
        Deployed {
            address,
            host: self.id,
            _contract: PhantomData,
        }
    }

    /// Invoke an operation and commit its effects.
    pub fn invoke(&self, address: &Address, call: &Call) -> InvocationResult<Vec<u8>> {
        self.dispatch(address, call, CallMode::Commit)
    }

    /// Invoke an operation and discard its effects.
    pub fn static_invoke(&self, address: &Address, call: &Call) -> InvocationResult<Vec<u8>> {
        self.dispatch(address, call, CallMode::Static)
    }

    fn dispatch(
        &self,
        address: &Address,
        call: &Call,
        mode: CallMode,
    ) -> InvocationResult<Vec<u8>> {
        let instance = self.lookup(address)?;
        tracing::trace!(
            %address,
            contract = instance.name(),
            selector = %call.selector(),
            ?mode,
            "dispatching call"
        );
        instance
            .execute(call, mode)
            .map_err(|revert| InvocationError::Reverted {
                address: *address,
                selector: call.selector(),
                data: revert.into_data(),
            })
    }

    fn lookup(&self, address: &Address) -> InvocationResult<Arc<dyn Contract>> {
        self.instances
            .read()
            .expect("lock poisoned")
            .get(address)
            .cloned()
            .ok_or(InvocationError::UnknownAddress(*address))
    }

    /// Returns `true` if an instance lives at `address`.
    pub fn contains(&self, address: &Address) -> bool {
        self.instances
            .read()
            .expect("lock poisoned")
            .contains_key(address)
    }

    /// Returns `true` if this host issued `handle`, so the instance at its
    /// address really has type `C`.
    pub fn issued<C>(&self, handle: &Deployed<C>) -> bool {
        handle.host == self.id && self.contains(&handle.address)
    }

    /// Number of deployed instances.
    pub fn len(&self) -> usize {
        self.instances.read().expect("lock poisoned").len()
    }

    /// Returns `true` if nothing has been deployed.
    pub fn is_empty(&self) -> bool {
        self.instances.read().expect("lock poisoned").is_empty()
    }
}

impl Default for Host {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host")
            .field("instance_count", &self.len())
            .finish()
    }
}
