use interlock_crypto::InterfaceSpec;
use interlock_host::Host;
use interlock_types::Address;

use crate::error::CapabilityError;

/// One way of deciding whether an address implements an interface.
///
/// Checks must not commit effects on the candidate: every call they make
/// goes through [`Host::static_invoke`].
///
/// The trait is object-safe and `Send + Sync` so a validator can hold a
/// `Box<dyn ConformanceCheck>` chosen from configuration.
pub trait ConformanceCheck: Send + Sync {
    /// Short name for logs (e.g. "probe").
    fn name(&self) -> &str;

    /// Accept or refuse `address` as an implementation of `interface`.
    fn check(
        &self,
        host: &Host,
        address: &Address,
        interface: &InterfaceSpec,
    ) -> Result<(), CapabilityError>;
}
