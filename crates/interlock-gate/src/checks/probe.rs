use interlock_crypto::{InterfaceSpec, PROBE};
use interlock_host::Host;
use interlock_types::abi::decode_bytes4;
use interlock_types::{Address, CapabilityId};

use crate::check::ConformanceCheck;
use crate::error::CapabilityError;

/// Probe-based check.
///
/// Invokes the well-known `capabilityId()` operation and accepts only an
/// exact match with the interface's identifier. A candidate without the
/// probe, or whose reply does not decode, reports nothing and is refused.
pub struct ProbeCheck;

impl ConformanceCheck for ProbeCheck {
    fn name(&self) -> &str {
        "probe"
    }

    fn check(
        &self,
        host: &Host,
        address: &Address,
        interface: &InterfaceSpec,
    ) -> Result<(), CapabilityError> {
        let expected = interface.id();
        let found = match host.static_invoke(address, &PROBE.zero_call()) {
            Ok(reply) => match decode_bytes4(&reply) {
                Ok(bytes) => Some(CapabilityId::from_bytes(bytes)),
                Err(err) => {
                    tracing::debug!(%address, error = %err, "capability probe reply undecodable");
                    None
                }
            },
            Err(err) => {
                tracing::debug!(%address, error = %err, "capability probe unavailable");
                None
            }
        };

        match found {
            Some(id) if id == expected => Ok(()),
            found => Err(CapabilityError::NotSupported {
                address: *address,
                expected,
                found,
            }),
        }
    }
}
