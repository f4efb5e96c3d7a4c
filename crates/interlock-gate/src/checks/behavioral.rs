use interlock_crypto::{InterfaceSpec, Operation};
use interlock_host::{Host, InvocationError};
use interlock_types::Address;

use crate::check::ConformanceCheck;
use crate::error::CapabilityError;

/// Behavioral check.
///
/// Statically invokes every required operation with zero-valued arguments
/// and checks each reply against the operation's declared shape. A revert
/// that carries one of the interface's declared errors counts as a
/// conforming answer: the operation exists and failed the way the interface
/// says it may. Anything else (unknown address, bare revert, undeclared
/// error, malformed reply) refuses the candidate.
pub struct BehavioralCheck;

impl BehavioralCheck {
    fn failure(address: &Address, operation: &Operation, reason: String) -> CapabilityError {
        CapabilityError::InvocationFailed {
            address: *address,
            operation: operation.signature().canonical(),
            reason,
        }
    }
}

impl ConformanceCheck for BehavioralCheck {
    fn name(&self) -> &str {
        "behavioral"
    }

    fn check(
        &self,
        host: &Host,
        address: &Address,
        interface: &InterfaceSpec,
    ) -> Result<(), CapabilityError> {
        for operation in interface.operations() {
            match host.static_invoke(address, &operation.zero_call()) {
                Ok(reply) => operation.returns().check_reply(&reply).map_err(|e| {
                    Self::failure(address, operation, format!("undecodable reply: {e}"))
                })?,
                Err(InvocationError::Reverted { data, .. }) if interface.declares_error(&data) => {
                    tracing::debug!(
                        %address,
                        operation = %operation.signature(),
                        "operation answered with a declared error"
                    );
                }
                Err(err) => return Err(Self::failure(address, operation, err.to_string())),
            }
        }
        Ok(())
    }
}
