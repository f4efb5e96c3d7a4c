use interlock_crypto::SELECTORS;
use interlock_host::{CallMode, Contract, Revert};
use interlock_types::abi::{encode_bytes4, encode_int};
use interlock_types::{Call, CapabilityId};

/// A candidate that looks like a store from the outside but is not one.
///
/// Exposes `getValue()` (always zero) and answers the capability probe
/// truthfully with the identifier of `{getValue()}` alone. It has no
/// `setValue(int256)`, so it must be rejected by every conformance check.
#[derive(Debug, Default)]
pub struct NonStore;

impl NonStore {
    pub fn new() -> Self {
        Self
    }

    /// The identifier this contract reports from the probe.
    pub fn capability_id() -> CapabilityId {
        CapabilityId::from(SELECTORS.get_value)
    }
}

impl Contract for NonStore {
    fn name(&self) -> &str {
        "NonStore"
    }

    fn execute(&self, call: &Call, _mode: CallMode) -> Result<Vec<u8>, Revert> {
        let sel = &*SELECTORS;
        match call.selector() {
            s if s == sel.get_value => Ok(encode_int(0).to_vec()),
            s if s == sel.capability_id => {
                Ok(encode_bytes4(*Self::capability_id().as_bytes()).to_vec())
            }
            _ => Err(Revert::bare()),
        }
    }
}
