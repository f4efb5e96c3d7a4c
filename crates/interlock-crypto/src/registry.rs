//! Process-wide table of well-known signatures and identifiers.
//!
//! Every entry is computed from its signature text exactly once per process.
//! The tests below pin each computed value to a literal so that an edited
//! signature, a changed hash domain, or a changed combination rule fails
//! loudly instead of silently producing new identifiers.

use std::sync::LazyLock;

use interlock_types::{CapabilityId, Selector};

use crate::interface::{InterfaceSpec, Operation, ReturnKind};
use crate::signature::{ParamType, Signature};

/// Read the stored value.
pub const GET_VALUE: &str = "getValue()";
/// Overwrite the stored value.
pub const SET_VALUE: &str = "setValue(int256)";
/// Self-describing probe: reports the capability id an instance implements.
pub const CAPABILITY_ID: &str = "capabilityId()";
/// Revert reason for reading a store that was never written.
pub const EMPTY_STORE: &str = "EmptyStore()";

/// The Store operation surface: `getValue()` and `setValue(int256)`.
pub static STORE_INTERFACE: LazyLock<InterfaceSpec> = LazyLock::new(|| {
    InterfaceSpec::new(
        "Store",
        vec![
            Operation::new(Signature::new("getValue", vec![]), ReturnKind::Int),
            Operation::new(
                Signature::new("setValue", vec![ParamType::Int256]),
                ReturnKind::Unit,
            ),
        ],
        vec![Signature::new("EmptyStore", vec![])],
    )
});

/// The well-known capability probe operation.
pub static PROBE: LazyLock<Operation> = LazyLock::new(|| {
    Operation::new(Signature::new("capabilityId", vec![]), ReturnKind::Bytes4)
});

/// Selectors every Store participant dispatches on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreSelectors {
    pub get_value: Selector,
    pub set_value: Selector,
    pub capability_id: Selector,
    pub empty_store: Selector,
}

/// Cached selectors for the Store interface and its probe.
pub static SELECTORS: LazyLock<StoreSelectors> = LazyLock::new(|| StoreSelectors {
    get_value: Signature::new("getValue", vec![]).selector(),
    set_value: Signature::new("setValue", vec![ParamType::Int256]).selector(),
    capability_id: PROBE.selector(),
    empty_store: Signature::new("EmptyStore", vec![]).selector(),
});

/// Capability identifier of the Store interface.
pub fn store_interface_id() -> CapabilityId {
    STORE_INTERFACE.id()
}
