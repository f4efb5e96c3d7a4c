use interlock_crypto::store_interface_id;
use interlock_host::Contract;
use interlock_types::CapabilityId;

use crate::error::StoreResult;

/// A holder of one integer value.
///
/// Implementations must satisfy:
/// - `set_value` always succeeds and the last write wins.
/// - `get_value` fails with `EmptyStore` until the first write, and never
///   returns a default in its place.
pub trait ValueStore: Send + Sync {
    /// Read the current value.
    fn get_value(&self) -> StoreResult<i64>;

    /// Overwrite the current value.
    fn set_value(&self, value: i64);
}

/// Compile-time proof that a contract implements the Store interface.
///
/// Code that holds a `Deployed<C>` with `C: StoreInterface` may bind to it
/// without a runtime conformance check. Only implement this for contracts
/// whose `execute` dispatches every Store operation to the `ValueStore`
/// methods.
pub trait StoreInterface: ValueStore + Contract {
    /// The capability identifier this contract implements.
    fn capability_id(&self) -> CapabilityId {
        store_interface_id()
    }
}
