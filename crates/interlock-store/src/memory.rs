use std::sync::RwLock;

use interlock_crypto::{store_interface_id, SELECTORS};
use interlock_host::{CallMode, Contract, Revert};
use interlock_types::abi::{decode_int, encode_bytes4, encode_int};
use interlock_types::Call;

use crate::error::{StoreError, StoreResult};
use crate::traits::{StoreInterface, ValueStore};

/// The authoritative single-value store.
///
/// Holds `None` until the first write. Concurrent readers see the most
/// recently committed value; there is no snapshot isolation.
pub struct Store {
    value: RwLock<Option<i64>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            value: RwLock::new(None),
        }
    }

    /// Create a store that already holds `value`.
    pub fn with_value(value: i64) -> Self {
        Self {
            value: RwLock::new(Some(value)),
        }
    }

    /// Returns `true` if the store has never been written.
    pub fn is_empty(&self) -> bool {
        self.value.read().expect("lock poisoned").is_none()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueStore for Store {
    fn get_value(&self) -> StoreResult<i64> {
        self.value
            .read()
            .expect("lock poisoned")
            .ok_or(StoreError::EmptyStore)
    }

    fn set_value(&self, value: i64) {
        *self.value.write().expect("lock poisoned") = Some(value);
    }
}

impl Contract for Store {
    fn name(&self) -> &str {
        "Store"
    }

    fn execute(&self, call: &Call, mode: CallMode) -> Result<Vec<u8>, Revert> {
        let sel = &*SELECTORS;
        match call.selector() {
            s if s == sel.get_value => Ok(encode_int(self.get_value()?).to_vec()),
            s if s == sel.set_value => {
                let word = call.arg(0).ok_or_else(Revert::bare)?;
                let value = decode_int(word).map_err(|_| Revert::bare())?;
                if mode.commits() {
                    tracing::trace!(value, "store value set");
                    self.set_value(value);
                }
                Ok(Vec::new())
            }
            s if s == sel.capability_id => {
                Ok(encode_bytes4(*store_interface_id().as_bytes()).to_vec())
            }
            _ => Err(Revert::bare()),
        }
    }
}

impl StoreInterface for Store {}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("value", &*self.value.read().expect("lock poisoned"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interlock_crypto::compute_selector;
    use interlock_types::abi::{decode_bytes4, ZERO_WORD};
    use interlock_types::Selector;

    fn get() -> Call {
        Call::new(SELECTORS.get_value)
    }

    fn set(value: i64) -> Call {
        Call::new(SELECTORS.set_value).with_int(value)
    }

    // -----------------------------------------------------------------------
    // ValueStore
    // -----------------------------------------------------------------------

    #[test]
    fn fresh_store_is_empty() {
        let store = Store::new();
        assert!(store.is_empty());
        assert_eq!(store.get_value(), Err(StoreError::EmptyStore));
    }

    #[test]
    fn last_write_wins() {
        let store = Store::new();
        store.set_value(1);
        store.set_value(100);
        assert_eq!(store.get_value(), Ok(100));
        assert!(!store.is_empty());
    }

    #[test]
    fn with_value_is_readable() {
        assert_eq!(Store::with_value(-5).get_value(), Ok(-5));
    }

    #[test]
    fn capability_id_is_the_store_interface() {
        assert_eq!(Store::new().capability_id(), store_interface_id());
    }

    // -----------------------------------------------------------------------
    // Contract dispatch
    // -----------------------------------------------------------------------

    #[test]
    fn get_on_empty_reverts_with_empty_store() {
        let store = Store::new();
        let revert = store.execute(&get(), CallMode::Commit).unwrap_err();
        assert_eq!(revert.data(), compute_selector("EmptyStore()").as_bytes());
    }

    #[test]
    fn set_then_get_through_dispatch() {
        let store = Store::new();
        assert_eq!(store.execute(&set(100), CallMode::Commit), Ok(Vec::new()));
        let reply = store.execute(&get(), CallMode::Commit).unwrap();
        assert_eq!(decode_int(&reply), Ok(100));
    }

    #[test]
    fn static_set_does_not_commit() {
        let store = Store::with_value(7);
        assert_eq!(store.execute(&set(8), CallMode::Static), Ok(Vec::new()));
        assert_eq!(store.get_value(), Ok(7));
    }

    #[test]
    fn set_without_argument_reverts() {
        let store = Store::new();
        let bare = Call::new(SELECTORS.set_value);
        assert_eq!(store.execute(&bare, CallMode::Commit), Err(Revert::bare()));
        assert!(store.is_empty());
    }

    #[test]
    fn set_with_out_of_range_argument_reverts() {
        let store = Store::new();
        let mut word = ZERO_WORD;
        word[0] = 0x7f;
        let call = Call::new(SELECTORS.set_value).with_word(word);
        assert_eq!(store.execute(&call, CallMode::Commit), Err(Revert::bare()));
    }

    #[test]
    fn probe_reports_store_interface() {
        let reply = Store::new()
            .execute(&Call::new(SELECTORS.capability_id), CallMode::Static)
            .unwrap();
        assert_eq!(decode_bytes4(&reply).unwrap(), *store_interface_id().as_bytes());
    }

    #[test]
    fn unknown_selector_is_a_bare_revert() {
        let call = Call::new(Selector::from_bytes([1, 2, 3, 4]));
        assert_eq!(Store::new().execute(&call, CallMode::Commit), Err(Revert::bare()));
    }

    #[test]
    fn debug_shows_value() {
        assert_eq!(format!("{:?}", Store::with_value(3)), "Store { value: Some(3) }");
    }
}
