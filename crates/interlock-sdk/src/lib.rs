//! High-level SDK for Interlock.
//!
//! Readers and writers reach a Store only through an address they have
//! validated. This is the main entry point for applications embedding
//! Interlock.

pub mod binding;
pub mod config;
pub mod error;
pub mod interlock;
pub mod reader;
pub mod writer;

pub use binding::StoreBinding;
pub use config::InterlockConfig;
pub use error::{SdkError, SdkResult};
pub use interlock::Interlock;
pub use reader::StoreReader;
pub use writer::StoreWriter;

// Re-export key types
pub use interlock_gate::{CapabilityError, ValidationStrategy, ValidatorConfig};
pub use interlock_host::{Deployed, Host};
pub use interlock_store::{NonStore, Store, StoreInterface, ValueStore};
pub use interlock_types::{Address, CapabilityId, Selector};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use interlock_host::{CallMode, Contract, InvocationError, Revert};
    use interlock_types::Call;

    fn interlock(strategy: ValidationStrategy) -> Interlock {
        Interlock::new(InterlockConfig {
            validator: ValidatorConfig { strategy },
        })
    }

    const STRATEGIES: [ValidationStrategy; 2] =
        [ValidationStrategy::Probe, ValidationStrategy::Behavioral];

    // -----------------------------------------------------------------------
    // Unbound state
    // -----------------------------------------------------------------------

    #[test]
    fn unbound_reader_fails_with_empty_handle() {
        let il = Interlock::default();
        let reader = il.reader();
        assert!(!reader.is_bound());
        assert_eq!(reader.store(), None);
        assert_eq!(reader.read_store_value(), Err(SdkError::EmptyHandle));
    }

    #[test]
    fn unbound_writer_fails_with_empty_handle() {
        let il = Interlock::default();
        assert_eq!(il.writer().write_store_value(1), Err(SdkError::EmptyHandle));
    }

    #[test]
    fn fresh_store_read_fails_with_empty_store() {
        for strategy in STRATEGIES {
            let il = interlock(strategy);
            let store = il.deploy_store();
            let mut reader = il.reader();
            reader.set_store(store.address()).unwrap();
            assert_eq!(reader.read_store_value(), Err(SdkError::EmptyStore), "{strategy}");
        }
    }

    // -----------------------------------------------------------------------
    // Reference scenario
    // -----------------------------------------------------------------------

    #[test]
    fn reference_scenario() {
        for strategy in STRATEGIES {
            let il = interlock(strategy);
            let a = il.deploy(Store::with_value(100));

            let mut reader = il.reader();
            reader.set_store(a.address()).unwrap();
            assert_eq!(reader.read_store_value(), Ok(100));

            let b = il.deploy(NonStore::new());
            let err = reader.set_store(b.address()).unwrap_err();
            assert!(err.is_capability_rejection(), "{strategy}: {err}");

            assert_eq!(reader.store(), Some(a.address()));
            assert_eq!(reader.read_store_value(), Ok(100));
        }
    }

    #[test]
    fn rejection_error_kind_follows_strategy() {
        let probe = interlock(ValidationStrategy::Probe);
        let candidate = probe.deploy(NonStore::new());
        assert!(matches!(
            probe.reader().set_store(candidate.address()),
            Err(SdkError::Capability(CapabilityError::NotSupported { .. }))
        ));

        let behavioral = interlock(ValidationStrategy::Behavioral);
        let candidate = behavioral.deploy(NonStore::new());
        assert!(matches!(
            behavioral.writer().set_store(candidate.address()),
            Err(SdkError::Capability(CapabilityError::InvocationFailed { .. }))
        ));
    }

    #[test]
    fn read_after_write_across_components() {
        for strategy in STRATEGIES {
            let il = interlock(strategy);
            let store = il.deploy_store();

            let mut writer = il.writer();
            writer.set_store(store.address()).unwrap();
            writer.write_store_value(100).unwrap();

            let mut first = il.reader();
            let mut second = il.reader();
            first.set_store(store.address()).unwrap();
            second.bind(&store).unwrap();
            assert_eq!(first.read_store_value(), Ok(100));
            assert_eq!(second.read_store_value(), Ok(100));

            writer.write_store_value(-7).unwrap();
            assert_eq!(first.read_store_value(), Ok(-7));
        }
    }

    #[test]
    fn reads_are_not_cached() {
        let il = Interlock::default();
        let store = il.deploy_store();
        let mut reader = il.reader();
        let mut writer = il.writer();
        reader.bind(&store).unwrap();
        writer.bind(&store).unwrap();
        for value in [1, 2, 3] {
            writer.write_store_value(value).unwrap();
            assert_eq!(reader.read_store_value(), Ok(value));
        }
    }

    // -----------------------------------------------------------------------
    // State machine
    // -----------------------------------------------------------------------

    #[test]
    fn failed_set_store_keeps_unbound_state() {
        for strategy in STRATEGIES {
            let il = interlock(strategy);
            let candidate = il.deploy(NonStore::new());
            let mut writer = il.writer();
            assert!(writer.set_store(candidate.address()).is_err());
            assert!(!writer.is_bound());
            assert_eq!(writer.write_store_value(5), Err(SdkError::EmptyHandle));
        }
    }

    #[test]
    fn failed_set_store_keeps_writer_binding() {
        let il = interlock(ValidationStrategy::Behavioral);
        let good = il.deploy_store();
        let bad = il.deploy(NonStore::new());
        let mut writer = il.writer();
        writer.set_store(good.address()).unwrap();
        assert!(writer.set_store(bad.address()).is_err());
        assert_eq!(writer.store(), Some(good.address()));

        writer.write_store_value(9).unwrap();
        let mut reader = il.reader();
        reader.bind(&good).unwrap();
        assert_eq!(reader.read_store_value(), Ok(9));
    }

    #[test]
    fn set_store_twice_is_idempotent() {
        let il = Interlock::default();
        let store = il.deploy(Store::with_value(3));
        let mut reader = il.reader();
        reader.set_store(store.address()).unwrap();
        reader.set_store(store.address()).unwrap();
        assert_eq!(reader.store(), Some(store.address()));
        assert_eq!(reader.read_store_value(), Ok(3));
    }

    #[test]
    fn rebinding_switches_stores() {
        let il = Interlock::default();
        let first = il.deploy(Store::with_value(1));
        let second = il.deploy(Store::with_value(2));
        let mut reader = il.reader();
        reader.set_store(first.address()).unwrap();
        reader.set_store(second.address()).unwrap();
        assert_eq!(reader.read_store_value(), Ok(2));
    }

    #[test]
    fn null_address_is_a_capability_rejection() {
        for strategy in STRATEGIES {
            let il = interlock(strategy);
            let store = il.deploy(Store::with_value(4));
            let mut reader = il.reader();

            let err = reader.set_store(Address::null()).unwrap_err();
            assert!(err.is_capability_rejection(), "{strategy}: {err}");
            assert!(!reader.is_bound());

            reader.set_store(store.address()).unwrap();
            assert!(reader.set_store(Address::null()).is_err());
            assert_eq!(reader.store(), Some(store.address()));
            assert_eq!(reader.read_store_value(), Ok(4));
        }
    }

    // -----------------------------------------------------------------------
    // Static binding
    // -----------------------------------------------------------------------

    #[test]
    fn bind_rejects_handle_from_another_host() {
        let il = Interlock::default();
        let local = il.deploy(NonStore::new());
        let elsewhere = Host::new();
        let foreign = elsewhere.deploy(Store::with_value(5));
        // Both hosts derive the same first address.
        assert_eq!(local.address(), foreign.address());

        let mut reader = il.reader();
        assert_eq!(
            reader.bind(&foreign),
            Err(SdkError::Invocation(InvocationError::ForeignHandle(
                foreign.address()
            )))
        );
        assert!(!reader.is_bound());

        let mut writer = il.writer();
        assert!(writer.bind(&foreign).is_err());
        assert_eq!(writer.write_store_value(7), Err(SdkError::EmptyHandle));
    }

    #[test]
    fn failed_bind_keeps_existing_binding() {
        let il = Interlock::default();
        let store = il.deploy(Store::with_value(3));
        let foreign = Host::new().deploy(Store::with_value(9));
        let mut reader = il.reader();
        reader.bind(&store).unwrap();
        assert!(reader.bind(&foreign).is_err());
        assert_eq!(reader.store(), Some(store.address()));
        assert_eq!(reader.read_store_value(), Ok(3));
    }

    /// A store that delegates to an inner Store but implements the
    /// interface trait without a capability probe. Static binding still
    /// works; probe validation does not.
    struct QuietStore(Store);

    impl ValueStore for QuietStore {
        fn get_value(&self) -> interlock_store::StoreResult<i64> {
            self.0.get_value()
        }

        fn set_value(&self, value: i64) {
            self.0.set_value(value)
        }
    }

    impl Contract for QuietStore {
        fn name(&self) -> &str {
            "QuietStore"
        }

        fn execute(&self, call: &Call, mode: CallMode) -> Result<Vec<u8>, Revert> {
            if call.selector() == interlock_crypto::SELECTORS.capability_id {
                return Err(Revert::bare());
            }
            self.0.execute(call, mode)
        }
    }

    impl StoreInterface for QuietStore {}

    #[test]
    fn static_bind_skips_runtime_probe() {
        let il = interlock(ValidationStrategy::Probe);
        let quiet = il.deploy(QuietStore(Store::with_value(11)));

        let mut reader = il.reader();
        assert!(reader.set_store(quiet.address()).is_err());
        reader.bind(&quiet).unwrap();
        assert_eq!(reader.read_store_value(), Ok(11));

        // The behavioral check needs no probe.
        let behavioral = Interlock::with_host(
            InterlockConfig {
                validator: ValidatorConfig::behavioral(),
            },
            Arc::clone(il.host()),
        );
        assert!(behavioral.validate(&quiet.address()).is_ok());
    }

    // -----------------------------------------------------------------------
    // Shared access
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_readers_see_committed_values() {
        let il = Interlock::default();
        let store = il.deploy_store();
        let mut writer = il.writer();
        writer.bind(&store).unwrap();
        writer.write_store_value(0).unwrap();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                let mut reader = il.reader();
                reader.bind(&store).unwrap();
                scope.spawn(move || {
                    for _ in 0..100 {
                        let value = reader.read_store_value().unwrap();
                        assert!((0..=50).contains(&value));
                    }
                });
            }
            for value in 1..=50 {
                writer.write_store_value(value).unwrap();
            }
        });

        let mut reader = il.reader();
        reader.bind(&store).unwrap();
        assert_eq!(reader.read_store_value(), Ok(50));
    }

    #[test]
    fn facade_accessors() {
        let il = interlock(ValidationStrategy::Behavioral);
        assert_eq!(il.config().validator.strategy, ValidationStrategy::Behavioral);
        assert_eq!(il.validator().strategy(), ValidationStrategy::Behavioral);
        assert!(il.host().is_empty());
        il.deploy_store();
        assert_eq!(il.host().len(), 1);
    }

    #[test]
    fn error_display() {
        assert_eq!(SdkError::EmptyStore.to_string(), "empty store");
        assert_eq!(
            SdkError::EmptyHandle.to_string(),
            "empty handle: no store reference is set"
        );
    }
}
