use interlock_crypto::SELECTORS;
use interlock_host::Revert;
use interlock_types::Selector;

/// Errors from value store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store has never been written.
    #[error("empty store")]
    EmptyStore,
}

impl StoreError {
    /// The declared error selector this error reverts with.
    pub fn selector(&self) -> Selector {
        match self {
            Self::EmptyStore => SELECTORS.empty_store,
        }
    }
}

impl From<StoreError> for Revert {
    fn from(err: StoreError) -> Self {
        Revert::with_error(err.selector())
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
