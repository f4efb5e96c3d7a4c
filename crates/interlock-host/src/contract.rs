use interlock_types::{Call, Selector};

/// Whether a call's effects are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallMode {
    /// Effects are committed.
    Commit,
    /// Effects are discarded. Replies must be the same as under `Commit`.
    Static,
}

impl CallMode {
    /// Returns `true` if effects should be committed.
    pub fn commits(&self) -> bool {
        matches!(self, Self::Commit)
    }
}

/// Rejection of a call by a contract.
///
/// Revert data is either empty (a bare revert, also used when the contract
/// does not expose the requested operation) or an error selector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Revert {
    data: Vec<u8>,
}

impl Revert {
    /// A revert with no data.
    pub fn bare() -> Self {
        Self::default()
    }

    /// A revert carrying a declared error selector.
    pub fn with_error(error: Selector) -> Self {
        Self {
            data: error.as_bytes().to_vec(),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
}

/// Something that can be deployed on a [`crate::Host`] and invoked by
/// selector.
///
/// Implementations use interior mutability: the host hands out shared
/// references and never locks around `execute`. A contract must answer an
/// unknown selector with [`Revert::bare`].
pub trait Contract: Send + Sync {
    /// Human-readable contract name, for logs.
    fn name(&self) -> &str;

    /// Execute one call. Replies are raw words; see `interlock_types::abi`.
    fn execute(&self, call: &Call, mode: CallMode) -> Result<Vec<u8>, Revert>;
}
