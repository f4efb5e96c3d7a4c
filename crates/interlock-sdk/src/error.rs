use interlock_gate::CapabilityError;
use interlock_host::InvocationError;
use interlock_types::TypeError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdkError {
    #[error("empty handle: no store reference is set")]
    EmptyHandle,

    #[error("empty store")]
    EmptyStore,

    #[error("capability check failed: {0}")]
    Capability(#[from] CapabilityError),

    #[error("invocation failed: {0}")]
    Invocation(#[from] InvocationError),

    #[error("undecodable reply: {0}")]
    Decode(#[from] TypeError),
}

impl SdkError {
    /// Returns `true` if a candidate address was refused by validation.
    pub fn is_capability_rejection(&self) -> bool {
        matches!(self, Self::Capability(_))
    }
}

pub type SdkResult<T> = Result<T, SdkError>;
