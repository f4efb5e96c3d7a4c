use interlock_types::{Address, Selector};

/// Errors from invoking an operation on a deployed instance.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvocationError {
    /// Nothing is deployed at the address.
    #[error("no instance deployed at {0}")]
    UnknownAddress(Address),

    /// A typed handle was issued by a different host.
    #[error("handle for {0} was issued by another host")]
    ForeignHandle(Address),

    /// The instance rejected the call.
    #[error("call {selector} to {address} reverted{}", describe_revert(.data))]
    Reverted {
        address: Address,
        selector: Selector,
        data: Vec<u8>,
    },
}

impl InvocationError {
    /// Revert data, if the instance was reached and reverted.
    pub fn revert_data(&self) -> Option<&[u8]> {
        match self {
            Self::Reverted { data, .. } => Some(data),
            Self::UnknownAddress(_) | Self::ForeignHandle(_) => None,
        }
    }

    /// Returns `true` if the call reverted with exactly this error selector.
    pub fn is_revert_with(&self, error: Selector) -> bool {
        self.revert_data() == Some(error.as_bytes().as_slice())
    }
}

fn describe_revert(data: &[u8]) -> String {
    if data.is_empty() {
        String::new()
    } else {
        format!(" with 0x{}", hex::encode(data))
    }
}

/// Result alias for host invocations.
pub type InvocationResult<T> = Result<T, InvocationError>;
