use interlock_types::{Address, CapabilityId};

/// Reasons a candidate address is refused.
///
/// Every variant is terminal for the attempted bind: nothing is retried and
/// nothing is partially accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    /// The probe reported a different identifier, or none at all.
    #[error(
        "{address} does not support interface {expected} (probe returned {})",
        describe_found(.found)
    )]
    NotSupported {
        address: Address,
        expected: CapabilityId,
        found: Option<CapabilityId>,
    },

    /// A required operation could not be invoked or answered malformed.
    #[error("conformance call {operation} on {address} failed: {reason}")]
    InvocationFailed {
        address: Address,
        operation: String,
        reason: String,
    },
}

fn describe_found(found: &Option<CapabilityId>) -> String {
    match found {
        Some(id) => id.to_hex(),
        None => "nothing".into(),
    }
}

/// Errors from loading validator configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Parse(String),

    #[error("unknown validation strategy '{0}' (expected 'probe' or 'behavioral')")]
    UnknownStrategy(String),
}
