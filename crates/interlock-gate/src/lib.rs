//! Capability validation for Interlock.
//!
//! Before a Reader or Writer trusts an address, the address must prove it
//! implements the expected interface. Two checks are available and chosen
//! by configuration:
//!
//! - **probe**: ask the candidate for its capability id, require an exact match;
//! - **behavioral**: statically call every required operation, require
//!   well-formed replies.
//!
//! # Quick Start
//!
//! ```rust
//! use interlock_gate::{CapabilityValidator, ValidatorConfig};
//! use interlock_host::Host;
//! use interlock_store::Store;
//!
//! let host = Host::new();
//! let store = host.deploy(Store::new());
//! let validator = CapabilityValidator::new(ValidatorConfig::default());
//! assert!(validator.validate(&host, &store.address()).is_ok());
//! ```

pub mod check;
pub mod checks;
pub mod config;
pub mod error;
pub mod validator;

// Re-exports for convenience.
pub use check::ConformanceCheck;
pub use checks::{BehavioralCheck, ProbeCheck};
pub use config::{ValidationStrategy, ValidatorConfig};
pub use error::{CapabilityError, ConfigError};
pub use validator::CapabilityValidator;
