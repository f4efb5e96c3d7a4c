//! Selector registry for Interlock.
//!
//! Turns operation signatures into four-byte selectors with domain-separated
//! BLAKE3, folds selector sets into capability identifiers, and keeps the
//! process-wide table of well-known identifiers used by the Store interface.
//!
//! All hashing wraps the `blake3` crate; no custom cryptography.

pub mod hasher;
pub mod interface;
pub mod registry;
pub mod signature;

pub use hasher::{compute_capability_id, compute_selector, SelectorHasher};
pub use interface::{InterfaceSpec, Operation, ReturnKind};
pub use registry::{store_interface_id, StoreSelectors, PROBE, SELECTORS, STORE_INTERFACE};
pub use signature::{ParamType, Signature, SignatureError};
