//! The single-value Store for Interlock.
//!
//! [`Store`] is the only source of truth: one integer, empty until first
//! written, last write wins. It is reachable two ways:
//!
//! - directly, through the [`ValueStore`] trait, when the caller owns it;
//! - through an `interlock_host::Host`, by selector, when the caller only
//!   has its address.
//!
//! [`StoreInterface`] marks contracts whose conformance is known at compile
//! time. [`NonStore`] is a deliberately non-conforming candidate.

pub mod error;
pub mod memory;
pub mod non_store;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::Store;
pub use non_store::NonStore;
pub use traits::{StoreInterface, ValueStore};
