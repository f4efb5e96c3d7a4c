//! Foundation types for Interlock.
//!
//! This crate provides the identifier and call-data types shared by every
//! other Interlock crate. It computes nothing about interfaces itself; the
//! hashing that turns signatures into selectors lives in `interlock-crypto`.
//!
//! # Key Types
//!
//! - [`Selector`]: Four-byte identifier of one operation signature
//! - [`CapabilityId`]: XOR of a set of selectors
//! - [`Address`]: Opaque handle to a deployed instance
//! - [`Call`]: Selector plus 32-byte argument words

pub mod abi;
pub mod address;
pub mod error;
pub mod selector;

pub use abi::{Call, Word, WORD_LEN};
pub use address::Address;
pub use error::TypeError;
pub use selector::{CapabilityId, Selector};
