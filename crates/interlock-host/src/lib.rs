//! In-process instance host for Interlock.
//!
//! Stands in for the deployment runtime: contracts are deployed at derived
//! addresses and invoked by selector, either committing their effects or
//! statically (effects discarded). Callers holding only an [`Address`] learn
//! nothing about the contract behind it; callers holding a [`Deployed`] handle
//! know its concrete type.
//!
//! [`Address`]: interlock_types::Address

pub mod contract;
pub mod error;
pub mod host;

pub use contract::{CallMode, Contract, Revert};
pub use error::{InvocationError, InvocationResult};
pub use host::{Deployed, Host};
