//! Built-in conformance checks.

pub mod behavioral;
pub mod probe;

pub use behavioral::BehavioralCheck;
pub use probe::ProbeCheck;
