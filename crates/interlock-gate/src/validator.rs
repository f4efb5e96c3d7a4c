use std::fmt;
use std::time::Instant;

use interlock_crypto::{InterfaceSpec, STORE_INTERFACE};
use interlock_host::Host;
use interlock_types::{Address, CapabilityId};

use crate::check::ConformanceCheck;
use crate::checks::{BehavioralCheck, ProbeCheck};
use crate::config::{ValidationStrategy, ValidatorConfig};
use crate::error::CapabilityError;

/// Gatekeeper for external references.
///
/// Every address a Reader or Writer is asked to trust passes through
/// [`CapabilityValidator::validate`] first. The validator is stateless
/// between calls and may be shared freely.
pub struct CapabilityValidator {
    config: ValidatorConfig,
    interface: InterfaceSpec,
    check: Box<dyn ConformanceCheck>,
}

impl CapabilityValidator {
    /// Validator for the Store interface.
    pub fn new(config: ValidatorConfig) -> Self {
        Self::for_interface(config, (*STORE_INTERFACE).clone())
    }

    /// Validator for an arbitrary interface.
    pub fn for_interface(config: ValidatorConfig, interface: InterfaceSpec) -> Self {
        let check = check_for(config.strategy);
        Self {
            config,
            interface,
            check,
        }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn strategy(&self) -> ValidationStrategy {
        self.config.strategy
    }

    pub fn interface(&self) -> &InterfaceSpec {
        &self.interface
    }

    /// The identifier candidates must implement.
    pub fn expected_id(&self) -> CapabilityId {
        self.interface.id()
    }

    /// Accept or refuse `address`.
    ///
    /// The null address gets no special treatment: nothing is deployed there,
    /// so the configured check refuses it like any other unknown address.
    pub fn validate(&self, host: &Host, address: &Address) -> Result<(), CapabilityError> {
        let start = Instant::now();
        let outcome = self.check.check(host, address, &self.interface);
        match &outcome {
            Ok(()) => tracing::debug!(
                %address,
                interface = self.interface.name(),
                expected = %self.interface.id(),
                strategy = self.check.name(),
                elapsed = ?start.elapsed(),
                "candidate accepted"
            ),
            Err(err) => tracing::warn!(
                %address,
                interface = self.interface.name(),
                expected = %self.interface.id(),
                strategy = self.check.name(),
                error = %err,
                "candidate refused"
            ),
        }
        outcome
    }
}

fn check_for(strategy: ValidationStrategy) -> Box<dyn ConformanceCheck> {
    match strategy {
        ValidationStrategy::Probe => Box::new(ProbeCheck),
        ValidationStrategy::Behavioral => Box::new(BehavioralCheck),
    }
}

impl Default for CapabilityValidator {
    fn default() -> Self {
        Self::new(ValidatorConfig::default())
    }
}

impl fmt::Debug for CapabilityValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityValidator")
            .field("interface", &self.interface.name())
            .field("expected", &self.interface.id())
            .field("strategy", &self.config.strategy)
            .finish()
    }
}
