use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How a candidate address is checked against an interface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStrategy {
    /// Ask the candidate for its capability id and compare it.
    #[default]
    Probe,
    /// Statically invoke every required operation and check the replies.
    Behavioral,
}

impl ValidationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Probe => "probe",
            Self::Behavioral => "behavioral",
        }
    }
}

impl fmt::Display for ValidationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "probe" => Ok(Self::Probe),
            "behavioral" | "behavioural" => Ok(Self::Behavioral),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Configuration for the capability validator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Which conformance check runs on every bind.
    pub strategy: ValidationStrategy,
}

impl ValidatorConfig {
    /// Probe-based validation (the default).
    pub fn probe() -> Self {
        Self {
            strategy: ValidationStrategy::Probe,
        }
    }

    /// Behavioral validation.
    pub fn behavioral() -> Self {
        Self {
            strategy: ValidationStrategy::Behavioral,
        }
    }

    /// Parse from TOML. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
