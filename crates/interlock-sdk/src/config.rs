use interlock_gate::{ConfigError, ValidatorConfig};
use serde::{Deserialize, Serialize};

/// Top-level Interlock configuration.
///
/// ```toml
/// [validator]
/// strategy = "behavioral"
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterlockConfig {
    pub validator: ValidatorConfig,
}

impl InterlockConfig {
    /// Parse from TOML. Missing sections take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Render as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interlock_gate::ValidationStrategy;

    #[test]
    fn defaults_to_probe() {
        assert_eq!(
            InterlockConfig::default().validator.strategy,
            ValidationStrategy::Probe
        );
    }

    #[test]
    fn parses_validator_section() {
        let config =
            InterlockConfig::from_toml_str("[validator]\nstrategy = \"behavioral\"\n").unwrap();
        assert_eq!(config.validator, ValidatorConfig::behavioral());
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(InterlockConfig::from_toml_str("").unwrap(), InterlockConfig::default());
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(matches!(
            InterlockConfig::from_toml_str("[validator"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn renders_back_to_toml() {
        let config = InterlockConfig {
            validator: ValidatorConfig::behavioral(),
        };
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("strategy = \"behavioral\""), "{text}");
        assert_eq!(InterlockConfig::from_toml_str(&text).unwrap(), config);
    }
}
