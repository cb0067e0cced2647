use std::net::Ipv4Addr;
use std::sync::Arc;

use crate::config::EnvironmentProvider;
use crate::config::errors::ApplicationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValue {
    pub value: String,
    pub source: ConfigValueSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValueSource {
    EnvironmentVariable { name: String },
    Default,
}

/// Configuration specification with environment override → default priority
pub struct ConfigSpec {
    env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    pub env_override: Option<String>,
    pub default_value: Option<String>,
    pub min_length: Option<usize>,
    pub validator: Option<fn(&str) -> Result<(), String>>,
}

impl ConfigSpec {
    pub fn new(env_provider: Arc<dyn EnvironmentProvider + Send + Sync>) -> Self {
        Self {
            env_provider,
            env_override: None,
            default_value: None,
            min_length: None,
            validator: None,
        }
    }

    pub fn env_override(mut self, name: &str) -> Self {
        self.env_override = Some(name.to_string());
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    pub fn validator(mut self, f: fn(&str) -> Result<(), String>) -> Self {
        self.validator = Some(f);
        self
    }

    /// Load a setting value with source tracking
    ///
    /// The environment variable wins over the default. Values from either
    /// source go through the same validation.
    pub fn load_setting_with_source(&self) -> Result<ConfigValue, ApplicationError> {
        let setting_name = self.setting_name();

        if let Some(env_var) = &self.env_override {
            if let Some(value) = self.env_provider.get_var(env_var) {
                self.validate_value(&value, env_var)?;

                return Ok(ConfigValue {
                    value,
                    source: ConfigValueSource::EnvironmentVariable {
                        name: env_var.clone(),
                    },
                });
            }
        }

        match &self.default_value {
            Some(value) => {
                self.validate_value(value, &setting_name)?;
                Ok(ConfigValue {
                    value: value.clone(),
                    source: ConfigValueSource::Default,
                })
            }
            None => Err(ApplicationError::MissingRequiredSetting { setting_name }),
        }
    }

    /// Validate a setting value according to the ConfigSpec rules
    pub fn validate_value(&self, value: &str, setting_name: &str) -> Result<(), ApplicationError> {
        if let Some(min_len) = self.min_length {
            if value.len() < min_len {
                return Err(ApplicationError::InvalidSetting {
                    setting_name: setting_name.to_string(),
                    reason: format!("Value must be at least {} characters long", min_len),
                });
            }
        }

        if let Some(validator) = self.validator {
            validator(value).map_err(|reason| ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason,
            })?;
        }

        Ok(())
    }

    fn setting_name(&self) -> String {
        self.env_override
            .clone()
            .unwrap_or_else(|| "<unnamed>".to_string())
    }
}

/// Type parsing utilities for configuration values
impl ConfigSpec {
    pub fn parse_bool(value: &str, setting_name: &str) -> Result<bool, ApplicationError> {
        match value.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!(
                    "Expected boolean value, got '{}'. Valid values: true/false, 1/0, yes/no, on/off",
                    value
                ),
            }),
        }
    }

    pub fn parse_integer(value: &str, setting_name: &str) -> Result<i64, ApplicationError> {
        value
            .trim()
            .parse::<i64>()
            .map_err(|e| ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!("Expected integer, got '{}': {}", value, e),
            })
    }

    /// Parse a port number from string, rejecting 0
    pub fn parse_port(value: &str, setting_name: &str) -> Result<u16, ApplicationError> {
        let port = value
            .trim()
            .parse::<u16>()
            .map_err(|e| ApplicationError::ParseError {
                setting_name: setting_name.to_string(),
                error: format!("Expected port number (1-65535), got '{}': {}", value, e),
            })?;

        if port == 0 {
            return Err(ApplicationError::InvalidSetting {
                setting_name: setting_name.to_string(),
                reason: "Port number must be between 1 and 65535".to_string(),
            });
        }

        Ok(port)
    }

    pub fn validate_integer_range(value: &str, min: i64, max: i64) -> Result<(), String> {
        let parsed = value
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("Expected integer between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Value {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    pub fn validate_port_range(value: &str, min: u16, max: u16) -> Result<(), String> {
        let parsed = value
            .trim()
            .parse::<u16>()
            .map_err(|_| format!("Expected port number between {} and {}", min, max))?;

        if parsed < min || parsed > max {
            return Err(format!("Port {} is outside valid range {}-{}", parsed, min, max));
        }

        Ok(())
    }

    pub fn validate_bool(value: &str) -> Result<(), String> {
        Self::parse_bool(value, "").map(|_| ()).map_err(|e| match e {
            ApplicationError::ParseError { error, .. } => error,
            other => other.to_string(),
        })
    }

    /// Validate a bind address: an IPv4 address or `localhost`
    pub fn validate_host_address(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Host address cannot be empty".to_string());
        }

        if value == "localhost" {
            return Ok(());
        }

        value
            .parse::<Ipv4Addr>()
            .map(|_| ())
            .map_err(|_| format!("Expected an IPv4 address or 'localhost', got '{}'", value))
    }
}
