use std::fmt;
use std::sync::Arc;

use crate::config::EnvironmentProvider;
use crate::config::config_spec::ConfigSpec;
use crate::config::errors::ApplicationError;

/// Bootstrap settings for infrastructure configuration
pub struct BootstrapSettings {
    database_url: String,
    database_max_connections: u32,
    database_echo: bool,
    server_host: String,
    server_port: u16,
}

impl BootstrapSettings {
    /// Load bootstrap settings through the given environment provider
    pub fn from_env_provider(
        env_provider: Arc<dyn EnvironmentProvider + Send + Sync>,
    ) -> Result<Self, ApplicationError> {
        let database_url = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value("sqlite://items.db?mode=rwc")
            .min_length(1)
            .load_setting_with_source()?
            .value;

        let max_connections_value = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_MAX_CONNECTIONS")
            .default_value("10")
            .validator(|value| ConfigSpec::validate_integer_range(value, 1, 1000))
            .load_setting_with_source()?
            .value;

        let echo_value = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_ECHO")
            .default_value("false")
            .validator(ConfigSpec::validate_bool)
            .load_setting_with_source()?
            .value;

        let server_host = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address)
            .load_setting_with_source()?
            .value;

        let port_value = ConfigSpec::new(env_provider)
            .env_override("PORT")
            .default_value("3000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535))
            .load_setting_with_source()?
            .value;

        let database_max_connections = u32::try_from(ConfigSpec::parse_integer(
            &max_connections_value,
            "DATABASE_MAX_CONNECTIONS",
        )?)
        .map_err(|e| ApplicationError::ParseError {
            setting_name: "DATABASE_MAX_CONNECTIONS".to_string(),
            error: format!("Expected unsigned integer, got '{}': {}", max_connections_value, e),
        })?;
        let database_echo = ConfigSpec::parse_bool(&echo_value, "DATABASE_ECHO")?;
        let server_port = ConfigSpec::parse_port(&port_value, "PORT")?;

        Ok(Self {
            database_url,
            database_max_connections,
            database_echo,
            server_host,
            server_port,
        })
    }

    /// Convenience method that uses the system environment provider
    pub fn from_env() -> Result<Self, ApplicationError> {
        use crate::config::SystemEnvironment;
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn database_echo(&self) -> bool {
        self.database_echo
    }

    pub fn server_host(&self) -> &str {
        &self.server_host
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl fmt::Debug for BootstrapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BootstrapSettings")
            .field("database_url", &self.database_url)
            .field("database_max_connections", &self.database_max_connections)
            .field("database_echo", &self.database_echo)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;

    fn load(vars: &[(&str, &str)]) -> Result<BootstrapSettings, ApplicationError> {
        BootstrapSettings::from_env_provider(Arc::new(MockEnvironment::empty().with_vars(vars)))
    }

    #[test]
    fn test_bootstrap_settings_with_all_vars() {
        let settings = load(&[
            ("DATABASE_URL", "sqlite://test.db"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
            ("DATABASE_ECHO", "true"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
        ])
        .unwrap();

        assert_eq!(settings.database_url(), "sqlite://test.db");
        assert_eq!(settings.database_max_connections(), 4);
        assert!(settings.database_echo());
        assert_eq!(settings.server_host(), "127.0.0.1");
        assert_eq!(settings.server_port(), 8080);
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_bootstrap_settings_with_defaults() {
        let settings = load(&[]).unwrap();

        assert_eq!(settings.database_url(), "sqlite://items.db?mode=rwc");
        assert_eq!(settings.database_max_connections(), 10);
        assert!(!settings.database_echo());
        assert_eq!(settings.server_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_bootstrap_settings_rejects_invalid_port() {
        let result = load(&[("PORT", "0")]);

        assert!(matches!(result, Err(ApplicationError::InvalidSetting { .. })));
    }

    #[test]
    fn test_bootstrap_settings_rejects_empty_database_url() {
        let result = load(&[("DATABASE_URL", "")]);

        assert!(matches!(result, Err(ApplicationError::InvalidSetting { .. })));
    }

    #[test]
    fn test_bootstrap_settings_rejects_non_boolean_echo() {
        let result = load(&[("DATABASE_ECHO", "sometimes")]);

        assert!(matches!(result, Err(ApplicationError::InvalidSetting { .. })));
    }

    #[test]
    fn test_bootstrap_settings_rejects_zero_connections() {
        let result = load(&[("DATABASE_MAX_CONNECTIONS", "0")]);

        assert!(matches!(result, Err(ApplicationError::InvalidSetting { .. })));
    }

    #[test]
    fn test_bootstrap_settings_accepts_connection_upper_bound() {
        let settings = load(&[("DATABASE_MAX_CONNECTIONS", "1000")]).unwrap();

        assert_eq!(settings.database_max_connections(), 1000);
    }

    #[test]
    fn test_bootstrap_settings_rejects_negative_connections() {
        let result = load(&[("DATABASE_MAX_CONNECTIONS", "-5")]);

        assert!(matches!(result, Err(ApplicationError::InvalidSetting { .. })));
    }
}
