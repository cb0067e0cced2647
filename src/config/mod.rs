mod bootstrap_settings;
mod config_spec;
mod database;
mod env_provider;
mod errors;
mod logging;

pub use bootstrap_settings::BootstrapSettings;
pub use config_spec::{ConfigSpec, ConfigValue, ConfigValueSource};
pub use database::{DatabaseProvider, DatabaseSession};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use errors::ApplicationError;
pub use logging::{LoggingConfig, LoggingError, init_logging};

#[cfg(test)]
pub use env_provider::MockEnvironment;
