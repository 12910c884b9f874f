mod config_spec;
mod database;
mod env_provider;
mod errors;
mod logging;
mod server_settings;

pub use config_spec::{ConfigSpec, ConfigValue, ConfigValueSource};
pub use database::{connect_database, migrate_database};
pub use env_provider::{EnvironmentProvider, SharedEnvironment, SystemEnvironment};
pub use errors::ApplicationError;
pub use logging::{init_logging, init_logging_with, LoggingConfig, LoggingError};
pub use server_settings::ServerSettings;
