use std::fmt;
use std::sync::Arc;

use crate::config::config_spec::ConfigSpec;
use crate::config::env_provider::{SharedEnvironment, SystemEnvironment};
use crate::config::errors::ApplicationError;

/// Infrastructure settings needed before the server can start
pub struct ServerSettings {
    database_url: String,
    server_host: String,
    server_port: u16,
    cors_origin: String,
    public_url: String,
}

impl ServerSettings {
    /// Load settings through the given environment provider
    pub fn from_env_provider(env_provider: SharedEnvironment) -> Result<Self, ApplicationError> {
        let database_url_spec = ConfigSpec::new(env_provider.clone())
            .env_override("DATABASE_URL")
            .default_value("sqlite://esda.db?mode=rwc")
            .min_length(1);

        let host_spec = ConfigSpec::new(env_provider.clone())
            .env_override("HOST")
            .default_value("0.0.0.0")
            .validator(ConfigSpec::validate_host_address);

        let port_spec = ConfigSpec::new(env_provider.clone())
            .env_override("PORT")
            .default_value("3000")
            .validator(|value| ConfigSpec::validate_port_range(value, 1, 65535));

        let cors_origin_spec = ConfigSpec::new(env_provider.clone())
            .env_override("CORS_ORIGIN")
            .default_value("http://localhost:5173")
            .validator(ConfigSpec::validate_http_origin);

        let public_url_spec = ConfigSpec::new(env_provider)
            .env_override("PUBLIC_URL");

        let database_url = database_url_spec.load()?.value;
        let server_host = host_spec.load()?.value;
        let server_port = ConfigSpec::parse_port(&port_spec.load()?.value, "PORT")?;
        let cors_origin = cors_origin_spec.load()?.value;

        let public_url = match public_url_spec.load()?.value {
            url if url.is_empty() => format!("http://localhost:{}", server_port),
            url => url.trim_end_matches('/').to_string(),
        };

        Ok(Self {
            database_url,
            server_host,
            server_port,
            cors_origin,
            public_url,
        })
    }

    /// Load settings from the process environment
    pub fn from_env() -> Result<Self, ApplicationError> {
        Self::from_env_provider(Arc::new(SystemEnvironment))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
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

    /// The single origin allowed by CORS
    pub fn cors_origin(&self) -> &str {
        &self.cors_origin
    }

    /// Base URL advertised in the OpenAPI document
    pub fn public_url(&self) -> &str {
        &self.public_url
    }
}

// database_url may carry credentials for non-sqlite backends
impl fmt::Debug for ServerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerSettings")
            .field("database_url", &"[redacted]")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("cors_origin", &self.cors_origin)
            .field("public_url", &self.public_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env_provider::MockEnvironment;

    #[test]
    fn test_server_settings_with_all_vars() {
        let env = MockEnvironment::empty()
            .with_vars(&[
                ("DATABASE_URL", "sqlite://test.db"),
                ("HOST", "127.0.0.1"),
                ("PORT", "8080"),
                ("CORS_ORIGIN", "https://esda.example.com"),
                ("PUBLIC_URL", "https://api.esda.example.com/"),
            ])
            .shared();

        let settings = ServerSettings::from_env_provider(env).unwrap();

        assert_eq!(settings.database_url(), "sqlite://test.db");
        assert_eq!(settings.server_host(), "127.0.0.1");
        assert_eq!(settings.server_port(), 8080);
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
        assert_eq!(settings.cors_origin(), "https://esda.example.com");
        assert_eq!(settings.public_url(), "https://api.esda.example.com");
    }

    #[test]
    fn test_server_settings_defaults() {
        let settings = ServerSettings::from_env_provider(MockEnvironment::empty().shared()).unwrap();

        assert_eq!(settings.database_url(), "sqlite://esda.db?mode=rwc");
        assert_eq!(settings.server_address(), "0.0.0.0:3000");
        assert_eq!(settings.cors_origin(), "http://localhost:5173");
        assert_eq!(settings.public_url(), "http://localhost:3000");
    }

    #[test]
    fn test_public_url_follows_port_by_default() {
        let env = MockEnvironment::empty().with_var("PORT", "4000").shared();

        let settings = ServerSettings::from_env_provider(env).unwrap();

        assert_eq!(settings.public_url(), "http://localhost:4000");
    }

    #[test]
    fn test_empty_database_url_fails_validation() {
        let env = MockEnvironment::empty().with_var("DATABASE_URL", "").shared();

        match ServerSettings::from_env_provider(env) {
            Err(ApplicationError::InvalidSetting { setting_name, reason }) => {
                assert_eq!(setting_name, "DATABASE_URL");
                assert!(reason.contains("must be at least 1 characters long"));
            }
            other => panic!("Expected InvalidSetting for DATABASE_URL, got: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_port_fails_validation() {
        let env = MockEnvironment::empty().with_var("PORT", "not_a_number").shared();

        match ServerSettings::from_env_provider(env) {
            Err(ApplicationError::InvalidSetting { setting_name, reason }) => {
                assert_eq!(setting_name, "PORT");
                assert!(reason.contains("Expected port number between 1 and 65535"));
            }
            other => panic!("Expected InvalidSetting for PORT, got: {:?}", other),
        }
    }

    #[test]
    fn test_zero_port_fails_validation() {
        let env = MockEnvironment::empty().with_var("PORT", "0").shared();

        match ServerSettings::from_env_provider(env) {
            Err(ApplicationError::InvalidSetting { setting_name, reason }) => {
                assert_eq!(setting_name, "PORT");
                assert!(reason.contains("outside valid range"));
            }
            other => panic!("Expected InvalidSetting for PORT, got: {:?}", other),
        }
    }

    #[test]
    fn test_cors_origin_with_path_fails_validation() {
        let env = MockEnvironment::empty()
            .with_var("CORS_ORIGIN", "http://localhost:5173/app")
            .shared();

        match ServerSettings::from_env_provider(env) {
            Err(ApplicationError::InvalidSetting { setting_name, .. }) => {
                assert_eq!(setting_name, "CORS_ORIGIN");
            }
            other => panic!("Expected InvalidSetting for CORS_ORIGIN, got: {:?}", other),
        }
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let env = MockEnvironment::empty()
            .with_var("DATABASE_URL", "postgres://user:secret@db/esda")
            .shared();

        let settings = ServerSettings::from_env_provider(env).unwrap();

        assert!(!format!("{:?}", settings).contains("secret"));
    }
}
