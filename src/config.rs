//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Development default values - NEVER use in production.
pub mod defaults {
    pub const DEV_DATABASE_URL: &str = "sqlite://jobtrack.db?mode=rwc";
    pub const DEV_HOST: &str = "127.0.0.1";
    pub const DEV_PORT: u16 = 8080;
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Check if this is a development environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Optional HTTP Basic credential pair for the deployment gate.
///
/// Both values must be present for the gate to be active; a half-configured
/// pair is rejected at startup rather than silently ignored.
#[derive(Debug, Clone)]
pub struct BasicAuthConfig {
    pub username: String,
    pub password: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL (SQLite connection string)
    pub database_url: String,
    /// Directory for static frontend assets (production only)
    pub static_dir: Option<PathBuf>,
    /// Basic-auth credentials; None leaves the server unauthenticated
    pub basic_auth: Option<BasicAuthConfig>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// In development mode (RUST_ENV=development):
    /// - All variables have sensible defaults
    /// - Only RUST_ENV is required
    ///
    /// In production mode (RUST_ENV=production):
    /// - Values must not match development defaults
    ///
    /// Environment variables:
    /// - `RUST_ENV`: Environment (development/production) - REQUIRED
    /// - `JOBTRACK_HOST`: Server host (default: 127.0.0.1)
    /// - `JOBTRACK_PORT`: Server port (default: 8080)
    /// - `DATABASE_URL`: SQLite connection string (default: sqlite://jobtrack.db?mode=rwc)
    /// - `JOBTRACK_STATIC_DIR`: Static assets directory for production
    /// - `BASIC_AUTH_USERNAME` / `BASIC_AUTH_PASSWORD`: enable the credential
    ///   gate when both are set; setting only one is a configuration error
    pub fn from_env() -> Result<Self, ConfigError> {
        // Parse environment - required
        let env_str = env::var("RUST_ENV").map_err(|_| ConfigError::MissingEnvVar("RUST_ENV"))?;

        let environment = Environment::parse(&env_str).ok_or(ConfigError::InvalidValue(
            "RUST_ENV must be 'development' or 'production'",
        ))?;

        // Load values with defaults
        let host = env::var("JOBTRACK_HOST").unwrap_or_else(|_| defaults::DEV_HOST.to_string());

        let port = env::var("JOBTRACK_PORT")
            .unwrap_or_else(|_| defaults::DEV_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("JOBTRACK_PORT must be a valid port number"))?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| defaults::DEV_DATABASE_URL.to_string());

        let static_dir = env::var("JOBTRACK_STATIC_DIR").ok().map(PathBuf::from);

        let basic_auth = match (
            env::var("BASIC_AUTH_USERNAME").ok(),
            env::var("BASIC_AUTH_PASSWORD").ok(),
        ) {
            (Some(username), Some(password)) => Some(BasicAuthConfig { username, password }),
            (None, None) => None,
            _ => {
                return Err(ConfigError::InvalidValue(
                    "BASIC_AUTH_USERNAME and BASIC_AUTH_PASSWORD must be set together",
                ));
            }
        };

        let config = Config {
            environment,
            host,
            port,
            database_url,
            static_dir,
            basic_auth,
        };

        // Validate production configuration
        if environment.is_production() {
            config.validate_production()?;
        }

        Ok(config)
    }

    /// Validate that production configuration does not use development defaults.
    fn validate_production(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.database_url == defaults::DEV_DATABASE_URL {
            errors.push(format!(
                "DATABASE_URL is using development default '{}'. Point it at a dedicated database file.",
                defaults::DEV_DATABASE_URL
            ));
        }

        if self.basic_auth.is_none() {
            errors.push(
                "BASIC_AUTH_USERNAME/BASIC_AUTH_PASSWORD are unset. A production deployment must gate requests."
                    .to_string(),
            );
        }

        if !errors.is_empty() {
            return Err(ConfigError::ProductionValidation(errors));
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Production configuration validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    ProductionValidation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address() {
        let config = Config {
            environment: Environment::Development,
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "sqlite://test.db?mode=rwc".to_string(),
            static_dir: None,
            basic_auth: None,
        };

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::parse("development"),
            Some(Environment::Development)
        );
        assert_eq!(Environment::parse("dev"), Some(Environment::Development));
        assert_eq!(
            Environment::parse("production"),
            Some(Environment::Production)
        );
        assert_eq!(Environment::parse("prod"), Some(Environment::Production));
        assert_eq!(Environment::parse("invalid"), None);
    }

    #[test]
    fn test_production_validation_fails_with_dev_defaults() {
        let config = Config {
            environment: Environment::Production,
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: defaults::DEV_DATABASE_URL.to_string(),
            static_dir: None,
            basic_auth: None,
        };

        let result = config.validate_production();
        assert!(result.is_err());

        if let Err(ConfigError::ProductionValidation(errors)) = result {
            assert_eq!(errors.len(), 2);
        }
    }

    #[test]
    fn test_production_validation_passes_with_proper_config() {
        let config = Config {
            environment: Environment::Production,
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "sqlite:///var/lib/jobtrack/jobtrack.db?mode=rwc".to_string(),
            static_dir: Some(PathBuf::from("/app/static")),
            basic_auth: Some(BasicAuthConfig {
                username: "owner".to_string(),
                password: "a-long-passphrase".to_string(),
            }),
        };

        let result = config.validate_production();
        assert!(result.is_ok());
    }
}
