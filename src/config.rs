//! Configuration loading and constants.
//!
//! All configuration comes from environment variables, read once at startup
//! into an immutable `AppConfig` that is shared by reference with every
//! handler. Nothing reads the environment after startup.

/// Default TCP port when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Default display name when `APP_NAME` is unset.
pub const DEFAULT_APP_NAME: &str = "unraid-app";

/// Default version string when `VERSION` is unset.
pub const DEFAULT_VERSION: &str = "development";

/// Default log filter when neither `--log-level` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "unraid_app=debug";

/// Process-wide configuration, populated from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the server binds on all interfaces.
    pub port: u16,
    /// Display name shown on the landing page and in /info.
    pub app_name: String,
    /// Version string shown on the landing page and in /info.
    pub version: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a lookup function.
    ///
    /// Unset variables fall back to their defaults. A `PORT` that is set but
    /// does not parse as a TCP port is a startup error rather than being
    /// passed through to the bind call.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            app_name: lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            version: lookup("VERSION").unwrap_or_else(|| DEFAULT_VERSION.to_string()),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a valid TCP port number (0-65535), got '{0}'")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
        assert_eq!(config.version, DEFAULT_VERSION);
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = AppConfig::from_lookup(|key| match key {
            "PORT" => Some("8080".to_string()),
            "APP_NAME" => Some("TestApp".to_string()),
            "VERSION" => Some("1.2.3".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.app_name, "TestApp");
        assert_eq!(config.version, "1.2.3");
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = AppConfig::from_lookup(|key| match key {
            "PORT" => Some("not-a-port".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "not-a-port"));
    }

    #[test]
    fn out_of_range_port_is_rejected() {
        let err = AppConfig::from_lookup(|key| match key {
            "PORT" => Some("70000".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }
}
