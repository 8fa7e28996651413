//! Configuration management for the SolarZ CLI

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::ClientOptions;
use crate::error::{ConfigError, Result};

/// CLI configuration stored in `~/.solarz/config.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Account e-mail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Account password
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Custom API base URL (defaults to the production host)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".solarz").join("config.yaml"))
    }

    /// Resolve an explicit path, falling back to the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an explicit path or the default location
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an explicit path or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The file holds a password
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Validate that login credentials are present
    pub fn validate_auth(&self) -> Result<()> {
        self.credentials().map(|_| ())
    }

    /// Username and password, or `MissingCredentials`
    pub fn credentials(&self) -> Result<(&str, &str)> {
        match (self.username.as_deref(), self.password.as_deref()) {
            (Some(user), Some(pass)) if !user.is_empty() && !pass.is_empty() => Ok((user, pass)),
            _ => Err(ConfigError::MissingCredentials.into()),
        }
    }

    /// Client options from this config, with an optional host override
    /// taking precedence over `api_host`.
    pub fn client_options(&self, api_host_override: Option<&str>) -> ClientOptions {
        let host = api_host_override
            .map(str::to_string)
            .or_else(|| self.api_host.clone());

        let mut options = ClientOptions::with_host(host);
        if let Some(secs) = self.timeout_secs {
            options.timeout = Duration::from_secs(secs);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{API_BASE_URL, DEFAULT_TIMEOUT};
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.username.is_none());
        assert!(config.password.is_none());
        assert!(config.api_host.is_none());
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_validate_auth() {
        let mut config = Config::default();
        assert!(matches!(
            config.validate_auth(),
            Err(Error::Config(ConfigError::MissingCredentials))
        ));

        config.username = Some("user@example.com".to_string());
        assert!(config.validate_auth().is_err());

        config.password = Some(String::new());
        assert!(config.validate_auth().is_err());

        config.password = Some("secret".to_string());
        assert!(config.validate_auth().is_ok());
        assert_eq!(config.credentials().unwrap(), ("user@example.com", "secret"));
    }

    #[test]
    fn test_client_options_precedence() {
        let config = Config {
            api_host: Some("http://from-config".to_string()),
            timeout_secs: Some(5),
            ..Config::default()
        };

        let options = config.client_options(None);
        assert_eq!(options.base_url, "http://from-config");
        assert_eq!(options.timeout, Duration::from_secs(5));

        let options = config.client_options(Some("http://from-flag"));
        assert_eq!(options.base_url, "http://from-flag");

        let options = Config::default().client_options(None);
        assert_eq!(options.base_url, API_BASE_URL);
        assert_eq!(options.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.yaml");

        let config = Config {
            username: Some("user@example.com".to_string()),
            password: Some("secret".to_string()),
            api_host: None,
            timeout_secs: Some(10),
        };
        config.save_to(path.clone()).unwrap();

        let loaded = Config::load_from(path.clone()).unwrap();
        assert_eq!(loaded.username.as_deref(), Some("user@example.com"));
        assert_eq!(loaded.timeout_secs, Some(10));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(!raw.contains("api_host"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempdir().unwrap();
        let err = Config::load_from(temp.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NotFound)));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "username: [unterminated").unwrap();

        let err = Config::load_from(path).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::ParseError(_))));
    }
}
