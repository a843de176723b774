//! Server configuration.
//!
//! Loaded from an optional TOML file; any field left out takes its default.
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8000
//! allowed_origins = ["http://localhost:3000"]
//! ```

use crate::core::error::PipecheckResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default listen host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8000;

/// Settings for the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Origins allowed by CORS. `"*"` allows any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> PipecheckResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> PipecheckResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Replace host and port with command-line values when given.
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    /// `host:port` for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// True when any origin is accepted.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::PipecheckError;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:8000");
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml_str("port = 9100").unwrap();
        assert_eq!(config.port, 9100);
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_explicit_origins() {
        let config =
            ServerConfig::from_toml_str(r#"allowed_origins = ["http://localhost:3000"]"#).unwrap();
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = ServerConfig::from_toml_str("port = \"eighty\"").unwrap_err();
        assert!(matches!(err, PipecheckError::Config(_)));
    }

    #[test]
    fn test_load_from_file_and_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"0.0.0.0\"\nport = 8100").unwrap();

        let config = ServerConfig::load(file.path())
            .unwrap()
            .with_overrides(None, Some(8200));
        assert_eq!(config.bind_address(), "0.0.0.0:8200");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServerConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, PipecheckError::Io(_)));
    }
}
