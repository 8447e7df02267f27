//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub hub: HubSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP and WebSocket server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built front end (index.html, wasm, js)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    /// Optional HTML file served at `/` instead of the static index
    #[serde(default)]
    pub page_file: Option<String>,

    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "webpanel-ui/dist".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            page_file: None,
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Connection hub limits
#[derive(Debug, Clone, Deserialize)]
pub struct HubSettings {
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,

    #[serde(default = "default_inbound_capacity")]
    pub inbound_capacity: usize,
}

fn default_max_connections() -> usize {
    1000
}

fn default_inbound_capacity() -> usize {
    256
}

impl Default for HubSettings {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            inbound_capacity: default_inbound_capacity(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    /// Whether structured JSON output was requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("webpanel").join("config.toml")),
            Some(PathBuf::from("/etc/webpanel/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = var("WEBPANEL_HOST") {
            self.server.host = host;
        }
        if let Some(port) = var("WEBPANEL_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!(value = %port, "Ignoring invalid WEBPANEL_PORT"),
            }
        }
        if let Some(dir) = var("WEBPANEL_STATIC_DIR") {
            self.server.static_dir = dir;
        }
        if let Some(file) = var("WEBPANEL_PAGE_FILE") {
            self.server.page_file = Some(file);
        }

        if let Some(level) = var("WEBPANEL_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("WEBPANEL_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Webpanel Configuration
#
# Environment variables override these settings:
# - WEBPANEL_HOST
# - WEBPANEL_PORT
# - WEBPANEL_STATIC_DIR
# - WEBPANEL_PAGE_FILE
# - WEBPANEL_LOG_LEVEL
# - WEBPANEL_LOG_FORMAT

[server]
# Server host
host = "0.0.0.0"

# Server port (the page connects to ws://<host>:<port>/ws)
port = 8080

# Built front end (output of `trunk build` in webpanel-ui)
static_dir = "webpanel-ui/dist"

# Optional HTML file served at / instead of the front end
# page_file = "sign_in.html"

# Allowed CORS origins (empty = permissive)
cors_origins = []

[hub]
# Maximum number of concurrent WebSocket clients
max_connections = 1000

# Buffered inbound client messages per listener
inbound_capacity = 256

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.hub.max_connections, 1000);
        assert!(!config.logging.is_json());
    }

    #[test]
    fn test_generated_config_parses() {
        let config = Config::parse(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir, "webpanel-ui/dist");
        assert!(config.server.page_file.is_none());
        assert_eq!(config.hub.inbound_capacity, 256);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9001\n\n[logging]\nformat = \"json\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.logging.is_json());
        assert_eq!(config.hub.max_connections, 1000);
    }

    #[test]
    fn test_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/webpanel.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("WEBPANEL_HOST", "127.0.0.1"),
            ("WEBPANEL_PORT", "9090"),
            ("WEBPANEL_PAGE_FILE", "page.html"),
            ("WEBPANEL_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.addr(), "127.0.0.1:9090");
        assert_eq!(config.server.page_file.as_deref(), Some("page.html"));
        assert!(config.logging.is_json());
    }

    #[test]
    fn test_invalid_port_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| (key == "WEBPANEL_PORT").then(|| "not-a-port".to_string()));
        assert_eq!(config.server.port, 8080);
    }
}
