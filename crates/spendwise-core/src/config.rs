//! Engine configuration
//!
//! Resolution order, later wins:
//! 1. Defaults embedded in the binary (`config/spendwise.toml`)
//! 2. Override file (`--config`, or `<data_local_dir>/spendwise/config/spendwise.toml`)
//! 3. Environment: `SPENDWISE_MODEL_PATH`, `SPENDWISE_HOST`, `SPENDWISE_PORT` / `PORT`
//!
//! The override file replaces the embedded one wholesale; keys it leaves out
//! take the built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Embedded default configuration
pub const DEFAULT_CONFIG: &str = include_str!("../../../config/spendwise.toml");

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5001;
const MODEL_FILE_NAME: &str = "expense_model.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub model: ModelConfig,
    pub server: ServerConfig,
    /// Override file the config was read from, if any
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Artifact file
    pub path: PathBuf,
    /// Train on the seed corpus when no usable artifact exists
    pub seed_on_missing: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig {
                path: default_model_path(),
                seed_on_missing: true,
            },
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                allowed_origins: Vec::new(),
            },
            source: None,
        }
    }
}

impl Config {
    /// Load from the override file (or embedded defaults), then apply the environment
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let mut config = load_file(override_path)?;
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Parse TOML content on top of the built-in defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }

    /// Apply environment overrides from a lookup function
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("SPENDWISE_MODEL_PATH").filter(|p| !p.is_empty()) {
            self.model.path = PathBuf::from(path);
        }
        if let Some(host) = lookup("SPENDWISE_HOST").filter(|h| !h.is_empty()) {
            self.server.host = host;
        }

        let port = lookup("SPENDWISE_PORT")
            .map(|p| ("SPENDWISE_PORT", p))
            .or_else(|| lookup("PORT").map(|p| ("PORT", p)));
        if let Some((key, value)) = port {
            self.server.port = value
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("{} is not a valid port: {}", key, value)))?;
        }

        Ok(())
    }

    /// `host:port` for binding the HTTP service
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("spendwise").join("config").join("spendwise.toml"))
}

/// Default artifact location
pub fn default_model_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("spendwise"))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(MODEL_FILE_NAME)
}

fn load_file(override_path: Option<&Path>) -> Result<Config> {
    let path = match override_path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path.to_path_buf())
        }
        None => default_config_path().filter(|p| p.exists()),
    };

    match path {
        Some(path) => {
            let content = fs::read_to_string(&path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            let mut config = parse_config(&content)?;
            info!("Loaded config from {}", path.display());
            config.source = Some(path);
            Ok(config)
        }
        None => {
            debug!("Using embedded default config");
            parse_config(DEFAULT_CONFIG)
        }
    }
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    model: Option<RawModel>,
    server: Option<RawServer>,
}

#[derive(Debug, Deserialize)]
struct RawModel {
    path: Option<PathBuf>,
    seed_on_missing: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawServer {
    host: Option<String>,
    port: Option<u16>,
    allowed_origins: Option<Vec<String>>,
}

fn parse_config(content: &str) -> Result<Config> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = Config::default();

    if let Some(model) = raw.model {
        if let Some(path) = model.path {
            config.model.path = path;
        }
        if let Some(seed) = model.seed_on_missing {
            config.model.seed_on_missing = seed;
        }
    }

    if let Some(server) = raw.server {
        if let Some(host) = server.host {
            config.server.host = host;
        }
        if let Some(port) = server.port {
            config.server.port = port;
        }
        if let Some(origins) = server.allowed_origins {
            config.server.allowed_origins = origins;
        }
    }

    Ok(config)
}
