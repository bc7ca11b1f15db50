//! Configuration file structure
//!
//! Every field is optional. Values are resolved in order: built-in
//! defaults, the JSON config file, environment variables, CLI flags.
//!
//! Environment overrides: `PORT`, `HOST`, `API_KEY`, `STORAGE_BACKEND`,
//! `DATA_FILE`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::http_server::HttpServerConfig;
use crate::rest_api::DEFAULT_LIMIT;
use crate::store::StorageBackendKind;

use super::errors::{CliError, CliResult};

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Listener settings
    #[serde(default)]
    pub server: HttpServerConfig,

    /// Shared secret for mutating requests (default: "my-secret-key")
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Storage backend settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// List pagination settings
    #[serde(default)]
    pub pagination: PaginationConfig,
}

/// Storage backend settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// "memory" or "file" (default: "memory")
    #[serde(default = "default_backend")]
    pub backend: StorageBackendKind,

    /// JSON data file used by the file backend and `init`
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Seed the memory backend with the sample catalog (default: true)
    #[serde(default = "default_seed")]
    pub seed_sample_data: bool,
}

/// List pagination settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size when a request gives no `limit` (default: 10)
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

fn default_api_key() -> String {
    "my-secret-key".to_string()
}
fn default_backend() -> StorageBackendKind {
    StorageBackendKind::Memory
}
fn default_data_file() -> PathBuf {
    PathBuf::from("./data/products.json")
}
fn default_seed() -> bool {
    true
}
fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            data_file: default_data_file(),
            seed_sample_data: default_seed(),
        }
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            api_key: default_api_key(),
            storage: StorageConfig::default(),
            pagination: PaginationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))
    }

    /// Resolve the full configuration: optional file, then process
    /// environment, then validation.
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> CliResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| CliError::config_error(format!("Invalid PORT: '{}'", port)))?;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(key) = lookup("API_KEY") {
            self.api_key = key;
        }
        if let Some(backend) = lookup("STORAGE_BACKEND") {
            self.storage.backend = backend.parse().map_err(CliError::config_error)?;
        }
        if let Some(path) = lookup("DATA_FILE") {
            self.storage.data_file = PathBuf::from(path);
        }
        Ok(())
    }

    /// Validate resolved values
    pub fn validate(&self) -> CliResult<()> {
        if self.api_key.is_empty() {
            return Err(CliError::config_error("api_key must not be empty"));
        }

        if self.pagination.default_limit == 0 {
            return Err(CliError::config_error("pagination.default_limit must be > 0"));
        }

        if self.storage.backend == StorageBackendKind::File
            && self.storage.data_file.as_os_str().is_empty()
        {
            return Err(CliError::config_error(
                "storage.data_file is required for the file backend",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.api_key, "my-secret-key");
        assert_eq!(config.storage.backend, StorageBackendKind::Memory);
        assert!(config.storage.seed_sample_data);
        assert_eq!(config.pagination.default_limit, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("catalog.json");
        let config_json = json!({
            "storage": { "backend": "file", "data_file": "/tmp/p.json" },
            "pagination": { "default_limit": 5 }
        });
        fs::write(&config_path, config_json.to_string()).unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.storage.backend, StorageBackendKind::File);
        assert_eq!(config.storage.data_file, PathBuf::from("/tmp/p.json"));
        assert_eq!(config.pagination.default_limit, 5);
        assert_eq!(config.api_key, "my-secret-key");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("catalog.json");
        fs::write(&config_path, "{ nope").unwrap();
        assert!(Config::load(&config_path).is_err());
        assert!(Config::load(&temp_dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config
            .apply_env(env(&[
                ("PORT", "8088"),
                ("API_KEY", "from-env"),
                ("STORAGE_BACKEND", "file"),
                ("DATA_FILE", "products.json"),
            ]))
            .unwrap();

        assert_eq!(config.server.port, 8088);
        assert_eq!(config.api_key, "from-env");
        assert_eq!(config.storage.backend, StorageBackendKind::File);
        assert_eq!(config.storage.data_file, PathBuf::from("products.json"));
    }

    #[test]
    fn test_invalid_env_values() {
        let mut config = Config::default();
        assert!(config.apply_env(env(&[("PORT", "eighty")])).is_err());
        assert!(config.apply_env(env(&[("STORAGE_BACKEND", "s3")])).is_err());
    }

    #[test]
    fn test_validation() {
        let mut config = Config::default();
        config.api_key = String::new();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.pagination.default_limit = 0;
        assert!(config.validate().is_err());
    }
}
