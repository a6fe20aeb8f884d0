use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngramConfig {
    pub log_level: String,
    pub storage: StorageConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub maintenance: MaintenanceConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: String,
    pub dimensions: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RetrievalConfig {
    pub default_top_k: usize,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MaintenanceConfig {
    /// Default half-life for the decay pass, in days.
    pub half_life_days: f64,
}

impl Default for EngramConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            storage: StorageConfig::default(),
            embedding: EmbeddingConfig::default(),
            retrieval: RetrievalConfig::default(),
            maintenance: MaintenanceConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_engram_dir()
            .join("knowledge.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: "hash".into(),
            dimensions: crate::embedding::DEFAULT_DIMENSIONS,
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_top_k: crate::knowledge::types::DEFAULT_TOP_K,
        }
    }
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            half_life_days: 30.0,
        }
    }
}

/// Returns `~/.engram/`
pub fn default_engram_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".engram")
}

/// Returns the default config file path: `~/.engram/config.toml`
pub fn default_config_path() -> PathBuf {
    default_engram_dir().join("config.toml")
}

impl EngramConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            EngramConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (ENGRAM_DB, ENGRAM_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ENGRAM_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("ENGRAM_LOG_LEVEL") {
            self.log_level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
