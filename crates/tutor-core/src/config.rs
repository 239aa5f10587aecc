//! Tutor configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TutorError};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TutorConfig {
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub rag: RagConfig,
}

impl TutorConfig {
    /// Load config from the default path (~/.tutor/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TutorError::Config(format!("Failed to read config: {e}")))?;
        toml::from_str(&content)
            .map_err(|e| TutorError::Config(format!("Failed to parse config: {e}")))
    }

    /// Save config to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| TutorError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the tutor home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tutor")
    }
}

/// Gateway configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 { 8000 }
fn default_host() -> String { "127.0.0.1".into() }

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

/// LightRAG server connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagConfig {
    #[serde(default = "default_rag_endpoint")]
    pub endpoint: String,
    /// Retrieval mode passed through on every query (naive, local, global, hybrid).
    #[serde(default = "default_rag_mode")]
    pub mode: String,
    #[serde(default = "default_rag_timeout")]
    pub timeout_secs: u64,
}

fn default_rag_endpoint() -> String { "http://127.0.0.1:9621".into() }
fn default_rag_mode() -> String { "hybrid".into() }
fn default_rag_timeout() -> u64 { 120 }

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            endpoint: default_rag_endpoint(),
            mode: default_rag_mode(),
            timeout_secs: default_rag_timeout(),
        }
    }
}
