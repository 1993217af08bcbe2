//! Runtime configuration for symptom-advisor.
//!
//! Configuration is loaded from a JSON file or constructed programmatically.
//! Every section has defaults, so a partial file only needs the keys it changes.

use std::path::PathBuf;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::engine::symptoms::VOCABULARY;

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "symptom-advisor", about = "Rule-based symptom suggestion server")]
pub struct Cli {
    /// Path to configuration file (JSON).
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// HTTP listen address.
    #[arg(long, default_value = "0.0.0.0:8080")]
    pub listen: String,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Symptom vocabulary.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Inference engine settings.
    #[serde(default)]
    pub engine: EngineConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Allow cross-origin requests from any origin.
    pub cors_permissive: bool,

    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            cors_permissive: true,
            request_timeout_secs: 300,
        }
    }
}

/// Symptom vocabulary offered to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Symptom names in display order.
    pub symptoms: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            symptoms: VOCABULARY.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Inference engine settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed for the catch-all confidence draw. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults for missing fields.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if path.exists() {
            let data = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&data)?;
            Ok(config)
        } else {
            tracing::warn!("Config file not found at {:?}, using defaults", path);
            Ok(Config::default())
        }
    }
}
