use std::path::PathBuf;

use proxyrank_core::{Item, ItemSet};
use proxyrank_models::ModelEntry;
use proxyrank_models::providers::DEFAULT_BASE_URL;
use proxyrank_models::registry::DEFAULT_MODELS;
use serde::{Deserialize, Serialize};

/// Default number of trials per model
pub const DEFAULT_RUNS: usize = 100;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default pause between consecutive API calls, in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Default directory reports are written to
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Default application title sent to the provider
pub const DEFAULT_TITLE: &str = "proxyrank";

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawProxyrankConfig {
    #[serde(default)]
    pub experiment: RawExperimentConfig,

    #[serde(default)]
    pub provider: RawProviderConfig,

    /// Replaces the whole model list when set
    pub models: Option<Vec<ModelEntry>>,

    /// Replaces the whole item list when set
    pub items: Option<Vec<Item>>,
}

/// Experiment config as stored in TOML (optional fields for proper merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawExperimentConfig {
    pub runs: Option<usize>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub delay_ms: Option<u64>,
    pub results_dir: Option<PathBuf>,
}

/// Provider config as stored in TOML (optional fields for proper merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawProviderConfig {
    pub base_url: Option<String>,
    pub referer: Option<String>,
    pub title: Option<String>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyrankConfig {
    #[serde(default)]
    pub experiment: ExperimentConfig,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default = "default_models")]
    pub models: Vec<ModelEntry>,

    #[serde(default = "default_items")]
    pub items: Vec<Item>,
}

impl Default for ProxyrankConfig {
    fn default() -> Self {
        Self {
            experiment: ExperimentConfig::default(),
            provider: ProviderConfig::default(),
            models: default_models(),
            items: default_items(),
        }
    }
}

impl ProxyrankConfig {
    /// The configured items as a validated set
    pub fn item_set(&self) -> proxyrank_core::Result<ItemSet> {
        ItemSet::new(self.items.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Trials per model
    pub runs: usize,

    /// Sampling temperature
    pub temperature: f32,

    /// Optional cap on generated tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Pause between consecutive API calls
    pub delay_ms: u64,

    /// Directory the report is written to
    pub results_dir: PathBuf,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            runs: DEFAULT_RUNS,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
            delay_ms: DEFAULT_DELAY_MS,
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// OpenAI-compatible endpoint
    pub base_url: String,

    /// Sent as `HTTP-Referer`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referer: Option<String>,

    /// Sent as `X-Title`
    pub title: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            referer: None,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

pub fn default_models() -> Vec<ModelEntry> {
    DEFAULT_MODELS
        .iter()
        .map(|(alias, id)| ModelEntry::new(*alias, *id))
        .collect()
}

pub fn default_items() -> Vec<Item> {
    ItemSet::welfare_proxies().iter().cloned().collect()
}
