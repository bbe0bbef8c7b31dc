use super::types::{
    DEFAULT_DELAY_MS, DEFAULT_RESULTS_DIR, DEFAULT_RUNS, DEFAULT_TEMPERATURE, DEFAULT_TITLE,
    ExperimentConfig, ProviderConfig, ProxyrankConfig, RawExperimentConfig, RawProviderConfig,
    RawProxyrankConfig, default_items, default_models,
};
use anyhow::{Context, Result};
use proxyrank_models::providers::DEFAULT_BASE_URL;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<ProxyrankConfig> {
        let mut raw = RawProxyrankConfig::default();

        // Layer 1: User config
        let user_path = Self::user_config_path();
        if let Some(user_config) = Self::read_raw(&user_path)? {
            raw = Self::merge_raw(raw, user_config);
        }

        // Layer 2: Project config
        let project_path = Self::project_config_path();
        if let Some(project_config) = Self::read_raw(&project_path)? {
            raw = Self::merge_raw(raw, project_config);
        }

        Ok(Self::finalize(raw))
    }

    /// Get user config path
    pub fn user_config_path() -> PathBuf {
        proxyrank_paths::user_config_file()
    }

    /// Get project config path
    /// Can be overridden with PROXYRANK_PROJECT_CONFIG_DIR env var (useful for isolated e2e tests)
    pub fn project_config_path() -> PathBuf {
        proxyrank_paths::project_config_file(Path::new("."))
    }

    fn read_raw(path: &Path) -> Result<Option<RawProxyrankConfig>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let raw = toml::from_str(&contents)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        debug!(path = %path.display(), "loaded config layer");
        Ok(Some(raw))
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawProxyrankConfig, overlay: RawProxyrankConfig) -> RawProxyrankConfig {
        RawProxyrankConfig {
            experiment: RawExperimentConfig {
                runs: overlay.experiment.runs.or(base.experiment.runs),
                temperature: overlay.experiment.temperature.or(base.experiment.temperature),
                max_tokens: overlay.experiment.max_tokens.or(base.experiment.max_tokens),
                delay_ms: overlay.experiment.delay_ms.or(base.experiment.delay_ms),
                results_dir: overlay.experiment.results_dir.or(base.experiment.results_dir),
            },
            provider: RawProviderConfig {
                base_url: overlay.provider.base_url.or(base.provider.base_url),
                referer: overlay.provider.referer.or(base.provider.referer),
                title: overlay.provider.title.or(base.provider.title),
            },
            models: overlay.models.or(base.models),
            items: overlay.items.or(base.items),
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawProxyrankConfig) -> ProxyrankConfig {
        ProxyrankConfig {
            experiment: ExperimentConfig {
                runs: raw.experiment.runs.unwrap_or(DEFAULT_RUNS),
                temperature: raw.experiment.temperature.unwrap_or(DEFAULT_TEMPERATURE),
                max_tokens: raw.experiment.max_tokens,
                delay_ms: raw.experiment.delay_ms.unwrap_or(DEFAULT_DELAY_MS),
                results_dir: raw
                    .experiment
                    .results_dir
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_RESULTS_DIR)),
            },
            provider: ProviderConfig {
                base_url: raw
                    .provider
                    .base_url
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                referer: raw.provider.referer,
                title: raw
                    .provider
                    .title
                    .unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            },
            models: raw.models.unwrap_or_else(default_models),
            items: raw.items.unwrap_or_else(default_items),
        }
    }

    /// Load a single config file with defaults applied (for testing)
    #[cfg(test)]
    pub fn load_from_path(path: &Path) -> Result<ProxyrankConfig> {
        let raw = Self::read_raw(path)?.unwrap_or_default();
        Ok(Self::finalize(raw))
    }
}
