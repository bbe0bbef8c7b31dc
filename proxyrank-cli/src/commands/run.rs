//! Query every configured model and save the aggregated report.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Args;
use proxyrank_core::{ExperimentReport, RankingExtractor};
use proxyrank_models::ModelCatalog;
use proxyrank_models::auth::{CredentialStore, SERVICE_NAME};
use proxyrank_models::providers::OpenRouterProvider;
use tracing::info;

use crate::commands::auth::DEFAULT_PROVIDER;
use crate::config::ConfigLoader;
use crate::render;
use crate::runner::{ExperimentRunner, RunSettings};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Trials per model (defaults to experiment.runs)
    #[arg(short = 'n', long)]
    pub runs: Option<usize>,

    /// Only query this model alias; repeat to select several
    #[arg(short, long = "model")]
    pub models: Vec<String>,

    /// Directory to write the report to (defaults to experiment.results_dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Pause after each API call, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

pub async fn run(args: RunArgs) -> Result<()> {
    let config = ConfigLoader::load()?;

    let runs = args.runs.unwrap_or(config.experiment.runs);
    if runs == 0 {
        bail!("--runs must be at least 1");
    }

    let items = config.item_set().context("invalid [[items]] in config")?;
    let extractor = RankingExtractor::new(items)?;
    let catalog = ModelCatalog::from_entries(config.models)?;
    let selected = catalog.select(&args.models)?;
    if selected.is_empty() {
        bail!("No models configured");
    }

    let store = CredentialStore::new(SERVICE_NAME).with_env_fallback();
    let key = store
        .get(DEFAULT_PROVIDER)
        .context("no API key; run `proxyrank auth set` or set OPENROUTER_API_KEY")?;

    let mut provider = OpenRouterProvider::new(key)
        .with_base_url(&config.provider.base_url)
        .with_title(&config.provider.title);
    if let Some(referer) = &config.provider.referer {
        provider = provider.with_referer(referer);
    }

    let settings = RunSettings {
        runs,
        temperature: config.experiment.temperature,
        max_tokens: config.experiment.max_tokens,
        delay: Duration::from_millis(args.delay_ms.unwrap_or(config.experiment.delay_ms)),
    };
    let runner = ExperimentRunner::new(&provider, extractor, settings);
    let report = runner.run(&selected).await;

    let dir = args.output.unwrap_or(config.experiment.results_dir);
    let path = ExperimentReport::path_in(&dir);
    report
        .save(&path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "report saved");

    println!("{}", render::report_text(&report));
    println!();
    println!("Results saved to {}", path.display());
    Ok(())
}
