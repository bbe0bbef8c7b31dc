//! Repeated querying of each model and collection of extracted rankings.

use std::time::Duration;

use proxyrank_core::{ExperimentReport, ModelRun, RankingExtractor, ranking_prompt};
use proxyrank_models::ModelEntry;
use proxyrank_models::providers::{ChatRequest, Message, ModelProvider};
use tracing::{info, warn};

/// Trial settings shared by every model.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub runs: usize,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
    /// Pause after each API call.
    pub delay: Duration,
}

/// Drives an experiment against a single provider.
pub struct ExperimentRunner<'a> {
    provider: &'a dyn ModelProvider,
    extractor: RankingExtractor,
    prompt: String,
    settings: RunSettings,
}

impl<'a> ExperimentRunner<'a> {
    pub fn new(
        provider: &'a dyn ModelProvider,
        extractor: RankingExtractor,
        settings: RunSettings,
    ) -> Self {
        let prompt = ranking_prompt(extractor.items());
        Self {
            provider,
            extractor,
            prompt,
            settings,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Query every model in order and collect the results.
    pub async fn run(&self, models: &[ModelEntry]) -> ExperimentReport {
        let mut report = ExperimentReport::new(
            self.extractor.items().clone(),
            self.prompt.clone(),
            self.settings.runs,
        );
        info!(run_id = %report.run_id, models = models.len(), runs = self.settings.runs, "starting experiment");

        for entry in models {
            report.models.push(self.run_model(entry).await);
        }
        report
    }

    /// Run all trials for one model.
    ///
    /// A trial fails only when the query errors or returns no text; any
    /// non-empty response is parsed and counted, even if nothing resolves.
    pub async fn run_model(&self, entry: &ModelEntry) -> ModelRun {
        let mut model_run = ModelRun::new(&entry.alias, entry.id.as_str());
        info!(model = %entry.alias, id = %entry.id, "testing model");

        for run in 1..=self.settings.runs {
            let mut request = ChatRequest::new(
                entry.id.as_str(),
                vec![Message::user(self.prompt.as_str())],
            )
            .temperature(self.settings.temperature);
            if let Some(max_tokens) = self.settings.max_tokens {
                request = request.max_tokens(max_tokens);
            }

            match self.provider.chat(request).await {
                Ok(response) if !response.is_empty() => {
                    let record = self.extractor.extract(Some(response.content.as_str()));
                    info!(
                        model = %entry.alias,
                        run,
                        of = self.settings.runs,
                        resolved = record.resolved_count(),
                        "trial parsed"
                    );
                    model_run.record_success(response.content, record);
                }
                Ok(_) => {
                    warn!(model = %entry.alias, run, "empty response");
                    model_run.record_failure(run, "empty response");
                }
                Err(e) => {
                    warn!(model = %entry.alias, run, error = %e, "API call failed");
                    model_run.record_failure(run, e.to_string());
                }
            }

            if !self.settings.delay.is_zero() {
                tokio::time::sleep(self.settings.delay).await;
            }
        }

        let model_run = model_run.finish(self.extractor.items());
        if model_run.error.is_some() {
            warn!(model = %entry.alias, "all API calls failed");
        }
        model_run
    }
}
