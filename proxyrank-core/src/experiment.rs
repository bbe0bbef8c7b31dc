//! Experiment results and their persistence.
//!
//! An [`ExperimentReport`] collects, per model, every raw response that was
//! parsed, the extracted records, and their average. Reports are written as
//! pretty JSON so they can be re-rendered later without querying again.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::{AverageRanking, ItemSet, RankingRecord, Result, aggregate};

/// File name used inside a results directory.
pub const REPORT_FILE_NAME: &str = "proxy_rankings.json";

/// Error recorded for a model whose every trial failed.
pub const ALL_FAILED_ERROR: &str = "All API calls failed";

/// Unique identifier for an experiment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Create a new run ID with a UUIDv7 (time-ordered).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A trial that produced no response text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialFailure {
    /// 1-based trial number.
    pub run: usize,
    /// Why the query produced nothing.
    pub reason: String,
}

/// Results for one model across all of its trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRun {
    /// Short alias, e.g. "gpt-4o".
    pub name: String,
    /// Provider model identifier, e.g. "openai/gpt-4o".
    pub model_id: String,
    /// Raw text of every successful trial, aligned with `all_rankings`.
    pub all_responses: Vec<String>,
    /// Extracted record of every successful trial.
    pub all_rankings: Vec<RankingRecord>,
    /// Per-item mean over `all_rankings`; `None` when no trial succeeded.
    pub average_rankings: Option<AverageRanking>,
    pub n_successful_runs: usize,
    #[serde(default)]
    pub failures: Vec<TrialFailure>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ModelRun {
    /// Start collecting results for a model.
    pub fn new(name: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model_id: model_id.into(),
            all_responses: Vec::new(),
            all_rankings: Vec::new(),
            average_rankings: None,
            n_successful_runs: 0,
            failures: Vec::new(),
            error: None,
        }
    }

    /// Record a trial whose response was parsed.
    pub fn record_success(&mut self, response: impl Into<String>, record: RankingRecord) {
        self.all_responses.push(response.into());
        self.all_rankings.push(record);
        self.n_successful_runs = self.all_rankings.len();
    }

    /// Record a trial that produced no usable response.
    pub fn record_failure(&mut self, run: usize, reason: impl Into<String>) {
        self.failures.push(TrialFailure {
            run,
            reason: reason.into(),
        });
    }

    /// Compute the average once all trials are in.
    #[must_use]
    pub fn finish(mut self, items: &ItemSet) -> Self {
        if self.all_rankings.is_empty() {
            self.average_rankings = None;
            self.error = Some(ALL_FAILED_ERROR.to_string());
        } else {
            self.average_rankings = Some(aggregate(items, &self.all_rankings));
            self.error = None;
        }
        debug!(
            model = %self.name,
            successful = self.n_successful_runs,
            failed = self.failures.len(),
            "model run finished"
        );
        self
    }

    /// Successful trials whose record left at least one item unresolved.
    pub fn incomplete_runs(&self) -> usize {
        self.all_rankings.iter().filter(|r| !r.is_complete()).count()
    }
}

/// Full results of an experiment across models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub run_id: RunId,
    pub timestamp: DateTime<Utc>,
    pub prompt: String,
    /// Trials requested per model.
    pub n_runs: usize,
    pub items: ItemSet,
    pub models: Vec<ModelRun>,
}

impl ExperimentReport {
    /// Start an empty report.
    pub fn new(items: ItemSet, prompt: impl Into<String>, n_runs: usize) -> Self {
        Self {
            run_id: RunId::new(),
            timestamp: Utc::now(),
            prompt: prompt.into(),
            n_runs,
            items,
            models: Vec::new(),
        }
    }

    /// Results for a model alias.
    pub fn model(&self, name: &str) -> Option<&ModelRun> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Path of the report file inside `dir`.
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(REPORT_FILE_NAME)
    }

    /// Write the report as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        debug!(path = %path.display(), "report saved");
        Ok(())
    }

    /// Read a report written by [`save`](Self::save).
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn items() -> ItemSet {
        ItemSet::welfare_proxies()
    }

    #[test]
    fn finish_averages_successful_runs() {
        let mut run = ModelRun::new("gpt-4o", "openai/gpt-4o");
        run.record_success(
            "1. pain sensitivity",
            RankingRecord::from_pairs(&items(), [("pain sensitivity", 1)]),
        );
        run.record_success(
            "3. pain sensitivity",
            RankingRecord::from_pairs(&items(), [("pain sensitivity", 3)]),
        );
        run.record_failure(3, "empty response");

        let run = run.finish(&items());

        assert_eq!(run.n_successful_runs, 2);
        assert_eq!(run.failures.len(), 1);
        assert_eq!(run.incomplete_runs(), 2);
        assert!(run.error.is_none());
        let average = run.average_rankings.unwrap();
        assert_eq!(average.get("pain sensitivity"), Some(2.0));
        assert_eq!(average.get("neuron counts"), None);
    }

    #[test]
    fn finish_without_successes_sets_error() {
        let mut run = ModelRun::new("llama-3.1-70b", "meta-llama/llama-3.1-70b-instruct");
        run.record_failure(1, "timeout");

        let run = run.finish(&items());

        assert!(run.average_rankings.is_none());
        assert_eq!(run.error.as_deref(), Some(ALL_FAILED_ERROR));
        assert_eq!(run.n_successful_runs, 0);
    }

    #[test]
    fn save_and_load_preserve_report() {
        let temp_dir = TempDir::new().unwrap();
        let path = ExperimentReport::path_in(&temp_dir.path().join("nested"));

        let mut report = ExperimentReport::new(items(), "prompt text", 1);
        let mut run = ModelRun::new("claude-opus", "anthropic/claude-opus-4.5");
        run.record_success(
            "FINAL RANKING: ...",
            RankingRecord::from_pairs(&items(), [("self-awareness", 2)]),
        );
        report.models.push(run.finish(&items()));

        report.save(&path).unwrap();
        let loaded = ExperimentReport::load(&path).unwrap();

        assert_eq!(loaded, report);
        assert!(path.ends_with(REPORT_FILE_NAME));
    }

    #[test]
    fn saved_json_uses_label_keyed_maps() {
        let mut run = ModelRun::new("gpt-4o", "openai/gpt-4o");
        run.record_success(
            "text",
            RankingRecord::from_pairs(&items(), [("neuron counts", 4)]),
        );
        let run = run.finish(&items());

        let json = serde_json::to_value(&run).unwrap();
        assert_eq!(json["all_rankings"][0]["neuron counts"], 4);
        assert!(json["all_rankings"][0]["pain sensitivity"].is_null());
        assert_eq!(json["average_rankings"]["neuron counts"], 4.0);
        assert!(json.get("error").is_none());
    }
}
