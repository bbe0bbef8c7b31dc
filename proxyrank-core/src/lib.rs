//! Ranking extraction and aggregation for proxyrank.
//!
//! This crate provides:
//! - Item sets describing what a model is asked to rank
//! - A heuristic extractor turning free-form responses into rank records
//! - Per-item averaging across repeated trials
//! - The prompt and the on-disk experiment report
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌────────────────────┐    ┌───────────────┐
//! │ response text│───▶│ RankingExtractor   │───▶│ RankingRecord │
//! └──────────────┘    │ (five strategies)  │    └───────┬───────┘
//!                     └────────────────────┘            │ many
//!                                                       ▼
//!                                               ┌───────────────┐
//!                                               │  aggregate()  │
//!                                               └───────┬───────┘
//!                                                       ▼
//!                                               ┌───────────────┐
//!                                               │AverageRanking │
//!                                               └───────────────┘
//! ```
//!
//! Nothing here performs I/O except [`ExperimentReport::save`] and
//! [`ExperimentReport::load`].

mod aggregate;
mod error;
mod items;
mod prompt;
mod record;

pub mod experiment;
pub mod extract;

pub use aggregate::aggregate;
pub use error::{Error, Result};
pub use experiment::{ExperimentReport, ModelRun, RunId, TrialFailure};
pub use extract::{Extraction, RankingExtractor, Strategy};
pub use items::{Item, ItemSet};
pub use prompt::ranking_prompt;
pub use record::{AverageRanking, Rank, RankingRecord};
