//! Render a saved experiment report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use proxyrank_core::ExperimentReport;

use crate::config::ConfigLoader;
use crate::render;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Report file (defaults to the configured results directory)
    pub file: Option<PathBuf>,
}

pub fn run(args: ReportArgs) -> Result<()> {
    let path = match args.file {
        Some(path) => path,
        None => ExperimentReport::path_in(&ConfigLoader::load()?.experiment.results_dir),
    };

    let report = ExperimentReport::load(&path)
        .with_context(|| format!("failed to load report {}", path.display()))?;

    println!("{}", render::report_text(&report));
    Ok(())
}
