//! Extract a ranking from a saved response.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use proxyrank_core::RankingExtractor;

use crate::config::ConfigLoader;
use crate::render;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// File containing the response text (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Print the record as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ParseArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let extractor = RankingExtractor::new(config.item_set()?)?;

    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let extraction = extractor.extract_with_provenance(Some(text.as_str()));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&extraction.record)?);
    } else {
        println!("{}", render::extraction_table(&extraction));
        let record = &extraction.record;
        if !record.is_complete() {
            println!("Unresolved: {}", record.unresolved_labels().join(", "));
        } else if !record.is_permutation() {
            println!("Warning: ranks are not a permutation of 1..={}", extractor.items().len());
        }
    }
    Ok(())
}
