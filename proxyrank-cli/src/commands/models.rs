//! List the models an experiment will query.

use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use proxyrank_models::ModelCatalog;

use crate::config::ConfigLoader;

#[derive(Args, Debug)]
pub struct ModelsArgs {}

pub fn run(_args: ModelsArgs) -> Result<()> {
    let config = ConfigLoader::load()?;
    let catalog = ModelCatalog::from_entries(config.models)?;

    if catalog.is_empty() {
        println!("No models configured.");
        println!();
        println!("Add [[models]] entries with `alias` and `id` to your config.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Alias").fg(Color::Cyan),
        Cell::new("Vendor").fg(Color::Cyan),
        Cell::new("Model ID").fg(Color::Cyan),
    ]);

    for entry in catalog.iter() {
        table.add_row(vec![
            Cell::new(&entry.alias),
            Cell::new(non_empty(entry.id.vendor())),
            Cell::new(entry.id.as_str()),
        ]);
    }

    println!("{table}");
    Ok(())
}

fn non_empty(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}
