//! Terminal rendering of extraction results and experiment reports.

use chrono::Local;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use proxyrank_core::{ExperimentReport, Extraction};

/// Width of a bar for the worst possible mean rank.
const BAR_WIDTH: usize = 20;

fn new_table(headers: impl IntoIterator<Item = String>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        headers
            .into_iter()
            .map(|h| Cell::new(h).fg(Color::Cyan))
            .collect::<Vec<_>>(),
    );
    table
}

/// Bar scaled so that a mean of `max` fills `BAR_WIDTH`.
///
/// Unresolved means draw as an empty bar.
pub fn bar(mean: Option<f64>, max: usize) -> String {
    let mean = mean.unwrap_or(0.0);
    if max == 0 || mean <= 0.0 {
        return String::new();
    }
    let filled = ((mean / max as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled.min(BAR_WIDTH))
}

fn format_mean(mean: Option<f64>) -> String {
    mean.map_or_else(|| "-".to_string(), |m| format!("{m:.2}"))
}

/// Per-item rank and the strategy that produced it.
pub fn extraction_table(extraction: &Extraction) -> Table {
    let mut table = new_table(["Item", "Rank", "Strategy"].map(String::from));
    for (label, rank, source) in extraction.iter() {
        table.add_row(vec![
            Cell::new(label),
            Cell::new(rank.map_or_else(|| "-".to_string(), |r| r.to_string())),
            Cell::new(source.map_or("-", |s| s.as_str())),
        ]);
    }
    table
}

/// Average rank per item, one column per model.
pub fn averages_table(report: &ExperimentReport) -> Table {
    let n = report.items.len();
    let mut headers = vec!["Item".to_string()];
    headers.extend(report.models.iter().map(|m| m.name.clone()));
    let mut table = new_table(headers);

    for label in report.items.labels() {
        let mut row = vec![Cell::new(label)];
        for model in &report.models {
            let mean = model.average_rankings.as_ref().and_then(|a| a.get(label));
            row.push(Cell::new(format!("{:>5} {}", format_mean(mean), bar(mean, n))));
        }
        table.add_row(row);
    }
    table
}

/// Trial counts and errors per model.
pub fn summary_table(report: &ExperimentReport) -> Table {
    let mut table = new_table(
        ["Model", "ID", "Parsed", "Incomplete", "Failed", "Error"].map(String::from),
    );
    for model in &report.models {
        table.add_row(vec![
            Cell::new(&model.name),
            Cell::new(&model.model_id),
            Cell::new(format!("{}/{}", model.n_successful_runs, report.n_runs)),
            Cell::new(model.incomplete_runs()),
            Cell::new(model.failures.len()),
            match &model.error {
                Some(error) => Cell::new(error).fg(Color::Red),
                None => Cell::new("-"),
            },
        ]);
    }
    table
}

/// Full textual report: header line, summary, then averages.
pub fn report_text(report: &ExperimentReport) -> String {
    format!(
        "Run {} ({})\n\n{}\n\nAverage rank (1 = most important, {} = least)\n{}",
        report.run_id,
        report
            .timestamp
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S"),
        summary_table(report),
        report.items.len(),
        averages_table(report)
    )
}
