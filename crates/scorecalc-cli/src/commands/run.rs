//! The `scorecalc run` command.

use std::path::PathBuf;

use anyhow::Result;

use scorecalc_core::parser::load_sheets;
use scorecalc_core::report::EstimateReport;

use crate::config::load_config_from;
use crate::render::{report_markdown, report_table, stats_table};

pub fn execute(
    config_path: Option<PathBuf>,
    sheet_path: PathBuf,
    output: Option<PathBuf>,
    format: String,
    filter: Option<String>,
) -> Result<()> {
    let (write_json, print_table, print_markdown) = match format.as_str() {
        "json" => (true, false, false),
        "table" => (false, true, false),
        "markdown" | "md" => (false, false, true),
        "all" => (true, true, true),
        other => anyhow::bail!("unknown format: {other} (expected json, table, markdown or all)"),
    };

    let config = load_config_from(config_path.as_deref())?;
    let output = output.unwrap_or(config.output_dir);

    let tags: Vec<String> = filter
        .map(|f| f.split(',').map(|t| t.trim().to_string()).collect())
        .unwrap_or_default();

    let mut sheets = load_sheets(&sheet_path)?;
    anyhow::ensure!(
        !sheets.is_empty(),
        "no score sheets found in {}",
        sheet_path.display()
    );

    for sheet in &mut sheets {
        sheet.filter_by_tags(&tags);
        if sheet.attempts.is_empty() {
            tracing::warn!("score sheet '{}' has no matching attempts", sheet.id);
            continue;
        }

        let report = EstimateReport::from_sheet(sheet);

        if print_table {
            println!("{}\n{}\n", sheet.name, report_table(&report));
            println!("{}\n", stats_table(&report));
        }
        if print_markdown {
            println!("{}", report_markdown(&report));
        }
        if write_json {
            let path = output.join(format!("{}.json", sheet.id));
            report.save_json(&path)?;
            println!("Report written to {}", path.display());
        }
    }

    Ok(())
}
