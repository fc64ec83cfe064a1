//! The `scorecalc compare` command.

use std::path::PathBuf;

use anyhow::Result;

use scorecalc_core::report::EstimateReport;

use crate::config::load_config_from;

pub fn execute(
    config_path: Option<PathBuf>,
    baseline_path: PathBuf,
    current_path: PathBuf,
    threshold: Option<u32>,
    fail_on_decline: bool,
    format: String,
) -> Result<()> {
    let threshold = match threshold {
        Some(t) => t,
        None => load_config_from(config_path.as_deref())?.decline_threshold,
    };

    let baseline = EstimateReport::load_json(&baseline_path)?;
    let current = EstimateReport::load_json(&current_path)?;

    let report = current.compare(&baseline, threshold);

    match format.as_str() {
        "markdown" | "md" => {
            println!("{}", report.to_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        _ => {
            println!(
                "Comparison: {} declines, {} improvements, {} unchanged",
                report.declines.len(),
                report.improvements.len(),
                report.unchanged
            );

            if !report.declines.is_empty() {
                println!("\nDeclines:");
                for d in &report.declines {
                    println!(
                        "  {} ({}) {} -> {} ({:+})",
                        d.attempt_id, d.test, d.baseline_score, d.current_score, d.delta
                    );
                }
            }

            if !report.improvements.is_empty() {
                println!("\nImprovements:");
                for i in &report.improvements {
                    println!(
                        "  {} ({}) {} -> {} ({:+})",
                        i.attempt_id, i.test, i.baseline_score, i.current_score, i.delta
                    );
                }
            }

            if report.new_attempts > 0 {
                println!("\n{} new attempt(s)", report.new_attempts);
            }
            if report.removed_attempts > 0 {
                println!("{} removed attempt(s)", report.removed_attempts);
            }
        }
    }

    if fail_on_decline && report.has_declines() {
        std::process::exit(1);
    }

    Ok(())
}
