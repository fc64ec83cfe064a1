//! Terminal rendering of inputs and estimates.

use comfy_table::{Cell, Table};

use scorecalc_core::act::scale_act_section;
use scorecalc_core::model::{Estimate, ScoreInput};
use scorecalc_core::report::EstimateReport;
use scorecalc_core::sat::SatScore;
use scorecalc_core::scale::clamp_raw;

/// Clamp every raw value into its section range, warning about each change.
pub fn clamp_input(input: ScoreInput) -> ScoreInput {
    let sections = input.sections();
    let mut raw = input.raw_values();
    for (value, section) in raw.iter_mut().zip(sections.iter()) {
        let clamped = clamp_raw(*value, section.max);
        if clamped != *value {
            tracing::warn!(
                "{} = {} is outside 0..={}, using {}",
                section.key,
                value,
                section.max,
                clamped
            );
            *value = clamped;
        }
    }
    with_raw(input, raw)
}

fn with_raw(input: ScoreInput, raw: [i32; 4]) -> ScoreInput {
    let [a, b, c, d] = raw;
    match input {
        ScoreInput::Act { variant, .. } => ScoreInput::Act {
            variant,
            english: a,
            math: b,
            reading: c,
            science: d,
        },
        ScoreInput::DigitalSat { .. } => ScoreInput::DigitalSat {
            rw1: a,
            rw2: b,
            math1: c,
            math2: d,
        },
        ScoreInput::LegacySat { .. } => ScoreInput::LegacySat {
            reading: a,
            writing: b,
            math_no_calc: c,
            math_calc: d,
        },
    }
}

/// Render one estimate as a section table followed by the aggregate scores.
pub fn estimate_text(title: &str, input: &ScoreInput, estimate: &Estimate) -> String {
    let mut table = Table::new();
    let act = matches!(input, ScoreInput::Act { .. });
    if act {
        table.set_header(vec!["Section", "Correct", "Scaled"]);
    } else {
        table.set_header(vec!["Section", "Correct"]);
    }

    for (section, raw) in input.sections().iter().zip(input.raw_values()) {
        let mut row = vec![
            Cell::new(section.label),
            Cell::new(format!("{raw}/{}", section.max)),
        ];
        if act {
            row.push(Cell::new(scale_act_section(raw, section.max)));
        }
        table.add_row(row);
    }

    let mut out = format!("{title} Score Calculator\n{table}\n");
    match estimate {
        Estimate::Act(score) => {
            out.push_str(&format!("Composite: {}\n", score.composite));
            if let Some(stem) = score.stem_score {
                out.push_str(&format!("STEM: {stem}\n"));
            }
        }
        Estimate::Sat(score) => {
            let verbal_label = match score {
                SatScore::Digital(_) => "Reading and Writing",
                SatScore::Legacy(_) => "Evidence-Based Reading and Writing",
            };
            out.push_str(&format!("Total: {}\n", score.total()));
            out.push_str(&format!("{verbal_label}: {}\n", score.verbal()));
            out.push_str(&format!("Math: {}\n", score.math()));
        }
    }
    out
}

/// Summary table with one row per attempt.
pub fn report_table(report: &EstimateReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Attempt", "Test", "Score", "Sections"]);

    for e in &report.estimates {
        let sections = match &e.estimate {
            Estimate::Act(s) => {
                let mut parts = format!("E {} M {} R {} S {}", s.english, s.math, s.reading, s.science);
                if let Some(stem) = s.stem_score {
                    parts.push_str(&format!(" STEM {stem}"));
                }
                parts
            }
            Estimate::Sat(s) => format!("RW {} M {}", s.verbal(), s.math()),
        };
        table.add_row(vec![
            Cell::new(&e.name),
            Cell::new(e.input.to_string()),
            Cell::new(e.estimate.headline()),
            Cell::new(sections),
        ]);
    }

    table
}

/// Per-group statistics table.
pub fn stats_table(report: &EstimateReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Test", "Attempts", "Best", "Worst", "Mean"]);
    for (key, stats) in &report.stats.groups {
        table.add_row(vec![
            Cell::new(key),
            Cell::new(stats.attempts),
            Cell::new(format!("{} ({})", stats.best, stats.best_attempt)),
            Cell::new(stats.worst),
            Cell::new(format!("{:.1}", stats.mean)),
        ]);
    }
    table
}

/// Markdown rendering of a report's attempts.
pub fn report_markdown(report: &EstimateReport) -> String {
    let mut md = format!("## {}\n\n", report.sheet.name);
    md.push_str("| Attempt | Test | Score |\n");
    md.push_str("|---------|------|-------|\n");
    for e in &report.estimates {
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            e.name,
            e.input,
            e.estimate.headline()
        ));
    }
    md
}
