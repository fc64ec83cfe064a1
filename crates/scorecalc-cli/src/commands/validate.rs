//! The `scorecalc validate` command.

use std::path::PathBuf;

use anyhow::Result;

use scorecalc_core::parser::{load_sheets, validate_score_sheet};

pub fn execute(sheet_path: PathBuf) -> Result<()> {
    let sheets = load_sheets(&sheet_path)?;

    let mut total_warnings = 0;

    for sheet in &sheets {
        println!("Score sheet: {} ({} attempts)", sheet.name, sheet.attempts.len());

        let warnings = validate_score_sheet(sheet);
        for w in &warnings {
            let prefix = w
                .attempt_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All score sheets valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
