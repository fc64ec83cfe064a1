//! TOML score sheet parser.
//!
//! Loads score sheets from TOML files and directories, and validates them.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::ScoreError;
use crate::model::{Attempt, ScoreInput, ScoreSheet, Test};

/// Intermediate TOML structure for parsing score sheet files.
#[derive(Debug, Deserialize)]
struct TomlSheetFile {
    sheet: TomlSheetHeader,
    #[serde(default)]
    attempts: Vec<TomlAttempt>,
}

#[derive(Debug, Deserialize)]
struct TomlSheetHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlAttempt {
    id: String,
    #[serde(default)]
    name: Option<String>,
    test: String,
    #[serde(default)]
    variant: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    raw: BTreeMap<String, i32>,
}

fn default_variant(test: Test) -> &'static str {
    match test {
        Test::Act => "enhanced",
        Test::Sat => "digital",
    }
}

/// Parse a single TOML file into a `ScoreSheet`.
pub fn parse_score_sheet(path: &Path) -> Result<ScoreSheet> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read score sheet: {}", path.display()))?;

    parse_score_sheet_str(&content, path)
}

/// Parse a TOML string into a `ScoreSheet` (useful for testing).
pub fn parse_score_sheet_str(content: &str, source_path: &Path) -> Result<ScoreSheet> {
    let parsed: TomlSheetFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let attempts = parsed
        .attempts
        .into_iter()
        .map(|a| {
            let input = attempt_input(&a)
                .with_context(|| format!("invalid attempt '{}'", a.id))?;
            Ok(Attempt {
                name: a.name.unwrap_or_else(|| a.id.clone()),
                id: a.id,
                tags: a.tags,
                input,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        sheet = %parsed.sheet.id,
        attempts = attempts.len(),
        "parsed score sheet"
    );

    Ok(ScoreSheet {
        id: parsed.sheet.id,
        name: parsed.sheet.name,
        description: parsed.sheet.description,
        attempts,
    })
}

fn attempt_input(attempt: &TomlAttempt) -> Result<ScoreInput, ScoreError> {
    let test: Test = attempt.test.parse()?;
    let variant = attempt
        .variant
        .as_deref()
        .unwrap_or_else(|| default_variant(test));

    // Parse once with zeroes to learn the section keys for this variant.
    let sections = ScoreInput::from_parts(test, variant, [0; 4])?.sections();

    if let Some(unknown) = attempt
        .raw
        .keys()
        .find(|key| !sections.iter().any(|s| s.key == key.as_str()))
    {
        return Err(ScoreError::UnknownSection {
            variant: format!("{test} {variant}"),
            key: unknown.clone(),
        });
    }

    let mut raw = [0; 4];
    for (slot, section) in raw.iter_mut().zip(sections.iter()) {
        *slot = attempt.raw.get(section.key).copied().unwrap_or(0);
    }
    ScoreInput::from_parts(test, variant, raw)
}

/// Recursively load all `.toml` score sheets from a directory.
pub fn load_sheet_directory(dir: &Path) -> Result<Vec<ScoreSheet>> {
    let mut sheets = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            sheets.extend(load_sheet_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_score_sheet(&path) {
                Ok(sheet) => sheets.push(sheet),
                Err(e) => {
                    tracing::warn!("skipping {}: {:#}", path.display(), e);
                }
            }
        }
    }

    sheets.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(sheets)
}

/// Load a single sheet file or every sheet under a directory.
pub fn load_sheets(path: &Path) -> Result<Vec<ScoreSheet>> {
    if path.is_dir() {
        load_sheet_directory(path)
    } else {
        Ok(vec![parse_score_sheet(path)?])
    }
}

/// A warning from score sheet validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The attempt ID (if applicable).
    pub attempt_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a score sheet for common issues.
pub fn validate_score_sheet(sheet: &ScoreSheet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if sheet.attempts.is_empty() {
        warnings.push(ValidationWarning {
            attempt_id: None,
            message: "sheet has no attempts".into(),
        });
    }

    let mut seen_ids = std::collections::HashSet::new();
    for attempt in &sheet.attempts {
        if !seen_ids.insert(&attempt.id) {
            warnings.push(ValidationWarning {
                attempt_id: Some(attempt.id.clone()),
                message: format!("duplicate attempt ID: {}", attempt.id),
            });
        }
    }

    // Out-of-range counts never fail scoring; flag them so typos do not go
    // unnoticed.
    for attempt in &sheet.attempts {
        let raw = attempt.input.raw_values();
        for (section, value) in attempt.input.sections().iter().zip(raw) {
            if !(0..=section.max).contains(&value) {
                warnings.push(ValidationWarning {
                    attempt_id: Some(attempt.id.clone()),
                    message: format!(
                        "{} = {} is outside 0..={}",
                        section.key, value, section.max
                    ),
                });
            }
        }
    }

    warnings
}
