//! Estimate reports with JSON persistence and progress comparison.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Estimate, ScoreInput, ScoreSheet, Test};
use crate::statistics::{compute_sheet_stats, SheetStats};

/// The engine's output for one attempt of a sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptEstimate {
    pub attempt_id: String,
    pub name: String,
    pub input: ScoreInput,
    pub estimate: Estimate,
}

/// A scored score sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the score sheet.
    pub sheet: SheetSummary,
    /// One estimate per attempt, in sheet order.
    pub estimates: Vec<AttemptEstimate>,
    /// Aggregate statistics.
    pub stats: SheetStats,
}

/// Summary of a score sheet (without the attempts).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetSummary {
    pub id: String,
    pub name: String,
    pub attempt_count: usize,
}

impl EstimateReport {
    /// Score every attempt of `sheet`.
    pub fn from_sheet(sheet: &ScoreSheet) -> Self {
        let estimates: Vec<AttemptEstimate> = sheet
            .attempts
            .iter()
            .map(|a| AttemptEstimate {
                attempt_id: a.id.clone(),
                name: a.name.clone(),
                input: a.input,
                estimate: a.input.compute(),
            })
            .collect();
        let stats = compute_sheet_stats(&estimates);

        tracing::info!(
            sheet = %sheet.id,
            attempts = estimates.len(),
            "scored sheet"
        );

        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            sheet: SheetSummary {
                id: sheet.id.clone(),
                name: sheet.name.clone(),
                attempt_count: sheet.attempts.len(),
            },
            estimates,
            stats,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: EstimateReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Compare headline scores against a baseline report, attempt by attempt.
    ///
    /// Attempts are matched by ID and test. Repeated IDs within a report are
    /// matched in order of appearance, so the second "act-1" in the current
    /// report pairs with the second "act-1" in the baseline. A change must
    /// exceed `threshold` points to count as a decline or an improvement.
    pub fn compare(&self, baseline: &EstimateReport, threshold: u32) -> ProgressReport {
        let baseline_keyed = keyed_estimates(&baseline.estimates);
        let baseline_scores: HashMap<_, _> = baseline_keyed
            .iter()
            .map(|(k, e)| (k.clone(), e.estimate.headline()))
            .collect();
        let current_keyed = keyed_estimates(&self.estimates);

        let mut declines = Vec::new();
        let mut improvements = Vec::new();
        let mut unchanged = 0usize;
        let mut new_attempts = 0usize;

        for (k, e) in &current_keyed {
            let current = e.estimate.headline();
            let Some(&previous) = baseline_scores.get(k) else {
                new_attempts += 1;
                continue;
            };
            let delta = i64::from(current) - i64::from(previous);
            let change = ScoreChange {
                attempt_id: e.attempt_id.clone(),
                test: e.input.to_string(),
                baseline_score: previous,
                current_score: current,
                delta,
            };
            if delta < -i64::from(threshold) {
                declines.push(change);
            } else if delta > i64::from(threshold) {
                improvements.push(change);
            } else {
                unchanged += 1;
            }
        }

        let current_keys: HashSet<_> = current_keyed.into_iter().map(|(k, _)| k).collect();
        let removed_attempts = baseline_scores
            .keys()
            .filter(|k| !current_keys.contains(*k))
            .count();

        ProgressReport {
            declines,
            improvements,
            unchanged,
            new_attempts,
            removed_attempts,
        }
    }
}

/// Match key for an estimate: attempt ID, test, and occurrence of that pair.
type AttemptKey = (String, Test, usize);

fn keyed_estimates(estimates: &[AttemptEstimate]) -> Vec<(AttemptKey, &AttemptEstimate)> {
    let mut seen: HashMap<(&str, Test), usize> = HashMap::new();
    estimates
        .iter()
        .map(|e| {
            let test = e.input.test();
            let occurrence = seen.entry((e.attempt_id.as_str(), test)).or_insert(0);
            let key = (e.attempt_id.clone(), test, *occurrence);
            *occurrence += 1;
            (key, e)
        })
        .collect()
}

/// Result of comparing two reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressReport {
    /// Attempts whose headline score went down.
    pub declines: Vec<ScoreChange>,
    /// Attempts whose headline score went up.
    pub improvements: Vec<ScoreChange>,
    /// Attempts with no significant change.
    pub unchanged: usize,
    /// Attempts in current but not baseline.
    pub new_attempts: usize,
    /// Attempts in baseline but not current.
    pub removed_attempts: usize,
}

/// A headline score change between two reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreChange {
    pub attempt_id: String,
    /// Test and variant, e.g. "sat digital".
    pub test: String,
    pub baseline_score: u32,
    pub current_score: u32,
    pub delta: i64,
}

impl ProgressReport {
    /// Format the progress report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Summary:** {} declines, {} improvements, {} unchanged\n\n",
            self.declines.len(),
            self.improvements.len(),
            self.unchanged
        ));

        for (title, changes) in [
            ("Declines", &self.declines),
            ("Improvements", &self.improvements),
        ] {
            if changes.is_empty() {
                continue;
            }
            md.push_str(&format!("### {title}\n\n"));
            md.push_str("| Attempt | Test | Baseline | Current | Delta |\n");
            md.push_str("|---------|------|----------|---------|-------|\n");
            for c in changes {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {:+} |\n",
                    c.attempt_id, c.test, c.baseline_score, c.current_score, c.delta
                ));
            }
            md.push('\n');
        }

        md
    }

    /// Returns true if any headline score went down.
    pub fn has_declines(&self) -> bool {
        !self.declines.is_empty()
    }
}
