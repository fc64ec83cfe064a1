//! Aggregate statistics over a sheet of estimates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Test;
use crate::report::AttemptEstimate;

/// Statistics for every (test, variant) group in a sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetStats {
    /// Keyed by "act enhanced", "sat digital", ...
    pub groups: BTreeMap<String, GroupStats>,
}

/// Headline-score statistics for one (test, variant) group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub test: Test,
    pub variant: String,
    /// Number of attempts in the group.
    pub attempts: usize,
    /// Best composite (ACT) or total (SAT).
    pub best: u32,
    pub worst: u32,
    pub mean: f64,
    /// Attempt ID holding the best score.
    pub best_attempt: String,
}

/// Group estimates by test and variant and summarize their headline scores.
pub fn compute_sheet_stats(estimates: &[AttemptEstimate]) -> SheetStats {
    let mut grouped: BTreeMap<String, Vec<&AttemptEstimate>> = BTreeMap::new();
    for e in estimates {
        grouped.entry(e.input.to_string()).or_default().push(e);
    }

    let groups = grouped
        .into_iter()
        .filter_map(|(key, members)| {
            let first = members.first()?;
            // Earliest attempt wins ties for best.
            let best = members
                .iter()
                .copied()
                .fold(*first, |acc, e| {
                    if e.estimate.headline() > acc.estimate.headline() {
                        e
                    } else {
                        acc
                    }
                });
            let worst = members
                .iter()
                .map(|e| e.estimate.headline())
                .min()
                .unwrap_or(0);
            let sum: u64 = members
                .iter()
                .map(|e| u64::from(e.estimate.headline()))
                .sum();

            let stats = GroupStats {
                test: first.input.test(),
                variant: first.input.variant_name(),
                attempts: members.len(),
                best: best.estimate.headline(),
                worst,
                mean: sum as f64 / members.len() as f64,
                best_attempt: best.attempt_id.clone(),
            };
            Some((key, stats))
        })
        .collect();

    SheetStats { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ScoreInput, Test};

    fn estimate(id: &str, test: Test, variant: &str, raw: [i32; 4]) -> AttemptEstimate {
        let input = ScoreInput::from_parts(test, variant, raw).unwrap();
        AttemptEstimate {
            attempt_id: id.into(),
            name: id.into(),
            input,
            estimate: input.compute(),
        }
    }

    #[test]
    fn groups_by_test_and_variant() {
        let estimates = vec![
            estimate("a1", Test::Act, "enhanced", [25, 23, 18, 20]),
            estimate("a2", Test::Act, "enhanced", [50, 45, 36, 40]),
            estimate("s1", Test::Sat, "digital", [0, 0, 0, 0]),
            estimate("s2", Test::Sat, "legacy", [26, 22, 10, 19]),
        ];
        let stats = compute_sheet_stats(&estimates);
        assert_eq!(stats.groups.len(), 3);

        let act = &stats.groups["act enhanced"];
        assert_eq!(act.attempts, 2);
        assert_eq!(act.best, 36);
        assert_eq!(act.worst, 19);
        assert!((act.mean - 27.5).abs() < f64::EPSILON);
        assert_eq!(act.best_attempt, "a2");

        assert_eq!(stats.groups["sat digital"].best, 400);
        assert_eq!(stats.groups["sat legacy"].best, 1000);
    }

    #[test]
    fn ties_keep_earliest_attempt() {
        let estimates = vec![
            estimate("first", Test::Sat, "digital", [27, 27, 22, 22]),
            estimate("second", Test::Sat, "digital", [27, 27, 22, 22]),
        ];
        let stats = compute_sheet_stats(&estimates);
        assert_eq!(stats.groups["sat digital"].best_attempt, "first");
    }

    #[test]
    fn empty_input() {
        assert!(compute_sheet_stats(&[]).groups.is_empty());
    }
}
