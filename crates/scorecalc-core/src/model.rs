//! Core data model types for scorecalc.
//!
//! Tests, their variants, section descriptors, and the tagged unions that
//! carry raw inputs into the engine and estimates back out of it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::act::{compute_act_score, ActScore};
use crate::error::ScoreError;
use crate::sat::{compute_digital_sat, compute_legacy_sat, SatScore};

/// The standardized test being estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Test {
    Act,
    Sat,
}

impl fmt::Display for Test {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Test::Act => write!(f, "act"),
            Test::Sat => write!(f, "sat"),
        }
    }
}

impl FromStr for Test {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "act" => Ok(Test::Act),
            "sat" => Ok(Test::Sat),
            other => Err(ScoreError::UnknownTest(other.to_string())),
        }
    }
}

/// ACT configuration: the 2025 enhanced test or the legacy four-section test.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ActVariant {
    #[default]
    Enhanced,
    Legacy,
}

impl fmt::Display for ActVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActVariant::Enhanced => write!(f, "enhanced"),
            ActVariant::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for ActVariant {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "enhanced" => Ok(ActVariant::Enhanced),
            "legacy" => Ok(ActVariant::Legacy),
            other => Err(ScoreError::UnknownVariant {
                test: "act",
                name: other.to_string(),
            }),
        }
    }
}

/// SAT configuration: the adaptive digital test or the legacy paper test.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SatVariant {
    #[default]
    Digital,
    Legacy,
}

impl fmt::Display for SatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SatVariant::Digital => write!(f, "digital"),
            SatVariant::Legacy => write!(f, "legacy"),
        }
    }
}

impl FromStr for SatVariant {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "digital" => Ok(SatVariant::Digital),
            "legacy" => Ok(SatVariant::Legacy),
            other => Err(ScoreError::UnknownVariant {
                test: "sat",
                name: other.to_string(),
            }),
        }
    }
}

/// One raw-score input slot of a test variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectionSpec {
    /// Key used in score sheets and CLI flags (e.g. "math_no_calc").
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Maximum raw count (number of questions).
    pub max: i32,
}

/// Raw inputs for a single estimate, tagged by test and variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreInput {
    Act {
        variant: ActVariant,
        english: i32,
        math: i32,
        reading: i32,
        science: i32,
    },
    DigitalSat {
        rw1: i32,
        rw2: i32,
        math1: i32,
        math2: i32,
    },
    LegacySat {
        reading: i32,
        writing: i32,
        math_no_calc: i32,
        math_calc: i32,
    },
}

impl ScoreInput {
    /// Build an input from a test, a variant name, and raw values in
    /// section order (see [`ScoreInput::sections`]).
    pub fn from_parts(test: Test, variant: &str, raw: [i32; 4]) -> Result<Self, ScoreError> {
        let [a, b, c, d] = raw;
        Ok(match test {
            Test::Act => ScoreInput::Act {
                variant: variant.parse()?,
                english: a,
                math: b,
                reading: c,
                science: d,
            },
            Test::Sat => match variant.parse::<SatVariant>()? {
                SatVariant::Digital => ScoreInput::DigitalSat {
                    rw1: a,
                    rw2: b,
                    math1: c,
                    math2: d,
                },
                SatVariant::Legacy => ScoreInput::LegacySat {
                    reading: a,
                    writing: b,
                    math_no_calc: c,
                    math_calc: d,
                },
            },
        })
    }

    /// Run the engine.
    pub fn compute(&self) -> Estimate {
        match *self {
            ScoreInput::Act {
                variant,
                english,
                math,
                reading,
                science,
            } => Estimate::Act(compute_act_score(variant, english, math, reading, science)),
            ScoreInput::DigitalSat {
                rw1,
                rw2,
                math1,
                math2,
            } => Estimate::Sat(SatScore::Digital(compute_digital_sat(
                rw1, rw2, math1, math2,
            ))),
            ScoreInput::LegacySat {
                reading,
                writing,
                math_no_calc,
                math_calc,
            } => Estimate::Sat(SatScore::Legacy(compute_legacy_sat(
                reading,
                writing,
                math_no_calc,
                math_calc,
            ))),
        }
    }

    pub fn test(&self) -> Test {
        match self {
            ScoreInput::Act { .. } => Test::Act,
            ScoreInput::DigitalSat { .. } | ScoreInput::LegacySat { .. } => Test::Sat,
        }
    }

    /// Variant name as written in score sheets ("enhanced", "digital", ...).
    pub fn variant_name(&self) -> String {
        match self {
            ScoreInput::Act { variant, .. } => variant.to_string(),
            ScoreInput::DigitalSat { .. } => SatVariant::Digital.to_string(),
            ScoreInput::LegacySat { .. } => SatVariant::Legacy.to_string(),
        }
    }

    /// Section descriptors in input order.
    pub fn sections(&self) -> [SectionSpec; 4] {
        match self {
            ScoreInput::Act { variant, .. } => variant.sections(),
            ScoreInput::DigitalSat { .. } => SatVariant::Digital.sections(),
            ScoreInput::LegacySat { .. } => SatVariant::Legacy.sections(),
        }
    }

    /// Raw values in the same order as [`ScoreInput::sections`].
    pub fn raw_values(&self) -> [i32; 4] {
        match *self {
            ScoreInput::Act {
                english,
                math,
                reading,
                science,
                ..
            } => [english, math, reading, science],
            ScoreInput::DigitalSat {
                rw1,
                rw2,
                math1,
                math2,
            } => [rw1, rw2, math1, math2],
            ScoreInput::LegacySat {
                reading,
                writing,
                math_no_calc,
                math_calc,
            } => [reading, writing, math_no_calc, math_calc],
        }
    }
}

impl fmt::Display for ScoreInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.test(), self.variant_name())
    }
}

/// Engine output for one [`ScoreInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "test", rename_all = "lowercase")]
pub enum Estimate {
    Act(ActScore),
    Sat(SatScore),
}

impl Estimate {
    /// The single number a student quotes: ACT composite or SAT total.
    pub fn headline(&self) -> u32 {
        match self {
            Estimate::Act(score) => score.composite,
            Estimate::Sat(score) => score.total(),
        }
    }

    pub fn test(&self) -> Test {
        match self {
            Estimate::Act(_) => Test::Act,
            Estimate::Sat(_) => Test::Sat,
        }
    }
}

/// A single practice attempt recorded in a score sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    /// Unique identifier within the sheet.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Tags for filtering attempts.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Raw section counts.
    pub input: ScoreInput,
}

/// A collection of practice attempts, usually one file on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attempts: Vec<Attempt>,
}

impl ScoreSheet {
    /// Keep only attempts carrying at least one of `tags`.
    pub fn filter_by_tags(&mut self, tags: &[String]) {
        if tags.is_empty() {
            return;
        }
        self.attempts
            .retain(|a| a.tags.iter().any(|t| tags.contains(t)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Test::Act.to_string(), "act");
        assert_eq!("SAT".parse::<Test>().unwrap(), Test::Sat);
        assert_eq!(
            "gre".parse::<Test>().unwrap_err(),
            ScoreError::UnknownTest("gre".into())
        );
    }

    #[test]
    fn variant_display_and_parse() {
        assert_eq!(ActVariant::Enhanced.to_string(), "enhanced");
        assert_eq!(SatVariant::Legacy.to_string(), "legacy");
        assert_eq!(
            " Legacy ".parse::<ActVariant>().unwrap(),
            ActVariant::Legacy
        );
        assert_eq!(
            "digital".parse::<SatVariant>().unwrap(),
            SatVariant::Digital
        );
        assert!("digital".parse::<ActVariant>().is_err());
        assert!("enhanced".parse::<SatVariant>().is_err());
    }

    #[test]
    fn variant_defaults() {
        assert_eq!(ActVariant::default(), ActVariant::Enhanced);
        assert_eq!(SatVariant::default(), SatVariant::Digital);
    }

    #[test]
    fn from_parts_dispatches_on_variant() {
        let input = ScoreInput::from_parts(Test::Sat, "legacy", [26, 22, 10, 19]).unwrap();
        assert_eq!(
            input,
            ScoreInput::LegacySat {
                reading: 26,
                writing: 22,
                math_no_calc: 10,
                math_calc: 19,
            }
        );
        assert_eq!(input.raw_values(), [26, 22, 10, 19]);
        assert_eq!(input.to_string(), "sat legacy");

        let err = ScoreInput::from_parts(Test::Act, "digital", [0; 4]).unwrap_err();
        assert_eq!(
            err,
            ScoreError::UnknownVariant {
                test: "act",
                name: "digital".into(),
            }
        );
    }

    #[test]
    fn compute_and_headline() {
        let act = ScoreInput::from_parts(Test::Act, "enhanced", [25, 23, 18, 20]).unwrap();
        let estimate = act.compute();
        assert_eq!(estimate.test(), Test::Act);
        assert_eq!(estimate.headline(), 19);

        let sat = ScoreInput::from_parts(Test::Sat, "digital", [27, 27, 22, 22]).unwrap();
        assert_eq!(sat.compute().headline(), 1600);
    }

    #[test]
    fn sections_follow_input_order() {
        let input = ScoreInput::from_parts(Test::Sat, "digital", [1, 2, 3, 4]).unwrap();
        let keys: Vec<_> = input.sections().iter().map(|s| s.key).collect();
        assert_eq!(keys, vec!["rw1", "rw2", "math1", "math2"]);
    }

    #[test]
    fn input_serde_roundtrip() {
        let input = ScoreInput::Act {
            variant: ActVariant::Legacy,
            english: 38,
            math: 30,
            reading: 20,
            science: 20,
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"kind\":\"act\""));
        let back: ScoreInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn filter_by_tags_keeps_matching_attempts() {
        let attempt = |id: &str, tags: &[&str]| Attempt {
            id: id.into(),
            name: id.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            input: ScoreInput::DigitalSat {
                rw1: 0,
                rw2: 0,
                math1: 0,
                math2: 0,
            },
        };
        let mut sheet = ScoreSheet {
            id: "s".into(),
            name: "S".into(),
            description: String::new(),
            attempts: vec![attempt("a", &["timed"]), attempt("b", &["untimed"]), attempt("c", &[])],
        };

        sheet.filter_by_tags(&[]);
        assert_eq!(sheet.attempts.len(), 3);

        sheet.filter_by_tags(&["timed".to_string()]);
        assert_eq!(sheet.attempts.len(), 1);
        assert_eq!(sheet.attempts[0].id, "a");
    }
}
