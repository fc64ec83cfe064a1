//! ACT scoring: a linear raw-to-scaled transform per section.
//!
//! Every section maps onto 1–36 with [`linear_scale`]. The enhanced test
//! averages English, Math and Reading into the composite and reports a STEM
//! score alongside; the legacy test averages all four sections.

use serde::{Deserialize, Serialize};

use crate::model::{ActVariant, SectionSpec};
use crate::scale::{linear_scale, rounded_mean};

/// Lowest scaled ACT score.
pub const ACT_MIN: u32 = 1;
/// Highest scaled ACT score.
pub const ACT_MAX: u32 = 36;

pub const ENHANCED_ENGLISH_MAX: i32 = 50;
pub const ENHANCED_MATH_MAX: i32 = 45;
pub const ENHANCED_READING_MAX: i32 = 36;
pub const ENHANCED_SCIENCE_MAX: i32 = 40;

pub const LEGACY_ENGLISH_MAX: i32 = 75;
pub const LEGACY_MATH_MAX: i32 = 60;
pub const LEGACY_READING_MAX: i32 = 40;
pub const LEGACY_SCIENCE_MAX: i32 = 40;

/// Scaled ACT scores for one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActScore {
    pub composite: u32,
    pub english: u32,
    pub math: u32,
    pub reading: u32,
    pub science: u32,
    /// Mean of Math and Science. Only reported for the enhanced test.
    pub stem_score: Option<u32>,
}

/// Raw maxima for the four ACT sections of one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActSectionMaxima {
    pub english: i32,
    pub math: i32,
    pub reading: i32,
    pub science: i32,
}

impl ActVariant {
    pub const fn maxima(self) -> ActSectionMaxima {
        match self {
            ActVariant::Enhanced => ActSectionMaxima {
                english: ENHANCED_ENGLISH_MAX,
                math: ENHANCED_MATH_MAX,
                reading: ENHANCED_READING_MAX,
                science: ENHANCED_SCIENCE_MAX,
            },
            ActVariant::Legacy => ActSectionMaxima {
                english: LEGACY_ENGLISH_MAX,
                math: LEGACY_MATH_MAX,
                reading: LEGACY_READING_MAX,
                science: LEGACY_SCIENCE_MAX,
            },
        }
    }

    /// Section descriptors in input order: English, Math, Reading, Science.
    pub fn sections(self) -> [SectionSpec; 4] {
        let max = self.maxima();
        let science_label = match self {
            ActVariant::Enhanced => "Science (optional for composite)",
            ActVariant::Legacy => "Science",
        };
        [
            SectionSpec {
                key: "english",
                label: "English",
                max: max.english,
            },
            SectionSpec {
                key: "math",
                label: "Mathematics",
                max: max.math,
            },
            SectionSpec {
                key: "reading",
                label: "Reading",
                max: max.reading,
            },
            SectionSpec {
                key: "science",
                label: science_label,
                max: max.science,
            },
        ]
    }

    /// Starting raw values of the score calculator, in section order.
    pub const fn default_raw(self) -> [i32; 4] {
        match self {
            ActVariant::Enhanced => [25, 23, 18, 20],
            ActVariant::Legacy => [38, 30, 20, 20],
        }
    }

    /// Test title as printed on score reports.
    pub const fn title(self) -> &'static str {
        match self {
            ActVariant::Enhanced => "Enhanced ACT (2025)",
            ActVariant::Legacy => "Legacy ACT",
        }
    }
}

/// Scale one ACT section onto 1–36.
pub fn scale_act_section(raw: i32, max_raw: i32) -> u32 {
    linear_scale(raw, max_raw, ACT_MIN, ACT_MAX)
}

/// Estimate ACT section scores, composite and (enhanced only) STEM score.
///
/// Raw counts outside `[0, max]` are treated as the nearest boundary.
pub fn compute_act_score(
    variant: ActVariant,
    english: i32,
    math: i32,
    reading: i32,
    science: i32,
) -> ActScore {
    let max = variant.maxima();
    let e = scale_act_section(english, max.english);
    let m = scale_act_section(math, max.math);
    let r = scale_act_section(reading, max.reading);
    let s = scale_act_section(science, max.science);

    let (composite, stem_score) = match variant {
        ActVariant::Enhanced => (
            rounded_mean(&[e, m, r], ACT_MIN, ACT_MAX),
            Some(rounded_mean(&[m, s], ACT_MIN, ACT_MAX)),
        ),
        ActVariant::Legacy => (rounded_mean(&[e, m, r, s], ACT_MIN, ACT_MAX), None),
    };

    ActScore {
        composite,
        english: e,
        math: m,
        reading: r,
        science: s,
        stem_score,
    }
}
