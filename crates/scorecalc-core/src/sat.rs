//! SAT scoring.
//!
//! The digital SAT scores each of its four adaptive modules through a fixed
//! lookup table and sums module pairs into 200–800 sections. The legacy SAT
//! combines its four sub-scores into two sections and scales each linearly
//! onto 200–800.

use serde::{Deserialize, Serialize};

use crate::model::{SatVariant, SectionSpec};
use crate::scale::{linear_scale, lookup};

/// Lowest scaled SAT section score.
pub const SAT_SECTION_MIN: u32 = 200;
/// Highest scaled SAT section score.
pub const SAT_SECTION_MAX: u32 = 800;

pub const DIGITAL_RW_MAX: i32 = 27;
pub const DIGITAL_MATH_MAX: i32 = 22;

pub const LEGACY_READING_MAX: i32 = 52;
pub const LEGACY_WRITING_MAX: i32 = 44;
pub const LEGACY_MATH_NO_CALC_MAX: i32 = 20;
pub const LEGACY_MATH_CALC_MAX: i32 = 38;

/// Combined raw maximum of the Evidence-Based Reading and Writing section.
pub const LEGACY_EBRW_MAX: i32 = LEGACY_READING_MAX + LEGACY_WRITING_MAX;
/// Combined raw maximum of the legacy Math section.
pub const LEGACY_MATH_MAX: i32 = LEGACY_MATH_NO_CALC_MAX + LEGACY_MATH_CALC_MAX;

/// Reading and Writing module 1, indexed by raw correct count.
pub const RW_MODULE_1: [u32; 28] = [
    100, 100, 120, 140, 160, 170, 180, 190, 200, 200, 210, 210, 220, 230, 240, 260, 270, 290, 310,
    320, 340, 360, 370, 390, 410, 430, 440, 460,
];

/// Reading and Writing module 2, indexed by raw correct count.
pub const RW_MODULE_2: [u32; 28] = [
    100, 100, 100, 110, 110, 110, 120, 120, 120, 130, 130, 140, 150, 170, 190, 190, 200, 210, 230,
    240, 250, 260, 280, 290, 300, 310, 330, 340,
];

/// Math module 1, indexed by raw correct count.
pub const MATH_MODULE_1: [u32; 23] = [
    100, 100, 120, 140, 160, 160, 180, 180, 200, 200, 210, 240, 260, 280, 300, 320, 340, 360, 390,
    410, 430, 450, 470,
];

/// Math module 2, indexed by raw correct count.
pub const MATH_MODULE_2: [u32; 23] = [
    100, 100, 100, 120, 120, 130, 150, 170, 170, 170, 190, 190, 200, 200, 210, 230, 240, 260, 270,
    290, 300, 320, 330,
];

/// Digital SAT estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalSatScore {
    pub total: u32,
    /// Reading and Writing section score.
    pub rw: u32,
    pub math: u32,
}

/// Legacy SAT estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacySatScore {
    pub total: u32,
    /// Evidence-Based Reading and Writing section score.
    pub ebrw: u32,
    pub math: u32,
}

/// Either SAT estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum SatScore {
    Digital(DigitalSatScore),
    Legacy(LegacySatScore),
}

impl SatScore {
    pub fn total(&self) -> u32 {
        match self {
            SatScore::Digital(s) => s.total,
            SatScore::Legacy(s) => s.total,
        }
    }

    /// The reading/writing section: `rw` for digital, `ebrw` for legacy.
    pub fn verbal(&self) -> u32 {
        match self {
            SatScore::Digital(s) => s.rw,
            SatScore::Legacy(s) => s.ebrw,
        }
    }

    pub fn math(&self) -> u32 {
        match self {
            SatScore::Digital(s) => s.math,
            SatScore::Legacy(s) => s.math,
        }
    }

    pub fn variant(&self) -> SatVariant {
        match self {
            SatScore::Digital(_) => SatVariant::Digital,
            SatScore::Legacy(_) => SatVariant::Legacy,
        }
    }
}

impl SatVariant {
    /// Section descriptors in input order.
    pub fn sections(self) -> [SectionSpec; 4] {
        match self {
            SatVariant::Digital => [
                SectionSpec {
                    key: "rw1",
                    label: "Reading and Writing Module 1",
                    max: DIGITAL_RW_MAX,
                },
                SectionSpec {
                    key: "rw2",
                    label: "Reading and Writing Module 2",
                    max: DIGITAL_RW_MAX,
                },
                SectionSpec {
                    key: "math1",
                    label: "Math Module 1",
                    max: DIGITAL_MATH_MAX,
                },
                SectionSpec {
                    key: "math2",
                    label: "Math Module 2",
                    max: DIGITAL_MATH_MAX,
                },
            ],
            SatVariant::Legacy => [
                SectionSpec {
                    key: "reading",
                    label: "Reading",
                    max: LEGACY_READING_MAX,
                },
                SectionSpec {
                    key: "writing",
                    label: "Writing",
                    max: LEGACY_WRITING_MAX,
                },
                SectionSpec {
                    key: "math_no_calc",
                    label: "Math (No Calculator)",
                    max: LEGACY_MATH_NO_CALC_MAX,
                },
                SectionSpec {
                    key: "math_calc",
                    label: "Math (Calculator)",
                    max: LEGACY_MATH_CALC_MAX,
                },
            ],
        }
    }

    /// Starting raw values of the score calculator, in section order.
    pub const fn default_raw(self) -> [i32; 4] {
        match self {
            SatVariant::Digital => [14, 14, 11, 11],
            SatVariant::Legacy => [26, 22, 10, 19],
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            SatVariant::Digital => "Digital SAT",
            SatVariant::Legacy => "Legacy SAT",
        }
    }
}

/// Estimate a digital SAT score from the four module raw counts.
pub fn compute_digital_sat(rw1: i32, rw2: i32, math1: i32, math2: i32) -> DigitalSatScore {
    let rw = lookup(&RW_MODULE_1, rw1, DIGITAL_RW_MAX) + lookup(&RW_MODULE_2, rw2, DIGITAL_RW_MAX);
    let math = lookup(&MATH_MODULE_1, math1, DIGITAL_MATH_MAX)
        + lookup(&MATH_MODULE_2, math2, DIGITAL_MATH_MAX);
    DigitalSatScore {
        total: rw + math,
        rw,
        math,
    }
}

/// Scale a combined legacy section raw count onto 200–800.
pub fn scale_sat_section(raw: i32, max_raw: i32) -> u32 {
    linear_scale(raw, max_raw, SAT_SECTION_MIN, SAT_SECTION_MAX)
}

/// Estimate a legacy SAT score from its four sub-score raw counts.
///
/// Sub-scores are summed per section before scaling; only the section's
/// combined proportion is clamped.
pub fn compute_legacy_sat(
    reading: i32,
    writing: i32,
    math_no_calc: i32,
    math_calc: i32,
) -> LegacySatScore {
    let ebrw_raw = reading.saturating_add(writing);
    let math_raw = math_no_calc.saturating_add(math_calc);

    let ebrw = scale_sat_section(ebrw_raw, LEGACY_EBRW_MAX);
    let math = scale_sat_section(math_raw, LEGACY_MATH_MAX);
    LegacySatScore {
        total: ebrw + math,
        ebrw,
        math,
    }
}

/// Dispatch raw values in section order to the variant's scorer.
pub fn compute_sat_score(variant: SatVariant, raw: [i32; 4]) -> SatScore {
    let [a, b, c, d] = raw;
    match variant {
        SatVariant::Digital => SatScore::Digital(compute_digital_sat(a, b, c, d)),
        SatVariant::Legacy => SatScore::Legacy(compute_legacy_sat(a, b, c, d)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lengths_match_module_maxima() {
        assert_eq!(RW_MODULE_1.len(), DIGITAL_RW_MAX as usize + 1);
        assert_eq!(RW_MODULE_2.len(), DIGITAL_RW_MAX as usize + 1);
        assert_eq!(MATH_MODULE_1.len(), DIGITAL_MATH_MAX as usize + 1);
        assert_eq!(MATH_MODULE_2.len(), DIGITAL_MATH_MAX as usize + 1);
    }

    #[test]
    fn tables_are_non_decreasing() {
        for table in [
            &RW_MODULE_1[..],
            &RW_MODULE_2[..],
            &MATH_MODULE_1[..],
            &MATH_MODULE_2[..],
        ] {
            assert!(table.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn digital_all_max_is_1600() {
        let score = compute_digital_sat(27, 27, 22, 22);
        assert_eq!(
            score,
            DigitalSatScore {
                total: 1600,
                rw: 800,
                math: 800,
            }
        );
    }

    #[test]
    fn digital_all_zero_is_400() {
        let score = compute_digital_sat(0, 0, 0, 0);
        assert_eq!(
            score,
            DigitalSatScore {
                total: 400,
                rw: 200,
                math: 200,
            }
        );
    }

    #[test]
    fn digital_default_inputs() {
        // 240 + 190 for RW, 240 + 190 for Math
        let score = compute_digital_sat(14, 14, 11, 11);
        assert_eq!(score.rw, 430);
        assert_eq!(score.math, 430);
        assert_eq!(score.total, 860);
    }

    #[test]
    fn digital_clamps_out_of_range() {
        assert_eq!(
            compute_digital_sat(-1, -50, i32::MIN, -2),
            compute_digital_sat(0, 0, 0, 0)
        );
        assert_eq!(
            compute_digital_sat(28, 100, 23, i32::MAX),
            compute_digital_sat(27, 27, 22, 22)
        );
    }

    #[test]
    fn legacy_midpoint_example() {
        let score = compute_legacy_sat(26, 22, 10, 19);
        assert_eq!(
            score,
            LegacySatScore {
                total: 1000,
                ebrw: 500,
                math: 500,
            }
        );
    }

    #[test]
    fn legacy_boundaries() {
        assert_eq!(compute_legacy_sat(0, 0, 0, 0).total, 400);
        let max = compute_legacy_sat(52, 44, 20, 38);
        assert_eq!(max.ebrw, 800);
        assert_eq!(max.math, 800);
        assert_eq!(max.total, 1600);
    }

    #[test]
    fn legacy_sums_sub_scores_before_clamping() {
        // 60 of 96 combined: 200 + 0.625 * 600
        assert_eq!(compute_legacy_sat(60, 0, 0, 0).ebrw, 575);
        // 40 of 96 combined: 200 + 0.41666 * 600
        assert_eq!(compute_legacy_sat(-10, 50, 0, 0).ebrw, 450);
        assert_eq!(compute_legacy_sat(0, 0, 30, 28).math, 800);
    }

    #[test]
    fn legacy_clamps_combined_section() {
        assert_eq!(
            compute_legacy_sat(90, 44, 40, 38),
            compute_legacy_sat(52, 44, 20, 38)
        );
        assert_eq!(
            compute_legacy_sat(-10, -5, -1, 0),
            compute_legacy_sat(0, 0, 0, 0)
        );
        assert_eq!(compute_legacy_sat(i32::MAX, i32::MAX, 0, 0).ebrw, 800);
        assert_eq!(compute_legacy_sat(i32::MIN, i32::MIN, 0, 0).ebrw, 200);
    }

    #[test]
    fn legacy_sections_monotonic_and_in_range() {
        let mut previous = 0;
        for reading in 0..=LEGACY_READING_MAX {
            let score = compute_legacy_sat(reading, 10, 5, 5);
            assert!((SAT_SECTION_MIN..=SAT_SECTION_MAX).contains(&score.ebrw));
            assert!(score.ebrw >= previous);
            previous = score.ebrw;
        }
        let mut previous = 0;
        for math_calc in 0..=LEGACY_MATH_CALC_MAX {
            let score = compute_legacy_sat(10, 10, 7, math_calc);
            assert!((SAT_SECTION_MIN..=SAT_SECTION_MAX).contains(&score.math));
            assert!(score.math >= previous);
            previous = score.math;
        }
    }

    #[test]
    fn digital_sections_in_range_for_all_inputs() {
        for rw1 in 0..=DIGITAL_RW_MAX {
            for rw2 in 0..=DIGITAL_RW_MAX {
                let score = compute_digital_sat(rw1, rw2, rw1.min(22), rw2.min(22));
                assert!((SAT_SECTION_MIN..=SAT_SECTION_MAX).contains(&score.rw));
                assert!((SAT_SECTION_MIN..=SAT_SECTION_MAX).contains(&score.math));
                assert!((400..=1600).contains(&score.total));
            }
        }
    }

    #[test]
    fn dispatch_and_accessors() {
        let digital = compute_sat_score(SatVariant::Digital, [27, 27, 22, 22]);
        assert_eq!(digital.variant(), SatVariant::Digital);
        assert_eq!(digital.verbal(), 800);
        assert_eq!(digital.math(), 800);

        let legacy = compute_sat_score(SatVariant::Legacy, [26, 22, 10, 19]);
        assert_eq!(legacy.variant(), SatVariant::Legacy);
        assert_eq!(legacy.verbal(), 500);
        assert_eq!(legacy.total(), 1000);
    }

    #[test]
    fn score_serializes_with_variant_tag() {
        let json = serde_json::to_value(compute_sat_score(SatVariant::Legacy, [0; 4])).unwrap();
        assert_eq!(json["variant"], "legacy");
        assert_eq!(json["ebrw"], 200);
    }
}
