//! Raw-to-scaled transforms shared by the ACT and SAT modules.
//!
//! Two shapes exist: a clamped linear map onto a scaled range, and a
//! fixed lookup table indexed by raw score. Neither can fail; every input
//! lands inside the documented output range.

/// Score returned by [`lookup`] when a table has no entries at all.
pub const LOOKUP_FLOOR: u32 = 200;

/// Clamp a raw count into `[0, max_raw]`.
///
/// A non-positive `max_raw` yields 0.
pub fn clamp_raw(raw: i32, max_raw: i32) -> i32 {
    raw.min(max_raw).max(0)
}

/// Map `raw / max_raw` linearly onto `[floor, ceiling]`.
///
/// The proportion is clamped to `[0, 1]` before scaling and the rounded
/// result is clamped again, so out-of-range raw counts behave exactly like
/// the nearest boundary. A `max_raw` of zero or less returns `floor`.
pub fn linear_scale(raw: i32, max_raw: i32, floor: u32, ceiling: u32) -> u32 {
    if max_raw <= 0 {
        return floor;
    }
    let p = (f64::from(raw) / f64::from(max_raw)).clamp(0.0, 1.0);
    let span = f64::from(ceiling) - f64::from(floor);
    let scaled = (f64::from(floor) + p * span).round();
    (scaled as u32).clamp(floor, ceiling)
}

/// Read a module score from `table` at the clamped raw index.
///
/// Falls back to the last entry if the index is past the end, and to
/// [`LOOKUP_FLOOR`] if the table is empty.
pub fn lookup(table: &[u32], raw: i32, max_raw: i32) -> u32 {
    let index = clamp_raw(raw, max_raw) as usize;
    table
        .get(index)
        .or_else(|| table.last())
        .copied()
        .unwrap_or(LOOKUP_FLOOR)
}

/// Round the mean of scaled scores half-up and clamp into `[floor, ceiling]`.
pub fn rounded_mean(scores: &[u32], floor: u32, ceiling: u32) -> u32 {
    if scores.is_empty() {
        return floor;
    }
    let sum: u32 = scores.iter().sum();
    let mean = (f64::from(sum) / scores.len() as f64).round();
    (mean as u32).clamp(floor, ceiling)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_raw_bounds() {
        assert_eq!(clamp_raw(-5, 40), 0);
        assert_eq!(clamp_raw(17, 40), 17);
        assert_eq!(clamp_raw(99, 40), 40);
        assert_eq!(clamp_raw(3, 0), 0);
        assert_eq!(clamp_raw(3, -2), 0);
    }

    #[test]
    fn linear_scale_endpoints() {
        assert_eq!(linear_scale(0, 50, 1, 36), 1);
        assert_eq!(linear_scale(50, 50, 1, 36), 36);
        assert_eq!(linear_scale(0, 96, 200, 800), 200);
        assert_eq!(linear_scale(96, 96, 200, 800), 800);
    }

    #[test]
    fn linear_scale_rounds_half_up() {
        // 1 + 0.5 * 35 = 18.5
        assert_eq!(linear_scale(18, 36, 1, 36), 19);
        assert_eq!(linear_scale(20, 40, 1, 36), 19);
        // 1 + 0.5 * 35 = 18.5 with an even max too
        assert_eq!(linear_scale(25, 50, 1, 36), 19);
    }

    #[test]
    fn linear_scale_clamps_out_of_range_raw() {
        assert_eq!(linear_scale(-10, 45, 1, 36), 1);
        assert_eq!(linear_scale(1000, 45, 1, 36), 36);
        assert_eq!(linear_scale(i32::MIN, 58, 200, 800), 200);
        assert_eq!(linear_scale(i32::MAX, 58, 200, 800), 800);
    }

    #[test]
    fn linear_scale_non_positive_max_returns_floor() {
        assert_eq!(linear_scale(10, 0, 1, 36), 1);
        assert_eq!(linear_scale(10, -4, 200, 800), 200);
    }

    #[test]
    fn lookup_reads_clamped_index() {
        let table = [100, 150, 200, 260];
        assert_eq!(lookup(&table, 0, 3), 100);
        assert_eq!(lookup(&table, 2, 3), 200);
        assert_eq!(lookup(&table, -1, 3), 100);
        assert_eq!(lookup(&table, 50, 3), 260);
    }

    #[test]
    fn lookup_falls_back_to_last_entry() {
        // max_raw larger than the table: index past the end
        let table = [100, 150];
        assert_eq!(lookup(&table, 5, 10), 150);
    }

    #[test]
    fn lookup_empty_table_returns_floor() {
        assert_eq!(lookup(&[], 5, 10), LOOKUP_FLOOR);
    }

    #[test]
    fn rounded_mean_half_up() {
        assert_eq!(rounded_mean(&[18, 19, 19], 1, 36), 19);
        assert_eq!(rounded_mean(&[19, 20], 1, 36), 20);
        assert_eq!(rounded_mean(&[], 1, 36), 1);
    }
}
