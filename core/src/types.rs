//! Shared primitive types used across the entire benchmark.

/// A VIEWS month index. Month 1 = January 1980.
pub type MonthId = u32;

/// A spatial unit identifier: `country_id` at cm, `priogrid_gid` at pgm.
pub type UnitId = i64;

/// Zero-based position of a draw within its (month, unit) group.
pub type DrawIndex = u32;

/// Number of forecast steps computed for every draw.
pub const STEP_COUNT: usize = 36;

/// Rows at the head of each unit's series that never receive a window.
pub const MIN_HISTORY_ROWS: usize = 12;

/// Highest month id accepted in a partition.
pub const MAX_MONTH_ID: MonthId = 850;

/// Column name for forecast step `step` (1-based).
pub fn step_column(step: usize) -> String {
    format!("step_pred_{step}")
}
