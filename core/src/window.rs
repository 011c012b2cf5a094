//! Lookback windows over a single unit's series.
//!
//! For row k of a unit's month-ordered series the window is the
//! `length` values ending `offset` rows before k:
//!
//!   values[k - offset - length + 1 .. k - offset + 1]
//!
//! RULES:
//!   - The first MIN_HISTORY_ROWS rows never get a window.
//!   - A window that would start before the first row is absent, so a
//!     present window always has exactly `length` values.
//!   - Index arithmetic is positional. A month missing from the series
//!     shifts the window; it is not corrected.

use crate::{
    request::Partition,
    series::UnitSeries,
    types::{MonthId, MIN_HISTORY_ROWS},
};

/// Window geometry shared by every unit in one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowParams {
    /// Rows between the current row and the last row of its window.
    pub offset: usize,
    /// Window length (`months_of_conflictology`).
    pub length: usize,
}

impl WindowParams {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Offset anchored on the gap between training end and forecast end.
    pub fn for_partition(partition: &Partition, months_of_conflictology: usize) -> Self {
        Self::new(partition.window_offset(), months_of_conflictology)
    }

    /// Half-open row range of the window for row `k`, if one exists.
    pub fn bounds(&self, k: usize) -> Option<(usize, usize)> {
        if k < MIN_HISTORY_ROWS {
            return None;
        }
        let end = (k + 1).checked_sub(self.offset)?;
        let start = end.checked_sub(self.length)?;
        Some((start, end))
    }
}

/// One month of a unit's window table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowRow<'a> {
    pub month_id: MonthId,
    pub window:   Option<&'a [f64]>,
}

/// Compute the window for every row of `series`, in series order.
pub fn extract_windows<'a>(series: &'a UnitSeries, params: &WindowParams) -> Vec<WindowRow<'a>> {
    series
        .months
        .iter()
        .enumerate()
        .map(|(k, &month_id)| WindowRow {
            month_id,
            window: params
                .bounds(k)
                .map(|(start, end)| &series.values[start..end]),
        })
        .collect()
}
