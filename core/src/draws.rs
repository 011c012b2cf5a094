//! Draw expansion: one row per window value, plus lagged step columns.
//!
//! Steps, in order:
//!   1. An absent window becomes the placeholder window [0.0].
//!   2. Each window is exploded into one row per value, in window order.
//!      `draw` counts rows within the (month, unit) group from 0, also
//!      across consecutive rows that repeat a month.
//!   3. step_pred_1 is the exploded value.
//!   4. step_pred_k (k = 2..=36) is step_pred_1 from k-1 rows earlier,
//!      0.0 where no such row exists within the shift scope.
//!
//! A unit is always expanded on its own, so lags never cross units.

use crate::{
    error::BenchmarkError,
    types::{DrawIndex, MonthId, UnitId, STEP_COUNT},
    window::WindowRow,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value emitted for months without a usable window.
pub const EMPTY_WINDOW_VALUE: f64 = 0.0;

/// How far back the step lags may reach.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ShiftScope {
    /// Lag over the unit's whole exploded table. A step value may come
    /// from a neighbouring month's draws.
    #[default]
    Global,
    /// Lag resets at every (month, unit) group.
    Window,
}

impl ShiftScope {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Window => "window",
        }
    }
}

impl fmt::Display for ShiftScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ShiftScope {
    type Err = BenchmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(Self::Global),
            "window" => Ok(Self::Window),
            other    => Err(BenchmarkError::UnknownShiftScope(other.to_string())),
        }
    }
}

/// One draw for one (month, unit).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DrawRow {
    pub month_id: MonthId,
    pub unit_id:  UnitId,
    pub draw:     DrawIndex,
    /// step_pred_1..=step_pred_36, index 0 is step 1.
    pub steps:    Vec<f64>,
}

impl DrawRow {
    /// Value of step_pred_`step`, or None outside 1..=36.
    pub fn step(&self, step: usize) -> Option<f64> {
        self.steps.get(step.checked_sub(1)?).copied()
    }

    pub fn sort_key(&self) -> (MonthId, UnitId, DrawIndex) {
        (self.month_id, self.unit_id, self.draw)
    }
}

/// Expand one unit's window table into its draw table.
pub fn expand_draws(unit_id: UnitId, windows: &[WindowRow<'_>], scope: ShiftScope) -> Vec<DrawRow> {
    let placeholder = [EMPTY_WINDOW_VALUE];

    let mut rows: Vec<DrawRow> = Vec::new();
    // Index of the first row of each row's (month, unit) group.
    let mut group_start: Vec<usize> = Vec::new();

    for window_row in windows {
        let values = window_row.window.unwrap_or(&placeholder[..]);
        // A repeated month continues its group instead of opening a new one.
        let (start, first_draw) = match rows.last() {
            Some(prev) if prev.month_id == window_row.month_id => {
                (group_start[rows.len() - 1], prev.draw + 1)
            }
            _ => (rows.len(), 0),
        };
        for (offset, &value) in values.iter().enumerate() {
            let mut steps = vec![EMPTY_WINDOW_VALUE; STEP_COUNT];
            steps[0] = value;
            rows.push(DrawRow {
                month_id: window_row.month_id,
                unit_id,
                draw: first_draw + offset as DrawIndex,
                steps,
            });
            group_start.push(start);
        }
    }

    for i in 0..rows.len() {
        let floor = match scope {
            ShiftScope::Global => 0,
            ShiftScope::Window => group_start[i],
        };
        for lag in 1..STEP_COUNT {
            let value = match i.checked_sub(lag) {
                Some(source) if source >= floor => rows[source].steps[0],
                _ => EMPTY_WINDOW_VALUE,
            };
            rows[i].steps[lag] = value;
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_window_yields_single_zero_draw() {
        let windows = [WindowRow { month_id: 7, window: None }];
        let rows = expand_draws(1, &windows, ShiftScope::Global);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].draw, 0);
        assert!(rows[0].steps.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn global_lag_crosses_month_boundary() {
        let first = [1.0, 2.0];
        let second = [3.0, 4.0];
        let windows = [
            WindowRow { month_id: 1, window: Some(&first[..]) },
            WindowRow { month_id: 2, window: Some(&second[..]) },
        ];
        let rows = expand_draws(5, &windows, ShiftScope::Global);

        assert_eq!(rows[2].step(2), Some(2.0));
        assert_eq!(rows[3].step(3), Some(2.0));
        assert_eq!(rows[3].step(4), Some(1.0));
        assert_eq!(rows[3].step(5), Some(0.0));
    }

    #[test]
    fn window_lag_stops_at_group_start() {
        let first = [1.0, 2.0];
        let second = [3.0, 4.0];
        let windows = [
            WindowRow { month_id: 1, window: Some(&first[..]) },
            WindowRow { month_id: 2, window: Some(&second[..]) },
        ];
        let rows = expand_draws(5, &windows, ShiftScope::Window);

        assert_eq!(rows[2].step(2), Some(0.0));
        assert_eq!(rows[3].step(2), Some(3.0));
        assert_eq!(rows[3].step(3), Some(0.0));
    }

    #[test]
    fn step_outside_range_is_none() {
        let windows = [WindowRow { month_id: 3, window: None }];
        let rows = expand_draws(1, &windows, ShiftScope::Global);

        assert_eq!(rows[0].step(0), None);
        assert_eq!(rows[0].step(36), Some(0.0));
        assert_eq!(rows[0].step(37), None);
    }

    #[test]
    fn repeated_month_continues_draw_numbering() {
        let first = [1.0, 2.0];
        let repeat = [3.0, 4.0];
        let windows = [
            WindowRow { month_id: 8, window: Some(&first[..]) },
            WindowRow { month_id: 8, window: Some(&repeat[..]) },
        ];
        let rows = expand_draws(2, &windows, ShiftScope::Window);

        let draws: Vec<DrawIndex> = rows.iter().map(|r| r.draw).collect();
        assert_eq!(draws, vec![0, 1, 2, 3]);
        // Both rows share one group, so the window-scoped lag reaches back into it.
        assert_eq!(rows[3].step(4), Some(1.0));
    }

    #[test]
    fn shift_scope_parses_codes() {
        assert_eq!("window".parse::<ShiftScope>().unwrap(), ShiftScope::Window);
        assert!("month".parse::<ShiftScope>().is_err());
    }
}
