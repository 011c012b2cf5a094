//! The forecast table: long format, indexed by (month, unit, draw).

use crate::{
    error::{BenchmarkError, BenchmarkResult},
    query::Level,
    request::validate_steps,
    types::{step_column, DrawIndex, MonthId, UnitId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastRow {
    pub month_id: MonthId,
    pub unit_id:  UnitId,
    pub draw:     DrawIndex,
    /// One value per entry of `ForecastTable::columns`.
    pub values:   Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastTable {
    pub level:   Level,
    pub columns: Vec<String>,
    pub rows:    Vec<ForecastRow>,
}

impl ForecastTable {
    pub fn new(level: Level, columns: Vec<String>, rows: Vec<ForecastRow>) -> Self {
        Self { level, columns, rows }
    }

    /// Index column names: `month_id`, the level's unit column, `draw`.
    pub fn index_names(&self) -> [&'static str; 3] {
        ["month_id", self.level.id_column(), "draw"]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Value of `column` in `row`, if the table carries that column.
    pub fn value(&self, row: &ForecastRow, column: &str) -> Option<f64> {
        self.column_position(column).map(|i| row.values[i])
    }

    /// Rows of one (month, unit) group, in draw order.
    pub fn group(&self, month_id: MonthId, unit_id: UnitId) -> Vec<&ForecastRow> {
        self.rows
            .iter()
            .filter(|r| r.month_id == month_id && r.unit_id == unit_id)
            .collect()
    }

    /// Distinct months present, ascending.
    pub fn months(&self) -> Vec<MonthId> {
        let mut months: Vec<MonthId> = self.rows.iter().map(|r| r.month_id).collect();
        months.sort_unstable();
        months.dedup();
        months
    }

    pub fn unit_count(&self) -> usize {
        let mut units: Vec<UnitId> = self.rows.iter().map(|r| r.unit_id).collect();
        units.sort_unstable();
        units.dedup();
        units.len()
    }

    /// Project onto `step_pred_{i}` for each `i` in `steps`, in that order.
    pub fn select_steps(&self, steps: &[usize]) -> BenchmarkResult<Self> {
        validate_steps(steps)?;

        let positions = steps
            .iter()
            .map(|&step| {
                let name = step_column(step);
                self.column_position(&name).ok_or_else(|| {
                    BenchmarkError::invalid("steps", format!("table has no column '{name}'"))
                })
            })
            .collect::<BenchmarkResult<Vec<_>>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| ForecastRow {
                month_id: row.month_id,
                unit_id:  row.unit_id,
                draw:     row.draw,
                values:   positions.iter().map(|&i| row.values[i]).collect(),
            })
            .collect();

        Ok(Self {
            level: self.level,
            columns: steps.iter().map(|&s| step_column(s)).collect(),
            rows,
        })
    }
}
