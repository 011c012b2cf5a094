//! Assembler: merge per-unit draw tables into the forecast table.
//!
//! RULE: The result never depends on the order units were processed in.
//! Rows are sorted by (month_id, unit_id, draw) before filtering.

use crate::{
    draws::DrawRow,
    query::Level,
    request::Partition,
    table::{ForecastRow, ForecastTable},
    types::{step_column, STEP_COUNT},
};

/// Concatenate `unit_tables`, sort, and keep the forecast months
/// `predict.0 ..= predict.1`. All 36 step columns are kept.
pub fn assemble(
    level: Level,
    unit_tables: Vec<Vec<DrawRow>>,
    partition: &Partition,
) -> ForecastTable {
    let mut all: Vec<DrawRow> = unit_tables.into_iter().flatten().collect();
    let total = all.len();
    all.sort_by_key(DrawRow::sort_key);

    let horizon = partition.forecast_start()..=partition.forecast_end();
    let rows: Vec<ForecastRow> = all
        .into_iter()
        .filter(|row| horizon.contains(&row.month_id))
        .map(|row| ForecastRow {
            month_id: row.month_id,
            unit_id:  row.unit_id,
            draw:     row.draw,
            values:   row.steps,
        })
        .collect();

    log::debug!(
        "Assembled {} of {total} draw rows inside months {}..={}",
        rows.len(),
        partition.forecast_start(),
        partition.forecast_end()
    );

    ForecastTable::new(level, (1..=STEP_COUNT).map(step_column).collect(), rows)
}
