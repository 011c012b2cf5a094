use super::ObservationStore;
use crate::{
    error::BenchmarkResult,
    query::{Level, Outcome},
    series::Observation,
    types::{MonthId, UnitId},
};
use rusqlite::{params, OptionalExtension};
use serde::{Deserialize, Serialize};

/// One raw source row: fatality counts per violence type, not yet transformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawObservation {
    pub level:    Level,
    pub month_id: MonthId,
    pub unit_id:  UnitId,
    #[serde(default)]
    pub ged_sb:   Option<f64>,
    #[serde(default)]
    pub ged_ns:   Option<f64>,
    #[serde(default)]
    pub ged_os:   Option<f64>,
}

impl RawObservation {
    pub fn count(&self, outcome: Outcome) -> Option<f64> {
        match outcome {
            Outcome::Sb => self.ged_sb,
            Outcome::Ns => self.ged_ns,
            Outcome::Os => self.ged_os,
        }
    }
}

/// `ln(1 + x)`, with missing or non-finite results filled with 0.
pub(crate) fn ln_filled(raw: Option<f64>) -> f64 {
    raw.map(f64::ln_1p)
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

impl ObservationStore {
    // ── Raw observations ───────────────────────────────────────────

    /// Upsert raw rows in a single transaction. Returns rows written.
    pub fn insert_observations(&self, rows: &[RawObservation]) -> BenchmarkResult<usize> {
        let tx = self.conn.unchecked_transaction()?;
        for row in rows {
            let level = row.level;
            let sql = format!(
                "INSERT OR REPLACE INTO {table} (month_id, {id}, {sb}, {ns}, {os})
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                table = level.table(),
                id = level.id_column(),
                sb = Outcome::Sb.source_column(),
                ns = Outcome::Ns.source_column(),
                os = Outcome::Os.source_column(),
            );
            tx.execute(
                &sql,
                params![
                    row.month_id,
                    row.unit_id,
                    row.count(Outcome::Sb),
                    row.count(Outcome::Ns),
                    row.count(Outcome::Os),
                ],
            )?;
        }
        tx.commit()?;
        log::debug!("Inserted {} raw observations", rows.len());
        Ok(rows.len())
    }

    pub fn unit_count(&self, level: Level) -> BenchmarkResult<i64> {
        let sql = format!(
            "SELECT COUNT(DISTINCT {id}) FROM {table}",
            id = level.id_column(),
            table = level.table(),
        );
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count)
    }

    /// First and last month present at `level`, if any rows exist.
    pub fn month_range(&self, level: Level) -> BenchmarkResult<Option<(MonthId, MonthId)>> {
        let sql = format!(
            "SELECT MIN(month_id), MAX(month_id) FROM {table}",
            table = level.table(),
        );
        let range = self
            .conn
            .query_row(&sql, [], |row| {
                Ok((row.get::<_, Option<u32>>(0)?, row.get::<_, Option<u32>>(1)?))
            })
            .optional()?;
        Ok(match range {
            Some((Some(first), Some(last))) => Some((first, last)),
            _ => None,
        })
    }

    // ── Transformed series ─────────────────────────────────────────

    /// The `ln_ged_{outcome}` series at `level`, ordered by unit then month.
    pub fn log_observations(
        &self,
        level: Level,
        outcome: Outcome,
    ) -> BenchmarkResult<Vec<Observation>> {
        let sql = format!(
            "SELECT month_id, {id}, {column} FROM {table} ORDER BY {id} ASC, month_id ASC",
            id = level.id_column(),
            column = outcome.source_column(),
            table = level.table(),
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Observation {
                    month_id:  row.get(0)?,
                    unit_id:   row.get(1)?,
                    log_value: ln_filled(row.get::<_, Option<f64>>(2)?),
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::debug!(
            "Read {} rows of {} from {}",
            rows.len(),
            outcome.variable(),
            level.table()
        );
        Ok(rows)
    }
}
