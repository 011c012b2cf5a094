//! SQLite persistence layer for raw conflict observations.
//!
//! RULE: Only the store talks to the database.
//! The pipeline reaches it through the Fetcher trait and never
//! executes SQL directly.

mod observation;

pub use observation::RawObservation;

use crate::{
    error::BenchmarkResult,
    fetcher::Fetcher,
    query::SeriesQuery,
    series::Observation,
};
use rusqlite::Connection;

pub struct ObservationStore {
    conn: Connection,
}

impl ObservationStore {
    /// Open (or create) the observation database at `path`.
    pub fn open(path: &str) -> BenchmarkResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only matters for real files; :memory: ignores it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> BenchmarkResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> BenchmarkResult<()> {
        self.conn
            .execute_batch(include_str!("../../../migrations/001_foundation.sql"))?;
        Ok(())
    }
}

impl Fetcher for ObservationStore {
    fn fetch(&self, query: &SeriesQuery) -> BenchmarkResult<Vec<Observation>> {
        self.log_observations(query.level, query.outcome)
    }
}
