//! Fetcher trait: the single external boundary of the pipeline.
//!
//! RULE: The pipeline never knows where observations come from.
//! It asks a Fetcher for one (level, outcome) series per invocation
//! and propagates whatever error the Fetcher returns.

use crate::{
    error::BenchmarkResult,
    query::SeriesQuery,
    series::Observation,
};

/// The contract every data source must fulfill.
///
/// Returned observations are already log-transformed with missing values
/// filled, one row per (month, unit) present in the source.
pub trait Fetcher {
    fn fetch(&self, query: &SeriesQuery) -> BenchmarkResult<Vec<Observation>>;
}

impl<F> Fetcher for F
where
    F: Fn(&SeriesQuery) -> BenchmarkResult<Vec<Observation>>,
{
    fn fetch(&self, query: &SeriesQuery) -> BenchmarkResult<Vec<Observation>> {
        self(query)
    }
}

/// Serves a fixed observation set regardless of the query.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    observations: Vec<Observation>,
}

impl StaticFetcher {
    pub fn new(observations: Vec<Observation>) -> Self {
        Self { observations }
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, query: &SeriesQuery) -> BenchmarkResult<Vec<Observation>> {
        log::debug!(
            "Serving {} static observations for {}",
            self.observations.len(),
            query.name()
        );
        Ok(self.observations.clone())
    }
}
