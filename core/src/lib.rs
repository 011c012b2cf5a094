//! conflictology-core: the VIEWS conflictology benchmark.
//!
//! For every spatial unit and forecast month the benchmark resamples a
//! fixed-length window of past log fatality counts into draws, and
//! spreads each draw over forecast steps 1..=36. The result is a naive
//! baseline for conflict forecasting models.

pub mod assemble;
pub mod benchmark;
pub mod calendar;
pub mod config;
pub mod draws;
pub mod error;
pub mod fetcher;
pub mod query;
pub mod request;
pub mod series;
pub mod store;
pub mod table;
pub mod types;
pub mod window;

pub use benchmark::{compute_benchmark, conflictology_forecast};
pub use error::{BenchmarkError, BenchmarkResult};
pub use fetcher::{Fetcher, StaticFetcher};
pub use query::{Level, Outcome, SeriesQuery};
pub use request::{BenchmarkRequest, Partition};
pub use table::ForecastTable;
