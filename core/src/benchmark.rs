//! The conflictology benchmark pipeline.
//!
//! EXECUTION ORDER (fixed):
//!   1. Validate the request (before any data is fetched)
//!   2. Fetch the (level, outcome) series
//!   3. Per unit: extract windows, expand draws
//!   4. Assemble, sort, restrict to the forecast months
//!   5. Project onto the requested steps (compute_benchmark only)
//!
//! RULES:
//!   - Units never see each other's data.
//!   - Fetcher errors propagate unchanged; nothing is retried.
//!   - Any error aborts the whole computation.

use crate::{
    assemble::assemble,
    draws::{expand_draws, DrawRow},
    error::BenchmarkResult,
    fetcher::Fetcher,
    request::BenchmarkRequest,
    series::HistoricalSeries,
    table::ForecastTable,
    window::{extract_windows, WindowParams},
};

/// Compute the benchmark and return only the requested step columns.
pub fn compute_benchmark<F>(fetcher: &F, request: &BenchmarkRequest) -> BenchmarkResult<ForecastTable>
where
    F: Fetcher + ?Sized,
{
    let forecast = conflictology_forecast(fetcher, request)?;
    forecast.select_steps(&request.steps)
}

/// Compute the benchmark with all 36 step columns.
pub fn conflictology_forecast<F>(
    fetcher: &F,
    request: &BenchmarkRequest,
) -> BenchmarkResult<ForecastTable>
where
    F: Fetcher + ?Sized,
{
    request.validate()?;

    let query = request.query();
    log::info!(
        "Fetching {} ({} at {})",
        query.name(),
        request.outcome.variable(),
        request.level.table()
    );
    let observations = fetcher.fetch(&query)?;
    let series = HistoricalSeries::from_observations(observations);
    log::info!(
        "Fetched {} observations across {} units",
        series.observation_count(),
        series.unit_count()
    );

    Ok(forecast_from_series(&series, request))
}

/// Run windowing, expansion and assembly over an already-fetched series.
/// `request` is assumed valid.
pub fn forecast_from_series(series: &HistoricalSeries, request: &BenchmarkRequest) -> ForecastTable {
    let params = WindowParams::for_partition(&request.partition, request.months_of_conflictology);
    log::info!(
        "Window length {}, offset {}, shift scope {}",
        params.length,
        params.offset,
        request.shift_scope
    );

    let horizon = request.partition.forecast_start()..=request.partition.forecast_end();

    let unit_tables: Vec<Vec<DrawRow>> = series
        .iter()
        .map(|(unit_id, unit_series)| {
            let windows = extract_windows(unit_series, &params);
            let present = windows.iter().filter(|w| w.window.is_some()).count();
            if present == 0 {
                log::warn!(
                    "Unit {unit_id}: no month has a full {}-month window ({} rows)",
                    params.length,
                    unit_series.len()
                );
            }
            let mut draws = expand_draws(unit_id, &windows, request.shift_scope);
            let expanded = draws.len();
            // Lags are already filled in, so months outside the horizon can go.
            draws.retain(|row| horizon.contains(&row.month_id));
            log::debug!(
                "Unit {unit_id}: {} rows, {present} windows, {expanded} draws, {} kept",
                windows.len(),
                draws.len()
            );
            draws
        })
        .collect();

    let table = assemble(request.level, unit_tables, &request.partition);
    log::info!(
        "Forecast table: {} rows, {} units, months {:?}",
        table.len(),
        table.unit_count(),
        table.months()
    );
    table
}
