//! benchmark-runner: headless runner for the conflictology benchmark.
//!
//! Usage:
//!   benchmark-runner --config bench.json --db conflict.db --out forecast.json
//!   benchmark-runner --config bench.json --import observations.json --level pgm --months 24

use anyhow::Result;
use conflictology_core::{
    calendar,
    compute_benchmark,
    config::BenchmarkConfig,
    store::{ObservationStore, RawObservation},
    ForecastTable,
};
use std::env;
use std::io::{self, Write};

#[derive(serde::Serialize)]
struct ForecastOutput<'a> {
    generated_at: String,
    variable: String,
    index: [&'static str; 3],
    forecast_window: (String, String),
    table: &'a ForecastTable,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = match string_arg(&args, "--config") {
        Some(path) => BenchmarkConfig::load(path)?,
        None => {
            log::warn!("No --config given, using the built-in cm/sb defaults");
            BenchmarkConfig::default_test()
        }
    };

    if let Some(db) = string_arg(&args, "--db") {
        config.database = Some(db.to_string());
    }
    if let Some(out) = string_arg(&args, "--out") {
        config.output = Some(out.to_string());
    }
    if let Some(level) = string_arg(&args, "--level") {
        config.request.level = level.parse()?;
    }
    if let Some(outcome) = string_arg(&args, "--outcome") {
        config.request.outcome = outcome.parse()?;
    }
    if let Some(scope) = string_arg(&args, "--shift-scope") {
        config.request.shift_scope = scope.parse()?;
    }
    config.request.months_of_conflictology =
        parse_arg(&args, "--months", config.request.months_of_conflictology);

    let request = &config.request;
    let (start, end) = request.partition.predict;
    eprintln!("Conflictology benchmark: benchmark-runner");
    eprintln!("  level:     {}", request.level);
    eprintln!("  outcome:   {}", request.outcome);
    eprintln!("  window:    {} months", request.months_of_conflictology);
    eprintln!("  train:     {:?}", request.partition.train);
    eprintln!("  predict:   {} .. {}", calendar::label(start), calendar::label(end));
    eprintln!("  steps:     {:?}", request.steps);
    eprintln!("  shift:     {}", request.shift_scope);
    eprintln!();

    let store = match &config.database {
        Some(path) => ObservationStore::open(path)?,
        None => ObservationStore::in_memory()?,
    };
    store.migrate()?;

    if let Some(path) = string_arg(&args, "--import") {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let rows: Vec<RawObservation> = serde_json::from_str(&content)?;
        let written = store.insert_observations(&rows)?;
        log::info!("Imported {written} observations from {path}");
    }

    let table = compute_benchmark(&store, request)?;
    print_summary(&store, &config, &table)?;

    let output = ForecastOutput {
        generated_at: chrono::Utc::now().to_rfc3339(),
        variable: request.outcome.variable(),
        index: table.index_names(),
        forecast_window: (calendar::label(start), calendar::label(end)),
        table: &table,
    };
    let json = serde_json::to_string_pretty(&output)?;
    match &config.output {
        Some(path) => {
            std::fs::write(path, json)
                .map_err(|e| anyhow::anyhow!("Cannot write {path}: {e}"))?;
            eprintln!("  written to:  {path}");
        }
        None => {
            let mut stdout = io::stdout();
            writeln!(stdout, "{json}")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn print_summary(store: &ObservationStore, config: &BenchmarkConfig, table: &ForecastTable) -> Result<()> {
    let level = config.request.level;
    let source_units = store.unit_count(level)?;
    let source_range = store
        .month_range(level)?
        .map(|(first, last)| format!("{} .. {}", calendar::label(first), calendar::label(last)))
        .unwrap_or_else(|| "(empty)".to_string());

    eprintln!("=== RUN SUMMARY ===");
    eprintln!("  source table:  {}", level.table());
    eprintln!("  source units:  {source_units}");
    eprintln!("  source months: {source_range}");
    eprintln!("  units:         {}", table.unit_count());
    eprintln!("  rows:          {}", table.len());
    for month in table.months() {
        let draws = table.rows.iter().filter(|r| r.month_id == month).count();
        eprintln!("  {} ({month}): {draws} draws", calendar::label(month));
    }
    Ok(())
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    match string_arg(args, flag) {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring {flag} {raw}: not a valid value, keeping the configured one");
            default
        }),
        None => default,
    }
}
