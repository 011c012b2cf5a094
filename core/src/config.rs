use crate::{
    draws::ShiftScope,
    query::{Level, Outcome},
    request::{BenchmarkRequest, Partition},
};
use serde::{Deserialize, Serialize};

/// Runner configuration: the benchmark request plus where data lives
/// and where results go.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkConfig {
    #[serde(flatten)]
    pub request: BenchmarkRequest,
    /// SQLite observation database. None means an in-memory store.
    #[serde(default)]
    pub database: Option<String>,
    /// JSON output path. None means stdout.
    #[serde(default)]
    pub output: Option<String>,
}

impl BenchmarkConfig {
    /// Load from a JSON file.
    /// In tests, use BenchmarkConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        Self::from_json(&content).map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.request.validate()?;
        Ok(config)
    }

    /// Country-month state-based benchmark: 12-month window,
    /// train 1..=500, predict 501..=503, steps 1..=3.
    pub fn default_test() -> Self {
        Self {
            request: BenchmarkRequest {
                partition: Partition::new((1, 500), (501, 503)),
                steps: vec![1, 2, 3],
                level: Level::Cm,
                months_of_conflictology: 12,
                outcome: Outcome::Sb,
                shift_scope: ShiftScope::Global,
            },
            database: None,
            output: None,
        }
    }
}
