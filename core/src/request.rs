//! Benchmark request and its precondition checks.
//!
//! Validation runs before anything is fetched. Each violation names the
//! parameter and the rule it broke.

use crate::{
    draws::ShiftScope,
    error::{BenchmarkError, BenchmarkResult},
    query::{Level, Outcome, SeriesQuery},
    types::{MonthId, MAX_MONTH_ID, STEP_COUNT},
};
use serde::{Deserialize, Serialize};

/// Training and prediction periods, each an inclusive (start, end) pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Partition {
    pub train:   (MonthId, MonthId),
    pub predict: (MonthId, MonthId),
}

impl Partition {
    pub fn new(train: (MonthId, MonthId), predict: (MonthId, MonthId)) -> Self {
        Self { train, predict }
    }

    pub fn training_end(&self) -> MonthId {
        self.train.1
    }

    pub fn forecast_start(&self) -> MonthId {
        self.predict.0
    }

    pub fn forecast_end(&self) -> MonthId {
        self.predict.1
    }

    /// Rows between the current month and the end of its lookback window.
    pub fn window_offset(&self) -> usize {
        self.forecast_end().saturating_sub(self.training_end()) as usize
    }

    pub fn validate(&self) -> BenchmarkResult<()> {
        check_month_pair("train", self.train)?;
        check_month_pair("predict", self.predict)?;

        if self.predict.0 <= self.train.1 {
            return Err(BenchmarkError::invalid(
                "predict",
                format!(
                    "forecast start {} must be greater than the training end {}",
                    self.predict.0, self.train.1
                ),
            ));
        }
        if self.predict.1 < self.predict.0 {
            return Err(BenchmarkError::invalid(
                "predict",
                format!(
                    "forecast end {} must not precede forecast start {}",
                    self.predict.1, self.predict.0
                ),
            ));
        }
        Ok(())
    }
}

fn check_month_pair(name: &'static str, (start, end): (MonthId, MonthId)) -> BenchmarkResult<()> {
    for month in [start, end] {
        if !(1..=MAX_MONTH_ID).contains(&month) {
            return Err(BenchmarkError::invalid(
                name,
                format!("month {month} must be in the range of 1 to {MAX_MONTH_ID}"),
            ));
        }
    }
    Ok(())
}

/// Everything `compute_benchmark` needs besides the data source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkRequest {
    pub partition: Partition,
    pub steps: Vec<usize>,
    pub level: Level,
    pub months_of_conflictology: usize,
    pub outcome: Outcome,
    #[serde(default)]
    pub shift_scope: ShiftScope,
}

impl BenchmarkRequest {
    /// Request for all 36 steps with the default global shift.
    pub fn new(
        partition: Partition,
        level: Level,
        months_of_conflictology: usize,
        outcome: Outcome,
    ) -> Self {
        Self {
            partition,
            steps: (1..=STEP_COUNT).collect(),
            level,
            months_of_conflictology,
            outcome,
            shift_scope: ShiftScope::default(),
        }
    }

    pub fn with_steps(mut self, steps: Vec<usize>) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_shift_scope(mut self, shift_scope: ShiftScope) -> Self {
        self.shift_scope = shift_scope;
        self
    }

    pub fn query(&self) -> SeriesQuery {
        SeriesQuery::new(self.level, self.outcome)
    }

    pub fn validate(&self) -> BenchmarkResult<()> {
        self.partition.validate()?;

        let months = self.months_of_conflictology;
        if months == 0 || months >= MAX_MONTH_ID as usize {
            return Err(BenchmarkError::invalid(
                "months_of_conflictology",
                format!("{months} must be greater than 0 and less than {MAX_MONTH_ID}"),
            ));
        }

        validate_steps(&self.steps)
    }
}

pub(crate) fn validate_steps(steps: &[usize]) -> BenchmarkResult<()> {
    if steps.is_empty() {
        return Err(BenchmarkError::invalid("steps", "at least one step must be requested"));
    }
    match steps.iter().find(|s| !(1..=STEP_COUNT).contains(*s)) {
        Some(&step) => Err(BenchmarkError::StepOutOfRange { step, max: STEP_COUNT }),
        None => Ok(()),
    }
}
