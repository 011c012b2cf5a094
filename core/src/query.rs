//! Level of analysis and outcome variable, the two axes of a series query.
//!
//! Every level/outcome combination runs through the same pipeline.
//! The enums carry the table, id column and source column they map to,
//! so nothing downstream branches on them.

use crate::error::BenchmarkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Level of analysis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// Country-month.
    Cm,
    /// PRIO-GRID-month.
    Pgm,
}

impl Level {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Cm  => "cm",
            Self::Pgm => "pgm",
        }
    }

    /// Source table holding one row per (month, unit).
    pub fn table(&self) -> &'static str {
        match self {
            Self::Cm  => "country_month",
            Self::Pgm => "priogrid_month",
        }
    }

    /// Name of the spatial unit column.
    pub fn id_column(&self) -> &'static str {
        match self {
            Self::Cm  => "country_id",
            Self::Pgm => "priogrid_gid",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Level {
    type Err = BenchmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cm"  => Ok(Self::Cm),
            "pgm" => Ok(Self::Pgm),
            other => Err(BenchmarkError::UnknownLevel(other.to_string())),
        }
    }
}

/// UCDP violence type used as the outcome.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// State-based conflict.
    Sb,
    /// Non-state conflict.
    Ns,
    /// One-sided violence.
    Os,
}

impl Outcome {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sb => "sb",
            Self::Ns => "ns",
            Self::Os => "os",
        }
    }

    /// Raw fatality-count column the outcome is read from.
    pub fn source_column(&self) -> &'static str {
        match self {
            Self::Sb => "ged_sb_best_sum_nokgi",
            Self::Ns => "ged_ns_best_sum_nokgi",
            Self::Os => "ged_os_best_sum_nokgi",
        }
    }

    /// Name of the log-transformed variable, e.g. `ln_ged_sb`.
    pub fn variable(&self) -> String {
        format!("ln_ged_{}", self.code())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Outcome {
    type Err = BenchmarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sb"  => Ok(Self::Sb),
            "ns"  => Ok(Self::Ns),
            "os"  => Ok(Self::Os),
            other => Err(BenchmarkError::UnknownOutcome(other.to_string())),
        }
    }
}

/// What a fetcher is asked for: one outcome at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesQuery {
    pub level:   Level,
    pub outcome: Outcome,
}

impl SeriesQuery {
    pub fn new(level: Level, outcome: Outcome) -> Self {
        Self { level, outcome }
    }

    /// Queryset-style name, e.g. `conflictology_cm_sb`.
    pub fn name(&self) -> String {
        format!("conflictology_{}_{}", self.level, self.outcome)
    }
}
