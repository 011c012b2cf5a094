//! Historical series: the fetched long-format table regrouped per unit.

use crate::types::{MonthId, UnitId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One row of the fetcher's long-format table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Observation {
    pub month_id:  MonthId,
    pub unit_id:   UnitId,
    pub log_value: f64,
}

impl Observation {
    pub fn new(month_id: MonthId, unit_id: UnitId, log_value: f64) -> Self {
        Self { month_id, unit_id, log_value }
    }
}

/// A single unit's month-ordered values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitSeries {
    pub months: Vec<MonthId>,
    pub values: Vec<f64>,
}

impl UnitSeries {
    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

/// Unit id → month-ordered series.
///
/// The unit set is whatever the data contains. Month gaps are kept as
/// gaps: nothing is back-filled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalSeries {
    units: BTreeMap<UnitId, UnitSeries>,
}

impl HistoricalSeries {
    /// Group observations by unit and sort each unit's rows by month.
    pub fn from_observations(observations: impl IntoIterator<Item = Observation>) -> Self {
        let mut grouped: BTreeMap<UnitId, Vec<(MonthId, f64)>> = BTreeMap::new();
        for obs in observations {
            grouped
                .entry(obs.unit_id)
                .or_default()
                .push((obs.month_id, obs.log_value));
        }

        let units = grouped
            .into_iter()
            .map(|(unit_id, mut rows)| {
                // Stable, so duplicate months keep fetch order.
                rows.sort_by_key(|(month, _)| *month);
                let (months, values) = rows.into_iter().unzip();
                (unit_id, UnitSeries { months, values })
            })
            .collect();

        Self { units }
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn observation_count(&self) -> usize {
        self.units.values().map(UnitSeries::len).sum()
    }

    pub fn unit(&self, unit_id: UnitId) -> Option<&UnitSeries> {
        self.units.get(&unit_id)
    }

    pub fn unit_ids(&self) -> impl Iterator<Item = UnitId> + '_ {
        self.units.keys().copied()
    }

    /// Units in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitId, &UnitSeries)> {
        self.units.iter().map(|(id, series)| (*id, series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_by_unit_and_sorts_by_month() {
        let series = HistoricalSeries::from_observations(vec![
            Observation::new(3, 20, 0.3),
            Observation::new(1, 10, 0.1),
            Observation::new(2, 20, 0.2),
            Observation::new(2, 10, 0.2),
        ]);

        assert_eq!(series.unit_count(), 2);
        assert_eq!(series.observation_count(), 4);
        assert_eq!(series.unit_ids().collect::<Vec<_>>(), vec![10, 20]);

        let unit_20 = series.unit(20).unwrap();
        assert_eq!(unit_20.months, vec![2, 3]);
        assert_eq!(unit_20.values, vec![0.2, 0.3]);
    }

    #[test]
    fn empty_input_has_no_units() {
        let series = HistoricalSeries::from_observations(Vec::new());
        assert_eq!(series.unit_count(), 0);
        assert!(series.unit(1).is_none());
    }
}
