//! Observation store tests.
//!
//! Tests cover: migration, upserts, the ln(1 + x) transform with
//! missing-value fill, level/outcome routing, and running the
//! benchmark straight off the store.

use conflictology_core::{
    compute_benchmark,
    store::{ObservationStore, RawObservation},
    BenchmarkRequest, Fetcher, Level, Outcome, Partition, SeriesQuery,
};

fn store() -> ObservationStore {
    let store = ObservationStore::in_memory().expect("in-memory store");
    store.migrate().expect("migration");
    store
}

fn raw(level: Level, month_id: u32, unit_id: i64, sb: Option<f64>) -> RawObservation {
    RawObservation {
        level,
        month_id,
        unit_id,
        ged_sb: sb,
        ged_ns: Some(1.0),
        ged_os: None,
    }
}

#[test]
fn migrate_is_idempotent() {
    let store = store();
    store.migrate().expect("second migration");
    assert_eq!(store.unit_count(Level::Cm).unwrap(), 0);
    assert_eq!(store.month_range(Level::Pgm).unwrap(), None);
}

#[test]
fn fetch_applies_log_transform_and_fills_missing() {
    let store = store();
    store
        .insert_observations(&[
            raw(Level::Cm, 1, 47, Some(0.0)),
            raw(Level::Cm, 2, 47, None),
            raw(Level::Cm, 3, 47, Some(99.0)),
        ])
        .unwrap();

    let rows = store.fetch(&SeriesQuery::new(Level::Cm, Outcome::Sb)).unwrap();
    let values: Vec<f64> = rows.iter().map(|o| o.log_value).collect();
    assert_eq!(values.len(), 3);
    assert_eq!(values[0], 0.0);
    assert_eq!(values[1], 0.0);
    assert!((values[2] - 100f64.ln()).abs() < 1e-12);

    let ns = store.fetch(&SeriesQuery::new(Level::Cm, Outcome::Ns)).unwrap();
    assert!(ns.iter().all(|o| (o.log_value - 2f64.ln()).abs() < 1e-12));

    let os = store.fetch(&SeriesQuery::new(Level::Cm, Outcome::Os)).unwrap();
    assert!(os.iter().all(|o| o.log_value == 0.0));
}

#[test]
fn levels_use_separate_tables() {
    let store = store();
    store
        .insert_observations(&[
            raw(Level::Cm, 5, 1, Some(3.0)),
            raw(Level::Pgm, 5, 149_426, Some(3.0)),
            raw(Level::Pgm, 6, 149_427, Some(3.0)),
        ])
        .unwrap();

    assert_eq!(store.unit_count(Level::Cm).unwrap(), 1);
    assert_eq!(store.unit_count(Level::Pgm).unwrap(), 2);
    assert_eq!(store.month_range(Level::Pgm).unwrap(), Some((5, 6)));

    let pgm = store.fetch(&SeriesQuery::new(Level::Pgm, Outcome::Sb)).unwrap();
    let units: Vec<i64> = pgm.iter().map(|o| o.unit_id).collect();
    assert_eq!(units, vec![149_426, 149_427]);
}

#[test]
fn reinserting_a_month_replaces_it() {
    let store = store();
    store.insert_observations(&[raw(Level::Cm, 9, 2, Some(1.0))]).unwrap();
    store.insert_observations(&[raw(Level::Cm, 9, 2, Some(3.0))]).unwrap();

    let rows = store.fetch(&SeriesQuery::new(Level::Cm, Outcome::Sb)).unwrap();
    assert_eq!(rows.len(), 1);
    assert!((rows[0].log_value - 4f64.ln()).abs() < 1e-12);
}

#[test]
fn benchmark_runs_off_the_store() {
    let store = store();
    let rows: Vec<RawObservation> = (1..=520)
        .map(|m| raw(Level::Cm, m, 47, Some(m as f64)))
        .collect();
    store.insert_observations(&rows).unwrap();

    let request = BenchmarkRequest::new(Partition::new((1, 500), (501, 501)), Level::Cm, 12, Outcome::Sb)
        .with_steps(vec![1]);
    let table = compute_benchmark(&store, &request).unwrap();

    let step_one: Vec<f64> = table.group(501, 47).iter().map(|r| r.values[0]).collect();
    let expected: Vec<f64> = (489..=500).map(|m| (m as f64).ln_1p()).collect();
    assert_eq!(step_one, expected);
}
