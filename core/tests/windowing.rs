//! Window extraction tests.
//!
//! Tests cover: minimum history, window length, the offset anchor,
//! and positional behaviour over month gaps.

use conflictology_core::{
    request::Partition,
    series::{HistoricalSeries, Observation},
    window::{extract_windows, WindowParams},
};

/// Unit series covering months 1..=n where each value encodes its month.
fn full_series(unit_id: i64, n: u32) -> HistoricalSeries {
    HistoricalSeries::from_observations(
        (1..=n).map(|m| Observation::new(m, unit_id, m as f64)),
    )
}

#[test]
fn first_twelve_rows_have_no_window() {
    let series = full_series(1, 40);
    let params = WindowParams::new(1, 3);
    let windows = extract_windows(series.unit(1).unwrap(), &params);

    assert_eq!(windows.len(), 40);
    for row in &windows[..12] {
        assert!(row.window.is_none(), "month {} should have no window", row.month_id);
    }
    assert!(windows[12].window.is_some());
}

#[test]
fn present_windows_have_exact_length() {
    let series = full_series(1, 120);
    let params = WindowParams::new(3, 24);
    let windows = extract_windows(series.unit(1).unwrap(), &params);

    for row in &windows {
        if let Some(window) = row.window {
            assert_eq!(window.len(), 24, "month {} window length", row.month_id);
        }
    }
    // Row k gets a window once k + 1 - 3 >= 24, i.e. from k = 26 (month 27).
    assert!(windows[25].window.is_none());
    assert!(windows[26].window.is_some());
}

#[test]
fn window_ends_offset_rows_before_current_row() {
    let series = full_series(47, 600);
    let partition = Partition::new((1, 500), (501, 503));
    let params = WindowParams::for_partition(&partition, 12);
    assert_eq!(params.offset, 3);

    let windows = extract_windows(series.unit(47).unwrap(), &params);
    let row = windows.iter().find(|w| w.month_id == 501).unwrap();
    let expected: Vec<f64> = (487..=498).map(|m| m as f64).collect();
    assert_eq!(row.window.unwrap(), expected.as_slice());
}

#[test]
fn month_gap_shifts_window_positionally() {
    // Month 20 is missing: rows after it are one position behind their month.
    let series = HistoricalSeries::from_observations(
        (1..=40)
            .filter(|m| *m != 20)
            .map(|m| Observation::new(m, 3, m as f64)),
    );
    let params = WindowParams::new(1, 2);
    let windows = extract_windows(series.unit(3).unwrap(), &params);

    let row = windows.iter().find(|w| w.month_id == 22).unwrap();
    // Month 22 sits at row 20; its window is rows 18..20 = months 19 and 21.
    assert_eq!(row.window.unwrap(), &[19.0, 21.0]);
}
