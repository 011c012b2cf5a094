//! Month id ↔ calendar conversions. Month 1 is January 1980.

use crate::types::MonthId;
use chrono::{Datelike, NaiveDate};

pub const EPOCH_YEAR: i32 = 1980;

/// First day of the month `month_id` refers to.
pub fn month_start(month_id: MonthId) -> Option<NaiveDate> {
    if month_id == 0 {
        return None;
    }
    let offset = i32::try_from(month_id - 1).ok()?;
    NaiveDate::from_ymd_opt(EPOCH_YEAR + offset / 12, (offset % 12) as u32 + 1, 1)
}

/// Month id containing `date`, or None before January 1980.
pub fn month_id_for(date: NaiveDate) -> Option<MonthId> {
    let months = (date.year() - EPOCH_YEAR) * 12 + date.month0() as i32;
    u32::try_from(months + 1).ok().filter(|m| *m > 0)
}

/// `YYYY-MM` label, or the bare id if it has no calendar month.
pub fn label(month_id: MonthId) -> String {
    match month_start(month_id) {
        Some(date) => date.format("%Y-%m").to_string(),
        None => format!("month {month_id}"),
    }
}
