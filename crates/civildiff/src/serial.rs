//! Civil serial-day conversion for the proleptic Gregorian calendar.
//!
//! [`civil_days`] maps a date to a serial day count such that subtracting two
//! counts gives the exact number of calendar days between the dates. This is
//! Howard Hinnant's days-from-civil algorithm (public domain). No epoch is
//! guaranteed: only differences between two counts are meaningful, which is
//! all the difference engine needs. Working on serial counts avoids duration
//! arithmetic entirely, so large spans cannot overflow and DST/timezone
//! anomalies cannot appear.

use chrono::{Datelike, NaiveDate};

/// Convert a civil date to a serial day count (proleptic Gregorian).
///
/// For any two dates `a` and `b`, `civil_days(b) - civil_days(a)` is the
/// number of calendar days from `a` to `b`, negative if `b` precedes `a`.
/// Total over the supported year range; the guard layer rejects
/// out-of-range years before this is ever called.
pub fn civil_days(date: NaiveDate) -> i64 {
    let mut y = i64::from(date.year());
    let mut m = i64::from(date.month());
    let d = i64::from(date.day());

    // Shift the year so March is month 3..=14 and the leap day lands at the
    // end of the shifted year.
    if m <= 2 {
        y -= 1;
        m += 12;
    }

    // 400-year era. The era division must round toward negative infinity,
    // which Rust's truncating `/` gets wrong for negative shifted years.
    let era = floor_div(y, 400);
    let yoe = y - era * 400;

    // Day-of-year for the March-shifted calendar. Operands are non-negative
    // here, so native division is exact.
    let doy = (153 * (m - 3) + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;

    era * 146097 + doe
}

/// Integer division rounding toward negative infinity.
pub(crate) fn floor_div(a: i64, b: i64) -> i64 {
    let q = a / b;
    let r = a % b;
    if r != 0 && (r > 0) != (b > 0) {
        q - 1
    } else {
        q
    }
}
