//! Month-advance policies: the pluggable month-rollover rule.
//!
//! A policy answers "what is `date` plus `n` months?" — and in particular
//! what happens when the source day-of-month does not exist in the target
//! month (Jan 31 + 1 month). Two built-in policies are provided:
//!
//! - [`rollover_add_months`] — overflowing days spill into the following
//!   month (Jan 31 + 1 month = Mar 2 or Mar 3). This is the engine default.
//! - [`clamp_add_months`] — the day is clamped to the last day of the target
//!   month (Jan 31 + 1 month = Feb 28 or Feb 29).
//!
//! Callers can substitute their own policy to bit-match another runtime's
//! calendar arithmetic, provided it upholds the [`MonthAdvanceFn`]
//! preconditions.

use crate::serial::floor_div;
use chrono::{Datelike, Days, NaiveDate};

/// Injection point for month-rollover semantics.
///
/// A policy must be **pure** (no I/O, no interior state) and **monotone in
/// `months`**: for a fixed start date, a larger month count must never
/// produce an earlier date. The difference engine's single-step anchor
/// correction is only exact under this precondition, and the purity contract
/// is what keeps every entry point safe to call concurrently. Neither
/// property can be enforced by the type system; a non-conforming policy is
/// out of contract.
///
/// Both built-in policies conform.
pub type MonthAdvanceFn = fn(NaiveDate, i64) -> NaiveDate;

/// Add `months` to `date`, spilling day-of-month overflow into the following
/// month.
///
/// Examples: Jan 31, 2023 + 1 month = Mar 3, 2023 (Feb 31 normalized);
/// Feb 29, 2024 + 12 months = Mar 1, 2025. This matches the arithmetic of
/// runtimes that normalize out-of-range calendar fields rather than clamp
/// them, and it is the engine's default policy.
///
/// # Panics
///
/// Panics if the target month falls outside chrono's representable year
/// range. The difference engine never triggers this: its span guards bound
/// `months` long before that point.
pub fn rollover_add_months(date: NaiveDate, months: i64) -> NaiveDate {
    let (year, month) = shift_months(date, months);
    let day = date.day();
    let last = days_in_month(year, month);
    if day <= last {
        ymd(year, month, day)
    } else {
        // Day overflow: count the excess forward from the first of the
        // target month. Spill is at most three days, so this lands in the
        // immediately following month.
        ymd(year, month, 1) + Days::new(u64::from(day) - 1)
    }
}

/// Add `months` to `date`, clamping the day-of-month to the last valid day
/// of the target month.
///
/// Examples: Jan 31, 2023 + 1 month = Feb 28, 2023; Oct 31 + 1 month =
/// Nov 30. Inject via [`crate::DiffOptions`] to get the common
/// "end-of-month stays end-of-month-ish" convention instead of the rollover
/// default.
///
/// # Panics
///
/// Panics if the target month falls outside chrono's representable year
/// range, as for [`rollover_add_months`].
pub fn clamp_add_months(date: NaiveDate, months: i64) -> NaiveDate {
    let (year, month) = shift_months(date, months);
    let day = date.day().min(days_in_month(year, month));
    ymd(year, month, day)
}

/// Decompose `date`'s month plus `months` into a target (year, month).
/// Floor semantics so negative offsets cross year boundaries correctly.
fn shift_months(date: NaiveDate, months: i64) -> (i32, u32) {
    let total = i64::from(date.year()) * 12 + i64::from(date.month()) - 1 + months;
    let year = floor_div(total, 12);
    let month = (total - year * 12 + 1) as u32;
    let year = i32::try_from(year).expect("target year within representable range");
    (year, month)
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("target date within representable range")
}

/// True if `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month of the given year.
///
/// # Panics
///
/// Panics if `month` is not in `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        other => panic!("invalid month: {}", other),
    }
}
