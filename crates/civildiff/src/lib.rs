//! # civildiff
//!
//! Canonical (years, months, days) difference between two civil dates, with
//! O(1) DoS-safe algorithms and explicit control over month-rollover
//! semantics.
//!
//! The difference between `start` and `end` is computed with the
//! "max whole months, then days" rule:
//!
//! 1. Choose the maximum whole-month count `M` such that
//!    `add_months(start, M) <= end`, where `add_months` encodes the caller's
//!    month-rollover policy.
//! 2. The leftover days is the civil-day count from that anchor date to
//!    `end`.
//!
//! There is no ad-hoc end-of-month special-casing: leap-day and end-of-month
//! behavior is entirely defined by the month-advance policy. The default
//! policy ([`rollover_add_months`]) spills overflowing days into the
//! following month (Feb 29 + 12 months = Mar 1); a clamping policy
//! ([`clamp_add_months`]) is provided for callers who want Jan 31 + 1 month
//! to land on the last day of February instead.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use civildiff::diff_dates;
//!
//! let start = NaiveDate::from_ymd_opt(2017, 7, 14).unwrap();
//! let end = NaiveDate::from_ymd_opt(2024, 1, 24).unwrap();
//!
//! let diff = diff_dates(start, end).unwrap();
//! assert_eq!((diff.years, diff.months, diff.days), (6, 6, 10));
//!
//! // Applying the diff back to `start` reconstructs `end`.
//! assert_eq!(diff.apply(start, None), end);
//! ```
//!
//! ## Modules
//!
//! - [`diff`] — the difference engine, [`YMDiff`], and [`DiffOptions`]
//! - [`policy`] — month-advance policies and calendar helpers
//! - [`serial`] — civil serial-day conversion (proleptic Gregorian)
//! - [`error`] — error types

pub mod diff;
pub mod error;
pub mod policy;
pub mod serial;

pub use diff::{
    diff_dates, diff_dates_with_options, diff_datetimes, DiffOptions, YMDiff, MAX_YEAR, MIN_YEAR,
};
pub use error::DiffError;
pub use policy::{
    clamp_add_months, days_in_month, is_leap_year, rollover_add_months, MonthAdvanceFn,
};
pub use serial::civil_days;
