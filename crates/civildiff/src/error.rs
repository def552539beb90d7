//! Error types for civil-date difference operations.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors reported by the difference engine.
///
/// Every variant is detected during pre-flight validation, before any
/// calendar arithmetic runs. All are deterministic and non-transient: there
/// is nothing to retry without changing the inputs or the configured guards.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffError {
    /// `start` is after `end`. A caller logic error; swap the arguments.
    #[error("start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A date falls outside the supported civil range
    /// [0001-01-01, 9999-12-31].
    #[error("year {year} is outside the supported range [1, 9999]")]
    OutOfRange { year: i32 },

    /// The span between the two dates exceeds a configured guard. `unit`
    /// names the guard that fired: "months", "years", or "days".
    #[error("span of {span} {unit} exceeds the configured maximum of {limit}")]
    SpanTooLarge {
        span: i64,
        limit: i64,
        unit: &'static str,
    },
}

/// Convenience alias used throughout civildiff.
pub type Result<T> = std::result::Result<T, DiffError>;
