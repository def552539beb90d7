//! `civildiff` CLI — compute and apply (years, months, days) civil-date
//! differences from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Difference between two dates (max whole months, then days)
//! civildiff diff 2017-07-14 2024-01-24
//!
//! # Same, as JSON
//! civildiff diff 2017-07-14 2024-01-24 --json
//!
//! # With the clamping month policy (Jan 31 + 1 month = Feb 28/29)
//! civildiff diff 2024-01-31 2024-02-29 --policy clamp
//!
//! # Tighten the span guard
//! civildiff diff 1900-01-01 2024-01-01 --max-span-years 100
//!
//! # Reconstruct an end date from a start date and a diff
//! civildiff apply 2017-07-14 6 6 10
//! ```

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use civildiff::{
    clamp_add_months, diff_dates_with_options, rollover_add_months, DiffOptions, MonthAdvanceFn,
    YMDiff, MAX_YEAR, MIN_YEAR,
};
use clap::{Parser, Subcommand, ValueEnum};

/// Largest day offset `apply` accepts: the full civil-day span of the
/// supported year range [0001-01-01, 9999-12-31].
const MAX_APPLY_DAYS: i64 = 3_652_058;

#[derive(Parser)]
#[command(
    name = "civildiff",
    version,
    about = "Canonical (years, months, days) difference between civil dates"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Month-rollover policy selection.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Policy {
    /// Day overflow spills into the following month (Jan 31 + 1mo = Mar 2/3)
    Rollover,
    /// Day overflow clamps to the last day of the month (Jan 31 + 1mo = Feb 28/29)
    Clamp,
}

impl Policy {
    fn as_fn(self) -> MonthAdvanceFn {
        match self {
            Policy::Rollover => rollover_add_months,
            Policy::Clamp => clamp_add_months,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the (years, months, days) difference between two dates
    Diff {
        /// Start date, YYYY-MM-DD
        start: String,
        /// End date, YYYY-MM-DD (must not precede start)
        end: String,
        /// Month-rollover policy
        #[arg(long, value_enum, default_value_t = Policy::Rollover)]
        policy: Policy,
        /// Cap the span in whole months (takes precedence over --max-span-years)
        #[arg(long)]
        max_span_months: Option<i64>,
        /// Cap the span in years (default: 2000)
        #[arg(long)]
        max_span_years: Option<i64>,
        /// Cap the total span in days
        #[arg(long)]
        max_span_days: Option<i64>,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Apply a (years, months, days) diff to a start date
    Apply {
        /// Start date, YYYY-MM-DD
        start: String,
        /// Whole years to add
        years: i64,
        /// Whole months to add (0..=11 for engine-produced diffs)
        months: i64,
        /// Days to add after the month step
        days: i64,
        /// Month-rollover policy
        #[arg(long, value_enum, default_value_t = Policy::Rollover)]
        policy: Policy,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Diff {
            start,
            end,
            policy,
            max_span_months,
            max_span_years,
            max_span_days,
            json,
        } => {
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;

            let options = DiffOptions {
                add_months: Some(policy.as_fn()),
                max_span_months,
                // Keep the library's 2000-year default unless overridden.
                max_span_years: max_span_years.or(DiffOptions::default().max_span_years),
                max_span_days,
            };

            let diff = diff_dates_with_options(start, end, options)
                .with_context(|| format!("cannot diff {} and {}", start, end))?;

            if json {
                println!("{}", serde_json::to_string(&diff)?);
            } else {
                println!(
                    "{} years, {} months, {} days",
                    diff.years, diff.months, diff.days
                );
            }
        }
        Commands::Apply {
            start,
            years,
            months,
            days,
            policy,
        } => {
            anyhow::ensure!(days >= 0, "days must be non-negative, got {}", days);
            anyhow::ensure!(
                days <= MAX_APPLY_DAYS,
                "day offset {} exceeds the supported civil range",
                days
            );
            let start = parse_date(&start)?;

            // Bound the month step so the policy cannot be driven outside
            // the supported civil range; the engine guards its own inputs
            // the same way, but `apply` takes the diff straight from argv.
            let whole_months = years
                .checked_mul(12)
                .and_then(|m| m.checked_add(months))
                .context("years/months overflow the month counter")?;
            let target = i64::from(start.year()) * 12 + i64::from(start.month()) - 1
                + whole_months;
            let target_year = target.div_euclid(12);
            anyhow::ensure!(
                (i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&target_year),
                "target year {} is outside the supported range [{}, {}]",
                target_year,
                MIN_YEAR,
                MAX_YEAR
            );

            let diff = YMDiff {
                years,
                months,
                days,
            };
            let end = diff.apply(start, Some(policy.as_fn()));
            println!("{}", end.format("%Y-%m-%d"));
        }
    }

    Ok(())
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date '{}': expected YYYY-MM-DD", s))
}
