//! Month-based period selection for records.
//!
//! Two policies coexist:
//! - **Exact month**: a record's date falls in the same month and year as the
//!   period (sales, payments, invoices).
//! - **Range overlap**: the period's first day falls within a record's
//!   inclusive `[start, end]` range (projects).
//!
//! Records with a missing date never match. Filtering is pure and never fails.

use serde::Serialize;
use time::{Date, Month};

use crate::Error;

/// A calendar month in a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Period {
    month: Month,
    year: i32,
}

impl Period {
    /// Create a period from a 1-based month number and a year.
    ///
    /// # Errors
    ///
    /// Returns [Error::InvalidMonth] if `month` is not in `1..=12`.
    pub fn new(month: u8, year: i32) -> Result<Self, Error> {
        let month = Month::try_from(month).map_err(|_| Error::InvalidMonth(month))?;

        Ok(Self { month, year })
    }

    /// The period containing `date`.
    pub fn containing(date: Date) -> Self {
        Self {
            month: date.month(),
            year: date.year(),
        }
    }

    pub fn month(self) -> Month {
        self.month
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// The first day of the period.
    pub fn first_day(self) -> Date {
        // Day 1 exists in every month, the fallback is unreachable.
        Date::from_calendar_date(self.year, self.month, 1).unwrap_or(Date::MIN)
    }

    /// The last day of the period.
    pub fn last_day(self) -> Date {
        let day = time::util::days_in_month(self.month, self.year);
        Date::from_calendar_date(self.year, self.month, day).unwrap_or(Date::MAX)
    }

    /// Whether `date` falls in this month and year. A missing date never matches.
    pub fn contains(self, date: Option<Date>) -> bool {
        date.is_some_and(|date| date.month() == self.month && date.year() == self.year)
    }

    /// Whether the period's first day falls within the inclusive range `[start, end]`.
    ///
    /// A missing start or end never matches.
    pub fn overlaps(self, start: Option<Date>, end: Option<Date>) -> bool {
        match (start, end) {
            (Some(start), Some(end)) => (start..=end).contains(&self.first_day()),
            _ => false,
        }
    }

    /// A short label such as "Mar 2024".
    pub fn label(self) -> String {
        format!("{} {}", month_abbrev(self.month), self.year)
    }
}

/// How a record type decides whether it belongs to a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodPolicy {
    /// The record's date is in the same month and year.
    ExactMonth,
    /// The period's first day is within the record's start and end dates.
    RangeOverlap,
}

/// A record that can be narrowed to a [Period].
pub trait PeriodFiltered {
    /// The policy the record uses, for logging and documentation.
    const POLICY: PeriodPolicy;

    /// Whether the record belongs to `period`.
    fn in_period(&self, period: Period) -> bool;
}

/// Keeps the records that belong to `period` according to their own policy.
pub fn filter_by_period<R: PeriodFiltered>(records: Vec<R>, period: Period) -> Vec<R> {
    let total = records.len();
    let filtered: Vec<R> = records
        .into_iter()
        .filter(|record| record.in_period(period))
        .collect();

    tracing::debug!(
        "Kept {} of {total} records for {} ({:?})",
        filtered.len(),
        period.label(),
        R::POLICY
    );

    filtered
}

/// Keeps the records whose date, as returned by `date_of`, is in the same
/// month and year as `period`.
pub fn filter_by_exact_month<R>(
    records: Vec<R>,
    period: Period,
    date_of: impl Fn(&R) -> Option<Date>,
) -> Vec<R> {
    records
        .into_iter()
        .filter(|record| period.contains(date_of(record)))
        .collect()
}

/// Keeps the records whose inclusive `[start, end]` range contains the first
/// day of `period`.
pub fn filter_by_range_overlap<R>(
    records: Vec<R>,
    period: Period,
    start_of: impl Fn(&R) -> Option<Date>,
    end_of: impl Fn(&R) -> Option<Date>,
) -> Vec<R> {
    records
        .into_iter()
        .filter(|record| period.overlaps(start_of(record), end_of(record)))
        .collect()
}

fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
