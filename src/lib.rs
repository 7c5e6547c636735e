//! Business overview is the data layer behind the overview screens of a small
//! business-management app.
//!
//! It fetches flat records (projects, sales, payments, invoices, tasks and
//! employees) from a REST backend, narrows them to a month of interest and
//! reduces them into summary statistics and chart-ready series.
//!
//! Every aggregator is a pure function over a slice of records. An empty slice
//! is a valid input and produces a summary whose single-value fields
//! (highest, lowest, average) are `None` so callers can tell "no data for this
//! period" apart from zeroed totals.

pub mod aggregation;
pub mod charts;
pub mod currency;
pub mod fetch;
pub mod logging;
pub mod notification;
pub mod period;
pub mod record;
pub mod series;
pub mod status;
pub mod tasks;
pub mod timezone;

pub use fetch::{ApiClient, ClientConfig, FetchError, FetchOutcome, Resource};
pub use notification::{Notification, NotificationKind, NotificationStore};
pub use period::{Period, PeriodFiltered, filter_by_period};
pub use record::{Employee, Invoice, Payment, Project, Sale, Task};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A month number outside of 1 to 12 was used to build a period.
    #[error("{0} is not a valid month number, expected a number from 1 to 12")]
    InvalidMonth(u8),

    /// The configured API base URL is empty or does not use HTTP(S).
    #[error("invalid API base URL \"{0}\"")]
    InvalidBaseUrl(String),

    /// The underlying HTTP client could not be built.
    ///
    /// Callers should pass in the original error as a string.
    #[error("could not build the HTTP client: {0}")]
    HttpClient(String),

    /// An error occurred while getting the local date from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezone(String),

    /// An error occurred while serializing a struct as JSON
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}
