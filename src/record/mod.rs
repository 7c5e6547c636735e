//! The flat records returned by the backend's collection endpoints.
//!
//! Records are owned by the backend and never modified here. Each one is
//! decoded leniently (see [fields]) so a record with a missing or malformed
//! field still takes part in every aggregate that does not need that field.

mod employee;
pub(crate) mod fields;
mod invoice;
mod payment;
mod project;
mod sale;
mod task;

pub use employee::Employee;
pub use fields::parse_date;
pub use invoice::Invoice;
pub use payment::Payment;
pub use project::Project;
pub use sale::Sale;
pub use task::Task;

/// The label used in place of a missing record name.
pub const UNNAMED_LABEL: &str = "Unnamed";

/// The label used in place of a missing or empty category.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Returns the trimmed text, or `fallback` when it is missing or blank.
pub(crate) fn label_or<'a>(text: Option<&'a str>, fallback: &'a str) -> &'a str {
    match text.map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => fallback,
    }
}

/// Returns the text exactly as sent, or `fallback` when it is missing or blank.
pub(crate) fn literal_or<'a>(text: Option<&'a str>, fallback: &'a str) -> &'a str {
    match text {
        Some(text) if !text.trim().is_empty() => text,
        _ => fallback,
    }
}
