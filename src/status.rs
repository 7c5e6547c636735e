//! Closed status enumerations for the records the backend sends.
//!
//! The backend emits statuses as raw, locale-specific strings. Each entity
//! maps those strings onto its own enum through an explicit lookup table so
//! the aggregators branch on variants and never compare string literals.
//! Matching is exact: a spelling missing from a table is not recognised.

use std::fmt::Display;

use serde::Serialize;

/// The lifecycle state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectStatus {
    /// Any project that has not been marked as completed.
    Active,
    /// The project has been finished.
    Completed,
}

const PROJECT_COMPLETED_LABELS: &[&str] = &["Completed", "completed", "Finished", "finished"];

impl ProjectStatus {
    /// Map a raw backend status onto a project status.
    ///
    /// Only the completed spellings are recognised; every other value,
    /// including a missing status, counts as active.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) if PROJECT_COMPLETED_LABELS.contains(&raw) => Self::Completed,
            _ => Self::Active,
        }
    }

    /// The chart label for the status.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

/// The state of a sale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum SaleStatus {
    /// The sale is still open.
    Active,
    /// The sale has been closed.
    Completed,
    /// A status the mapping table does not recognise, kept verbatim.
    Other(String),
}

const SALE_STATUS_TABLE: &[(&str, SaleStatus)] = &[
    ("Active", SaleStatus::Active),
    ("active", SaleStatus::Active),
    ("Completed", SaleStatus::Completed),
    ("completed", SaleStatus::Completed),
];

impl SaleStatus {
    /// Map a raw backend status onto a sale status.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let raw = raw.unwrap_or_default();

        SALE_STATUS_TABLE
            .iter()
            .find(|(label, _)| *label == raw)
            .map(|(_, status)| status.clone())
            .unwrap_or_else(|| Self::Other(raw.to_owned()))
    }
}

/// The payment state of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum InvoiceStatus {
    /// Fully paid.
    Paid,
    /// Nothing has been paid yet.
    Unpaid,
    /// Some, but not all, of the invoice has been paid.
    PartiallyPaid,
    /// A status the mapping table does not recognise, kept verbatim.
    Other(String),
}

const INVOICE_STATUS_TABLE: &[(&str, InvoiceStatus)] = &[
    ("Paid", InvoiceStatus::Paid),
    ("paid", InvoiceStatus::Paid),
    ("Unpaid", InvoiceStatus::Unpaid),
    ("unpaid", InvoiceStatus::Unpaid),
    ("Partially Paid", InvoiceStatus::PartiallyPaid),
    ("Partially paid", InvoiceStatus::PartiallyPaid),
    ("partially paid", InvoiceStatus::PartiallyPaid),
];

impl InvoiceStatus {
    /// Map a raw backend status onto an invoice status.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let raw = raw.unwrap_or_default();

        INVOICE_STATUS_TABLE
            .iter()
            .find(|(label, _)| *label == raw)
            .map(|(_, status)| status.clone())
            .unwrap_or_else(|| Self::Other(raw.to_owned()))
    }
}

impl Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Paid => write!(f, "Paid"),
            Self::Unpaid => write!(f, "Unpaid"),
            Self::PartiallyPaid => write!(f, "Partially Paid"),
            Self::Other(raw) => write!(f, "{raw}"),
        }
    }
}
