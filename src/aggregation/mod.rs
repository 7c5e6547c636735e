//! Per-entity aggregators.
//!
//! Each aggregator reduces an already filtered slice of records into a plain
//! summary: sums, category counters, highest/lowest records, an average and
//! chart-ready series. Aggregators never fail. Missing amounts count as zero
//! and an empty slice yields a summary whose single-value fields are `None`.

mod invoices;
mod payments;
mod projects;
mod sales;

pub use invoices::{InvoiceHighlight, InvoiceSummary, StatusSummaryEntry, aggregate_invoices};
pub use payments::{PaymentHighlight, PaymentSummary, aggregate_payments};
pub use projects::{ProjectHighlight, ProjectSummary, aggregate_projects};
pub use sales::{SaleHighlight, SalesSummary, aggregate_sales};
