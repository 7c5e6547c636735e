//! Invoice overview: paid/unpaid/partially paid counters and a per-status breakdown.

use serde::Serialize;

use crate::{
    record::Invoice,
    series::{
        CategoricalSeries, DetailMap, average_by, highest_by, lowest_by, sum_by, sum_with_details,
    },
    status::InvoiceStatus,
};

/// A single invoice picked out by amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceHighlight {
    pub status: Option<String>,
    pub amount: f64,
}

impl InvoiceHighlight {
    fn from_invoice(invoice: &Invoice) -> Self {
        Self {
            status: invoice.status.clone(),
            amount: invoice.amount.unwrap_or(0.0),
        }
    }
}

/// The invoices sharing one literal status string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSummaryEntry {
    pub status: String,
    pub count: usize,
    pub amount: f64,
}

/// Summary statistics and chart series for a list of invoices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceSummary {
    pub invoice_count: usize,
    pub total_amount: f64,
    pub paid_count: usize,
    pub unpaid_count: usize,
    pub partially_paid_count: usize,
    /// Count and amount per literal status, in order of first appearance.
    ///
    /// Statuses outside of the three recognised ones get their own entries
    /// here even though they are left out of the counters.
    pub status_summary: Vec<StatusSummaryEntry>,
    /// Total amount per literal status.
    pub amount_by_status: CategoricalSeries,
    /// Tooltip lines for [Self::amount_by_status], one per invoice.
    pub status_details: DetailMap,
    pub highest_invoice: Option<InvoiceHighlight>,
    pub lowest_invoice: Option<InvoiceHighlight>,
    pub average_amount: Option<f64>,
}

impl InvoiceSummary {
    /// Whether the summary was built from at least one invoice.
    pub fn has_data(&self) -> bool {
        self.invoice_count > 0
    }
}

/// Aggregates `invoices` into an [InvoiceSummary].
pub fn aggregate_invoices(invoices: &[Invoice]) -> InvoiceSummary {
    let mut paid_count = 0;
    let mut unpaid_count = 0;
    let mut partially_paid_count = 0;
    let mut status_summary: Vec<StatusSummaryEntry> = Vec::new();

    for invoice in invoices {
        match invoice.invoice_status() {
            InvoiceStatus::Paid => paid_count += 1,
            InvoiceStatus::Unpaid => unpaid_count += 1,
            InvoiceStatus::PartiallyPaid => partially_paid_count += 1,
            InvoiceStatus::Other(_) => {}
        }

        let status = invoice.status_label();
        let amount = invoice.amount.unwrap_or(0.0);
        match status_summary.iter_mut().find(|entry| entry.status == status) {
            Some(entry) => {
                entry.count += 1;
                entry.amount += amount;
            }
            None => status_summary.push(StatusSummaryEntry {
                status: status.to_owned(),
                count: 1,
                amount,
            }),
        }
    }

    let (amount_by_status, status_details) = sum_with_details(
        invoices,
        Invoice::status_label,
        |invoice| invoice.amount,
        invoice_line_label,
    );

    InvoiceSummary {
        invoice_count: invoices.len(),
        total_amount: sum_by(invoices, |invoice| invoice.amount),
        paid_count,
        unpaid_count,
        partially_paid_count,
        status_summary,
        amount_by_status,
        status_details,
        highest_invoice: highest_by(invoices, |invoice| invoice.amount)
            .map(InvoiceHighlight::from_invoice),
        lowest_invoice: lowest_by(invoices, |invoice| invoice.amount)
            .map(InvoiceHighlight::from_invoice),
        average_amount: average_by(invoices, |invoice| invoice.amount),
    }
}

fn invoice_line_label(invoice: &Invoice) -> String {
    match invoice.date {
        Some(date) => format!("Invoice {date}"),
        None => "Undated invoice".to_owned(),
    }
}
