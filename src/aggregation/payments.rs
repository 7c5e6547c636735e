//! Payments overview: totals and breakdowns by payment method and invoice status.

use serde::Serialize;

use crate::{
    record::Payment,
    series::{
        CategoricalSeries, DetailMap, average_by, count_by_category, highest_by, lowest_by,
        sum_by, sum_by_category, sum_with_details,
    },
};

/// A single payment picked out by amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentHighlight {
    pub method: Option<String>,
    pub amount: f64,
}

impl PaymentHighlight {
    fn from_payment(payment: &Payment) -> Self {
        Self {
            method: payment.method.clone(),
            amount: payment.amount.unwrap_or(0.0),
        }
    }
}

/// Summary statistics and chart series for a list of payments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentSummary {
    pub payment_count: usize,
    pub total_amount: f64,
    pub highest_payment: Option<PaymentHighlight>,
    pub lowest_payment: Option<PaymentHighlight>,
    pub average_amount: Option<f64>,
    /// Total paid per method, "Unknown" standing in for a missing method.
    pub amount_by_method: CategoricalSeries,
    /// Tooltip lines for [Self::amount_by_method], one per payment.
    pub method_details: DetailMap,
    /// Number of payments per method.
    pub payments_per_method: CategoricalSeries,
    /// Total paid per linked invoice status, grouped by the literal status.
    pub by_invoice_status: CategoricalSeries,
}

impl PaymentSummary {
    /// Whether the summary was built from at least one payment.
    pub fn has_data(&self) -> bool {
        self.payment_count > 0
    }
}

/// Aggregates `payments` into a [PaymentSummary].
pub fn aggregate_payments(payments: &[Payment]) -> PaymentSummary {
    let (amount_by_method, method_details) = sum_with_details(
        payments,
        Payment::method_label,
        |payment| payment.amount,
        payment_line_label,
    );

    PaymentSummary {
        payment_count: payments.len(),
        total_amount: sum_by(payments, |payment| payment.amount),
        highest_payment: highest_by(payments, |payment| payment.amount)
            .map(PaymentHighlight::from_payment),
        lowest_payment: lowest_by(payments, |payment| payment.amount)
            .map(PaymentHighlight::from_payment),
        average_amount: average_by(payments, |payment| payment.amount),
        amount_by_method,
        method_details,
        payments_per_method: count_by_category(payments, Payment::method_label),
        by_invoice_status: sum_by_category(
            payments,
            Payment::invoice_status_label,
            |payment| payment.amount,
        ),
    }
}

/// Describes a payment by its date and the status of the invoice it settles.
fn payment_line_label(payment: &Payment) -> String {
    let date = payment
        .date
        .map(|date| date.to_string())
        .unwrap_or_else(|| "Undated".to_owned());

    format!("{date} (invoice {})", payment.invoice_status_label())
}
