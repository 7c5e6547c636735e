//! Sales overview: net/VAT/gross totals, status counters, gross per client and over time.

use serde::Serialize;

use crate::{
    record::Sale,
    series::{
        CategoricalSeries, DetailMap, TimeSeries, average_by, highest_by, lowest_by, sum_by,
        sum_by_day, sum_with_details,
    },
    status::SaleStatus,
};

const UNDATED_LABEL: &str = "Undated";

/// A single sale picked out by gross amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaleHighlight {
    pub client_name: Option<String>,
    pub gross_amount: f64,
}

impl SaleHighlight {
    fn from_sale(sale: &Sale) -> Self {
        Self {
            client_name: sale.client_name.clone(),
            gross_amount: sale.gross_amount.unwrap_or(0.0),
        }
    }
}

/// Summary statistics and chart series for a list of sales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesSummary {
    pub sale_count: usize,
    pub total_net: f64,
    pub total_vat: f64,
    pub total_gross: f64,
    pub active_count: usize,
    pub completed_count: usize,
    pub highest_sale: Option<SaleHighlight>,
    pub lowest_sale: Option<SaleHighlight>,
    /// Mean gross amount, `None` when there are no sales.
    pub average_gross: Option<f64>,
    /// Total gross amount per client.
    pub gross_by_client: CategoricalSeries,
    /// Tooltip lines for [Self::gross_by_client], one per sale.
    pub client_details: DetailMap,
    /// Gross amount per day. Sales without a valid date are left out.
    pub gross_over_time: TimeSeries,
}

impl SalesSummary {
    /// Whether the summary was built from at least one sale.
    pub fn has_data(&self) -> bool {
        self.sale_count > 0
    }
}

/// Aggregates `sales` into a [SalesSummary].
///
/// Sales whose status is neither active nor completed still count toward the
/// totals, they are just left out of both status counters.
pub fn aggregate_sales(sales: &[Sale]) -> SalesSummary {
    let mut active_count = 0;
    let mut completed_count = 0;

    for sale in sales {
        match sale.sale_status() {
            SaleStatus::Active => active_count += 1,
            SaleStatus::Completed => completed_count += 1,
            SaleStatus::Other(_) => {}
        }
    }

    let (gross_by_client, client_details) = sum_with_details(
        sales,
        Sale::client_label,
        |sale| sale.gross_amount,
        sale_line_label,
    );

    SalesSummary {
        sale_count: sales.len(),
        total_net: sum_by(sales, |sale| sale.net_amount),
        total_vat: sum_by(sales, |sale| sale.vat_amount),
        total_gross: sum_by(sales, |sale| sale.gross_amount),
        active_count,
        completed_count,
        highest_sale: highest_by(sales, |sale| sale.gross_amount).map(SaleHighlight::from_sale),
        lowest_sale: lowest_by(sales, |sale| sale.gross_amount).map(SaleHighlight::from_sale),
        average_gross: average_by(sales, |sale| sale.gross_amount),
        gross_by_client,
        client_details,
        gross_over_time: sum_by_day(sales, |sale| sale.date, |sale| sale.gross_amount),
    }
}

/// Identifies a sale within its client's tooltip by date, e.g. "2024-03-15".
fn sale_line_label(sale: &Sale) -> String {
    match sale.date {
        Some(date) => date.to_string(),
        None => UNDATED_LABEL.to_owned(),
    }
}
