use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    fetch::Resource,
    period::{Period, PeriodFiltered, PeriodPolicy},
    record::{UNKNOWN_LABEL, fields, label_or},
};

/// A payment as returned by the `/Payments` endpoint.
///
/// The backend flattens the invoice a payment settles into the payment
/// itself, hence the `invoice_*` fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, alias = "Method", deserialize_with = "fields::text")]
    pub method: Option<String>,
    #[serde(default, alias = "Amount", deserialize_with = "fields::amount")]
    pub amount: Option<f64>,
    #[serde(default, alias = "Date", deserialize_with = "fields::date")]
    pub date: Option<Date>,
    #[serde(default, alias = "InvoiceStatus", deserialize_with = "fields::text")]
    pub invoice_status: Option<String>,
    #[serde(default, alias = "InvoiceDate", deserialize_with = "fields::date")]
    pub invoice_date: Option<Date>,
    #[serde(default, alias = "InvoiceAmount", deserialize_with = "fields::amount")]
    pub invoice_amount: Option<f64>,
}

impl Payment {
    /// The payment method, or "Unknown" when it is missing or blank.
    pub fn method_label(&self) -> &str {
        label_or(self.method.as_deref(), UNKNOWN_LABEL)
    }

    /// The linked invoice's status, or "Unknown" when it is missing or blank.
    pub fn invoice_status_label(&self) -> &str {
        label_or(self.invoice_status.as_deref(), UNKNOWN_LABEL)
    }
}

impl Resource for Payment {
    const ENDPOINT: &'static str = "/Payments";
}

impl PeriodFiltered for Payment {
    const POLICY: PeriodPolicy = PeriodPolicy::ExactMonth;

    fn in_period(&self, period: Period) -> bool {
        period.contains(self.date)
    }
}
