use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    fetch::Resource,
    record::{UNKNOWN_LABEL, fields, literal_or},
    status::InvoiceStatus,
};

/// An invoice as returned by the `/Invoices` endpoint.
///
/// Invoices are not narrowed to a period. The invoice overview covers every
/// invoice the backend returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default, alias = "Date", deserialize_with = "fields::date")]
    pub date: Option<Date>,
    #[serde(default, alias = "Status", deserialize_with = "fields::text")]
    pub status: Option<String>,
    #[serde(default, alias = "Amount", deserialize_with = "fields::amount")]
    pub amount: Option<f64>,
}

impl Invoice {
    pub fn invoice_status(&self) -> InvoiceStatus {
        InvoiceStatus::from_raw(self.status.as_deref())
    }

    /// The literal, untrimmed status string, or "Unknown" when it is missing
    /// or blank. Padded statuses stay distinct from their trimmed spelling,
    /// the same way [Self::invoice_status] tells them apart.
    pub fn status_label(&self) -> &str {
        literal_or(self.status.as_deref(), UNKNOWN_LABEL)
    }
}

impl Resource for Invoice {
    const ENDPOINT: &'static str = "/Invoices";
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::Invoice;
    use crate::{fetch::decode_records, status::InvoiceStatus};

    #[test]
    fn decodes_camel_and_pascal_case_invoices() {
        let body = br#"[
            { "date": "2024-04-02", "status": "Partially paid", "amount": 25.5 },
            { "Date": "2024-04-03T09:15:00", "Status": "Paid", "Amount": "40" }
        ]"#;

        let invoices: Vec<Invoice> = decode_records(body).unwrap();

        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[0].date, Some(date!(2024 - 04 - 02)));
        assert_eq!(invoices[0].invoice_status(), InvoiceStatus::PartiallyPaid);
        assert_eq!(invoices[0].amount, Some(25.5));
        assert_eq!(invoices[1].date, Some(date!(2024 - 04 - 03)));
        assert_eq!(invoices[1].invoice_status(), InvoiceStatus::Paid);
        assert_eq!(invoices[1].amount, Some(40.0));
    }

    #[test]
    fn status_label_keeps_the_literal_status() {
        let padded = Invoice {
            status: Some(" Paid".to_owned()),
            ..Default::default()
        };
        let blank = Invoice {
            status: Some("  ".to_owned()),
            ..Default::default()
        };

        assert_eq!(padded.status_label(), " Paid");
        assert_eq!(blank.status_label(), "Unknown");
        assert_eq!(Invoice::default().status_label(), "Unknown");
    }
}
