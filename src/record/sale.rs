use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    fetch::Resource,
    period::{Period, PeriodFiltered, PeriodPolicy},
    record::{UNKNOWN_LABEL, fields, label_or},
    status::SaleStatus,
};

/// A sale as returned by the `/Sales` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    #[serde(default, alias = "ClientName", deserialize_with = "fields::text")]
    pub client_name: Option<String>,
    #[serde(default, alias = "Date", deserialize_with = "fields::date")]
    pub date: Option<Date>,
    #[serde(default, alias = "NetAmount", deserialize_with = "fields::amount")]
    pub net_amount: Option<f64>,
    #[serde(default, alias = "VatAmount", deserialize_with = "fields::amount")]
    pub vat_amount: Option<f64>,
    #[serde(default, alias = "GrossAmount", deserialize_with = "fields::amount")]
    pub gross_amount: Option<f64>,
    #[serde(default, alias = "Status", deserialize_with = "fields::text")]
    pub status: Option<String>,
}

impl Sale {
    pub fn sale_status(&self) -> SaleStatus {
        SaleStatus::from_raw(self.status.as_deref())
    }

    pub fn client_label(&self) -> &str {
        label_or(self.client_name.as_deref(), UNKNOWN_LABEL)
    }
}

impl Resource for Sale {
    const ENDPOINT: &'static str = "/Sales";
}

impl PeriodFiltered for Sale {
    const POLICY: PeriodPolicy = PeriodPolicy::ExactMonth;

    fn in_period(&self, period: Period) -> bool {
        period.contains(self.date)
    }
}
