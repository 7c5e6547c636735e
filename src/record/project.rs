use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    fetch::Resource,
    period::{Period, PeriodFiltered, PeriodPolicy},
    record::{UNNAMED_LABEL, UNKNOWN_LABEL, fields, label_or},
    status::ProjectStatus,
};

/// A project as returned by the `/Projects` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, alias = "Name", deserialize_with = "fields::text")]
    pub name: Option<String>,
    /// The project category, e.g. "Build" or "Consulting".
    #[serde(
        rename = "type",
        default,
        alias = "Type",
        deserialize_with = "fields::text"
    )]
    pub project_type: Option<String>,
    #[serde(default, alias = "Status", deserialize_with = "fields::text")]
    pub status: Option<String>,
    #[serde(default, alias = "Budget", deserialize_with = "fields::amount")]
    pub budget: Option<f64>,
    #[serde(default, alias = "StartDate", deserialize_with = "fields::date")]
    pub start_date: Option<Date>,
    #[serde(default, alias = "EndDate", deserialize_with = "fields::date")]
    pub end_date: Option<Date>,
}

impl Project {
    pub fn project_status(&self) -> ProjectStatus {
        ProjectStatus::from_raw(self.status.as_deref())
    }

    pub fn display_name(&self) -> &str {
        label_or(self.name.as_deref(), UNNAMED_LABEL)
    }

    pub fn type_label(&self) -> &str {
        label_or(self.project_type.as_deref(), UNKNOWN_LABEL)
    }
}

impl Resource for Project {
    const ENDPOINT: &'static str = "/Projects";
}

impl PeriodFiltered for Project {
    const POLICY: PeriodPolicy = PeriodPolicy::RangeOverlap;

    fn in_period(&self, period: Period) -> bool {
        period.overlaps(self.start_date, self.end_date)
    }
}
