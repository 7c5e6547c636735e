use serde::{Deserialize, Serialize};

use crate::{
    fetch::Resource,
    record::{UNKNOWN_LABEL, fields},
};

/// An employee as returned by the `/employees` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, alias = "Id", deserialize_with = "fields::id")]
    pub id: Option<String>,
    #[serde(default, alias = "FirstName", deserialize_with = "fields::text")]
    pub first_name: Option<String>,
    #[serde(default, alias = "LastName", deserialize_with = "fields::text")]
    pub last_name: Option<String>,
}

impl Employee {
    /// The employee's first and last name joined by a space.
    ///
    /// Falls back to "Unknown" when both parts are missing or blank.
    pub fn full_name(&self) -> String {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if name.is_empty() {
            UNKNOWN_LABEL.to_owned()
        } else {
            name
        }
    }
}

impl Resource for Employee {
    const ENDPOINT: &'static str = "/employees";
}
