use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    fetch::Resource,
    record::{UNKNOWN_LABEL, UNNAMED_LABEL, fields, label_or},
};

/// A task as returned by the `/tasks` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default, alias = "Name", deserialize_with = "fields::text")]
    pub name: Option<String>,
    #[serde(default, alias = "EstimatedHours", deserialize_with = "fields::amount")]
    pub estimated_hours: Option<f64>,
    #[serde(default, alias = "Status", deserialize_with = "fields::text")]
    pub status: Option<String>,
    /// The [Employee](crate::Employee) id the task is assigned to.
    #[serde(default, alias = "AssignedEmployeeId", deserialize_with = "fields::id")]
    pub assigned_employee_id: Option<String>,
    #[serde(default, alias = "EndDate", deserialize_with = "fields::date")]
    pub end_date: Option<Date>,
}

impl Task {
    pub fn display_name(&self) -> &str {
        label_or(self.name.as_deref(), UNNAMED_LABEL)
    }

    pub fn status_label(&self) -> &str {
        label_or(self.status.as_deref(), UNKNOWN_LABEL)
    }

    /// Whether the task is assigned to the employee with `employee_id`.
    ///
    /// Tasks and employees without an id never match.
    pub fn is_assigned_to(&self, employee_id: Option<&str>) -> bool {
        match (self.assigned_employee_id.as_deref(), employee_id) {
            (Some(assigned), Some(employee)) => assigned == employee,
            _ => false,
        }
    }
}

impl Resource for Task {
    const ENDPOINT: &'static str = "/tasks";
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::date;

    use super::Task;

    #[test]
    fn decodes_camel_case_task() {
        let task: Task = serde_json::from_value(json!({
            "name": "Pour foundation",
            "estimatedHours": "12.5",
            "status": "In progress",
            "assignedEmployeeId": 7,
            "endDate": "2024-06-08T17:00:00",
        }))
        .unwrap();

        assert_eq!(task.display_name(), "Pour foundation");
        assert_eq!(task.estimated_hours, Some(12.5));
        assert_eq!(task.status_label(), "In progress");
        assert_eq!(task.assigned_employee_id.as_deref(), Some("7"));
        assert_eq!(task.end_date, Some(date!(2024 - 06 - 08)));
    }

    #[test]
    fn decodes_pascal_case_task() {
        let task: Task = serde_json::from_value(json!({
            "Name": "Inspect roof",
            "EstimatedHours": 3,
            "Status": "Done",
            "AssignedEmployeeId": "e-2",
            "EndDate": "2024-07-01",
        }))
        .unwrap();

        assert_eq!(task.display_name(), "Inspect roof");
        assert_eq!(task.estimated_hours, Some(3.0));
        assert_eq!(task.status_label(), "Done");
        assert!(task.is_assigned_to(Some("e-2")));
        assert_eq!(task.end_date, Some(date!(2024 - 07 - 01)));
    }

    #[test]
    fn unassigned_tasks_match_no_employee() {
        let task: Task = serde_json::from_value(json!({ "name": null })).unwrap();

        assert_eq!(task.display_name(), "Unnamed");
        assert_eq!(task.status_label(), "Unknown");
        assert!(!task.is_assigned_to(Some("e-2")));
        assert!(!task.is_assigned_to(None));
    }
}
