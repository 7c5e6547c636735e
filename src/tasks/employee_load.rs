use serde::Serialize;

use crate::record::{Employee, Task};

/// The tasks assigned to one employee and their summed estimate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeLoad {
    pub employee_name: String,
    /// Sum of the assigned tasks' estimated hours, missing estimates read as zero.
    pub total_hours: f64,
    pub assigned_tasks: Vec<Task>,
}

/// Computes the workload of every employee.
///
/// The output has one entry per employee in `employees`, in the same order,
/// including employees without any assigned task.
pub fn aggregate_employee_load(tasks: &[Task], employees: &[Employee]) -> Vec<EmployeeLoad> {
    employees
        .iter()
        .map(|employee| {
            let assigned_tasks: Vec<Task> = tasks
                .iter()
                .filter(|task| task.is_assigned_to(employee.id.as_deref()))
                .cloned()
                .collect();
            let total_hours = assigned_tasks
                .iter()
                .map(|task| task.estimated_hours.unwrap_or(0.0))
                .sum();

            EmployeeLoad {
                employee_name: employee.full_name(),
                total_hours,
                assigned_tasks,
            }
        })
        .collect()
}
