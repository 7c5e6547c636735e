//! Task overview combining workload, status and deadline breakdowns.

use serde::Serialize;
use time::Date;

use crate::{
    record::{Employee, Task},
    series::{CategoricalSeries, average_by, count_by_category, sum_by},
    tasks::{
        deadline::{DeadlineBucket, bucket_by_deadline, days_remaining},
        employee_load::{EmployeeLoad, aggregate_employee_load},
    },
};

/// The employee carrying the most estimated hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusiestEmployee {
    pub employee_name: String,
    pub total_hours: f64,
    pub task_count: usize,
}

/// Everything the task prioritization screen shows, in one summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskOverview {
    pub task_count: usize,
    pub total_estimated_hours: f64,
    /// Mean estimate per task, `None` when there are no tasks.
    pub average_hours: Option<f64>,
    /// Number of tasks per literal status, "Unknown" for a missing status.
    pub status_counts: CategoricalSeries,
    /// Estimated hours per employee, in employee order.
    pub workload_series: CategoricalSeries,
    /// Number of tasks in the short, medium and long term buckets.
    pub deadline_counts: CategoricalSeries,
    /// Tasks past their end date. These are not part of [Self::deadline_counts].
    pub overdue_count: usize,
    /// `None` when there are no employees.
    pub busiest_employee: Option<BusiestEmployee>,
}

impl TaskOverview {
    /// Whether the overview was built from at least one task.
    pub fn has_data(&self) -> bool {
        self.task_count > 0
    }
}

/// Builds the task overview for `tasks` and `employees` relative to `today`.
pub fn analyze_tasks(tasks: &[Task], employees: &[Employee], today: Date) -> TaskOverview {
    let loads = aggregate_employee_load(tasks, employees);
    let buckets = bucket_by_deadline(tasks, today);

    let mut deadline_counts = CategoricalSeries::default();
    for bucket in [
        DeadlineBucket::ShortTerm,
        DeadlineBucket::MediumTerm,
        DeadlineBucket::LongTerm,
    ] {
        deadline_counts.add(bucket.label(), buckets.bucket(bucket).len() as f64);
    }

    let overdue_count = tasks
        .iter()
        .filter(|task| days_remaining(task, today).is_some_and(|days| days < 0))
        .count();

    let mut workload_series = CategoricalSeries::default();
    for load in &loads {
        workload_series.add(&load.employee_name, load.total_hours);
    }

    tracing::debug!(
        "Analyzed {} tasks for {} employees, {overdue_count} overdue",
        tasks.len(),
        employees.len()
    );

    TaskOverview {
        task_count: tasks.len(),
        total_estimated_hours: sum_by(tasks, |task| task.estimated_hours),
        average_hours: average_by(tasks, |task| task.estimated_hours),
        status_counts: count_by_category(tasks, Task::status_label),
        workload_series,
        deadline_counts,
        overdue_count,
        busiest_employee: busiest_employee(&loads),
    }
}

fn busiest_employee(loads: &[EmployeeLoad]) -> Option<BusiestEmployee> {
    let mut loads = loads.iter();
    let mut busiest = loads.next()?;

    for load in loads {
        if load.total_hours > busiest.total_hours {
            busiest = load;
        }
    }

    Some(BusiestEmployee {
        employee_name: busiest.employee_name.clone(),
        total_hours: busiest.total_hours,
        task_count: busiest.assigned_tasks.len(),
    })
}
