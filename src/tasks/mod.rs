//! Task prioritization: per-employee workload, deadline buckets and an overview
//! that combines both for the task charts.

mod analytics;
mod deadline;
mod employee_load;

pub use analytics::{BusiestEmployee, TaskOverview, analyze_tasks};
pub use deadline::{DeadlineBucket, DeadlineBuckets, bucket_by_deadline, days_remaining};
pub use employee_load::{EmployeeLoad, aggregate_employee_load};
