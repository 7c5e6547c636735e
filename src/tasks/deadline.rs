//! Deadline buckets for task prioritization.
//!
//! Days remaining are counted in whole calendar days from `today` to the
//! task's end date:
//! - short term: 0 to 7 days
//! - medium term: 8 to 30 days
//! - long term: more than 30 days
//!
//! Overdue tasks (negative days remaining) and tasks without an end date land
//! in no bucket.

use serde::Serialize;
use time::Date;

use crate::record::Task;

const SHORT_TERM_MAX_DAYS: i64 = 7;
const MEDIUM_TERM_MAX_DAYS: i64 = 30;

/// How soon a task is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeadlineBucket {
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl DeadlineBucket {
    /// The bucket for a task due in `days` days, `None` when overdue.
    pub fn for_days(days: i64) -> Option<Self> {
        if days < 0 {
            None
        } else if days <= SHORT_TERM_MAX_DAYS {
            Some(Self::ShortTerm)
        } else if days <= MEDIUM_TERM_MAX_DAYS {
            Some(Self::MediumTerm)
        } else {
            Some(Self::LongTerm)
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ShortTerm => "Short term",
            Self::MediumTerm => "Medium term",
            Self::LongTerm => "Long term",
        }
    }
}

/// Tasks split by how soon they are due.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeadlineBuckets {
    pub short_term: Vec<Task>,
    pub medium_term: Vec<Task>,
    pub long_term: Vec<Task>,
}

impl DeadlineBuckets {
    /// The number of tasks across all three buckets.
    pub fn len(&self) -> usize {
        self.short_term.len() + self.medium_term.len() + self.long_term.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bucket(&self, bucket: DeadlineBucket) -> &[Task] {
        match bucket {
            DeadlineBucket::ShortTerm => &self.short_term,
            DeadlineBucket::MediumTerm => &self.medium_term,
            DeadlineBucket::LongTerm => &self.long_term,
        }
    }
}

/// Whole calendar days from `today` until the task's end date.
///
/// Negative when the task is overdue, `None` when it has no end date.
pub fn days_remaining(task: &Task, today: Date) -> Option<i64> {
    task.end_date.map(|end_date| (end_date - today).whole_days())
}

/// Splits `tasks` into short, medium and long term buckets relative to `today`.
///
/// Each task with zero or more days remaining lands in exactly one bucket.
/// Overdue and undated tasks are left out.
pub fn bucket_by_deadline(tasks: &[Task], today: Date) -> DeadlineBuckets {
    let mut buckets = DeadlineBuckets::default();

    for task in tasks {
        let Some(bucket) = days_remaining(task, today).and_then(DeadlineBucket::for_days) else {
            continue;
        };

        let target = match bucket {
            DeadlineBucket::ShortTerm => &mut buckets.short_term,
            DeadlineBucket::MediumTerm => &mut buckets.medium_term,
            DeadlineBucket::LongTerm => &mut buckets.long_term,
        };
        target.push(task.clone());
    }

    buckets
}
