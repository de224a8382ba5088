use chrono::{DateTime, Days, FixedOffset};
use serde::Serialize;

use super::local_day;
use super::sort::{sort_tasks, SortKey};
use crate::models::Task;

/// Length of the upcoming window, counted in calendar days from today.
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// Open tasks due within the upcoming window, split by how soon they are due.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UrgencyBuckets<'a> {
    pub today: Vec<&'a Task>,
    pub tomorrow: Vec<&'a Task>,
    pub later: Vec<&'a Task>,
}

impl UrgencyBuckets<'_> {
    pub fn len(&self) -> usize {
        self.today.len() + self.tomorrow.len() + self.later.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Select open tasks due in `[start of today, start of today + 7 days)` and
/// bucket them into today, tomorrow and later. Each bucket is ordered by due
/// date.
///
/// Overdue tasks from before today are not part of the window.
pub fn bucket_by_urgency<'a>(tasks: &'a [Task], now: &DateTime<FixedOffset>) -> UrgencyBuckets<'a> {
    let offset = now.offset();
    let today = now.date_naive();
    let tomorrow = today + Days::new(1);
    let window_end = today + Days::new(UPCOMING_WINDOW_DAYS);

    let mut upcoming: Vec<&Task> = tasks
        .iter()
        .filter(|t| !t.is_completed())
        .filter(|t| {
            let day = local_day(&t.due_date, offset);
            day >= today && day < window_end
        })
        .collect();
    sort_tasks(&mut upcoming, SortKey::DueDate);

    let mut buckets = UrgencyBuckets::default();
    for task in upcoming {
        let day = local_day(&task.due_date, offset);
        if day == today {
            buckets.today.push(task);
        } else if day == tomorrow {
            buckets.tomorrow.push(task);
        } else {
            buckets.later.push(task);
        }
    }
    buckets
}
