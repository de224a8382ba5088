use chrono::{DateTime, FixedOffset};

use crate::models::{Task, TaskStatus};

/// Status badge text for a task card. An overdue `todo` task reads
/// "Overdue"; every other task shows its status label.
pub fn status_badge(task: &Task, now: &DateTime<FixedOffset>) -> &'static str {
    match task.status {
        TaskStatus::Todo if task.is_overdue(now) => "Overdue",
        status => status.label(),
    }
}
