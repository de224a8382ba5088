use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::capped_percent;
use crate::models::{Task, TaskStatus};

/// Dashboard task counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Not completed and due strictly before now.
    pub overdue: usize,
    /// `round(100 * completed / total)`, 0 for an empty list.
    pub completion_rate: u32,
}

pub fn summarize(tasks: &[Task], now: &DateTime<FixedOffset>) -> TaskSummary {
    let mut summary = TaskSummary {
        total: tasks.len(),
        ..TaskSummary::default()
    };

    for task in tasks {
        match task.status {
            TaskStatus::Todo => summary.todo += 1,
            TaskStatus::InProgress => summary.in_progress += 1,
            TaskStatus::Completed => summary.completed += 1,
        }
        if task.is_overdue(now) {
            summary.overdue += 1;
        }
    }

    summary.completion_rate = capped_percent(summary.completed as f64, summary.total as f64);
    summary
}
