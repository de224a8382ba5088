use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::task::{Task, TaskCategory};

/// An entry on the calendar.
///
/// Events are usually denormalised from tasks (see [`CalendarEvent::from_task`])
/// but may also stand alone. `task_id` is a weak reference: the task it names
/// may have been deleted, so it is resolved by lookup at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub category: TaskCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
}

impl CalendarEvent {
    /// Build a point-in-time event at the task's due date.
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: format!("event-{}", task.id),
            title: task.title.clone(),
            start: task.due_date,
            end: task.due_date,
            category: task.category,
            task_id: Some(task.id.clone()),
        }
    }

    /// Whether the event covers a span of time rather than a single instant.
    pub fn has_duration(&self) -> bool {
        self.end != self.start
    }
}
