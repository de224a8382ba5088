use serde::Serialize;

use super::contains_folded;
use super::sort::{sort_tasks, SortKey};
use crate::models::{Task, TaskCategory, TaskStatus};

/// Tasks with the given status, in input order.
pub fn filter_by_status(tasks: &[Task], status: TaskStatus) -> Vec<&Task> {
    tasks.iter().filter(|t| t.status == status).collect()
}

/// The three task-list columns, one per status.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatusColumns<'a> {
    pub todo: Vec<&'a Task>,
    pub in_progress: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
}

impl<'a> StatusColumns<'a> {
    pub fn column(&self, status: TaskStatus) -> &[&'a Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Completed => &self.completed,
        }
    }

    /// Keep a single column, emptying the other two.
    pub fn only(mut self, status: TaskStatus) -> Self {
        let kept = std::mem::take(self.column_mut(status));
        let mut columns = Self::default();
        *columns.column_mut(status) = kept;
        columns
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<&'a Task> {
        match status {
            TaskStatus::Todo => &mut self.todo,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::Completed => &mut self.completed,
        }
    }
}

/// Split tasks into status columns in a single pass, keeping input order.
pub fn partition_by_status<'a, I>(tasks: I) -> StatusColumns<'a>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut columns = StatusColumns::default();
    for task in tasks {
        columns.column_mut(task.status).push(task);
    }
    columns
}

/// Category and free-text filter for the task list.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Only keep tasks in this category. `None` keeps all.
    pub category: Option<TaskCategory>,
    /// Case-insensitive substring matched against title, description and course.
    pub query: String,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if self.category.is_some_and(|c| c != task.category) {
            return false;
        }

        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        contains_folded(&task.title, &needle)
            || task
                .description
                .as_deref()
                .is_some_and(|d| contains_folded(d, &needle))
            || task
                .course
                .as_deref()
                .is_some_and(|c| contains_folded(c, &needle))
    }
}

/// Tasks passing `filter`, in input order.
pub fn filter_tasks<'a, I>(tasks: I, filter: &TaskFilter) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks.into_iter().filter(|t| filter.matches(t)).collect()
}

/// Filter and sort settings of the task list page.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub filter: TaskFilter,
    pub sort: SortKey,
}

/// Build the task list columns: filter, split by status, then sort each column.
pub fn query_columns<'a>(tasks: &'a [Task], query: &TaskQuery) -> StatusColumns<'a> {
    let mut columns = partition_by_status(filter_tasks(tasks, &query.filter));
    sort_tasks(&mut columns.todo, query.sort);
    sort_tasks(&mut columns.in_progress, query.sort);
    sort_tasks(&mut columns.completed, query.sort);
    columns
}
