use serde::Serialize;

use crate::models::{Task, TaskCategory};

/// Number of tasks in one category, with its fixed display attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: TaskCategory,
    pub count: usize,
    pub color: &'static str,
    pub icon: &'static str,
}

/// Count tasks per category, most frequent first. Categories with equal
/// counts keep the order in which they first appear. Categories with no
/// tasks are omitted.
pub fn category_breakdown(tasks: &[Task]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = Vec::new();

    for task in tasks {
        match counts.iter_mut().find(|c| c.category == task.category) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: task.category,
                count: 1,
                color: task.category.color(),
                icon: task.category.icon(),
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
