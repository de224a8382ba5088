//! Plain-text rendering of derived views for the terminal.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::{DateTime, FixedOffset, NaiveDate};

use crate::board::TaskBoard;
use crate::models::{AcademicResource, CalendarEvent, StudySession, Task, TaskStatus};
use crate::views::{
    status_badge, task_progress, CategoryCount, DayCell, DayStudyLoad, StatusColumns,
    StudyProgress, TaskSummary, UrgencyBuckets,
};

const TODO: char = '○';
const IN_PROGRESS: char = '◐';
const COMPLETED: char = '●';
const OVERDUE: char = '!';

fn status_symbol(task: &Task, now: &DateTime<FixedOffset>) -> char {
    match task.status {
        TaskStatus::Todo if task.is_overdue(now) => OVERDUE,
        TaskStatus::Todo => TODO,
        TaskStatus::InProgress => IN_PROGRESS,
        TaskStatus::Completed => COMPLETED,
    }
}

/// One task as a single line:
///
/// ```text
/// ◐ [High] Statistics Midterm Exam (STAT 201) - due Jun 15, 9:00 AM - 33%
/// ```
pub fn render_task_line(task: &Task, now: &DateTime<FixedOffset>) -> String {
    let due = task.due_date.with_timezone(now.offset());
    let mut line = format!(
        "{} [{}] {}",
        status_symbol(task, now),
        task.priority.label(),
        task.title
    );
    if let Some(course) = &task.course {
        let _ = write!(line, " ({})", course);
    }
    let _ = write!(line, " - due {}", due.format("%b %-d, %-I:%M %p"));
    if task.estimated_hours.is_some() {
        let _ = write!(line, " - {}%", task_progress(task));
    }
    line
}

pub fn render_summary(
    summary: &TaskSummary,
    progress: &StudyProgress,
    categories: &[CategoryCount],
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total tasks:  {}", summary.total);
    let _ = writeln!(
        out,
        "Completed:    {} ({}% completion rate)",
        summary.completed, summary.completion_rate
    );
    let _ = writeln!(out, "In progress:  {}", summary.in_progress);
    let _ = writeln!(out, "To do:        {}", summary.todo);
    let _ = writeln!(out, "Overdue:      {}", summary.overdue);

    out.push('\n');
    if progress.has_tracked_hours() {
        let _ = writeln!(
            out,
            "Study progress: {}% ({} of {} hours completed)",
            progress.percentage, progress.completed_hours, progress.estimated_hours
        );
    } else {
        out.push_str("Study progress: no study hours tracked yet\n");
    }

    if !categories.is_empty() {
        out.push_str("\nCategories\n");
        for entry in categories {
            let _ = writeln!(out, "  {:<12} {}", entry.category.label(), entry.count);
        }
    }
    out
}

pub fn render_urgency(buckets: &UrgencyBuckets<'_>, now: &DateTime<FixedOffset>) -> String {
    if buckets.is_empty() {
        return "No tasks due in the next 7 days.\n".to_string();
    }

    let mut out = String::new();
    let sections = [
        ("Today", &buckets.today),
        ("Tomorrow", &buckets.tomorrow),
        ("Upcoming", &buckets.later),
    ];
    for (heading, tasks) in sections {
        if tasks.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", heading);
        for task in tasks.iter() {
            let _ = writeln!(out, "  {}", render_task_line(task, now));
        }
    }
    out
}

pub fn render_columns(columns: &StatusColumns<'_>, now: &DateTime<FixedOffset>) -> String {
    let mut out = String::new();
    for status in [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Completed] {
        let tasks = columns.column(status);
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "{} ({})", status.label(), tasks.len());
        if tasks.is_empty() {
            out.push_str("  No tasks\n");
        }
        for task in tasks {
            let _ = writeln!(
                out,
                "  {} <{}>",
                render_task_line(task, now),
                status_badge(task, now)
            );
        }
    }
    out
}

/// Render calendar cells one day per line, skipping empty days outside the
/// displayed period.
pub fn render_calendar(cells: &[DayCell<'_, CalendarEvent>], offset: &FixedOffset) -> String {
    let mut out = String::new();
    for cell in cells {
        if !cell.in_period && cell.items.is_empty() {
            continue;
        }
        let marker = if cell.is_today { '*' } else { ' ' };
        let _ = writeln!(out, "{}{}", marker, cell.date.format("%a %b %-d"));
        if cell.items.is_empty() {
            out.push_str("    No events\n");
        }
        for event in &cell.items {
            let start = event.start.with_timezone(offset);
            let mut time = start.format("%-I:%M %p").to_string();
            if event.has_duration() {
                let end = event.end.with_timezone(offset);
                let _ = write!(time, " - {}", end.format("%-I:%M %p"));
            }
            let _ = writeln!(
                out,
                "    {} [{}] {}",
                time,
                event.category.label(),
                event.title
            );
        }
    }
    out
}

pub fn render_planner(
    board: &TaskBoard,
    loads: &[DayStudyLoad],
    by_day: &BTreeMap<NaiveDate, Vec<&StudySession>>,
) -> String {
    let mut out = String::new();
    if let (Some(first), Some(last)) = (loads.first(), loads.last()) {
        let _ = writeln!(
            out,
            "Week of {} - {}",
            first.date.format("%B %-d"),
            last.date.format("%B %-d, %Y")
        );
    }

    for load in loads {
        let _ = writeln!(
            out,
            "  {} {:>5}  {}h (completed {:.1}h, planned {:.1}h)",
            load.date.format("%a"),
            load.date.format("%b %-d"),
            load.hours,
            load.completed_hours,
            load.planned_hours
        );
    }

    for load in loads {
        out.push('\n');
        let sessions = by_day.get(&load.date).map(Vec::as_slice).unwrap_or_default();
        let count = match sessions.len() {
            0 => "No study sessions scheduled".to_string(),
            1 => "1 study session".to_string(),
            n => format!("{} study sessions", n),
        };
        let _ = writeln!(out, "{} - {}", load.date.format("%A, %B %-d"), count);
        for session in sessions {
            let view = board.resolve_session(session);
            let _ = write!(
                out,
                "  {} {}-{} {} ({} hours)",
                if session.completed { COMPLETED } else { TODO },
                session.start_time.format("%H:%M"),
                session.end_time.format("%H:%M"),
                view.label(),
                f64::from(session.duration_minutes) / 60.0
            );
            if let Some(course) = view.course() {
                let _ = write!(out, " [{}]", course);
            }
            out.push('\n');
        }
    }
    out
}

pub fn render_resources(resources: &[&AcademicResource]) -> String {
    if resources.is_empty() {
        return "No resources found with the current filters.\n".to_string();
    }

    let mut out = String::new();
    for resource in resources {
        let _ = writeln!(
            out,
            "{} [{}]\n  {}\n  {}",
            resource.title,
            resource.category.label(),
            resource.description,
            resource.url
        );
        if !resource.tags.is_empty() {
            let _ = writeln!(out, "  tags: {}", resource.tags.join(", "));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TaskCategory, TaskPriority};
    use chrono::{TimeZone, Utc};

    fn make_task(title: &str, status: TaskStatus, due_hour: u32) -> Task {
        let due = Utc.with_ymd_and_hms(2024, 6, 10, due_hour, 0, 0).unwrap();
        Task {
            id: title.to_lowercase(),
            title: title.to_string(),
            description: None,
            category: TaskCategory::Assignment,
            course: Some("CS 301".to_string()),
            due_date: due,
            priority: TaskPriority::High,
            status,
            estimated_hours: Some(4.0),
            completed_hours: Some(1.0),
            notes: None,
            created_at: due,
            updated_at: due,
        }
    }

    fn noon() -> DateTime<FixedOffset> {
        Utc.with_ymd_and_hms(2024, 6, 10, 12, 0, 0)
            .unwrap()
            .fixed_offset()
    }

    #[test]
    fn test_task_line() {
        let task = make_task("Essay", TaskStatus::InProgress, 18);
        assert_eq!(
            render_task_line(&task, &noon()),
            "◐ [High] Essay (CS 301) - due Jun 10, 6:00 PM - 25%"
        );
    }

    #[test]
    fn test_overdue_todo_gets_warning_symbol() {
        let task = make_task("Essay", TaskStatus::Todo, 9);
        assert!(render_task_line(&task, &noon()).starts_with('!'));
    }

    #[test]
    fn test_empty_urgency() {
        let buckets = UrgencyBuckets::default();
        assert_eq!(
            render_urgency(&buckets, &noon()),
            "No tasks due in the next 7 days.\n"
        );
    }

    #[test]
    fn test_urgency_sections_skip_empty_buckets() {
        let task = make_task("Essay", TaskStatus::Todo, 18);
        let buckets = UrgencyBuckets {
            today: vec![&task],
            tomorrow: vec![],
            later: vec![],
        };
        let out = render_urgency(&buckets, &noon());
        assert!(out.starts_with("Today\n"));
        assert!(!out.contains("Tomorrow"));
    }
}
