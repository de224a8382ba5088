use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::capped_percent;
use crate::models::{StudyPlan, StudySession, Task};

/// Study minutes scheduled on one day of a plan's week.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayStudyLoad {
    pub date: NaiveDate,
    pub completed_minutes: u64,
    pub planned_minutes: u64,
    pub completed_hours: f64,
    pub planned_hours: f64,
    /// Total hours rounded to a whole number for display.
    pub hours: u64,
}

impl DayStudyLoad {
    fn new(date: NaiveDate, completed_minutes: u64, planned_minutes: u64) -> Self {
        let total = completed_minutes.saturating_add(planned_minutes);
        Self {
            date,
            completed_minutes,
            planned_minutes,
            completed_hours: completed_minutes as f64 / 60.0,
            planned_hours: planned_minutes as f64 / 60.0,
            hours: (total as f64 / 60.0).round() as u64,
        }
    }

    pub fn total_minutes(&self) -> u64 {
        self.completed_minutes.saturating_add(self.planned_minutes)
    }
}

/// Seven days starting at the plan's `week_start`, with completed and planned
/// minutes summed per day. Sessions dated outside that week are ignored.
pub fn weekly_study_load(plan: &StudyPlan) -> Vec<DayStudyLoad> {
    plan.week_start
        .iter_days()
        .take(7)
        .map(|date| {
            let (completed, planned) = plan
                .sessions
                .iter()
                .filter(|s| s.date == date)
                .fold((0u64, 0u64), |(done, todo), s| {
                    let minutes = u64::from(s.duration_minutes);
                    if s.completed {
                        (done.saturating_add(minutes), todo)
                    } else {
                        (done, todo.saturating_add(minutes))
                    }
                });
            DayStudyLoad::new(date, completed, planned)
        })
        .collect()
}

/// Sessions grouped by date. Within a day, sessions keep plan order.
pub fn sessions_by_day(plan: &StudyPlan) -> BTreeMap<NaiveDate, Vec<&StudySession>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&StudySession>> = BTreeMap::new();
    for session in &plan.sessions {
        grouped.entry(session.date).or_default().push(session);
    }
    grouped
}

/// Percentage of a task's estimated hours already completed, capped at 100.
/// Tasks without an estimate (or with a zero estimate) report 0.
pub fn task_progress(task: &Task) -> u32 {
    match task.estimated_hours {
        Some(estimated) if estimated > 0.0 => {
            capped_percent(task.completed_hours.unwrap_or(0.0), estimated)
        }
        _ => 0,
    }
}

/// Study hours tracked across a set of tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyProgress {
    pub estimated_hours: f64,
    pub completed_hours: f64,
    pub remaining_hours: f64,
    pub percentage: u32,
}

impl StudyProgress {
    /// False when no task carries an hour estimate.
    pub fn has_tracked_hours(&self) -> bool {
        self.estimated_hours > 0.0
    }
}

pub fn study_progress(tasks: &[Task]) -> StudyProgress {
    let estimated: f64 = tasks.iter().filter_map(|t| t.estimated_hours).sum();
    let completed: f64 = tasks.iter().filter_map(|t| t.completed_hours).sum();

    StudyProgress {
        estimated_hours: estimated,
        completed_hours: completed,
        remaining_hours: (estimated - completed).max(0.0),
        percentage: capped_percent(completed, estimated),
    }
}
