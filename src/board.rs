//! In-memory state container for the task board.
//!
//! [`TaskBoard`] is the single owner of every collection. Mutations go through
//! `&mut self`; derivations in [`crate::views`] borrow its slices.

use std::fmt;
use std::path::Path;

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::config::Config;
use crate::error::Result;
use crate::fixtures::{self, Fixtures};
use crate::models::*;

/// Label shown for a session or event whose task no longer exists.
pub const UNKNOWN_TASK_LABEL: &str = "Unknown Task";

#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    events: Vec<CalendarEvent>,
    plan: Option<StudyPlan>,
    resources: Vec<AcademicResource>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        Self {
            tasks: fixtures.tasks,
            events: fixtures.events,
            plan: fixtures.plan,
            resources: fixtures.resources,
        }
    }

    /// Load a board from a JSON fixture document.
    ///
    /// Records that break the hour or duration invariants are kept as-is and
    /// reported at `warn` level.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let fixtures: Fixtures = serde_json::from_str(&raw)?;
        let board = Self::from_fixtures(fixtures);

        tracing::info!(
            "Loaded {} tasks, {} events and {} resources from {}",
            board.tasks.len(),
            board.events.len(),
            board.resources.len(),
            path.display()
        );
        for warning in board.integrity_warnings() {
            tracing::warn!("{}", warning);
        }

        Ok(board)
    }

    /// Open the board described by `config`: load the fixture file when one
    /// resolves, otherwise seed fixtures relative to `now`.
    pub fn open(config: &Config, now: DateTime<FixedOffset>) -> Result<Self> {
        match config.resolve_data_path() {
            Some(path) => Self::load(&path),
            None => {
                tracing::info!("No data file found, seeding fixtures");
                Ok(Self::from_fixtures(fixtures::seed(now)))
            }
        }
    }

    /// Snapshot of the current state in fixture form.
    pub fn to_fixtures(&self) -> Fixtures {
        Fixtures {
            tasks: self.tasks.clone(),
            events: self.events.clone(),
            plan: self.plan.clone(),
            resources: self.resources.clone(),
        }
    }

    // ============================================================
    // Accessors
    // ============================================================

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn plan(&self) -> Option<&StudyPlan> {
        self.plan.as_ref()
    }

    pub fn resources(&self) -> &[AcademicResource] {
        &self.resources
    }

    pub fn get_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    // ============================================================
    // Task operations
    // ============================================================

    /// Validate and append a new task.
    ///
    /// On error the board is left untouched and the caller decides what to do
    /// with the failure; nothing is retried.
    pub fn create_task(&mut self, input: CreateTaskInput, now: DateTime<Utc>) -> Result<Task> {
        input.validate()?;

        let task = Task {
            id: format!("task-{}", Uuid::new_v4()),
            title: input.title.trim().to_string(),
            description: non_empty(input.description),
            category: input.category,
            course: non_empty(input.course),
            due_date: input.due_date,
            priority: input.priority,
            status: TaskStatus::Todo,
            estimated_hours: input.estimated_hours,
            completed_hours: Some(0.0),
            notes: non_empty(input.notes),
            created_at: now,
            updated_at: now,
        };

        tracing::info!("Saved task {} ({})", task.id, task.title);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Apply a partial update. Returns `Ok(None)` when the task does not exist.
    pub fn update_task(
        &mut self,
        id: &str,
        input: UpdateTaskInput,
        now: DateTime<Utc>,
    ) -> Result<Option<Task>> {
        input.validate()?;

        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };

        if let Some(title) = input.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = input.description {
            task.description = non_empty(Some(description));
        }
        if let Some(category) = input.category {
            task.category = category;
        }
        if let Some(course) = input.course {
            task.course = non_empty(Some(course));
        }
        if let Some(due_date) = input.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = input.priority {
            task.priority = priority;
        }
        if let Some(status) = input.status {
            task.status = status;
        }
        if input.estimated_hours.is_some() {
            task.estimated_hours = input.estimated_hours;
        }
        if input.completed_hours.is_some() {
            task.completed_hours = input.completed_hours;
        }
        if let Some(notes) = input.notes {
            task.notes = non_empty(Some(notes));
        }
        task.updated_at = now;

        Ok(Some(task.clone()))
    }

    pub fn update_task_status(
        &mut self,
        id: &str,
        status: TaskStatus,
        now: DateTime<Utc>,
    ) -> Option<Task> {
        let task = self.tasks.iter_mut().find(|t| t.id == id)?;
        tracing::debug!(
            "Task {} status {} -> {}",
            task.id,
            task.status.as_str(),
            status.as_str()
        );
        task.status = status;
        task.updated_at = now;
        Some(task.clone())
    }

    /// Remove a task. Sessions and events that refer to it are kept and
    /// resolve to no task afterwards.
    pub fn delete_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() < before
    }

    // ============================================================
    // Weak reference resolution
    // ============================================================

    pub fn resolve_session<'a>(&'a self, session: &'a StudySession) -> SessionView<'a> {
        SessionView {
            session,
            task: self.get_task(&session.task_id),
        }
    }

    pub fn resolve_event(&self, event: &CalendarEvent) -> Option<&Task> {
        event.task_id.as_deref().and_then(|id| self.get_task(id))
    }

    // ============================================================
    // Integrity
    // ============================================================

    /// Records that break the hour or duration invariants. Nothing is
    /// rejected; the list is informational.
    pub fn integrity_warnings(&self) -> Vec<IntegrityWarning> {
        let mut warnings = Vec::new();

        for task in &self.tasks {
            if let (Some(estimated), Some(completed)) = (task.estimated_hours, task.completed_hours)
            {
                if completed > estimated {
                    warnings.push(IntegrityWarning::HoursExceedEstimate {
                        task_id: task.id.clone(),
                        estimated,
                        completed,
                    });
                }
            }
        }

        let sessions = self.plan.iter().flat_map(|p| p.sessions.iter());
        for session in sessions {
            let span = session.span_minutes();
            if span != Some(session.duration_minutes) {
                warnings.push(IntegrityWarning::SessionDurationMismatch {
                    session_id: session.id.clone(),
                    recorded: session.duration_minutes,
                    span,
                });
            }
        }

        warnings
    }
}

/// A study session paired with the task it refers to, if that task exists.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SessionView<'a> {
    pub session: &'a StudySession,
    pub task: Option<&'a Task>,
}

impl<'a> SessionView<'a> {
    pub fn label(&self) -> &'a str {
        self.task.map_or(UNKNOWN_TASK_LABEL, |t| t.title.as_str())
    }

    pub fn course(&self) -> Option<&'a str> {
        self.task.and_then(|t| t.course.as_deref())
    }

    pub fn category(&self) -> Option<TaskCategory> {
        self.task.map(|t| t.category)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityWarning {
    HoursExceedEstimate {
        task_id: String,
        estimated: f64,
        completed: f64,
    },
    SessionDurationMismatch {
        session_id: String,
        recorded: u32,
        /// Minutes between start and end, `None` if the end is not after the start.
        span: Option<u32>,
    },
}

impl fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HoursExceedEstimate {
                task_id,
                estimated,
                completed,
            } => write!(
                f,
                "Task {} has {} completed hours but only {} estimated",
                task_id, completed, estimated
            ),
            Self::SessionDurationMismatch {
                session_id,
                recorded,
                span: Some(span),
            } => write!(
                f,
                "Session {} records {} minutes but spans {}",
                session_id, recorded, span
            ),
            Self::SessionDurationMismatch {
                session_id,
                recorded,
                span: None,
            } => write!(
                f,
                "Session {} records {} minutes but ends before it starts",
                session_id, recorded
            ),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl From<Fixtures> for TaskBoard {
    fn from(fixtures: Fixtures) -> Self {
        Self::from_fixtures(fixtures)
    }
}

