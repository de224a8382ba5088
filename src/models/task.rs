use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A trackable academic deadline item.
///
/// `completed_hours` is not checked against `estimated_hours`; the board
/// reports the mismatch through [`crate::board::TaskBoard::integrity_warnings`]
/// and progress figures are clamped at 100%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: TaskCategory,
    /// Course code or name the task belongs to, e.g. `CS 301`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<String>,
    pub due_date: DateTime<Utc>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// A task is overdue when it is not completed and its due date lies
    /// strictly before `now`.
    pub fn is_overdue<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        !self.is_completed() && self.due_date < now.with_timezone(&Utc)
    }
}

/// What kind of academic work a task represents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskCategory {
    Assignment,
    Exam,
    Project,
    Reading,
    Thesis,
    Meeting,
    Other,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 7] = [
        Self::Assignment,
        Self::Exam,
        Self::Project,
        Self::Reading,
        Self::Thesis,
        Self::Meeting,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assignment => "assignment",
            Self::Exam => "exam",
            Self::Project => "project",
            Self::Reading => "reading",
            Self::Thesis => "thesis",
            Self::Meeting => "meeting",
            Self::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "assignment" => Some(Self::Assignment),
            "exam" => Some(Self::Exam),
            "project" => Some(Self::Project),
            "reading" => Some(Self::Reading),
            "thesis" => Some(Self::Thesis),
            "meeting" => Some(Self::Meeting),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Assignment => "Assignment",
            Self::Exam => "Exam",
            Self::Project => "Project",
            Self::Reading => "Reading",
            Self::Thesis => "Thesis",
            Self::Meeting => "Meeting",
            Self::Other => "Other",
        }
    }

    /// Fixed display colour (hex) for the category.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Assignment => "#3b82f6",
            Self::Exam => "#ef4444",
            Self::Project => "#8b5cf6",
            Self::Reading => "#10b981",
            Self::Thesis => "#f59e0b",
            Self::Meeting => "#ec4899",
            Self::Other => "#6b7280",
        }
    }

    /// Icon name from the lucide icon set.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Assignment => "file-text",
            Self::Exam => "graduation-cap",
            Self::Project => "folder-kanban",
            Self::Reading => "book-open",
            Self::Thesis => "scroll-text",
            Self::Meeting => "users",
            Self::Other => "circle-dot",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Sort rank, lowest first: high 0, medium 1, low 2.
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Progress of a task.
///
/// - `Todo`: Not started
/// - `InProgress`: Being worked on
/// - `Completed`: Done, never counted as overdue
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "todo" => Some(Self::Todo),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// Input for creating a new task. New tasks start as `todo` with zero
/// completed hours.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskInput {
    pub title: String,
    pub description: Option<String>,
    pub category: TaskCategory,
    pub course: Option<String>,
    pub due_date: DateTime<Utc>,
    pub priority: TaskPriority,
    pub estimated_hours: Option<f64>,
    pub notes: Option<String>,
}

impl CreateTaskInput {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().chars().count() < 2 {
            return Err(Error::Validation(
                "Title must be at least 2 characters".to_string(),
            ));
        }
        validate_hours("Estimated hours", self.estimated_hours)
    }
}

/// Input for updating a task. All fields are optional for partial updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<TaskCategory>,
    pub course: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Option<TaskPriority>,
    pub status: Option<TaskStatus>,
    pub estimated_hours: Option<f64>,
    pub completed_hours: Option<f64>,
    pub notes: Option<String>,
}

impl UpdateTaskInput {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            if title.trim().chars().count() < 2 {
                return Err(Error::Validation(
                    "Title must be at least 2 characters".to_string(),
                ));
            }
        }
        validate_hours("Estimated hours", self.estimated_hours)?;
        validate_hours("Completed hours", self.completed_hours)
    }
}

fn validate_hours(field: &str, hours: Option<f64>) -> Result<()> {
    match hours {
        Some(h) if !h.is_finite() || h < 0.0 => Err(Error::Validation(format!(
            "{} must be a non-negative number",
            field
        ))),
        _ => Ok(()),
    }
}
