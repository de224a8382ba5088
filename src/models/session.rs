use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::time::hhmm;

/// A scheduled block of study time linked to a task.
///
/// `task_id` is a weak reference resolved through
/// [`crate::board::TaskBoard::resolve_session`]. `duration_minutes` is
/// stored as given and is not recomputed from the start and end times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: String,
    pub task_id: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub duration_minutes: u32,
    pub completed: bool,
}

impl StudySession {
    /// Minutes between `start_time` and `end_time`, or `None` when the end
    /// does not come after the start.
    pub fn span_minutes(&self) -> Option<u32> {
        let minutes = (self.end_time - self.start_time).num_minutes();
        u32::try_from(minutes).ok().filter(|m| *m > 0)
    }
}

/// A week-scoped, ordered collection of study sessions for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub id: String,
    pub user_id: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub sessions: Vec<StudySession>,
    pub created_at: DateTime<Utc>,
}
