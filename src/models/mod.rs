//! Domain models for StudyDesk.
//!
//! # Core Concepts
//!
//! - [`Task`]: An academic deadline item (assignment, exam, ...) with a
//!   category, priority and status.
//! - [`CalendarEvent`]: A calendar entry, usually denormalised from a task.
//! - [`StudySession`]: A block of study time linked to a task.
//! - [`StudyPlan`]: One user's ordered sessions for a single week.
//! - [`AcademicResource`]: Static reference material in the resource library.
//!
//! Sessions and events refer to tasks by id only. Those references are weak:
//! the task may be gone, and every lookup has to handle that.

mod event;
mod resource;
mod session;
mod task;
pub mod time;

pub use event::*;
pub use resource::*;
pub use session::*;
pub use task::*;
pub use time::{parse_day, parse_timestamp, parse_utc};
