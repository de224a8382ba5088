//! Seed data created at process start.
//!
//! Dates are laid out relative to the supplied "now" so that the dashboard,
//! calendar and planner always have something current to show.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::models::*;
use crate::views::week_start;

/// A complete data set: the JSON document accepted by
/// [`crate::board::TaskBoard::load`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixtures {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<StudyPlan>,
    #[serde(default)]
    pub resources: Vec<AcademicResource>,
}

/// Id of a task that study sessions refer to but which is not in the seed.
pub const MISSING_TASK_ID: &str = "task-archived";

/// Seed data around `now`. "Today" is the calendar day of `now` in its own
/// offset, so the seeded due dates agree with the day-based views.
pub fn seed(now: DateTime<FixedOffset>) -> Fixtures {
    let today = now.date_naive();
    let midnight = start_of_day(today, now.offset());
    let now = now.with_timezone(&Utc);
    let tasks = seed_tasks(now, midnight);

    let mut events: Vec<CalendarEvent> = tasks.iter().map(CalendarEvent::from_task).collect();
    events.push(CalendarEvent {
        id: "event-study-group".to_string(),
        title: "Study Group: Statistics".to_string(),
        start: at(midnight, 4, 16, 0),
        end: at(midnight, 4, 18, 0),
        category: TaskCategory::Meeting,
        task_id: None,
    });

    Fixtures {
        plan: Some(seed_plan(now, today)),
        resources: seed_resources(now),
        tasks,
        events,
    }
}

/// Midnight of `day` in `offset`, as a UTC instant.
fn start_of_day(day: NaiveDate, offset: &FixedOffset) -> DateTime<Utc> {
    day.and_time(NaiveTime::MIN).and_utc()
        - TimeDelta::seconds(i64::from(offset.local_minus_utc()))
}

/// `days` after `midnight`, at local `hour:minute`.
fn at(midnight: DateTime<Utc>, days: i64, hour: i64, minute: i64) -> DateTime<Utc> {
    midnight + TimeDelta::days(days) + TimeDelta::hours(hour) + TimeDelta::minutes(minute)
}

fn clock(hour: i64, minute: i64) -> NaiveTime {
    NaiveTime::MIN + TimeDelta::hours(hour) + TimeDelta::minutes(minute)
}

#[allow(clippy::too_many_arguments)]
fn task(
    now: DateTime<Utc>,
    id: &str,
    title: &str,
    description: Option<&str>,
    category: TaskCategory,
    course: Option<&str>,
    due_date: DateTime<Utc>,
    priority: TaskPriority,
    status: TaskStatus,
    hours: Option<(f64, f64)>,
) -> Task {
    let created_at = now - TimeDelta::days(14);
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.map(str::to_string),
        category,
        course: course.map(str::to_string),
        due_date,
        priority,
        status,
        estimated_hours: hours.map(|(estimated, _)| estimated),
        completed_hours: hours.map(|(_, completed)| completed),
        notes: None,
        created_at,
        updated_at: created_at,
    }
}

fn seed_tasks(now: DateTime<Utc>, midnight: DateTime<Utc>) -> Vec<Task> {
    use TaskCategory::*;
    use TaskPriority::*;
    use TaskStatus::*;

    vec![
        task(
            now,
            "task-1",
            "Statistics Midterm Exam",
            Some("Covers hypothesis testing and regression; review chapters 3 and 5"),
            Exam,
            Some("STAT 201"),
            at(midnight, 5, 9, 0),
            High,
            InProgress,
            Some((12.0, 4.0)),
        ),
        task(
            now,
            "task-2",
            "Literature Review Draft",
            Some("Quantum computing applications in cryptography"),
            Thesis,
            Some("THESIS 500"),
            at(midnight, 10, 17, 0),
            High,
            InProgress,
            Some((20.0, 8.0)),
        ),
        task(
            now,
            "task-3",
            "Marketing Group Presentation",
            Some("Coordinate slides with the team"),
            Project,
            Some("MKT 310"),
            at(midnight, 3, 14, 0),
            Medium,
            Todo,
            Some((6.0, 1.0)),
        ),
        task(
            now,
            "task-4",
            "Read Chapters 4-6",
            Some("Organic reaction mechanisms"),
            Reading,
            Some("CHEM 210"),
            at(midnight, 1, 20, 0),
            Medium,
            Todo,
            Some((3.0, 0.0)),
        ),
        task(
            now,
            "task-5",
            "Algorithms Problem Set 3",
            Some("Dynamic programming and greedy algorithms"),
            Assignment,
            Some("CS 301"),
            at(midnight, 0, 23, 59),
            High,
            Todo,
            Some((5.0, 2.0)),
        ),
        task(
            now,
            "task-6",
            "Thesis Advisor Meeting",
            None,
            Meeting,
            Some("THESIS 500"),
            at(midnight, 2, 11, 0),
            Low,
            Todo,
            None,
        ),
        task(
            now,
            "task-7",
            "Lab Report: Titration",
            Some("Include error analysis"),
            Assignment,
            Some("CHEM 210"),
            at(midnight, -2, 17, 0),
            Medium,
            Todo,
            Some((4.0, 1.0)),
        ),
        task(
            now,
            "task-8",
            "History Essay Outline",
            None,
            Assignment,
            Some("HIST 120"),
            at(midnight, -5, 12, 0),
            Low,
            Completed,
            Some((3.0, 3.0)),
        ),
        task(
            now,
            "task-9",
            "Renew Library Books",
            None,
            Other,
            None,
            at(midnight, 14, 10, 0),
            Low,
            Todo,
            None,
        ),
        task(
            now,
            "task-10",
            "Database Systems Project Milestone",
            Some("Schema design and query optimisation report"),
            Project,
            Some("CS 340"),
            at(midnight, 6, 23, 0),
            High,
            Todo,
            Some((15.0, 0.0)),
        ),
    ]
}

fn seed_plan(now: DateTime<Utc>, today: NaiveDate) -> StudyPlan {
    let start = week_start(today);
    let slots: [(&str, i64, (i64, i64), (i64, i64)); 7] = [
        ("task-1", 1, (9, 0), (11, 0)),
        ("task-5", 1, (14, 0), (15, 30)),
        ("task-2", 2, (10, 0), (12, 0)),
        ("task-3", 3, (13, 0), (14, 0)),
        ("task-1", 4, (9, 0), (11, 30)),
        (MISSING_TASK_ID, 5, (15, 0), (16, 0)),
        ("task-4", 6, (19, 0), (20, 0)),
    ];

    let sessions = slots
        .iter()
        .enumerate()
        .map(|(i, (task_id, offset, (sh, sm), (eh, em)))| {
            let date = start + TimeDelta::days(*offset);
            StudySession {
                id: format!("session-{}", i + 1),
                task_id: (*task_id).to_string(),
                date,
                start_time: clock(*sh, *sm),
                end_time: clock(*eh, *em),
                duration_minutes: ((eh * 60 + em) - (sh * 60 + sm)) as u32,
                completed: date < today,
            }
        })
        .collect();

    StudyPlan {
        id: "plan-1".to_string(),
        user_id: "user-1".to_string(),
        week_start: start,
        week_end: start + TimeDelta::days(6),
        sessions,
        created_at: now - TimeDelta::days(7),
    }
}

fn seed_resources(now: DateTime<Utc>) -> Vec<AcademicResource> {
    let entries: [(&str, &str, &str, ResourceCategory, &[&str]); 6] = [
        (
            "Purdue Online Writing Lab",
            "Citation styles, grammar and academic writing guides",
            "https://owl.purdue.edu",
            ResourceCategory::Writing,
            &["citations", "apa", "mla"],
        ),
        (
            "Structuring a Literature Review",
            "How to organise sources thematically for a thesis chapter",
            "https://writingcenter.unc.edu/tips-and-tools/literature-reviews/",
            ResourceCategory::Writing,
            &["thesis", "research"],
        ),
        (
            "Khan Academy Statistics",
            "Video lessons and practice on probability and inference",
            "https://www.khanacademy.org/math/statistics-probability",
            ResourceCategory::Learning,
            &["statistics", "exam prep"],
        ),
        (
            "MIT OpenCourseWare: Algorithms",
            "Lecture notes and problem sets for Introduction to Algorithms",
            "https://ocw.mit.edu/courses/6-006-introduction-to-algorithms-spring-2020/",
            ResourceCategory::Learning,
            &["algorithms", "computer science"],
        ),
        (
            "Lab Report Template",
            "Sections and formatting for science lab reports",
            "https://example.edu/templates/lab-report",
            ResourceCategory::Template,
            &["lab", "chemistry"],
        ),
        (
            "Weekly Study Schedule",
            "Printable planner for blocking out study sessions",
            "https://example.edu/templates/study-schedule",
            ResourceCategory::Template,
            &["planning", "time management"],
        ),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, (title, description, url, category, tags))| AcademicResource {
            id: format!("resource-{}", i + 1),
            title: title.to_string(),
            description: description.to_string(),
            url: url.to_string(),
            category: *category,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: now - TimeDelta::days(30),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_seed_covers_every_category() {
        let now = Utc.with_ymd_and_hms(2024, 6, 12, 8, 0, 0).unwrap().fixed_offset();
        let fixtures = seed(now);
        for category in TaskCategory::ALL {
            assert!(
                fixtures.tasks.iter().any(|t| t.category == category),
                "no seed task in {:?}",
                category
            );
        }
    }

    #[test]
    fn test_seed_plan_spans_the_current_week() {
        let now = Utc.with_ymd_and_hms(2024, 6, 12, 8, 0, 0).unwrap().fixed_offset();
        let plan = seed(now).plan.unwrap();
        assert_eq!(plan.week_start, NaiveDate::from_ymd_opt(2024, 6, 9).unwrap());
        assert_eq!(plan.week_end, NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        assert!(plan
            .sessions
            .iter()
            .all(|s| s.date >= plan.week_start && s.date <= plan.week_end));
    }

    #[test]
    fn test_seed_session_durations_match_spans() {
        let now = Utc.with_ymd_and_hms(2024, 6, 12, 8, 0, 0).unwrap().fixed_offset();
        let plan = seed(now).plan.unwrap();
        for session in &plan.sessions {
            assert_eq!(session.span_minutes(), Some(session.duration_minutes));
        }
    }

    #[test]
    fn test_seed_uses_the_local_day_of_now() {
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        let now = offset.with_ymd_and_hms(2024, 6, 12, 23, 30, 0).unwrap();
        let fixtures = seed(now);

        let due_today = fixtures
            .tasks
            .iter()
            .find(|t| t.id == "task-5")
            .unwrap()
            .due_date
            .with_timezone(&offset);
        assert_eq!(due_today.date_naive(), NaiveDate::from_ymd_opt(2024, 6, 12).unwrap());

        let buckets = crate::views::bucket_by_urgency(&fixtures.tasks, &now);
        let today: Vec<&str> = buckets.today.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(today, vec!["task-5"]);
    }
}
