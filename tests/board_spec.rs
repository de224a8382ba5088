use std::io::Write;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use speculate2::speculate;
use studydesk::board::{IntegrityWarning, TaskBoard, UNKNOWN_TASK_LABEL};
use studydesk::config::{Config, DEFAULT_LOG_FILTER};
use studydesk::fixtures::{self, Fixtures, MISSING_TASK_ID};
use studydesk::models::*;
use studydesk::Error;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 12, 8, 0, 0).unwrap()
}

fn create_input(title: &str) -> CreateTaskInput {
    CreateTaskInput {
        title: title.to_string(),
        description: None,
        category: TaskCategory::Assignment,
        course: Some("CS 301".to_string()),
        due_date: Utc.with_ymd_and_hms(2024, 6, 14, 23, 59, 0).unwrap(),
        priority: TaskPriority::High,
        estimated_hours: Some(5.0),
        notes: None,
    }
}

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes()).expect("Failed to write fixture");
    file
}

const FIXTURE_JSON: &str = r#"{
  "tasks": [
    {
      "id": "task-1",
      "title": "Statistics Midterm",
      "category": "exam",
      "course": "STAT 201",
      "dueDate": "2024-06-15T09:00:00Z",
      "priority": "high",
      "status": "in-progress",
      "estimatedHours": 4,
      "completedHours": 6,
      "createdAt": "2024-06-01T10:00:00Z",
      "updatedAt": "2024-06-01T10:00:00Z"
    }
  ],
  "events": [],
  "plan": {
    "id": "plan-1",
    "userId": "user-1",
    "weekStart": "2024-06-09",
    "weekEnd": "2024-06-15",
    "sessions": [
      {
        "id": "session-1",
        "taskId": "task-1",
        "date": "2024-06-10",
        "startTime": "09:00",
        "endTime": "10:30",
        "durationMinutes": 120,
        "completed": true
      }
    ],
    "createdAt": "2024-06-01T10:00:00Z"
  },
  "resources": []
}"#;

speculate! {
    before {
        let mut board = TaskBoard::from_fixtures(fixtures::seed(now().fixed_offset()));
    }

    describe "create_task" {
        it "appends a todo task with zero completed hours" {
            let before = board.tasks().len();
            let task = board.create_task(create_input("Problem Set 4"), now())
                .expect("Failed to create task");

            assert!(task.id.starts_with("task-"));
            assert_eq!(task.status, TaskStatus::Todo);
            assert_eq!(task.completed_hours, Some(0.0));
            assert_eq!(task.created_at, now());
            assert_eq!(board.tasks().len(), before + 1);
            assert_eq!(board.get_task(&task.id), Some(&task));
        }

        it "assigns distinct ids" {
            let a = board.create_task(create_input("First"), now()).expect("Failed");
            let b = board.create_task(create_input("Second"), now()).expect("Failed");
            assert_ne!(a.id, b.id);
        }

        it "rejects a one-character title and leaves the board unchanged" {
            let snapshot = board.to_fixtures();
            let result = board.create_task(create_input("X"), now());

            assert!(matches!(result, Err(Error::Validation(_))));
            assert_eq!(board.to_fixtures(), snapshot);
        }

        it "rejects negative estimated hours" {
            let mut input = create_input("Essay");
            input.estimated_hours = Some(-1.0);
            assert!(matches!(board.create_task(input, now()), Err(Error::Validation(_))));
        }

        it "drops blank optional text fields" {
            let mut input = create_input("Essay");
            input.description = Some("   ".to_string());
            let task = board.create_task(input, now()).expect("Failed");
            assert!(task.description.is_none());
        }
    }

    describe "update_task" {
        it "changes only the given fields" {
            let later = now() + chrono::TimeDelta::hours(1);
            let updated = board.update_task("task-1", UpdateTaskInput {
                completed_hours: Some(6.0),
                priority: Some(TaskPriority::Low),
                ..UpdateTaskInput::default()
            }, later).expect("Update failed").expect("Task missing");

            assert_eq!(updated.completed_hours, Some(6.0));
            assert_eq!(updated.priority, TaskPriority::Low);
            assert_eq!(updated.title, "Statistics Midterm Exam");
            assert_eq!(updated.updated_at, later);
        }

        it "returns None for an unknown task" {
            let result = board.update_task("nope", UpdateTaskInput::default(), now())
                .expect("Update failed");
            assert!(result.is_none());
        }

        it "validates before touching the task" {
            let result = board.update_task("task-1", UpdateTaskInput {
                title: Some("a".to_string()),
                ..UpdateTaskInput::default()
            }, now());
            assert!(result.is_err());
            assert_eq!(board.get_task("task-1").unwrap().title, "Statistics Midterm Exam");
        }

        it "updates the status" {
            let task = board.update_task_status("task-3", TaskStatus::Completed, now())
                .expect("Task missing");
            assert_eq!(task.status, TaskStatus::Completed);
            assert!(board.update_task_status("nope", TaskStatus::Todo, now()).is_none());
        }
    }

    describe "delete_task" {
        it "removes the task once" {
            assert!(board.delete_task("task-4"));
            assert!(board.get_task("task-4").is_none());
            assert!(!board.delete_task("task-4"));
        }

        it "leaves sessions pointing at the deleted task unresolved" {
            board.delete_task("task-1");
            let plan = board.plan().expect("Seed has a plan").clone();
            let session = plan.sessions.iter().find(|s| s.task_id == "task-1").unwrap();

            let view = board.resolve_session(session);
            assert!(view.task.is_none());
            assert_eq!(view.label(), UNKNOWN_TASK_LABEL);
            assert!(view.course().is_none());
        }
    }

    describe "weak_references" {
        it "resolves sessions to their task" {
            let plan = board.plan().expect("Seed has a plan");
            let session = plan.sessions.iter().find(|s| s.task_id == "task-2").unwrap();
            let view = board.resolve_session(session);
            assert_eq!(view.label(), "Literature Review Draft");
            assert_eq!(view.course(), Some("THESIS 500"));
            assert_eq!(view.category(), Some(TaskCategory::Thesis));
        }

        it "falls back to the placeholder for dangling references" {
            let plan = board.plan().expect("Seed has a plan");
            let session = plan.sessions.iter().find(|s| s.task_id == MISSING_TASK_ID).unwrap();
            assert_eq!(board.resolve_session(session).label(), "Unknown Task");
        }

        it "resolves events with and without a task" {
            let linked = board.events().iter().find(|e| e.task_id.is_some()).unwrap();
            let standalone = board.events().iter().find(|e| e.task_id.is_none()).unwrap();
            assert!(board.resolve_event(linked).is_some());
            assert!(board.resolve_event(standalone).is_none());
        }
    }

    describe "load" {
        it "reads the camelCase fixture document" {
            let file = write_fixture(FIXTURE_JSON);
            let loaded = TaskBoard::load(file.path()).expect("Failed to load");

            let task = loaded.get_task("task-1").expect("Task missing");
            assert_eq!(task.status, TaskStatus::InProgress);
            assert_eq!(task.category, TaskCategory::Exam);
            assert_eq!(task.due_date, Utc.with_ymd_and_hms(2024, 6, 15, 9, 0, 0).unwrap());

            let plan = loaded.plan().expect("Plan missing");
            assert_eq!(plan.week_start, NaiveDate::from_ymd_opt(2024, 6, 9).unwrap());
            assert_eq!(plan.sessions[0].start_time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        }

        it "keeps records that break invariants and reports them" {
            let file = write_fixture(FIXTURE_JSON);
            let loaded = TaskBoard::load(file.path()).expect("Failed to load");

            let warnings = loaded.integrity_warnings();
            assert_eq!(warnings.len(), 2);
            assert!(warnings.contains(&IntegrityWarning::HoursExceedEstimate {
                task_id: "task-1".to_string(),
                estimated: 4.0,
                completed: 6.0,
            }));
            assert!(warnings.contains(&IntegrityWarning::SessionDurationMismatch {
                session_id: "session-1".to_string(),
                recorded: 120,
                span: Some(90),
            }));
        }

        it "fails on a malformed due date" {
            let file = write_fixture(&FIXTURE_JSON.replace("2024-06-15T09:00:00Z", "next friday"));
            assert!(matches!(TaskBoard::load(file.path()), Err(Error::Json(_))));
        }

        it "fails on an unknown status" {
            let file = write_fixture(&FIXTURE_JSON.replace("in-progress", "in_progress"));
            assert!(matches!(TaskBoard::load(file.path()), Err(Error::Json(_))));
        }

        it "fails on a missing file" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let result = TaskBoard::load(&dir.path().join("absent.json"));
            assert!(matches!(result, Err(Error::Io(_))));
        }

        it "opens the configured data file" {
            let file = write_fixture(FIXTURE_JSON);
            let config = Config {
                data_path: Some(file.path().to_path_buf()),
                log_filter: DEFAULT_LOG_FILTER.to_string(),
            };
            let opened = TaskBoard::open(&config, now().fixed_offset()).expect("Failed to open");
            assert_eq!(opened.tasks().len(), 1);
        }
    }

    describe "serialization" {
        it "uses the wire field names and enum values" {
            let task = board.get_task("task-1").unwrap();
            let value = serde_json::to_value(task).expect("Failed to serialize");

            assert_eq!(value["status"], "in-progress");
            assert_eq!(value["category"], "exam");
            assert_eq!(value["priority"], "high");
            assert!(value.get("dueDate").is_some());
            assert!(value.get("estimatedHours").is_some());
            assert!(value.get("due_date").is_none());
            assert!(value.get("notes").is_none());
        }

        it "round-trips a full fixture snapshot" {
            let snapshot = board.to_fixtures();
            let json = serde_json::to_string(&snapshot).expect("Failed to serialize");
            let back: Fixtures = serde_json::from_str(&json).expect("Failed to parse");
            assert_eq!(back, snapshot);
        }
    }

    describe "seed" {
        it "has no integrity warnings" {
            assert!(board.integrity_warnings().is_empty());
        }
    }
}
