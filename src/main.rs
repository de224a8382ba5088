use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use studydesk::board::TaskBoard;
use studydesk::config::Config;
use studydesk::models::*;
use studydesk::{render, views};

#[derive(Parser)]
#[command(name = "sdesk")]
#[command(about = "Academic deadlines, calendar and study planner")]
struct Cli {
    /// JSON fixture file to load instead of the built-in data
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Evaluate views at this RFC 3339 instant instead of the current time
    #[arg(long, global = true, value_parser = parse_now)]
    now: Option<DateTime<FixedOffset>>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Task counters, study progress and category breakdown
    Summary,
    /// Open tasks due in the next 7 days
    Upcoming,
    /// Task list split by status
    Tasks {
        #[arg(long, value_parser = parse_status)]
        status: Option<TaskStatus>,
        #[arg(long, value_parser = parse_category)]
        category: Option<TaskCategory>,
        /// Matches title, description or course, ignoring case
        #[arg(short, long, default_value = "")]
        query: String,
        /// dueDate, priority or title
        #[arg(long, default_value = "dueDate", value_parser = parse_sort)]
        sort: views::SortKey,
    },
    /// Calendar grid with events
    Calendar {
        /// month or week
        #[arg(long, default_value = "month", value_parser = parse_view)]
        view: views::CalendarView,
        /// Day inside the period to show (yyyy-MM-dd), defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Move the period forward (or back, if negative) by N months or weeks
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
        #[arg(long, value_parser = parse_category)]
        category: Option<TaskCategory>,
    },
    /// Weekly study plan
    Planner,
    /// Resource library
    Resources {
        #[arg(long, value_parser = parse_resource_category)]
        category: Option<ResourceCategory>,
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Add a task to the in-memory board
    Add {
        #[arg(long)]
        title: String,
        #[arg(long, value_parser = parse_category)]
        category: TaskCategory,
        /// Due instant (RFC 3339)
        #[arg(long, value_parser = parse_now)]
        due: DateTime<FixedOffset>,
        #[arg(long, default_value = "medium", value_parser = parse_priority)]
        priority: TaskPriority,
        #[arg(long)]
        course: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        estimated_hours: Option<f64>,
        #[arg(long)]
        notes: Option<String>,
    },
}

fn parse_now(s: &str) -> Result<DateTime<FixedOffset>, String> {
    parse_timestamp(s).map_err(|e| e.to_string())
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    parse_day(s).map_err(|e| e.to_string())
}

fn parse_status(s: &str) -> Result<TaskStatus, String> {
    TaskStatus::from_str(s).ok_or_else(|| format!("unknown status '{}'", s))
}

fn parse_category(s: &str) -> Result<TaskCategory, String> {
    TaskCategory::from_str(s).ok_or_else(|| format!("unknown category '{}'", s))
}

fn parse_priority(s: &str) -> Result<TaskPriority, String> {
    TaskPriority::from_str(s).ok_or_else(|| format!("unknown priority '{}'", s))
}

fn parse_resource_category(s: &str) -> Result<ResourceCategory, String> {
    ResourceCategory::from_str(s).ok_or_else(|| format!("unknown resource category '{}'", s))
}

fn parse_sort(s: &str) -> Result<views::SortKey, String> {
    views::SortKey::from_str(s).ok_or_else(|| format!("unknown sort key '{}'", s))
}

fn parse_view(s: &str) -> Result<views::CalendarView, String> {
    views::CalendarView::from_str(s).ok_or_else(|| format!("unknown view '{}'", s))
}

/// Initialize tracing on stderr so stdout only carries command output
fn init_tracing(filter: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn emit<T: serde::Serialize>(
    json: bool,
    value: &T,
    text: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().with_data_path(cli.data.clone());
    init_tracing(&config.log_filter);

    let now = cli.now.unwrap_or_else(|| Local::now().fixed_offset());
    let offset = *now.offset();
    let today = now.date_naive();

    let mut board =
        TaskBoard::open(&config, now).context("Failed to open task board")?;

    match cli.command.unwrap_or(Commands::Summary) {
        Commands::Summary => {
            let tasks = board.tasks();
            let summary = views::summarize(tasks, &now);
            let progress = views::study_progress(tasks);
            let categories = views::category_breakdown(tasks);
            emit(
                cli.json,
                &serde_json::json!({
                    "summary": summary,
                    "studyProgress": progress,
                    "categories": categories,
                }),
                || render::render_summary(&summary, &progress, &categories),
            )?;
        }
        Commands::Upcoming => {
            let buckets = views::bucket_by_urgency(board.tasks(), &now);
            emit(cli.json, &buckets, || render::render_urgency(&buckets, &now))?;
        }
        Commands::Tasks {
            status,
            category,
            query,
            sort,
        } => {
            let query = views::TaskQuery {
                filter: views::TaskFilter { category, query },
                sort,
            };
            let mut columns = views::query_columns(board.tasks(), &query);
            if let Some(status) = status {
                columns = columns.only(status);
            }
            emit(cli.json, &columns, || render::render_columns(&columns, &now))?;
        }
        Commands::Calendar {
            view,
            date,
            offset: steps,
            category,
        } => {
            let anchor = views::shift_period(date.unwrap_or(today), view, steps);
            let events = views::filter_events_by_category(board.events(), category);
            let cells = match view {
                views::CalendarView::Month => {
                    views::month_grid(anchor, today, &offset, events.iter().copied())
                }
                views::CalendarView::Week => {
                    views::week_grid(anchor, today, &offset, events.iter().copied())
                }
            };
            emit(cli.json, &cells, || render::render_calendar(&cells, &offset))?;
        }
        Commands::Planner => {
            let Some(plan) = board.plan() else {
                println!("No study plan for this week.");
                return Ok(());
            };
            let loads = views::weekly_study_load(plan);
            let by_day = views::sessions_by_day(plan);
            emit(
                cli.json,
                &serde_json::json!({ "plan": plan, "days": loads }),
                || render::render_planner(&board, &loads, &by_day),
            )?;
        }
        Commands::Resources { category, query } => {
            let found = views::filter_resources(board.resources(), category, &query);
            emit(cli.json, &found, || render::render_resources(&found))?;
        }
        Commands::Add {
            title,
            category,
            due,
            priority,
            course,
            description,
            estimated_hours,
            notes,
        } => {
            let input = CreateTaskInput {
                title,
                description,
                category,
                course,
                due_date: due.with_timezone(&Utc),
                priority,
                estimated_hours,
                notes,
            };
            match board.create_task(input, now.with_timezone(&Utc)) {
                Ok(task) => emit(cli.json, &task, || {
                    format!("{}\n", render::render_task_line(&task, &now))
                })?,
                Err(e) => {
                    tracing::error!("Error saving task: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
