use chrono::{DateTime, Datelike, Days, FixedOffset, Months, NaiveDate, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::local_day;
use crate::models::{CalendarEvent, Task, TaskCategory};

/// Number of cells in a month grid: six full weeks.
pub const MONTH_GRID_CELLS: usize = 42;

/// Anything that can be placed on a calendar day.
pub trait Dated {
    /// The instant that decides which day the item lands on.
    fn timestamp(&self) -> DateTime<Utc>;
}

impl Dated for Task {
    fn timestamp(&self) -> DateTime<Utc> {
        self.due_date
    }
}

impl Dated for CalendarEvent {
    fn timestamp(&self) -> DateTime<Utc> {
        self.start
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
}

impl CalendarView {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Week => "week",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "month" => Some(Self::Month),
            "week" => Some(Self::Week),
            _ => None,
        }
    }
}

/// One day of a calendar grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell<'a, T> {
    pub date: NaiveDate,
    /// False for leading/trailing days that belong to a neighbouring month.
    pub in_period: bool,
    pub is_today: bool,
    pub items: Vec<&'a T>,
}

/// The Sunday starting the week that contains `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// 42 cells starting on the Sunday of the week containing the 1st of
/// `anchor`'s month.
pub fn month_grid<'a, T, I>(
    anchor: NaiveDate,
    today: NaiveDate,
    offset: &FixedOffset,
    items: I,
) -> Vec<DayCell<'a, T>>
where
    T: Dated,
    I: IntoIterator<Item = &'a T>,
{
    let first = month_start(anchor);
    let start = week_start(first);
    build_grid(start, MONTH_GRID_CELLS, today, offset, items, |day| {
        day.year() == first.year() && day.month() == first.month()
    })
}

/// 7 cells for the Sunday-to-Saturday week containing `anchor`.
pub fn week_grid<'a, T, I>(
    anchor: NaiveDate,
    today: NaiveDate,
    offset: &FixedOffset,
    items: I,
) -> Vec<DayCell<'a, T>>
where
    T: Dated,
    I: IntoIterator<Item = &'a T>,
{
    build_grid(week_start(anchor), 7, today, offset, items, |_| true)
}

fn build_grid<'a, T, I>(
    start: NaiveDate,
    cells: usize,
    today: NaiveDate,
    offset: &FixedOffset,
    items: I,
    in_period: impl Fn(NaiveDate) -> bool,
) -> Vec<DayCell<'a, T>>
where
    T: Dated,
    I: IntoIterator<Item = &'a T>,
{
    let keyed: Vec<(NaiveDate, &'a T)> = items
        .into_iter()
        .map(|item| (local_day(&item.timestamp(), offset), item))
        .collect();

    start
        .iter_days()
        .take(cells)
        .map(|date| DayCell {
            date,
            in_period: in_period(date),
            is_today: date == today,
            items: keyed
                .iter()
                .filter(|(day, _)| *day == date)
                .map(|(_, item)| *item)
                .collect(),
        })
        .collect()
}

/// Events in `category`, or all events when no category is given.
pub fn filter_events_by_category(
    events: &[CalendarEvent],
    category: Option<TaskCategory>,
) -> Vec<&CalendarEvent> {
    events
        .iter()
        .filter(|e| match category {
            Some(c) => e.category == c,
            None => true,
        })
        .collect()
}

/// Move `anchor` by `steps` months or weeks (negative steps go back).
///
/// Month steps clamp to the last day of a shorter month. Out-of-range
/// results leave the anchor unchanged.
pub fn shift_period(anchor: NaiveDate, view: CalendarView, steps: i32) -> NaiveDate {
    let shifted = match view {
        CalendarView::Month => {
            let months = Months::new(steps.unsigned_abs());
            if steps >= 0 {
                anchor.checked_add_months(months)
            } else {
                anchor.checked_sub_months(months)
            }
        }
        CalendarView::Week => anchor.checked_add_signed(TimeDelta::weeks(i64::from(steps))),
    };
    shifted.unwrap_or(anchor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_start_is_sunday() {
        // 2024-06-12 is a Wednesday
        assert_eq!(week_start(day(2024, 6, 12)), day(2024, 6, 9));
        assert_eq!(week_start(day(2024, 6, 9)), day(2024, 6, 9));
    }

    #[test]
    fn test_shift_period_months_clamp() {
        assert_eq!(shift_period(day(2024, 1, 31), CalendarView::Month, 1), day(2024, 2, 29));
        assert_eq!(shift_period(day(2024, 3, 15), CalendarView::Month, -2), day(2024, 1, 15));
    }

    #[test]
    fn test_shift_period_weeks() {
        assert_eq!(shift_period(day(2024, 6, 12), CalendarView::Week, 1), day(2024, 6, 19));
        assert_eq!(shift_period(day(2024, 6, 12), CalendarView::Week, -1), day(2024, 6, 5));
    }
}
