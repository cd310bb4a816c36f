//! Monthly calendar aggregation.
//!
//! The calendar is a fixed 6-week grid (42 cells) starting on the Sunday
//! on or before the first of the displayed month. Each cell carries the
//! number of incomplete tasks due that local day, and an overdue flag for
//! days strictly before today that still have pending tasks.

use crate::tasks::models::Task;
use crate::tasks::timefmt::local_date;
use chrono::{Datelike, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone};
use std::collections::HashMap;

/// Number of cells in a month grid.
pub const GRID_CELLS: usize = 42;

/// Milliseconds in one day.
const DAY_MS: i64 = 86_400_000;

/// One day cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    /// The calendar date of this cell.
    pub date: NaiveDate,
    /// Whether the date belongs to the displayed month.
    pub in_month: bool,
    /// Incomplete tasks due this day.
    pub pending: usize,
    /// Pending tasks on a day strictly before today.
    pub overdue: bool,
}

/// A 42-cell month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    /// First day of the displayed month.
    pub first: NaiveDate,
    /// The cells, Sunday-first, exactly [`GRID_CELLS`] of them.
    pub cells: Vec<DayCell>,
}

/// Build the grid for the month containing `month`.
#[must_use]
pub fn month_grid(month: NaiveDate, items: &[Task], today_ms: i64) -> MonthGrid {
    let first = month.with_day(1).unwrap_or(month);
    let back = i64::from(first.weekday().num_days_from_sunday());
    let grid_start = first - Duration::days(back);
    let today = local_date(today_ms);

    let mut due_counts: HashMap<NaiveDate, usize> = HashMap::new();
    for task in items {
        if task.completed {
            continue;
        }
        if let Some(due) = task.due_at {
            *due_counts.entry(local_date(due)).or_insert(0) += 1;
        }
    }

    let cells = (0..GRID_CELLS as i64)
        .map(|offset| {
            let date = grid_start + Duration::days(offset);
            let pending = due_counts.get(&date).copied().unwrap_or(0);
            DayCell {
                date,
                in_month: date.month() == first.month() && date.year() == first.year(),
                pending,
                overdue: pending > 0 && date < today,
            }
        })
        .collect();

    MonthGrid { first, cells }
}

/// Epoch milliseconds of local midnight on a date.
///
/// When a DST transition skips midnight, the first representable instant
/// of the day is used instead.
#[must_use]
pub fn day_start_ms(date: NaiveDate) -> i64 {
    let midnight = date.and_time(NaiveTime::MIN);
    match midnight.and_local_timezone(Local) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.timestamp_millis(),
        LocalResult::None => (midnight + Duration::hours(1))
            .and_local_timezone(Local)
            .earliest()
            .map_or(0, |dt| dt.timestamp_millis()),
    }
}

/// The selected-day window for a timestamp: local midnight through the
/// next midnight minus one millisecond.
#[must_use]
pub fn day_bounds(ms: i64) -> (i64, i64) {
    let start = day_start_ms(local_date(ms));
    (start, start + DAY_MS - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskList;
    use chrono::Weekday;

    fn task_due(text: &str, due: Option<i64>, completed: bool) -> Task {
        let mut list = TaskList::new();
        list.add(text, due, 0);
        let mut task = list.items()[0].clone();
        if completed {
            task.completed = true;
            task.completed_at = Some(0);
        }
        task
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_always_has_42_cells_starting_sunday() {
        for (y, m) in [(2024, 2), (2025, 12), (2026, 1), (2026, 2), (2026, 8), (2027, 6)] {
            let grid = month_grid(date(y, m, 1), &[], 0);
            assert_eq!(grid.cells.len(), GRID_CELLS, "month {y}-{m}");
            assert_eq!(grid.cells[0].date.weekday(), Weekday::Sun, "month {y}-{m}");
        }
    }

    #[test]
    fn test_grid_start_is_on_or_before_the_first() {
        let grid = month_grid(date(2026, 8, 15), &[], 0);
        assert_eq!(grid.first, date(2026, 8, 1));
        assert!(grid.cells[0].date <= grid.first);
        assert!(grid.first - grid.cells[0].date < Duration::days(7));
    }

    #[test]
    fn test_in_month_flags() {
        let grid = month_grid(date(2026, 8, 1), &[], 0);
        let in_month = grid.cells.iter().filter(|c| c.in_month).count();
        assert_eq!(in_month, 31);
        // August 2026 starts on a Saturday, so the first six cells are July
        assert!(!grid.cells[0].in_month);
        assert!(grid.cells[6].in_month);
    }

    #[test]
    fn test_pending_counts_exclude_completed() {
        let day = date(2026, 8, 10);
        let due = day_start_ms(day);
        let items = vec![
            task_due("a", Some(due), false),
            task_due("b", Some(due + 3600_000), false),
            task_due("done", Some(due), true),
            task_due("undated", None, false),
        ];

        let today = day_start_ms(date(2026, 8, 1));
        let grid = month_grid(day, &items, today);
        let cell = grid.cells.iter().find(|c| c.date == day).unwrap();
        assert_eq!(cell.pending, 2);
        assert!(!cell.overdue);
    }

    #[test]
    fn test_overdue_is_strictly_before_today() {
        let yesterday = date(2026, 8, 9);
        let today = date(2026, 8, 10);
        let items = vec![
            task_due("late", Some(day_start_ms(yesterday)), false),
            task_due("today", Some(day_start_ms(today)), false),
        ];

        let grid = month_grid(today, &items, day_start_ms(today));
        let late = grid.cells.iter().find(|c| c.date == yesterday).unwrap();
        let current = grid.cells.iter().find(|c| c.date == today).unwrap();
        assert!(late.overdue);
        assert!(!current.overdue);
    }

    #[test]
    fn test_day_bounds_cover_exactly_one_day() {
        let start = day_start_ms(date(2026, 3, 5));
        let (lo, hi) = day_bounds(start + 12 * 3600_000);
        assert_eq!(lo, start);
        assert_eq!(hi, start + DAY_MS - 1);
    }
}
