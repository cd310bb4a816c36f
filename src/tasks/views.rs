//! Derived views over the task list.
//!
//! These are pure projections recomputed from the canonical list; nothing
//! here mutates or caches state.

use crate::tasks::calendar::day_bounds;
use crate::tasks::models::{Filter, Task};

/// Filter items by completion mode and, optionally, by a selected day.
///
/// `selected_day` is any timestamp within the wanted local day; items
/// qualify when their due date falls between that day's midnight and the
/// next midnight minus one millisecond.
#[must_use]
pub fn filtered<'a>(items: &'a [Task], filter: Filter, selected_day: Option<i64>) -> Vec<&'a Task> {
    let window = selected_day.map(day_bounds);
    items
        .iter()
        .filter(|t| filter.accepts(t))
        .filter(|t| match window {
            None => true,
            Some((start, end)) => t.due_at.is_some_and(|due| due >= start && due <= end),
        })
        .collect()
}

/// Count of incomplete items.
#[must_use]
pub fn remaining(items: &[Task]) -> usize {
    items.iter().filter(|t| !t.completed).count()
}
