//! Stable orderings over task lists.

use crate::task::domain::Task;

/// Returns a copy of `tasks` ordered from most to least urgent priority.
///
/// Tasks sharing a priority keep their input order.
#[must_use]
pub fn sort_by_priority(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(Task::priority);
    sorted
}

/// Returns a copy of `tasks` ordered by ascending due date.
///
/// Tasks without a due date follow every dated task and keep their input
/// order among themselves.
#[must_use]
pub fn sort_by_due_date(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by_key(|task| (task.due_date().is_none(), task.due_date()));
    sorted
}
