//! Shared fixtures for task unit tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::task::domain::{Task, TaskId};

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32) -> Self {
        Self(
            Utc.with_ymd_and_hms(year, month, day, 9, 30, 0)
                .single()
                .expect("valid fixed clock instant"),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn utc_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid calendar date")
}

/// Builds a task with the given priority and optional due date.
pub fn task_with(id: u64, priority: i64, due_date: Option<DateTime<Utc>>) -> Task {
    let mut task = Task::new(
        TaskId::new(id),
        format!("task {id}"),
        "",
        &FixedClock::at(2024, 1, 1),
    );
    task.set_priority(priority).expect("valid priority");
    task.set_due_date(due_date);
    task
}

pub fn ids(tasks: &[Task]) -> Vec<u64> {
    tasks.iter().map(|task| task.id().value()).collect()
}
