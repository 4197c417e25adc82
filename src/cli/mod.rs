//! Command-line adapter over the task registry.
//!
//! Commands are parsed by [`Cli`], executed against a [`TaskRegistry`] and
//! rendered as text to any [`Write`] sink.

mod args;

pub use args::{Cli, Command, ListArgs, SortOrder};

use std::io::{self, Write};

use mockable::Clock;
use thiserror::Error;

use crate::task::{
    domain::{Priority, Task, format_task_list, parse_due_date},
    ports::TaskStorage,
    services::{TaskRegistry, TaskRegistryError, sort_by_due_date, sort_by_priority},
};

/// Errors surfaced by command execution.
#[derive(Debug, Error)]
pub enum CliError {
    /// The registry rejected the operation.
    #[error(transparent)]
    Registry(#[from] TaskRegistryError),

    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Runs `command` against `registry`, writing human-readable output to
/// `out`. With no command the pending tasks are listed.
///
/// # Errors
///
/// Returns [`CliError::Registry`] when the registry operation fails and
/// [`CliError::Output`] when `out` cannot be written.
pub fn execute<S, C>(
    requested: Option<Command>,
    registry: &mut TaskRegistry<S, C>,
    out: &mut impl Write,
) -> Result<(), CliError>
where
    S: TaskStorage,
    C: Clock + Send + Sync,
{
    let Some(command) = requested else {
        return write_listing(out, "Pending Tasks:", &registry.list_pending(), ListArgs::default());
    };

    match command {
        Command::Add { title, description } => {
            let task = registry.add(&title, &description.join(" "))?;
            writeln!(out, "Task added: {}", task.summary())?;
        }
        Command::List(list) | Command::ListPending(list) => {
            write_listing(out, "Pending Tasks:", &registry.list_pending(), list)?;
        }
        Command::ListAll(list) => {
            let tasks = registry.list_all();
            if tasks.is_empty() {
                writeln!(out, "No tasks found.")?;
            } else {
                write_listing(out, "All Tasks:", &tasks, list)?;
            }
        }
        Command::ListCompleted(list) => {
            write_listing(out, "Completed Tasks:", &registry.list_completed(), list)?;
        }
        Command::ListOverdue(list) => {
            write_listing(out, "Overdue Tasks:", &registry.list_overdue(), list)?;
        }
        Command::Detail { id } => {
            writeln!(out, "{}", registry.get(id)?.detail())?;
        }
        Command::Complete { id } => {
            registry.mark_complete(id)?;
            writeln!(out, "Task {id} marked as completed.")?;
        }
        Command::Uncomplete { id } => {
            registry.mark_incomplete(id)?;
            writeln!(out, "Task {id} marked as uncompleted.")?;
        }
        Command::Update {
            id,
            title,
            description,
        } => {
            registry.update(id, &title, &description.join(" "))?;
            writeln!(out, "Task updated: {id}")?;
        }
        Command::Delete { id } => {
            registry.delete(id)?;
            writeln!(out, "Task {id} deleted successfully.")?;
        }
        Command::Due { id, date } => {
            let due_date = parse_due_date(&date).map_err(TaskRegistryError::from)?;
            registry.set_due_date(id, due_date)?;
            writeln!(out, "Due date set for task {id}.")?;
        }
        Command::Priority { id, priority } => {
            let parsed: Priority = priority.parse().map_err(TaskRegistryError::from)?;
            registry.set_priority(id, i64::from(parsed.value()))?;
            writeln!(out, "Priority set for task {id}.")?;
        }
        Command::Stats => {
            let stats = registry.stats();
            writeln!(out, "Task Statistics:")?;
            writeln!(out, "Total Tasks: {}", stats.total)?;
            writeln!(out, "Completed Tasks: {}", stats.completed)?;
            writeln!(out, "Pending Tasks: {}", stats.pending)?;
            writeln!(out, "Overdue Tasks: {}", stats.overdue)?;
        }
    }
    Ok(())
}

fn write_listing(
    out: &mut impl Write,
    heading: &str,
    tasks: &[Task],
    list: ListArgs,
) -> Result<(), CliError> {
    let ordered = match list.sort {
        Some(SortOrder::Priority) => sort_by_priority(tasks),
        Some(SortOrder::Due) => sort_by_due_date(tasks),
        None => tasks.to_vec(),
    };
    writeln!(out, "{heading}")?;
    writeln!(out, "{}", format_task_list(&ordered, list.detailed))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::adapters::memory::InMemoryTaskStorage;
    use crate::task::domain::TaskId;
    use chrono::{DateTime, Local, TimeZone, Utc};
    use clap::Parser;
    use rstest::{fixture, rstest};
    use std::sync::Arc;

    struct NoonClock;

    impl Clock for NoonClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 5, 5, 12, 0, 0)
                .single()
                .expect("valid instant")
        }
    }

    type Registry = TaskRegistry<InMemoryTaskStorage, NoonClock>;

    #[fixture]
    fn registry() -> Registry {
        TaskRegistry::new(InMemoryTaskStorage::new(), Arc::new(NoonClock))
            .expect("in-memory load succeeds")
    }

    fn run(registry: &mut Registry, argv: &[&str]) -> Result<String, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("taskman").chain(argv.iter().copied()))
            .expect("arguments parse");
        let mut out = Vec::new();
        execute(cli.command, registry, &mut out)?;
        Ok(String::from_utf8(out).expect("output is UTF-8"))
    }

    #[rstest]
    fn add_joins_description_words(mut registry: Registry) {
        let output = run(&mut registry, &["add", "Buy groceries", "Milk,", "eggs"])
            .expect("add succeeds");

        assert_eq!(output, "Task added: [ ] 1 Buy groceries\n");
        let task = registry.get(TaskId::new(1)).expect("task exists");
        assert_eq!(task.description(), "Milk, eggs");
    }

    #[rstest]
    #[case(&["a", "Short alias"])]
    #[case(&["add", "Long form"])]
    fn add_aliases_are_equivalent(mut registry: Registry, #[case] argv: &[&str]) {
        run(&mut registry, argv).expect("add succeeds");
        assert_eq!(registry.len(), 1);
    }

    #[rstest]
    fn no_command_lists_pending_tasks(mut registry: Registry) {
        run(&mut registry, &["add", "Open"]).expect("add");
        run(&mut registry, &["add", "Done"]).expect("add");
        run(&mut registry, &["c", "2"]).expect("complete");

        let output = run(&mut registry, &[]).expect("list succeeds");

        assert_eq!(output, "Pending Tasks:\n[ ] 1 Open\n");
    }

    #[rstest]
    fn list_all_reports_empty_registry(mut registry: Registry) {
        assert_eq!(
            run(&mut registry, &["la"]).expect("list succeeds"),
            "No tasks found.\n"
        );
    }

    #[rstest]
    fn list_sorted_by_priority(mut registry: Registry) {
        run(&mut registry, &["add", "later"]).expect("add");
        run(&mut registry, &["add", "now"]).expect("add");
        run(&mut registry, &["p", "2", "highest"]).expect("priority");

        let output = run(&mut registry, &["list-all", "--sort", "priority"]).expect("list");

        assert_eq!(
            output,
            "All Tasks:\n[ ] 2 now - Priority: Highest\n[ ] 1 later\n"
        );
    }

    #[rstest]
    fn due_and_priority_round_trip_through_detail(mut registry: Registry) {
        run(&mut registry, &["add", "Taxes"]).expect("add");
        assert_eq!(
            run(&mut registry, &["due", "1", "2024-04-15"]).expect("due"),
            "Due date set for task 1.\n"
        );
        assert_eq!(
            run(&mut registry, &["priority", "1", "4"]).expect("priority"),
            "Priority set for task 1.\n"
        );

        let detail = run(&mut registry, &["d", "1"]).expect("detail");

        assert!(detail.contains("Due: 2024-04-15"));
        assert!(detail.contains("Priority: Low"));
    }

    #[rstest]
    #[case(&["p", "1", "9"])]
    #[case(&["p", "1", "-1"])]
    #[case(&["p", "1", "urgent"])]
    #[case(&["due", "1", "15/04/2024"])]
    fn malformed_values_are_validation_errors(mut registry: Registry, #[case] argv: &[&str]) {
        run(&mut registry, &["add", "Target"]).expect("add");

        let result = run(&mut registry, argv);

        assert!(matches!(
            result,
            Err(CliError::Registry(TaskRegistryError::Validation(_)))
        ));
    }

    #[rstest]
    fn unknown_ids_are_reported(mut registry: Registry) {
        let result = run(&mut registry, &["rm", "5"]);
        assert!(matches!(
            result,
            Err(CliError::Registry(TaskRegistryError::NotFound(_)))
        ));
    }

    #[rstest]
    fn stats_prints_all_counters(mut registry: Registry) {
        run(&mut registry, &["add", "one"]).expect("add");
        run(&mut registry, &["add", "two"]).expect("add");
        run(&mut registry, &["complete", "1"]).expect("complete");

        let output = run(&mut registry, &["st"]).expect("stats");

        assert_eq!(
            output,
            "Task Statistics:\nTotal Tasks: 2\nCompleted Tasks: 1\nPending Tasks: 1\nOverdue Tasks: 1\n"
        );
    }

    #[rstest]
    fn update_and_uncomplete_report_their_ids(mut registry: Registry) {
        run(&mut registry, &["add", "Draft"]).expect("add");
        run(&mut registry, &["c", "1"]).expect("complete");

        assert_eq!(
            run(&mut registry, &["u", "1", "Final", "with", "notes"]).expect("update"),
            "Task updated: 1\n"
        );
        assert_eq!(
            run(&mut registry, &["uc", "1"]).expect("uncomplete"),
            "Task 1 marked as uncompleted.\n"
        );
        let task = registry.get(TaskId::new(1)).expect("task exists");
        assert_eq!(task.title(), "Final");
        assert_eq!(task.description(), "with notes");
        assert!(!task.is_completed());
    }
}
