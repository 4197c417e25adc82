//! Command-line argument model.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::ConfigArgs;
use crate::task::domain::TaskId;

/// Personal task tracker.
#[derive(Debug, Parser)]
#[command(name = "taskman", version, about = "Personal task tracker with a CLI and a REST API")]
pub struct Cli {
    /// Global options.
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Command to run; lists pending tasks when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Task commands.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a new task.
    #[command(visible_alias = "a")]
    Add {
        /// Task title.
        title: String,
        /// Optional description words.
        description: Vec<String>,
    },

    /// List pending tasks.
    #[command(visible_aliases = ["ls", "l"])]
    List(ListArgs),

    /// List all tasks.
    #[command(visible_alias = "la")]
    ListAll(ListArgs),

    /// List completed tasks.
    #[command(visible_alias = "lc")]
    ListCompleted(ListArgs),

    /// List pending tasks.
    #[command(visible_alias = "lp")]
    ListPending(ListArgs),

    /// List overdue tasks.
    #[command(visible_alias = "lo")]
    ListOverdue(ListArgs),

    /// Show every field of one task.
    #[command(visible_alias = "d")]
    Detail {
        /// Task identifier.
        id: TaskId,
    },

    /// Mark a task as complete.
    #[command(visible_aliases = ["comp", "c"])]
    Complete {
        /// Task identifier.
        id: TaskId,
    },

    /// Mark a task as incomplete.
    #[command(visible_alias = "uc")]
    Uncomplete {
        /// Task identifier.
        id: TaskId,
    },

    /// Update a task's title and, optionally, description.
    #[command(visible_alias = "u")]
    Update {
        /// Task identifier.
        id: TaskId,
        /// New title; an empty string keeps the current one.
        title: String,
        /// New description words; omitted keeps the current one.
        description: Vec<String>,
    },

    /// Delete a task.
    #[command(visible_aliases = ["del", "rm"])]
    Delete {
        /// Task identifier.
        id: TaskId,
    },

    /// Set a task's due date (`YYYY-MM-DD`, empty clears it).
    #[command(visible_alias = "due-date")]
    Due {
        /// Task identifier.
        id: TaskId,
        /// Due date.
        date: String,
    },

    /// Set a task's priority (1-5 or highest/high/medium/low/lowest).
    #[command(visible_alias = "p")]
    Priority {
        /// Task identifier.
        id: TaskId,
        /// Priority number or name.
        #[arg(allow_hyphen_values = true)]
        priority: String,
    },

    /// Show task statistics.
    #[command(visible_alias = "st")]
    Stats,
}

/// Presentation options for list commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Args)]
pub struct ListArgs {
    /// Order the listing.
    #[arg(long, value_enum)]
    pub sort: Option<SortOrder>,

    /// Print every field instead of one line per task.
    #[arg(long)]
    pub detailed: bool,
}

/// Orderings available to list commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    /// Most urgent first.
    Priority,
    /// Earliest due date first, undated last.
    Due,
}
