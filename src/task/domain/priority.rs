//! Task priority scale.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Task urgency on a closed 1..=5 scale, where 1 is the most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Priority(u8);

impl Priority {
    /// Most urgent priority.
    pub const HIGHEST: Self = Self(1);
    /// Priority assigned to newly created tasks.
    pub const MEDIUM: Self = Self(3);
    /// Least urgent priority.
    pub const LOWEST: Self = Self(5);

    /// Creates a validated priority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPriority`] when `value` is outside
    /// `1..=5`.
    pub fn new(value: i64) -> Result<Self, TaskDomainError> {
        u8::try_from(value)
            .ok()
            .filter(|candidate| (Self::HIGHEST.0..=Self::LOWEST.0).contains(candidate))
            .map(Self)
            .ok_or(TaskDomainError::InvalidPriority(value))
    }

    /// Returns the numeric priority.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` for the medium priority new tasks start with.
    #[must_use]
    pub const fn is_default(self) -> bool {
        self.0 == Self::MEDIUM.0
    }

    /// Returns the human-readable label for this priority.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "Highest",
            2 => "High",
            3 => "Medium",
            4 => "Low",
            _ => "Lowest",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::MEDIUM
    }
}

impl TryFrom<i64> for Priority {
    type Error = TaskDomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parses either a priority name (`highest` .. `lowest`) or a number.
impl FromStr for Priority {
    type Err = TaskDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "highest" => Ok(Self(1)),
            "high" => Ok(Self(2)),
            "medium" => Ok(Self(3)),
            "low" => Ok(Self(4)),
            "lowest" => Ok(Self(5)),
            other => other
                .parse::<i64>()
                .map_err(|_| TaskDomainError::InvalidPriorityText(value.to_owned()))
                .and_then(Self::new),
        }
    }
}
