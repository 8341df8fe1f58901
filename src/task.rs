// Task entity

use crate::priority::Priority;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Store-assigned task identifier, never reused within a store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(TaskId)
    }
}

/// A single task in the list
///
/// `text`, `priority` and `created_at` are write-once; only `completed`
/// changes after creation, and only through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub priority: Priority,
    pub completed: bool,
    /// Creation time in milliseconds since epoch
    pub created_at: i64,
}

impl Task {
    pub(crate) fn new(id: TaskId, text: String, priority: Priority) -> Self {
        Self {
            id,
            text,
            priority,
            completed: false,
            created_at: now_ms(),
        }
    }

    /// Creation time in the local timezone
    pub fn created_at_local(&self) -> Option<DateTime<Local>> {
        DateTime::from_timestamp_millis(self.created_at).map(|dt| dt.with_timezone(&Local))
    }

    /// Creation time formatted for display
    pub fn created_at_display(&self) -> String {
        match self.created_at_local() {
            Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => "unknown".to_string(),
        }
    }
}

// Helper function for timestamps
pub fn now_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}
