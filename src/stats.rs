// Aggregate counts over the task list

use crate::priority::Priority;
use crate::task::Task;
use serde::{Deserialize, Serialize};

/// Summary counts for a task collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub high_priority: usize,
    pub medium_priority: usize,
    pub low_priority: usize,
}

impl Stats {
    /// Count for a single priority
    pub fn priority_count(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high_priority,
            Priority::Medium => self.medium_priority,
            Priority::Low => self.low_priority,
        }
    }
}

/// Tally completion status and priority across the whole collection
///
/// Priority counts ignore completion: a completed high-priority task still
/// counts toward `high_priority`.
pub fn calculate_stats(tasks: &[Task]) -> Stats {
    let mut stats = Stats {
        total: tasks.len(),
        ..Stats::default()
    };

    for task in tasks {
        if task.completed {
            stats.completed += 1;
        } else {
            stats.pending += 1;
        }

        match task.priority {
            Priority::High => stats.high_priority += 1,
            Priority::Medium => stats.medium_priority += 1,
            Priority::Low => stats.low_priority += 1,
        }
    }

    stats
}
