// TaskList - In-memory task list with priorities, filters and live statistics

pub mod config;
pub mod filter;
pub mod priority;
pub mod prompt;
pub mod render;
pub mod shell;
pub mod stats;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use config::Settings;
pub use filter::{FilterType, filter_tasks};
pub use priority::{PRIORITY_TABLE, Priority, PriorityColor};
pub use prompt::{AssumeYes, Confirmation, Notice, Prompt, Scripted};
pub use stats::{Stats, calculate_stats};
pub use store::{AddOutcome, ClearOutcome, DeleteOutcome, Rejection, TaskStore, is_duplicate, validate_text};
pub use task::{Task, TaskId, now_ms};
