// View filtering by completion status

use crate::task::Task;
use serde::{Deserialize, Serialize};

/// Named predicate selecting a subset of the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    All,
    Completed,
    Pending,
}

impl FilterType {
    /// Parse a filter name. Unknown names fall back to `All`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "completed" => FilterType::Completed,
            "pending" => FilterType::Pending,
            _ => FilterType::All,
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            FilterType::All => true,
            FilterType::Completed => task.completed,
            FilterType::Pending => !task.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterType::All => "all",
            FilterType::Completed => "completed",
            FilterType::Pending => "pending",
        }
    }

    /// Text shown when the filtered view is empty
    pub fn empty_message(self) -> String {
        match self {
            FilterType::All => "No tasks yet. Add one above to get started!".to_string(),
            other => format!("No {} tasks found.", other),
        }
    }
}

impl std::fmt::Display for FilterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for FilterType {
    fn from(name: &str) -> Self {
        FilterType::parse(name)
    }
}

/// Select the tasks matching `filter`, preserving source order
pub fn filter_tasks(tasks: &[Task], filter: FilterType) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}
