// In-memory task store: creation, toggling, deletion, filtering, stats and sorting

use crate::config::Settings;
use crate::filter::{self, FilterType};
use crate::priority::Priority;
use crate::prompt::{Confirmation, Notice, Prompt};
use crate::stats::{self, Stats};
use crate::task::{Task, TaskId};
use std::cmp::Reverse;
use tracing::{debug, info};

/// Demo tasks loaded by `TaskStore::with_seed_tasks`: (text, priority, completed)
const SEED_TASKS: [(&str, Priority, bool); 3] = [
    ("Complete JavaScript assignment", Priority::High, false),
    ("Study for exam", Priority::Medium, false),
    ("Buy groceries", Priority::Low, true),
];

/// Why a new task's text was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    TooLong { max: usize },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::Empty => write!(f, "Please enter a task!"),
            Rejection::TooLong { max } => write!(f, "Task is too long! Maximum {} characters.", max),
        }
    }
}

/// Result of `TaskStore::add_task`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Created(TaskId),
    Rejected(Rejection),
    /// Duplicate confirmation was declined
    Declined,
}

/// Result of `TaskStore::delete_task`
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Removed(Task),
    NotFound,
    Declined,
}

/// Result of `TaskStore::clear_completed_tasks`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    NothingToClear,
    Cleared(usize),
    Declined,
}

/// Trim and validate raw task text against the settings
///
/// Length is measured in characters, not bytes.
pub fn validate_text(raw: &str, settings: &Settings) -> Result<String, Rejection> {
    let text = raw.trim();

    if text.is_empty() && !settings.allow_empty_tasks {
        return Err(Rejection::Empty);
    }

    if text.chars().count() > settings.max_task_length {
        return Err(Rejection::TooLong {
            max: settings.max_task_length,
        });
    }

    Ok(text.to_string())
}

/// True if an incomplete task already has this text, ignoring case
///
/// Completed tasks never count as duplicates.
pub fn is_duplicate(tasks: &[Task], text: &str) -> bool {
    let wanted = text.trim().to_lowercase();
    tasks
        .iter()
        .any(|task| !task.completed && task.text.to_lowercase() == wanted)
}

/// Sole owner of the task collection
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    current_filter: FilterType,
    settings: Settings,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl TaskStore {
    /// Create an empty store
    pub fn new(settings: Settings) -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            current_filter: FilterType::All,
            settings,
        }
    }

    /// Create a store preloaded with the demo tasks
    pub fn with_seed_tasks(settings: Settings) -> Self {
        let mut store = Self::new(settings);
        for (text, priority, completed) in SEED_TASKS {
            let id = store.insert(text.to_string(), priority);
            if completed {
                store.toggle_task(id);
            }
        }
        info!(count = store.len(), "Loaded seed tasks");
        store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Tasks in working order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Validate, check for duplicates, and append a new task
    ///
    /// Rejections are reported through `prompt.notify`. A duplicate of an
    /// incomplete task is only added once `prompt.confirm` agrees.
    pub fn add_task<P: Prompt + ?Sized>(&mut self, raw_text: &str, priority: Priority, prompt: &mut P) -> AddOutcome {
        let text = match validate_text(raw_text, &self.settings) {
            Ok(text) => text,
            Err(rejection) => {
                debug!(?rejection, "add_task: rejected");
                prompt.notify(&Notice::Rejected(rejection));
                return AddOutcome::Rejected(rejection);
            }
        };

        if is_duplicate(&self.tasks, &text) {
            let request = Confirmation::DuplicateTask { text: text.clone() };
            if !prompt.confirm(&request) {
                debug!(text = %text, "add_task: duplicate declined");
                return AddOutcome::Declined;
            }
        }

        AddOutcome::Created(self.insert(text, priority))
    }

    /// Flip completion on a task. Returns the new state, or `None` if absent.
    pub fn toggle_task(&mut self, id: TaskId) -> Option<bool> {
        let task = self.tasks.iter_mut().find(|task| task.id == id)?;
        task.completed = !task.completed;
        debug!(%id, completed = task.completed, "toggle_task");
        Some(task.completed)
    }

    /// Remove a task after confirmation
    ///
    /// Unknown ids return `NotFound` without asking.
    pub fn delete_task<P: Prompt + ?Sized>(&mut self, id: TaskId, prompt: &mut P) -> DeleteOutcome {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            debug!(%id, "delete_task: not found");
            return DeleteOutcome::NotFound;
        };

        if !prompt.confirm(&Confirmation::DeleteTask { id }) {
            return DeleteOutcome::Declined;
        }

        let task = self.tasks.remove(index);
        debug!(%id, remaining = self.tasks.len(), "delete_task: removed");
        DeleteOutcome::Removed(task)
    }

    /// Remove every completed task after confirming the count
    pub fn clear_completed_tasks<P: Prompt + ?Sized>(&mut self, prompt: &mut P) -> ClearOutcome {
        let count = self.tasks.iter().filter(|task| task.completed).count();

        if count == 0 {
            prompt.notify(&Notice::NothingToClear);
            return ClearOutcome::NothingToClear;
        }

        if !prompt.confirm(&Confirmation::ClearCompleted { count }) {
            return ClearOutcome::Declined;
        }

        self.tasks.retain(|task| !task.completed);
        debug!(count, remaining = self.tasks.len(), "clear_completed_tasks");
        ClearOutcome::Cleared(count)
    }

    /// Reorder the working list by descending priority weight
    ///
    /// The sort is stable and the new order persists until the next sort;
    /// later additions are appended after it.
    pub fn sort_by_priority(&mut self) {
        self.tasks.sort_by_key(|task| Reverse(task.priority.weight()));
        debug!(count = self.tasks.len(), "sort_by_priority");
    }

    pub fn set_filter(&mut self, filter: FilterType) {
        debug!(%filter, "set_filter");
        self.current_filter = filter;
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn current_filter(&self) -> FilterType {
        self.current_filter
    }

    pub fn filter_tasks(&self, filter: FilterType) -> Vec<&Task> {
        filter::filter_tasks(&self.tasks, filter)
    }

    /// Tasks matching the current filter
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.filter_tasks(self.current_filter)
    }

    pub fn calculate_stats(&self) -> Stats {
        stats::calculate_stats(&self.tasks)
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn insert(&mut self, text: String, priority: Priority) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;

        self.tasks.push(Task::new(id, text, priority));
        debug!(%id, %priority, count = self.tasks.len(), "insert: appended task");
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{AssumeYes, Scripted};

    fn store_with(tasks: &[(&str, Priority, bool)]) -> TaskStore {
        let mut store = TaskStore::default();
        for (text, priority, completed) in tasks {
            let AddOutcome::Created(id) = store.add_task(text, *priority, &mut AssumeYes) else {
                panic!("failed to add {}", text);
            };
            if *completed {
                store.toggle_task(id);
            }
        }
        store
    }

    fn texts(store: &TaskStore) -> Vec<&str> {
        store.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_validate_text_trims() {
        let settings = Settings::default();
        assert_eq!(validate_text("  Buy milk \n", &settings), Ok("Buy milk".to_string()));
    }

    #[test]
    fn test_validate_text_empty() {
        let settings = Settings::default();
        assert_eq!(validate_text("", &settings), Err(Rejection::Empty));
        assert_eq!(validate_text("   ", &settings), Err(Rejection::Empty));

        let permissive = Settings {
            allow_empty_tasks: true,
            ..Settings::default()
        };
        assert_eq!(validate_text("  ", &permissive), Ok(String::new()));
    }

    #[test]
    fn test_validate_text_length_boundary() {
        let settings = Settings {
            max_task_length: 5,
            ..Settings::default()
        };
        assert!(validate_text("abcde", &settings).is_ok());
        assert_eq!(validate_text("abcdef", &settings), Err(Rejection::TooLong { max: 5 }));
        // Counted in characters
        assert!(validate_text("ééééé", &settings).is_ok());
    }

    #[test]
    fn test_add_task_assigns_sequential_ids() {
        let mut store = TaskStore::default();
        let mut prompt = Scripted::declining();

        assert_eq!(
            store.add_task("First", Priority::Low, &mut prompt),
            AddOutcome::Created(TaskId(1))
        );
        assert_eq!(
            store.add_task("Second", Priority::High, &mut prompt),
            AddOutcome::Created(TaskId(2))
        );

        let task = store.get(TaskId(2)).unwrap();
        assert_eq!(task.text, "Second");
        assert_eq!(task.priority, Priority::High);
        assert!(!task.completed);
        assert!(prompt.asked.is_empty());
    }

    #[test]
    fn test_add_task_rejection_notifies_and_leaves_store_unchanged() {
        let mut store = store_with(&[("Existing", Priority::Low, false)]);
        let mut prompt = Scripted::declining();

        let outcome = store.add_task("   ", Priority::High, &mut prompt);
        assert_eq!(outcome, AddOutcome::Rejected(Rejection::Empty));
        assert_eq!(store.len(), 1);
        assert_eq!(prompt.notices, vec![Notice::Rejected(Rejection::Empty)]);

        let long = "x".repeat(101);
        let outcome = store.add_task(&long, Priority::High, &mut prompt);
        assert_eq!(outcome, AddOutcome::Rejected(Rejection::TooLong { max: 100 }));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_rejection_does_not_consume_id() {
        let mut store = TaskStore::default();
        let mut prompt = Scripted::declining();

        store.add_task("", Priority::Low, &mut prompt);
        assert_eq!(
            store.add_task("Real", Priority::Low, &mut prompt),
            AddOutcome::Created(TaskId(1))
        );
    }

    #[test]
    fn test_duplicate_requires_confirmation() {
        let mut store = store_with(&[("buy milk", Priority::Low, false)]);

        let mut prompt = Scripted::declining();
        assert_eq!(
            store.add_task("Buy milk", Priority::High, &mut prompt),
            AddOutcome::Declined
        );
        assert_eq!(store.len(), 1);
        assert_eq!(
            prompt.asked,
            vec![Confirmation::DuplicateTask {
                text: "Buy milk".to_string()
            }]
        );

        let mut prompt = Scripted::new([true]);
        assert_eq!(
            store.add_task("  BUY MILK ", Priority::High, &mut prompt),
            AddOutcome::Created(TaskId(2))
        );
        assert_eq!(texts(&store), vec!["buy milk", "BUY MILK"]);
    }

    #[test]
    fn test_duplicate_of_completed_task_is_not_flagged() {
        let mut store = store_with(&[("buy milk", Priority::Low, true)]);
        let mut prompt = Scripted::declining();

        assert!(matches!(
            store.add_task("Buy milk", Priority::Low, &mut prompt),
            AddOutcome::Created(_)
        ));
        assert!(prompt.asked.is_empty());
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let mut store = store_with(&[("A", Priority::Low, false), ("B", Priority::Low, false)]);

        store.delete_task(TaskId(2), &mut AssumeYes);
        assert_eq!(
            store.add_task("C", Priority::Low, &mut AssumeYes),
            AddOutcome::Created(TaskId(3))
        );
    }

    #[test]
    fn test_toggle_task() {
        let mut store = store_with(&[("A", Priority::Low, false)]);

        assert_eq!(store.toggle_task(TaskId(1)), Some(true));
        assert!(store.get(TaskId(1)).unwrap().completed);
        assert_eq!(store.toggle_task(TaskId(1)), Some(false));
        assert_eq!(store.toggle_task(TaskId(99)), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_task() {
        let mut store = store_with(&[("A", Priority::Low, false), ("B", Priority::High, false)]);

        let mut prompt = Scripted::declining();
        assert_eq!(store.delete_task(TaskId(1), &mut prompt), DeleteOutcome::Declined);
        assert_eq!(store.len(), 2);

        let mut prompt = Scripted::new([true]);
        let outcome = store.delete_task(TaskId(1), &mut prompt);
        assert!(matches!(outcome, DeleteOutcome::Removed(ref task) if task.text == "A"));
        assert_eq!(texts(&store), vec!["B"]);
        assert_eq!(prompt.asked, vec![Confirmation::DeleteTask { id: TaskId(1) }]);
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let mut store = store_with(&[("A", Priority::Low, false)]);
        let before = store.tasks().to_vec();
        let mut prompt = Scripted::new([true]);

        assert_eq!(store.delete_task(TaskId(42), &mut prompt), DeleteOutcome::NotFound);
        assert_eq!(store.tasks(), before.as_slice());
        assert!(prompt.asked.is_empty());
    }

    #[test]
    fn test_clear_completed_tasks() {
        let mut store = store_with(&[
            ("T1", Priority::High, true),
            ("T2", Priority::Low, false),
            ("T3", Priority::Medium, true),
        ]);
        let mut prompt = Scripted::new([true]);

        assert_eq!(store.clear_completed_tasks(&mut prompt), ClearOutcome::Cleared(2));
        assert_eq!(texts(&store), vec!["T2"]);
        assert_eq!(prompt.asked, vec![Confirmation::ClearCompleted { count: 2 }]);
    }

    #[test]
    fn test_clear_completed_adjacent_matches() {
        let mut store = store_with(&[
            ("A", Priority::Low, true),
            ("B", Priority::Low, true),
            ("C", Priority::Low, true),
            ("D", Priority::Low, false),
            ("E", Priority::Low, true),
        ]);

        assert_eq!(store.clear_completed_tasks(&mut AssumeYes), ClearOutcome::Cleared(4));
        assert_eq!(texts(&store), vec!["D"]);
    }

    #[test]
    fn test_clear_completed_nothing_to_clear() {
        let mut store = store_with(&[("A", Priority::Low, false)]);
        let mut prompt = Scripted::new([true]);

        assert_eq!(store.clear_completed_tasks(&mut prompt), ClearOutcome::NothingToClear);
        assert!(prompt.asked.is_empty());
        assert_eq!(prompt.notices, vec![Notice::NothingToClear]);
        assert_eq!(prompt.remaining(), 1);
    }

    #[test]
    fn test_clear_completed_declined() {
        let mut store = store_with(&[("A", Priority::Low, true), ("B", Priority::Low, false)]);

        assert_eq!(
            store.clear_completed_tasks(&mut Scripted::declining()),
            ClearOutcome::Declined
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_sort_by_priority_is_stable() {
        let mut store = store_with(&[
            ("A", Priority::High, false),
            ("B", Priority::Low, false),
            ("C", Priority::High, false),
            ("D", Priority::Medium, false),
        ]);

        store.sort_by_priority();
        assert_eq!(texts(&store), vec!["A", "C", "D", "B"]);

        // Idempotent
        store.sort_by_priority();
        assert_eq!(texts(&store), vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn test_add_after_sort_appends() {
        let mut store = store_with(&[("Low", Priority::Low, false), ("High", Priority::High, false)]);
        store.sort_by_priority();

        store.add_task("Another high", Priority::High, &mut AssumeYes);
        assert_eq!(texts(&store), vec!["High", "Low", "Another high"]);
    }

    #[test]
    fn test_current_filter_persists_across_mutations() {
        let mut store = store_with(&[("A", Priority::Low, false), ("B", Priority::Low, true)]);
        store.set_filter(FilterType::Pending);

        store.add_task("C", Priority::High, &mut AssumeYes);
        store.toggle_task(TaskId(1));

        assert_eq!(store.current_filter(), FilterType::Pending);
        let visible: Vec<&str> = store.visible_tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(visible, vec!["C"]);
    }

    #[test]
    fn test_seed_tasks() {
        let store = TaskStore::with_seed_tasks(Settings::default());

        assert_eq!(store.len(), 3);
        let stats = store.calculate_stats();
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.high_priority, 1);
        assert_eq!(stats.medium_priority, 1);
        assert_eq!(stats.low_priority, 1);
        assert!(store.get(TaskId(3)).unwrap().completed);

        let mut store = store;
        assert_eq!(
            store.add_task("Next", Priority::Low, &mut AssumeYes),
            AddOutcome::Created(TaskId(4))
        );
    }
}
