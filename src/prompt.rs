// Confirmation and notification capability supplied by the caller

use crate::store::Rejection;
use crate::task::TaskId;
use std::collections::VecDeque;

/// A decision the store needs the user to make before mutating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// An incomplete task with the same text already exists
    DuplicateTask { text: String },
    DeleteTask { id: TaskId },
    ClearCompleted { count: usize },
}

impl std::fmt::Display for Confirmation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confirmation::DuplicateTask { .. } => write!(f, "A similar task already exists. Add anyway?"),
            Confirmation::DeleteTask { .. } => write!(f, "Are you sure you want to delete this task?"),
            Confirmation::ClearCompleted { count } => {
                write!(f, "Are you sure you want to delete {} completed task(s)?", count)
            }
        }
    }
}

/// Informational message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Rejected(Rejection),
    NothingToClear,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Rejected(rejection) => write!(f, "{}", rejection),
            Notice::NothingToClear => write!(f, "No completed tasks to clear!"),
        }
    }
}

/// User interaction the store calls into
///
/// `confirm` blocks until the user answers; no other mutation can run
/// while a confirmation is pending.
pub trait Prompt {
    fn confirm(&mut self, request: &Confirmation) -> bool;

    fn notify(&mut self, notice: &Notice);
}

/// Confirms everything and drops notices
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Prompt for AssumeYes {
    fn confirm(&mut self, _request: &Confirmation) -> bool {
        true
    }

    fn notify(&mut self, _notice: &Notice) {}
}

/// Deterministic prompt for headless use
///
/// Answers confirmations from a queue (declining once it runs dry) and
/// records every request and notice it receives.
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    answers: VecDeque<bool>,
    pub asked: Vec<Confirmation>,
    pub notices: Vec<Notice>,
}

impl Scripted {
    pub fn new<I: IntoIterator<Item = bool>>(answers: I) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Prompt that declines every confirmation
    pub fn declining() -> Self {
        Self::default()
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompt for Scripted {
    fn confirm(&mut self, request: &Confirmation) -> bool {
        self.asked.push(request.clone());
        self.answers.pop_front().unwrap_or(false)
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}
