//! Timeline task model
//!
//! A task on the couple's planning timeline, either generated from the
//! template catalogue or added by hand.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::TaskId;

labeled_enum! {
    /// How urgent a task is
    pub enum Priority {
        Low => ("low", "Low"),
        Medium => ("medium", "Medium"),
        High => ("high", "High"),
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

/// One sub-step of a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub label: String,

    #[serde(default)]
    pub done: bool,
}

impl ChecklistItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            done: false,
        }
    }
}

/// A planning task with an optional due date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineTask {
    /// Unique identifier
    pub id: TaskId,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    pub category: Category,

    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub priority: Priority,

    /// Ordered sub-steps
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,

    #[serde(default)]
    pub completed: bool,

    /// Set when the task is completed, cleared when it is reopened
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,

    /// Title of the template this task was generated from
    #[serde(default)]
    pub from_template: Option<String>,

    #[serde(default)]
    pub sort_order: i32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl TimelineTask {
    /// Create a new, open task
    pub fn new(title: impl Into<String>, category: Category) -> Self {
        let now = Utc::now();
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: None,
            category,
            due_date: None,
            priority: Priority::default(),
            checklist: Vec::new(),
            completed: false,
            completed_at: None,
            from_template: None,
            sort_order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Flip the completed flag, keeping `completed_at` in step
    pub fn toggle(&mut self) {
        self.set_completed(!self.completed);
    }

    pub fn set_completed(&mut self, completed: bool) {
        let now = Utc::now();
        self.completed = completed;
        self.completed_at = if completed { Some(now) } else { None };
        self.updated_at = now;
    }

    /// Open and due strictly before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }

    pub fn is_generated(&self) -> bool {
        self.from_template.is_some()
    }

    /// Toggle the done flag of the checklist entry at `index`
    pub fn toggle_checklist(&mut self, index: usize) -> Result<bool, TaskValidationError> {
        let len = self.checklist.len();
        let item = self
            .checklist
            .get_mut(index)
            .ok_or(TaskValidationError::ChecklistIndex { index, len })?;
        item.done = !item.done;
        self.updated_at = Utc::now();
        Ok(item.done)
    }

    /// (done, total) checklist progress
    pub fn checklist_progress(&self) -> (usize, usize) {
        let done = self.checklist.iter().filter(|c| c.done).count();
        (done, self.checklist.len())
    }

    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }

        if self.title.len() > 200 {
            return Err(TaskValidationError::TitleTooLong(self.title.len()));
        }

        if self.completed != self.completed_at.is_some() {
            return Err(TaskValidationError::CompletionMismatch);
        }

        Ok(())
    }
}

impl fmt::Display for TimelineTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyTitle,
    TitleTooLong(usize),
    CompletionMismatch,
    ChecklistIndex { index: usize, len: usize },
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "Task title cannot be empty"),
            Self::TitleTooLong(len) => {
                write!(f, "Task title too long ({} chars, max 200)", len)
            }
            Self::CompletionMismatch => {
                write!(f, "Completed tasks must carry a completion time")
            }
            Self::ChecklistIndex { index, len } => write!(
                f,
                "Checklist item {} does not exist (task has {} items)",
                index + 1,
                len
            ),
        }
    }
}

impl std::error::Error for TaskValidationError {}
