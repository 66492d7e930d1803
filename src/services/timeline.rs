//! Timeline service
//!
//! Generates the task list from the template catalogue and manages tasks
//! the couple adds or edits by hand.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use crate::audit::{AuditEntry, EntityType};
use crate::error::{WedplanError, WedplanResult};
use crate::models::{Category, ChecklistItem, Priority, TaskId, TimelineTask};
use crate::planning::{catalogue, derive_schedule, query_tasks, TaskFilter};
use crate::storage::Storage;

/// Service for timeline task management
pub struct TimelineService<'a> {
    storage: &'a Storage,
}

/// Input for a hand-made task
#[derive(Debug, Clone)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub checklist: Vec<String>,
}

/// Fields to change on a task; `None` leaves a field as it is
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    /// `Some(None)` clears the due date
    pub due_date: Option<Option<NaiveDate>>,
    pub priority: Option<Priority>,
}

impl<'a> TimelineService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create tasks for every catalogue template that still fits before
    /// the wedding date.
    ///
    /// Templates that already have a task are skipped, so generating twice
    /// adds nothing. With `replace`, open generated tasks are removed first;
    /// completed ones are kept.
    pub fn generate(&self, now: NaiveDateTime, replace: bool) -> WedplanResult<Vec<TimelineTask>> {
        let wedding = self.storage.wedding.require()?;
        let wedding_date = wedding.wedding_date.ok_or_else(|| {
            WedplanError::Validation(
                "Set a wedding date first ('wedplan wedding edit --date YYYY-MM-DD')".into(),
            )
        })?;

        let mut entries = Vec::new();

        if replace {
            let removed = self
                .storage
                .tasks
                .retain(|t| !(t.is_generated() && !t.completed))?;
            debug!(count = removed.len(), "Removed open generated tasks");
            entries.extend(removed.iter().map(|t| {
                AuditEntry::delete(EntityType::Task, t.id.to_string(), Some(t.title.clone()), t)
            }));
        }

        let existing = self.storage.tasks.get_all()?;
        let mut next_order = existing.iter().map(|t| t.sort_order).max().unwrap_or(-1) + 1;

        let mut created = Vec::new();
        for scheduled in derive_schedule(catalogue(), wedding_date, now) {
            let template = scheduled.template;
            let already_present = existing
                .iter()
                .any(|t| t.from_template.as_deref() == Some(template.title));
            if already_present {
                continue;
            }

            let mut task = TimelineTask::new(template.title, template.category);
            task.description = Some(template.description.to_string());
            task.due_date = Some(scheduled.due_date);
            task.priority = template.priority;
            task.checklist = template
                .sub_tasks
                .iter()
                .map(|s| ChecklistItem::new(*s))
                .collect();
            task.from_template = Some(template.title.to_string());
            task.sort_order = next_order;
            next_order += 1;

            entries.push(AuditEntry::create(
                EntityType::Task,
                task.id.to_string(),
                Some(task.title.clone()),
                &task,
            ));
            self.storage.tasks.upsert(task.clone())?;
            created.push(task);
        }

        self.storage.tasks.save()?;
        self.storage.log_batch(&entries)?;

        info!(
            generated = created.len(),
            %wedding_date,
            "Generated timeline tasks"
        );
        Ok(created)
    }

    /// Tasks matching a filter and search text, due date ascending
    pub fn list(
        &self,
        filter: TaskFilter,
        search: &str,
        today: NaiveDate,
    ) -> WedplanResult<Vec<TimelineTask>> {
        let tasks = self.storage.tasks.get_all()?;
        Ok(query_tasks(&tasks, filter, search, today)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn get(&self, id: TaskId) -> WedplanResult<Option<TimelineTask>> {
        self.storage.tasks.get(id)
    }

    /// Find a task by title or ID string
    pub fn find(&self, identifier: &str) -> WedplanResult<Option<TimelineTask>> {
        if let Some(task) = self.storage.tasks.get_by_title(identifier)? {
            return Ok(Some(task));
        }
        self.storage.tasks.find(identifier)
    }

    fn require(&self, identifier: &str) -> WedplanResult<TimelineTask> {
        self.find(identifier)?
            .ok_or_else(|| WedplanError::task_not_found(identifier))
    }

    /// Add a task by hand
    pub fn add(&self, input: CreateTaskInput) -> WedplanResult<TimelineTask> {
        let mut task = TimelineTask::new(input.title.trim(), input.category);
        task.description = input
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        task.due_date = input.due_date;
        task.priority = input.priority;
        task.checklist = input
            .checklist
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(ChecklistItem::new)
            .collect();

        let tasks = self.storage.tasks.get_all()?;
        task.sort_order = tasks.iter().map(|t| t.sort_order).max().unwrap_or(-1) + 1;

        task.validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;

        self.storage.tasks.upsert(task.clone())?;
        self.storage.tasks.save()?;

        self.storage.log_create(
            EntityType::Task,
            task.id.to_string(),
            Some(task.title.clone()),
            &task,
        )?;

        debug!(task = %task.title, "Task added");
        Ok(task)
    }

    /// Flip a task between open and completed
    pub fn toggle(&self, identifier: &str) -> WedplanResult<TimelineTask> {
        let mut task = self.require(identifier)?;
        let before = task.clone();
        task.toggle();
        self.save_update(&before, &task)?;
        Ok(task)
    }

    /// Flip one checklist entry (1-based index, as shown to the user)
    pub fn check(&self, identifier: &str, position: usize) -> WedplanResult<TimelineTask> {
        let mut task = self.require(identifier)?;
        let before = task.clone();
        let index = position.checked_sub(1).ok_or_else(|| {
            WedplanError::Validation("Checklist items are numbered from 1".into())
        })?;
        task.toggle_checklist(index)
            .map_err(|e| WedplanError::Validation(e.to_string()))?;
        self.save_update(&before, &task)?;
        Ok(task)
    }

    /// Edit a task's fields
    pub fn edit(&self, identifier: &str, update: TaskUpdate) -> WedplanResult<TimelineTask> {
        let mut task = self.require(identifier)?;
        let before = task.clone();

        if let Some(title) = update.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = update.description {
            let description = description.trim();
            task.description = (!description.is_empty()).then(|| description.to_string());
        }
        if let Some(category) = update.category {
            task.category = category;
        }
        if let Some(due_date) = update.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = update.priority {
            task.priority = priority;
        }

        task.validate()
            .map_err(|e| WedplanError::Validation(e.to_string()))?;
        task.updated_at = chrono::Utc::now();

        self.save_update(&before, &task)?;
        Ok(task)
    }

    /// Delete a task
    pub fn delete(&self, identifier: &str) -> WedplanResult<TimelineTask> {
        let task = self.require(identifier)?;
        self.storage.tasks.remove(task.id)?;
        self.storage.tasks.save()?;

        self.storage.log_delete(
            EntityType::Task,
            task.id.to_string(),
            Some(task.title.clone()),
            &task,
        )?;

        debug!(task = %task.title, "Task deleted");
        Ok(task)
    }

    fn save_update(&self, before: &TimelineTask, after: &TimelineTask) -> WedplanResult<()> {
        self.storage.tasks.upsert(after.clone())?;
        self.storage.tasks.save()?;
        self.storage.log_update(
            EntityType::Task,
            after.id.to_string(),
            Some(after.title.clone()),
            before,
            after,
            None,
        )
    }
}
