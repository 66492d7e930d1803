//! Timeline CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_task_details, format_task_groups, format_template_list};
use crate::error::{WedplanError, WedplanResult};
use crate::models::{Category, Priority};
use crate::planning::{catalogue, TaskFilter};
use crate::services::{CreateTaskInput, TaskUpdate, TimelineService};
use crate::storage::Storage;

use super::{now, parse_date, parse_date_or_clear};

/// Timeline subcommands
#[derive(Subcommand)]
pub enum TimelineCommands {
    /// Create tasks from the template catalogue
    Generate {
        /// Drop open generated tasks first and derive them again
        #[arg(long)]
        replace: bool,
    },
    /// List the task templates
    Templates,
    /// List tasks grouped by when they are due
    List {
        /// Filter: all, todo, completed, overdue
        #[arg(short, long, default_value = "all")]
        filter: TaskFilter,
        /// Only tasks whose title, description or category contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Include completed tasks
        #[arg(short, long)]
        all: bool,
    },
    /// Add a task
    Add {
        /// Task title
        title: String,
        /// Category
        #[arg(short, long, default_value = "other")]
        category: Category,
        /// Due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<String>,
        /// Priority: high, medium, low
        #[arg(short, long, default_value = "medium")]
        priority: Priority,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Checklist entries (repeatable)
        #[arg(long = "item")]
        checklist: Vec<String>,
    },
    /// Show a task and its checklist
    Show {
        /// Task title or ID
        task: String,
    },
    /// Mark a task done, or open again
    Toggle {
        /// Task title or ID
        task: String,
    },
    /// Tick or untick a checklist entry
    Check {
        /// Task title or ID
        task: String,
        /// Checklist entry number, as shown by `timeline show`
        number: usize,
    },
    /// Edit a task
    Edit {
        /// Task title or ID
        task: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<Category>,
        /// New due date (YYYY-MM-DD, or "none" to clear)
        #[arg(short, long)]
        due: Option<String>,
        /// New priority
        #[arg(short, long)]
        priority: Option<Priority>,
        /// New description
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a task
    Delete {
        /// Task title or ID
        task: String,
    },
}

/// Handle a timeline command
pub fn handle_timeline_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TimelineCommands,
) -> WedplanResult<()> {
    let service = TimelineService::new(storage);
    let today = now().date();

    match cmd {
        TimelineCommands::Generate { replace } => {
            let created = service.generate(now(), replace)?;
            if created.is_empty() {
                println!("Timeline is up to date; no new tasks.");
            } else {
                println!("Generated {} tasks.", created.len());
                println!("Run 'wedplan timeline list' to see them.");
            }
        }

        TimelineCommands::Templates => {
            print!("{}", format_template_list(catalogue()));
        }

        TimelineCommands::List {
            filter,
            search,
            all,
        } => {
            let tasks = service.list(filter, search.as_deref().unwrap_or(""), today)?;
            let include_completed = all || filter == TaskFilter::Completed;
            print!(
                "{}",
                format_task_groups(settings, &tasks, today, include_completed)
            );
        }

        TimelineCommands::Add {
            title,
            category,
            due,
            priority,
            description,
            checklist,
        } => {
            let task = service.add(CreateTaskInput {
                title,
                description,
                category,
                due_date: due.as_deref().map(parse_date).transpose()?,
                priority,
                checklist,
            })?;
            println!("Added task: {}", task.title);
            println!("  ID: {}", task.id);
        }

        TimelineCommands::Show { task } => {
            let task = service
                .find(&task)?
                .ok_or_else(|| WedplanError::task_not_found(&task))?;
            print!("{}", format_task_details(settings, &task, today));
        }

        TimelineCommands::Toggle { task } => {
            let task = service.toggle(&task)?;
            println!(
                "{} {}",
                if task.completed { "Completed:" } else { "Reopened:" },
                task.title
            );
        }

        TimelineCommands::Check { task, number } => {
            let task = service.check(&task, number)?;
            let (done, total) = task.checklist_progress();
            println!("{}: {}/{} checklist items done", task.title, done, total);
            if task.completed {
                println!("All items done; task completed.");
            }
        }

        TimelineCommands::Edit {
            task,
            title,
            category,
            due,
            priority,
            description,
        } => {
            let update = TaskUpdate {
                title,
                description,
                category,
                due_date: due.as_deref().map(parse_date_or_clear).transpose()?,
                priority,
            };
            let task = service.edit(&task, update)?;
            println!("Updated task: {}", task.title);
        }

        TimelineCommands::Delete { task } => {
            let task = service.delete(&task)?;
            println!("Deleted task: {}", task.title);
        }
    }

    Ok(())
}
