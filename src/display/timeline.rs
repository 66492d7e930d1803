//! Timeline display formatting
//!
//! Tasks are shown grouped by how soon they are due.

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::models::{Priority, TimelineTask};
use crate::planning::{group_by_window, TaskTemplate};

use super::{date, or_dash};

fn checkbox(task: &TimelineTask) -> &'static str {
    if task.completed {
        "[x]"
    } else {
        "[ ]"
    }
}

fn priority_marker(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "!",
        Priority::Medium | Priority::Low => " ",
    }
}

fn task_line(settings: &Settings, task: &TimelineTask, today: NaiveDate) -> String {
    let due = match task.due_date {
        Some(d) if task.is_overdue(today) => format!("{} (overdue)", date(settings, d)),
        Some(d) => date(settings, d),
        None => String::new(),
    };

    let (done, total) = task.checklist_progress();
    let progress = if total > 0 {
        format!(" [{}/{}]", done, total)
    } else {
        String::new()
    };

    let line = format!(
        "  {} {}{}{}  {}  {}",
        checkbox(task),
        priority_marker(task.priority),
        task.title,
        progress,
        task.category,
        due
    );
    format!("{}\n", line.trim_end())
}

/// Format tasks grouped into due-date windows
pub fn format_task_groups(
    settings: &Settings,
    tasks: &[TimelineTask],
    today: NaiveDate,
    include_completed: bool,
) -> String {
    let groups = group_by_window(tasks, today, include_completed);
    if groups.is_empty() {
        return "No tasks found.\n".to_string();
    }

    let mut output = String::new();
    for (i, (window, members)) in groups.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{} ({})\n", window, members.len()));
        for task in members {
            output.push_str(&task_line(settings, task, today));
        }
    }
    output
}

/// Format a single task with its checklist
pub fn format_task_details(settings: &Settings, task: &TimelineTask, today: NaiveDate) -> String {
    let mut output = String::new();

    output.push_str(&format!("Task: {}\n", task.title));
    output.push_str(&format!("  ID:          {}\n", task.id));
    output.push_str(&format!("  Category:    {}\n", task.category));
    output.push_str(&format!("  Priority:    {}\n", task.priority));
    output.push_str(&format!(
        "  Due:         {}{}\n",
        task.due_date
            .map(|d| date(settings, d))
            .unwrap_or_else(|| "-".into()),
        if task.is_overdue(today) { " (overdue)" } else { "" }
    ));
    output.push_str(&format!(
        "  Status:      {}\n",
        if task.completed { "Done" } else { "To do" }
    ));
    output.push_str(&format!(
        "  Description: {}\n",
        or_dash(task.description.as_deref())
    ));

    if !task.checklist.is_empty() {
        output.push_str("  Checklist:\n");
        for (i, item) in task.checklist.iter().enumerate() {
            output.push_str(&format!(
                "    {}. [{}] {}\n",
                i + 1,
                if item.done { "x" } else { " " },
                item.label
            ));
        }
    }

    output
}

/// Format the template catalogue, longest lead time first
pub fn format_template_list(templates: &[TaskTemplate]) -> String {
    if templates.is_empty() {
        return "No templates found.\n".to_string();
    }

    let title_width = templates.iter().map(|t| t.title.len()).max().unwrap_or(5).max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>6}  {:<title_width$}  {:<14}  {}\n",
        "Months",
        "Title",
        "Category",
        "Priority",
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:->6}  {:-<title_width$}  {:-<14}  {:-<8}\n",
        "",
        "",
        "",
        "",
        title_width = title_width,
    ));
    for template in templates {
        output.push_str(&format!(
            "{:>6}  {:<title_width$}  {:<14}  {}\n",
            template.months_before,
            template.title,
            template.category.label(),
            template.priority,
            title_width = title_width,
        ));
    }
    output
}
