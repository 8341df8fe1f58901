// Terminal rendering of tasks and stats

use crate::filter::FilterType;
use crate::priority::{Priority, PriorityColor};
use crate::stats::Stats;
use crate::task::Task;
use colored::{ColoredString, Colorize};

/// Apply a priority's table color to `text`
pub fn paint(text: &str, color: PriorityColor) -> ColoredString {
    match color {
        PriorityColor::Red => text.red(),
        PriorityColor::Orange => text.truecolor(255, 165, 0),
        PriorityColor::Green => text.green(),
    }
}

/// One line per task: checkbox, id, priority tag, text and creation time
pub fn render_task(task: &Task) -> String {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let tag = format!("[{}]", task.priority.as_str().to_uppercase());
    let text = if task.completed {
        task.text.dimmed().to_string()
    } else {
        task.text.bold().to_string()
    };

    format!(
        "{} #{} {} {} (Added: {})",
        checkbox,
        task.id,
        paint(&tag, task.priority.color()),
        text,
        task.created_at_display()
    )
}

/// The filtered view, or the filter's empty message
pub fn render_list(tasks: &[&Task], filter: FilterType) -> String {
    if tasks.is_empty() {
        return filter.empty_message();
    }

    tasks
        .iter()
        .map(|task| render_task(task))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary line shown after every change
pub fn render_summary(stats: &Stats) -> String {
    format!(
        "Total: {} | Completed: {} | Pending: {}",
        stats.total, stats.completed, stats.pending
    )
}

/// Summary plus per-priority breakdown
pub fn render_stats(stats: &Stats) -> String {
    let mut out = render_summary(stats);
    for priority in Priority::ALL {
        let label = format!("{}:", priority.as_str().to_uppercase());
        out.push_str(&format!(
            "\n  {} {}",
            paint(&label, priority.color()),
            stats.priority_count(priority)
        ));
    }
    out
}
