use owo_colors::OwoColorize;

use super::data_formatting::{CardParts, column_icon, column_title};
use crate::board::{GridMap, UserIndex};
use crate::types::{Grouping, Ticket};

/// Wrap a status string in a badge colored by its workflow stage
pub fn format_status_colored(status: &str) -> String {
    format_status_colored_with_format(status, |s| format!("[{}]", s))
}

pub fn format_status_colored_with_format<F>(status: &str, format_fn: F) -> String
where
    F: Fn(&str) -> String,
{
    let badge = format_fn(status);
    match status.to_lowercase().as_str() {
        "backlog" => badge.dimmed().to_string(),
        "todo" => badge.yellow().to_string(),
        "in progress" | "in_progress" => badge.cyan().to_string(),
        "done" => badge.green().to_string(),
        "canceled" | "cancelled" => badge.dimmed().to_string(),
        _ => badge,
    }
}

fn format_priority_colored(priority: i32) -> String {
    let badge = format!("[P{priority}]");
    match priority {
        4.. => badge.red().to_string(),
        3 => badge.yellow().to_string(),
        _ => badge,
    }
}

/// One ticket line of the grid listing
pub fn format_card_line(
    ticket: &Ticket,
    users: &UserIndex,
    parts: CardParts,
    colored: bool,
) -> String {
    let mut line = String::new();
    let id = format!("{:8}", ticket.id);
    let priority = format!("[P{}]", ticket.priority);

    if colored {
        line.push_str(&id.cyan().to_string());
        line.push(' ');
        line.push_str(&format_priority_colored(ticket.priority));
    } else {
        line.push_str(&id);
        line.push(' ');
        line.push_str(&priority);
    }

    if parts.show_status {
        line.push(' ');
        if colored {
            line.push_str(&format_status_colored(&ticket.status));
        } else {
            line.push_str(&format!("[{}]", ticket.status));
        }
    }

    line.push(' ');
    line.push_str(&ticket.title);

    if parts.show_user {
        let initials = format!("@{}", users.initials(&ticket.user_id));
        line.push_str("  ");
        if colored && !users.is_available(&ticket.user_id) {
            line.push_str(&initials.dimmed().to_string());
        } else {
            line.push_str(&initials);
        }
    }

    for tag in &ticket.tag {
        let tag = format!("#{tag}");
        line.push(' ');
        if colored {
            line.push_str(&tag.magenta().to_string());
        } else {
            line.push_str(&tag);
        }
    }

    line
}

/// Column-by-column text rendering of a grid
pub fn format_grid(grid: &GridMap, users: &UserIndex, grouping: Grouping, colored: bool) -> String {
    if grid.is_empty() {
        return "No tickets".to_string();
    }

    let parts = CardParts::for_grouping(grouping);
    let mut out = Vec::new();

    for column in grid.columns() {
        let icon = column_icon(grouping, &column.key, users);
        let title = column_title(grouping, &column.key, users);
        let heading = format!("{icon} {title} ({})", column.tickets.len());
        out.push(if colored {
            heading.bold().to_string()
        } else {
            heading
        });

        for ticket in &column.tickets {
            out.push(format!(
                "  {}",
                format_card_line(ticket, users, parts, colored)
            ));
        }
        out.push(String::new());
    }

    while out.last().is_some_and(|l| l.is_empty()) {
        out.pop();
    }
    out.join("\n")
}
