use serde_json::{Value, json};

use crate::board::{GridMap, UserIndex};
use crate::types::{Grouping, Ticket, priority_label};

/// Glyph for a status string; unknown statuses get a neutral bullet
pub fn status_icon(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "backlog" => "◌",
        "todo" => "○",
        "in progress" | "in_progress" => "◐",
        "done" => "●",
        "canceled" | "cancelled" => "⊘",
        _ => "•",
    }
}

/// Bar glyph for a priority ordinal
pub fn priority_icon(priority: i32) -> &'static str {
    match priority {
        i32::MIN..=0 => "···",
        1 => "▂  ",
        2 => "▂▄ ",
        3 => "▂▄▆",
        _ => "[!]",
    }
}

/// Column title for a group key
pub fn column_title(grouping: Grouping, key: &str, users: &UserIndex) -> String {
    match grouping {
        Grouping::Status => key.to_string(),
        Grouping::Priority => key
            .parse::<i32>()
            .map(priority_label)
            .unwrap_or_else(|_| key.to_string()),
        Grouping::User => users.display_name(key),
    }
}

/// Column icon for a group key
pub fn column_icon(grouping: Grouping, key: &str, users: &UserIndex) -> String {
    match grouping {
        Grouping::Status => status_icon(key).to_string(),
        Grouping::Priority => key
            .parse::<i32>()
            .map(|p| priority_icon(p).to_string())
            .unwrap_or_else(|_| "?".to_string()),
        Grouping::User => users.initials(key),
    }
}

/// Which optional card parts a column shows.
///
/// The field that defines the column is redundant on its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardParts {
    pub show_status: bool,
    pub show_user: bool,
}

impl CardParts {
    pub fn for_grouping(grouping: Grouping) -> Self {
        Self {
            show_status: grouping != Grouping::Status,
            show_user: grouping != Grouping::User,
        }
    }
}

fn ticket_to_json(ticket: &Ticket, users: &UserIndex) -> Value {
    json!({
        "id": ticket.id,
        "title": ticket.title,
        "tag": ticket.tag,
        "userId": ticket.user_id,
        "user": users.get(&ticket.user_id).map(|u| u.name.clone()),
        "status": ticket.status,
        "priority": ticket.priority,
    })
}

/// JSON view of a grid: ordered list of columns with their tickets
pub fn grid_to_json(grid: &GridMap, users: &UserIndex, grouping: Grouping) -> Value {
    let columns: Vec<Value> = grid
        .columns()
        .iter()
        .map(|column| {
            json!({
                "key": column.key,
                "title": column_title(grouping, &column.key, users),
                "count": column.tickets.len(),
                "tickets": column
                    .tickets
                    .iter()
                    .map(|t| ticket_to_json(t, users))
                    .collect::<Vec<_>>(),
            })
        })
        .collect();

    json!({
        "grouping": grouping.as_str(),
        "columns": columns,
    })
}
