use serde::{Deserialize, Deserializer, Serialize};

use crate::enum_display_fromstr;

/// Ids arrive as strings or bare numbers; both are keyed by their text
#[derive(Deserialize)]
#[serde(untagged)]
enum ScalarId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

fn scalar_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ScalarId::deserialize(deserializer)? {
        ScalarId::Text(text) => text,
        ScalarId::Signed(n) => n.to_string(),
        ScalarId::Unsigned(n) => n.to_string(),
    })
}

/// A single ticket as delivered by the ticket endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(deserialize_with = "scalar_id")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub tag: Vec<String>,

    #[serde(rename = "userId", default, deserialize_with = "scalar_id")]
    pub user_id: String,

    pub status: String,

    pub priority: i32,
}

/// A user that tickets can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "scalar_id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub available: bool,
}

impl User {
    /// First character of every whitespace-separated token of the name
    pub fn initials(&self) -> String {
        initials_for(&self.name)
    }
}

/// Compute initials for a display name ("Anoop Sharma" -> "AS")
pub fn initials_for(name: &str) -> String {
    let initials: String = name
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect();
    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

/// The decoded response of the ticket endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub tickets: Vec<Ticket>,

    #[serde(default)]
    pub users: Vec<User>,
}

impl Dataset {
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// The dimension tickets are partitioned into columns by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    #[default]
    Status,
    Priority,
    User,
}

enum_display_fromstr!(
    Grouping,
    "grouping",
    {
        Status => "status",
        Priority => "priority",
        User => "user",
    }
);

/// The sort key applied within each column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ordering {
    #[default]
    Priority,
    Title,
}

enum_display_fromstr!(
    Ordering,
    "ordering",
    {
        Priority => "priority",
        Title => "title",
    }
);

/// Human label for a priority ordinal
pub fn priority_label(priority: i32) -> String {
    match priority {
        0 => "No priority".to_string(),
        1 => "Low".to_string(),
        2 => "Medium".to_string(),
        3 => "High".to_string(),
        4 => "Urgent".to_string(),
        other => format!("P{other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_deserializes_camel_case_user_id() {
        let json = r#"{
            "id": "CAM-1",
            "title": "Update User Profile Page UI",
            "tag": ["Feature request"],
            "userId": "usr-1",
            "status": "Todo",
            "priority": 4
        }"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert_eq!(ticket.id, "CAM-1");
        assert_eq!(ticket.user_id, "usr-1");
        assert_eq!(ticket.tag, vec!["Feature request".to_string()]);
        assert_eq!(ticket.priority, 4);
    }

    #[test]
    fn test_ticket_missing_tag_defaults_to_empty() {
        let json = r#"{"id":"T-1","title":"x","userId":"u","status":"Todo","priority":0}"#;
        let ticket: Ticket = serde_json::from_str(json).unwrap();
        assert!(ticket.tag.is_empty());
    }

    #[test]
    fn test_dataset_ignores_unknown_fields() {
        let json = r#"{"tickets":[],"users":[{"id":"usr-1","name":"A B","available":true,"email":"x"}],"extra":1}"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.users.len(), 1);
        assert!(dataset.users[0].available);
    }

    #[test]
    fn test_numeric_ids_are_keyed_by_their_text() {
        let json = r#"{
            "tickets": [
                {"id": 1, "status": "done", "priority": 2, "title": "B", "userId": 7},
                {"id": 2, "status": "done", "priority": 1, "title": "A"}
            ],
            "users": [{"id": 7, "name": "Anoop Sharma"}]
        }"#;
        let dataset: Dataset = serde_json::from_str(json).unwrap();
        assert_eq!(dataset.tickets[0].id, "1");
        assert_eq!(dataset.tickets[0].user_id, "7");
        assert_eq!(dataset.tickets[1].user_id, "");
        assert_eq!(dataset.users[0].id, "7");

        let grid = crate::board::build_grid(&dataset.tickets, Grouping::Status, Ordering::Priority);
        assert_eq!(grid.keys().collect::<Vec<_>>(), vec!["done"]);
        let ids: Vec<&str> = grid.columns()[0]
            .tickets
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_fractional_id_is_rejected() {
        let json = r#"{"id":1.5,"title":"x","userId":"u","status":"Todo","priority":0}"#;
        assert!(serde_json::from_str::<Ticket>(json).is_err());
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials_for("Anoop Sharma"), "AS");
        assert_eq!(initials_for("  Ramesh   Kumar Singh "), "RKS");
        assert_eq!(initials_for("Yogesh"), "Y");
        assert_eq!(initials_for(""), "?");
    }

    #[test]
    fn test_grouping_round_trip_strings() {
        assert_eq!("status".parse::<Grouping>().unwrap(), Grouping::Status);
        assert_eq!("USER".parse::<Grouping>().unwrap(), Grouping::User);
        assert_eq!(Grouping::Priority.to_string(), "priority");
        assert!("owner".parse::<Grouping>().is_err());
    }

    #[test]
    fn test_ordering_strings() {
        assert_eq!("title".parse::<Ordering>().unwrap(), Ordering::Title);
        assert_eq!(Ordering::ALL_STRINGS, &["priority", "title"]);
        assert!("date".parse::<Ordering>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Grouping::default(), Grouping::Status);
        assert_eq!(Ordering::default(), Ordering::Priority);
    }

    #[test]
    fn test_priority_label() {
        assert_eq!(priority_label(4), "Urgent");
        assert_eq!(priority_label(0), "No priority");
        assert_eq!(priority_label(7), "P7");
    }
}
