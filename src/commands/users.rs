use std::path::Path;

use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{fetch_dataset, print_json};
use crate::board::UserIndex;
use crate::error::Result;

/// A row in the user table
#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Initials")]
    initials: String,
    #[tabled(rename = "Available")]
    available: String,
    #[tabled(rename = "Tickets")]
    tickets: usize,
}

/// List the users of the dataset with their ticket counts
pub async fn cmd_users(file: Option<&Path>, json: bool) -> Result<()> {
    let dataset = fetch_dataset(file).await?;
    let index = UserIndex::build(&dataset.users);

    let ticket_count =
        |id: &str| dataset.tickets.iter().filter(|t| t.user_id == id).count();

    if json {
        let users: Vec<_> = index
            .sorted()
            .into_iter()
            .map(|user| {
                json!({
                    "id": user.id,
                    "name": user.name,
                    "initials": user.initials(),
                    "available": user.available,
                    "tickets": ticket_count(&user.id),
                })
            })
            .collect();
        return print_json(&json!(users));
    }

    if index.is_empty() {
        println!("No users found.");
        return Ok(());
    }

    let rows: Vec<UserRow> = index
        .sorted()
        .into_iter()
        .map(|user| UserRow {
            id: user.id.clone(),
            name: user.name.clone(),
            initials: user.initials(),
            available: if user.available { "yes" } else { "no" }.to_string(),
            tickets: ticket_count(&user.id),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");

    println!("\n{} user(s)", index.len());
    Ok(())
}
