//! Grid builder: partition tickets into columns and order each column.

use std::collections::HashMap;

use crate::error::Result;
use crate::types::{Grouping, Ordering, Ticket};

/// The literal value identifying one column
pub type GroupKey = String;

/// One column of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridColumn {
    pub key: GroupKey,
    pub tickets: Vec<Ticket>,
}

/// Group key -> ordered tickets, in first-encountered key order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridMap {
    columns: Vec<GridColumn>,
}

impl GridMap {
    pub fn columns(&self) -> &[GridColumn] {
        &self.columns
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&[Ticket]> {
        self.columns
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.tickets.as_slice())
    }

    pub fn column(&self, index: usize) -> Option<&GridColumn> {
        self.columns.get(index)
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Sum of all column sizes
    pub fn ticket_count(&self) -> usize {
        self.columns.iter().map(|c| c.tickets.len()).sum()
    }
}

/// Key a ticket falls under for the given grouping
pub fn group_key(ticket: &Ticket, grouping: Grouping) -> GroupKey {
    match grouping {
        Grouping::Status => ticket.status.clone(),
        Grouping::Priority => ticket.priority.to_string(),
        Grouping::User => ticket.user_id.clone(),
    }
}

/// Stable in-place sort of one column
pub fn sort_column(tickets: &mut [Ticket], ordering: Ordering) {
    match ordering {
        Ordering::Priority => tickets.sort_by(|a, b| a.priority.cmp(&b.priority)),
        Ordering::Title => tickets.sort_by(|a, b| a.title.cmp(&b.title)),
    }
}

/// Build the board grid.
///
/// Every ticket lands in exactly one column. Columns appear in the order
/// their key is first seen; within a column tickets are sorted ascending by
/// priority or by title, and equal keys keep their input order.
pub fn build_grid(tickets: &[Ticket], grouping: Grouping, ordering: Ordering) -> GridMap {
    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut columns: Vec<GridColumn> = Vec::new();

    for ticket in tickets {
        let key = group_key(ticket, grouping);
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            columns.push(GridColumn {
                key,
                tickets: Vec::new(),
            });
            columns.len() - 1
        });
        columns[slot].tickets.push(ticket.clone());
    }

    for column in &mut columns {
        sort_column(&mut column.tickets, ordering);
    }

    GridMap { columns }
}

/// Build the grid from grouping/ordering names, rejecting unknown names
pub fn build_grid_from_names(tickets: &[Ticket], grouping: &str, ordering: &str) -> Result<GridMap> {
    let grouping: Grouping = grouping.parse()?;
    let ordering: Ordering = ordering.parse()?;
    Ok(build_grid(tickets, grouping, ordering))
}
