//! User lookup by id.

use std::collections::HashMap;

use crate::error::{BoardError, Result};
use crate::types::User;

/// Initials shown for a ticket whose user id has no matching user
pub const UNKNOWN_USER_INITIALS: &str = "?";

/// Read-only map from user id to user, built once per fetch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIndex {
    users: HashMap<String, User>,
}

impl UserIndex {
    /// Build the index. Later duplicates replace earlier ones.
    pub fn build(users: &[User]) -> Self {
        let users = users
            .iter()
            .map(|user| (user.id.clone(), user.clone()))
            .collect();
        Self { users }
    }

    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    /// Look up a user, treating a missing id as a dangling reference
    pub fn resolve(&self, id: &str) -> Result<&User> {
        self.get(id).ok_or_else(|| BoardError::DanglingReference {
            user_id: id.to_string(),
        })
    }

    /// Name for display, or a placeholder naming the unresolved id
    pub fn display_name(&self, id: &str) -> String {
        match self.resolve(id) {
            Ok(user) => user.name.clone(),
            Err(_) => unknown_user_name(id),
        }
    }

    /// Initials for display, `?` when the id does not resolve
    pub fn initials(&self, id: &str) -> String {
        self.get(id)
            .map(User::initials)
            .unwrap_or_else(|| UNKNOWN_USER_INITIALS.to_string())
    }

    /// Availability for display; unresolved users show as unavailable
    pub fn is_available(&self, id: &str) -> bool {
        self.get(id).is_some_and(|u| u.available)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Users sorted by id, for stable listings
    pub fn sorted(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.users.values().collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        users
    }
}

pub fn unknown_user_name(id: &str) -> String {
    format!("Unknown user ({id})")
}
