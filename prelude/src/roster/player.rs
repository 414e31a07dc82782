//! Players are the draggable tags of the roster
//!
//! A player carries a stable id, a display name, a palette color, and its
//! current assignment. Everything but the id may change over its lifetime.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::draw::Color;

/// Where a player currently sits: the shared bench, or one team's column.
///
/// Persisted snapshots keep the original `teamId: string | null` shape, so
/// serde round-trips through `Option<String>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Assignment {
    Bench,
    Team(String),
}

impl From<Option<String>> for Assignment {
    fn from(team_id: Option<String>) -> Self {
        match team_id {
            Some(id) => Assignment::Team(id),
            None => Assignment::Bench,
        }
    }
}

impl From<Assignment> for Option<String> {
    fn from(assignment: Assignment) -> Self {
        match assignment {
            Assignment::Team(id) => Some(id),
            Assignment::Bench => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    id: String,
    name: String,
    color: Color,
    #[serde(rename = "teamId")]
    assignment: Assignment,
}

impl Player {
    /// A freshly created player starts on the bench with a new unique id.
    pub fn new(name: String, color: Color) -> Self {
        Player {
            id: Uuid::new_v4().to_string(),
            name,
            color,
            assignment: Assignment::Bench,
        }
    }

    /// Seed entries use stable slug ids so resets are reproducible.
    pub(crate) fn seeded(id: &str, name: &str, color: Color) -> Self {
        Player {
            id: id.to_owned(),
            name: name.to_owned(),
            color,
            assignment: Assignment::Bench,
        }
    }

    pub fn id(&self) -> &String {
        &self.id
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn assign(&mut self, assignment: Assignment) {
        self.assignment = assignment;
    }
}
