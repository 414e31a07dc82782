//! Teams are the named columns players can be assigned to
//!
//! Teams have a stable id, a name, and an accent color.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::draw::Color;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    id: String,
    name: String,
    accent: Color,
}

impl Team {
    pub fn new(name: String, accent: Color) -> Self {
        Team {
            id: Uuid::new_v4().to_string(),
            name,
            accent,
        }
    }

    pub(crate) fn seeded(id: &str, name: &str, accent: Color) -> Self {
        Team {
            id: id.to_owned(),
            name: name.to_owned(),
            accent,
        }
    }

    pub fn id(&self) -> &String {
        &self.id
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn accent(&self) -> Color {
        self.accent
    }

    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
    }
}
