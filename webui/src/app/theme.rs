//! Light/dark display theme, persisted under its own slot.
//!
//! Unlike the roster snapshots this is written directly by the toggle
//! handler, not by the change-triggered effect.

use leptos::document;
use ::prelude::store::{Slots, THEME_SLOT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn load(slots: &impl Slots) -> Self {
        match slots.read(THEME_SLOT).as_deref() {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn store(self, slots: &impl Slots) {
        slots.write(THEME_SLOT, self.as_str());
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Flips the attribute the stylesheet keys its variables off of.
    pub fn apply(self) {
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("data-theme", self.as_str());
        }
    }
}
