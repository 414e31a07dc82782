//! Keyed snapshot storage for the roster.
//!
//! The roster persists as full-collection snapshots under named slots in
//! whatever durable key-value store the embedding provides (the web UI backs
//! this with cookies). Loading is forgiving: a slot that is absent or
//! unreadable falls back to that slot's seed collection, with nothing more
//! than a console warning.

use std::cell::RefCell;
use std::collections::HashMap;

use eyre::Result;

use crate::roster::{seed_players, seed_teams, Player, Roster, Team};

pub const PLAYERS_SLOT: &str = "players";
pub const TEAMS_SLOT: &str = "teams";
pub const THEME_SLOT: &str = "theme";

/// A durable key-value store with named slots.
pub trait Slots {
    fn read(&self, slot: &str) -> Option<String>;
    fn write(&self, slot: &str, value: &str);
}

pub fn encode_players(players: &[Player]) -> String {
    serde_json::to_string(players).expect("player snapshot serializes")
}

pub fn encode_teams(teams: &[Team]) -> String {
    serde_json::to_string(teams).expect("team snapshot serializes")
}

pub fn decode_players(json: &str) -> Result<Vec<Player>> {
    Ok(serde_json::from_str(json)?)
}

pub fn decode_teams(json: &str) -> Result<Vec<Team>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads both collection slots, falling back to the seed per slot.
pub fn load(slots: &impl Slots) -> Roster {
    let players = match slots.read(PLAYERS_SLOT).map(|s| decode_players(&s)) {
        Some(Ok(players)) => players,
        Some(Err(err)) => {
            log::warn!("stored player snapshot unreadable ({err}), seeding defaults");
            seed_players()
        }
        None => seed_players(),
    };
    let teams = match slots.read(TEAMS_SLOT).map(|s| decode_teams(&s)) {
        Some(Ok(teams)) => teams,
        Some(Err(err)) => {
            log::warn!("stored team snapshot unreadable ({err}), seeding defaults");
            seed_teams()
        }
        None => seed_teams(),
    };
    Roster::new(players, teams)
}

/// Overwrites both collection slots with the current state.
pub fn save(slots: &impl Slots, roster: &Roster) {
    slots.write(PLAYERS_SLOT, &encode_players(roster.players()));
    slots.write(TEAMS_SLOT, &encode_teams(roster.teams()));
}

/// In-memory slot store, for tests and non-browser embeddings.
#[derive(Debug, Default)]
pub struct MemorySlots(RefCell<HashMap<String, String>>);

impl Slots for MemorySlots {
    fn read(&self, slot: &str) -> Option<String> {
        self.0.borrow().get(slot).cloned()
    }

    fn write(&self, slot: &str, value: &str) {
        self.0.borrow_mut().insert(slot.to_owned(), value.to_owned());
    }
}
