//! The roster state and the operations the UI drives it with.
//!
//! `Roster` is the sole source of truth for the two domain collections. Every
//! operation is a single `&mut self` call, so each one is one atomic
//! transition for whoever observes the state. Failed preconditions (blank
//! names, unknown ids, vanished targets) degrade to silent no-ops.

use crate::draw::{PLAYER_PALETTE, TEAM_PALETTE};

mod project;
pub mod player;
pub mod team;

pub use player::{Assignment, Player};
pub use project::project;
pub use team::Team;

const SEED_PLAYERS: [(&str, &str); 13] = [
    ("astra", "Astra"),
    ("blaze", "Blaze"),
    ("cinder", "Cinder"),
    ("drift", "Drift"),
    ("echo", "Echo"),
    ("flint", "Flint"),
    ("gale", "Gale"),
    ("harbor", "Harbor"),
    ("indigo", "Indigo"),
    ("juniper", "Juniper"),
    ("koda", "Koda"),
    ("lark", "Lark"),
    ("mirage", "Mirage"),
];

const SEED_TEAMS: [(&str, &str); 2] = [("alpha", "Alpha"), ("bravo", "Bravo")];

/// The thirteen default players, all on the bench.
pub fn seed_players() -> Vec<Player> {
    SEED_PLAYERS
        .iter()
        .enumerate()
        .map(|(i, (id, name))| Player::seeded(id, name, PLAYER_PALETTE[i % PLAYER_PALETTE.len()]))
        .collect()
}

/// The two default teams.
pub fn seed_teams() -> Vec<Team> {
    SEED_TEAMS
        .iter()
        .enumerate()
        .map(|(i, (id, name))| Team::seeded(id, name, TEAM_PALETTE[i % TEAM_PALETTE.len()]))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    players: Vec<Player>,
    teams: Vec<Team>,
}

impl Roster {
    pub fn new(players: Vec<Player>, teams: Vec<Team>) -> Self {
        Roster { players, teams }
    }

    pub fn seed() -> Self {
        Roster::new(seed_players(), seed_teams())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    fn has_team(&self, id: &str) -> bool {
        self.teams.iter().any(|t| t.id() == id)
    }

    /// Appends a new benched player, colored round-robin by current count.
    pub fn add_player(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let color = PLAYER_PALETTE[self.players.len() % PLAYER_PALETTE.len()];
        self.players.push(Player::new(name.to_owned(), color));
    }

    /// Appends a new team, accented round-robin by current count.
    pub fn add_team(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        let accent = TEAM_PALETTE[self.teams.len() % TEAM_PALETTE.len()];
        self.teams.push(Team::new(name.to_owned(), accent));
    }

    pub fn rename_player(&mut self, id: &str, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Some(player) = self.players.iter_mut().find(|p| p.id() == id) {
            player.rename(name.to_owned());
        }
    }

    pub fn rename_team(&mut self, id: &str, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        if let Some(team) = self.teams.iter_mut().find(|t| t.id() == id) {
            team.rename(name.to_owned());
        }
    }

    pub fn remove_player(&mut self, id: &str) {
        self.players.retain(|p| p.id() != id);
    }

    /// Drops the team and benches its players in the same transition.
    pub fn remove_team(&mut self, id: &str) {
        self.teams.retain(|t| t.id() != id);
        for player in &mut self.players {
            if matches!(player.assignment(), Assignment::Team(t) if t == id) {
                player.assign(Assignment::Bench);
            }
        }
    }

    /// Reassigns a player; a target team that no longer exists is rejected,
    /// keeping every assignment pointed at a live team.
    pub fn move_player(&mut self, id: &str, target: Assignment) {
        if let Assignment::Team(team_id) = &target {
            if !self.has_team(team_id) {
                return;
            }
        }
        if let Some(player) = self.players.iter_mut().find(|p| p.id() == id) {
            player.assign(target);
        }
    }

    /// Discards every edit and restores the seed collections.
    pub fn reset(&mut self) {
        *self = Roster::seed();
    }
}
