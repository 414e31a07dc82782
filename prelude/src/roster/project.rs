//! Groups the player collection into per-column buckets.

use std::collections::HashMap;
use std::iter;

use itertools::Itertools;

use super::{Assignment, Player, Team};

/// Buckets every player under its assignment, one bucket per known column.
///
/// The bench and every team get a bucket even when empty. A player whose
/// assignment names an unknown team still lands in a bucket of its own rather
/// than disappearing. Buckets are sorted ascending by name, case-folded, with
/// creation order as the tiebreak.
pub fn project(players: &[Player], teams: &[Team]) -> HashMap<Assignment, Vec<Player>> {
    let mut groups: HashMap<Assignment, Vec<Player>> = iter::once(Assignment::Bench)
        .chain(teams.iter().map(|t| Assignment::Team(t.id().clone())))
        .map(|key| (key, Vec::new()))
        .collect();

    let buckets = players
        .iter()
        .map(|p| (p.assignment().clone(), p.clone()))
        .into_group_map();
    for (key, bucket) in buckets {
        groups.entry(key).or_default().extend(bucket);
    }

    for bucket in groups.values_mut() {
        bucket.sort_by_cached_key(|p| p.name().to_lowercase());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;

    fn names(bucket: &[Player]) -> Vec<&str> {
        bucket.iter().map(|p| p.name().as_str()).collect()
    }

    #[test]
    fn buckets_partition_the_players() {
        let mut roster = Roster::seed();
        roster.move_player("echo", Assignment::Team("alpha".into()));
        roster.move_player("koda", Assignment::Team("bravo".into()));

        let groups = project(roster.players(), roster.teams());

        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, roster.players().len());
        for player in roster.players() {
            let bucket = &groups[player.assignment()];
            assert_eq!(bucket.iter().filter(|p| p.id() == player.id()).count(), 1);
        }
    }

    #[test]
    fn every_known_column_gets_a_bucket() {
        let roster = Roster::seed();
        let groups = project(roster.players(), roster.teams());
        assert_eq!(groups.len(), 3);
        assert!(groups[&Assignment::Team("alpha".into())].is_empty());
        assert!(groups[&Assignment::Team("bravo".into())].is_empty());
        assert_eq!(groups[&Assignment::Bench].len(), 13);
    }

    #[test]
    fn buckets_sort_by_name_case_folded() {
        let mut roster = Roster::new(Vec::new(), Vec::new());
        for name in ["mira", "Zed", "astra", "Mina"] {
            roster.add_player(name);
        }
        let groups = project(roster.players(), roster.teams());
        assert_eq!(
            names(&groups[&Assignment::Bench]),
            ["astra", "Mina", "mira", "Zed"]
        );
    }

    #[test]
    fn unknown_team_id_gets_a_defensive_bucket() {
        let mut roster = Roster::seed();
        roster.move_player("astra", Assignment::Team("alpha".into()));
        // drop the team behind the projector's back
        let players = roster.players().to_vec();
        let teams: Vec<Team> = roster
            .teams()
            .iter()
            .filter(|t| t.id() != "alpha")
            .cloned()
            .collect();

        let groups = project(&players, &teams);

        let stray = &groups[&Assignment::Team("alpha".into())];
        assert_eq!(names(stray), ["Astra"]);
    }

    #[test]
    fn seed_move_astra_scenario() {
        let mut roster = Roster::seed();
        roster.move_player("astra", Assignment::Team("alpha".into()));

        let groups = project(roster.players(), roster.teams());

        assert_eq!(names(&groups[&Assignment::Team("alpha".into())]), ["Astra"]);
        assert!(groups[&Assignment::Team("bravo".into())].is_empty());

        let bench = names(&groups[&Assignment::Bench]);
        assert_eq!(bench.len(), 12);
        let mut sorted = bench.clone();
        sorted.sort_by_key(|n| n.to_lowercase());
        assert_eq!(bench, sorted);
        assert!(!bench.contains(&"Astra"));
    }
}
