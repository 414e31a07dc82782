//! End-to-end flows: load, mutate, project, persist, reload.

use prelude::store::{self, MemorySlots, Slots, PLAYERS_SLOT};
use prelude::{project, Assignment, Roster};

fn first_visit() -> (MemorySlots, Roster) {
    let slots = MemorySlots::default();
    let roster = store::load(&slots);
    (slots, roster)
}

#[test]
fn first_visit_seeds_and_projects_three_columns() {
    let (_, roster) = first_visit();
    assert_eq!(roster, Roster::seed());

    let groups = project(roster.players(), roster.teams());
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[&Assignment::Bench].len(), 13);
}

#[test]
fn drag_astra_to_alpha_survives_a_reload() {
    let (slots, mut roster) = first_visit();
    roster.move_player("astra", Assignment::Team("alpha".into()));
    store::save(&slots, &roster);

    let reloaded = store::load(&slots);
    assert_eq!(reloaded, roster);

    let groups = project(reloaded.players(), reloaded.teams());
    let alpha = &groups[&Assignment::Team("alpha".into())];
    assert_eq!(alpha.len(), 1);
    assert_eq!(alpha[0].name(), "Astra");
    assert_eq!(groups[&Assignment::Bench].len(), 12);
    assert!(groups[&Assignment::Team("bravo".into())].is_empty());
}

#[test]
fn team_lifecycle_with_a_stranded_player() {
    let (slots, mut roster) = first_visit();
    roster.add_team("Vanguard");
    let vanguard = roster.teams().last().unwrap().id().clone();
    roster.move_player("lark", Assignment::Team(vanguard.clone()));
    store::save(&slots, &roster);

    roster.remove_team(&vanguard);
    store::save(&slots, &roster);

    let reloaded = store::load(&slots);
    assert_eq!(reloaded.teams(), Roster::seed().teams());
    let lark = reloaded.players().iter().find(|p| p.id() == "lark").unwrap();
    assert_eq!(lark.assignment(), &Assignment::Bench);
}

#[test]
fn reset_overwrites_stored_snapshots() {
    let (slots, mut roster) = first_visit();
    roster.add_player("Nyx");
    roster.remove_player("koda");
    store::save(&slots, &roster);

    roster.reset();
    store::save(&slots, &roster);

    assert_eq!(store::load(&slots), Roster::seed());
}

#[test]
fn tampered_snapshot_reads_as_a_first_visit() {
    let (slots, mut roster) = first_visit();
    roster.add_player("Nyx");
    store::save(&slots, &roster);

    slots.write(PLAYERS_SLOT, "%7B%7D");
    assert_eq!(store::load(&slots).players(), Roster::seed().players());
}
