//! The roster board: creation forms, the bench, and one column per team.

use leptos::ev::SubmitEvent;
use leptos::*;
use ::prelude::{project, Assignment, Roster};

mod column;
mod tag;

use super::components::*;
use super::lang::*;
use column::RosterColumn;

#[component]
pub fn RosterBoard() -> impl IntoView {
    let roster = expect_context::<RwSignal<Roster>>();

    // The projector reruns on every roster transition; columns read their
    // bucket out of the memoized grouping.
    let grouping = create_memo(move |_| roster.with(|r| project(r.players(), r.teams())));

    let player_input = create_rw_signal(String::new());
    let team_input = create_rw_signal(String::new());

    let add_player = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name = player_input.get();
        if name.trim().is_empty() {
            return;
        }
        roster.update(|r| r.add_player(&name));
        player_input.set(String::new());
    };

    let add_team = move |ev: SubmitEvent| {
        ev.prevent_default();
        let name = team_input.get();
        if name.trim().is_empty() {
            return;
        }
        roster.update(|r| r.add_team(&name));
        team_input.set(String::new());
    };

    let disable_add_player = move || player_input.with(|s| s.trim().is_empty());
    let disable_add_team = move || team_input.with(|s| s.trim().is_empty());

    let team_columns = move || {
        roster
            .with(|r| r.teams().to_vec())
            .into_iter()
            .map(|team| {
                let zone = Assignment::Team(team.id().clone());
                view! { <RosterColumn zone=zone grouping=grouping team=team /> }
            })
            .collect_view()
    };

    view! {
        <div class="create-forms">
            <form class="create-form" on:submit=add_player>
                <Input name="new-player" value=player_input focus_on_show=true >
                    <Lang hu="Új játékos" en="New player"/>
                </Input>
                <Submit disable=disable_add_player>
                    <Lang hu="Hozzáadás" en="Add"/>
                </Submit>
            </form>
            <form class="create-form" on:submit=add_team>
                <Input name="new-team" value=team_input >
                    <Lang hu="Új csapat" en="New team"/>
                </Input>
                <Submit disable=disable_add_team>
                    <Lang hu="Hozzáadás" en="Add"/>
                </Submit>
            </form>
        </div>
        <div class="roster-board">
            <RosterColumn zone=Assignment::Bench grouping=grouping />
            {team_columns}
        </div>
    }
}
