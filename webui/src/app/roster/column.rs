//! One drop zone: the bench or a team column.

use std::collections::HashMap;

use leptos::ev::DragEvent;
use leptos::*;
use ::prelude::{Assignment, Player, Roster, Team};

use super::super::components::*;
use super::super::lang::*;
use super::super::{HoverZone, PendingMove};
use super::tag::PlayerTag;

#[component]
pub fn RosterColumn(
    zone: Assignment,
    grouping: Memo<HashMap<Assignment, Vec<Player>>>,
    #[prop(optional)] team: Option<Team>,
) -> impl IntoView {
    let roster = expect_context::<RwSignal<Roster>>();
    let PendingMove(pending) = expect_context::<PendingMove>();
    let HoverZone(hover) = expect_context::<HoverZone>();

    let players = {
        let zone = zone.clone();
        Signal::derive(move || grouping.with(|g| g.get(&zone).cloned().unwrap_or_default()))
    };
    let count = move || players.with(Vec::len);

    let hovered = {
        let zone = zone.clone();
        move || hover.with(|h| h.as_ref() == Some(&zone))
    };

    // Dropping is only possible while a dragged player id is pending; a drop
    // without one falls through as a no-op.
    let on_dragover = {
        let zone = zone.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            hover.set(Some(zone.clone()));
        }
    };
    let on_dragenter = {
        let zone = zone.clone();
        move |_: DragEvent| hover.set(Some(zone.clone()))
    };
    let on_dragleave = {
        let zone = zone.clone();
        move |_: DragEvent| {
            hover.update(|h| {
                if h.as_ref() == Some(&zone) {
                    *h = None;
                }
            })
        }
    };
    let on_drop = {
        let zone = zone.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            hover.set(None);
            let carried = pending.get();
            pending.set(None);
            if let Some(id) = carried {
                let target = zone.clone();
                roster.update(|r| r.move_player(&id, target));
            }
        }
    };

    let accent_style = team
        .as_ref()
        .map(|t| format!("--accent: {}", t.accent()))
        .unwrap_or_default();
    let is_bench = team.is_none();

    let header = match team {
        Some(team) => view! { <TeamHeader team=team /> }.into_view(),
        None => view! {
            <h2 class="column-title"><Lang hu="Cserepad" en="Bench"/></h2>
        }
        .into_view(),
    };

    view! {
        <section class="roster-column" class:bench=is_bench class:hovered=hovered
            style=accent_style
            on:dragover=on_dragover on:dragenter=on_dragenter
            on:dragleave=on_dragleave on:drop=on_drop >
            <header class="column-header">
                {header}
                <span class="count-badge">{count}</span>
            </header>
            <ul class="tag-list">
                {move || {
                    players
                        .get()
                        .into_iter()
                        .map(|player| view! { <PlayerTag player=player /> })
                        .collect_view()
                }}
            </ul>
            <Show when=move || players.with(Vec::is_empty) fallback=||()>
                <p class="drop-hint"><Lang hu="Húzz ide egy játékost" en="Drag a player here"/></p>
            </Show>
        </section>
    }
}

/// Team name (click to rename), with the remove control.
#[component]
fn TeamHeader(team: Team) -> impl IntoView {
    let roster = expect_context::<RwSignal<Roster>>();
    let editing = create_rw_signal(false);

    let id = store_value(team.id().clone());
    let name = store_value(team.name().clone());

    let finish = move |entered: Option<String>| {
        // a blank or abandoned edit still leaves edit mode
        editing.set(false);
        if let Some(entered) = entered {
            roster.update(|r| r.rename_team(&id.get_value(), &entered));
        }
    };

    let remove = move |_| roster.update(|r| r.remove_team(&id.get_value()));

    view! {
        <Show
            when=move || editing.get()
            fallback=move || view! {
                <h2 class="column-title" on:click=move |_| editing.set(true)>
                    {name.get_value()}
                </h2>
                <button type="button" class="remove" on:click=remove>"×"</button>
            }
        >
            <RenameForm initial=name.get_value() on_done=finish />
        </Show>
    }
}
