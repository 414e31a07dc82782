//! A single draggable player tag.

use leptos::ev::DragEvent;
use leptos::*;
use ::prelude::{Player, Roster};

use super::super::components::*;
use super::super::{HoverZone, PendingMove};

#[component]
pub fn PlayerTag(player: Player) -> impl IntoView {
    let roster = expect_context::<RwSignal<Roster>>();
    let PendingMove(pending) = expect_context::<PendingMove>();
    let HoverZone(hover) = expect_context::<HoverZone>();

    let editing = create_rw_signal(false);

    let id = store_value(player.id().clone());
    let name = store_value(player.name().clone());
    let style = format!("--tag: {}", player.color());

    let on_dragstart = move |_: DragEvent| pending.set(Some(id.get_value()));
    // also covers cancelled gestures, where no drop ever fires
    let on_dragend = move |_: DragEvent| {
        pending.set(None);
        hover.set(None);
    };

    let remove = move |_| roster.update(|r| r.remove_player(&id.get_value()));

    let finish = move |entered: Option<String>| {
        editing.set(false);
        if let Some(entered) = entered {
            roster.update(|r| r.rename_player(&id.get_value(), &entered));
        }
    };

    view! {
        <li class="player-tag" draggable="true" style=style
            on:dragstart=on_dragstart on:dragend=on_dragend >
            <Show
                when=move || editing.get()
                fallback=move || view! {
                    <span class="tag-name" on:click=move |_| editing.set(true)>
                        {name.get_value()}
                    </span>
                    <button type="button" class="remove" on:click=remove>"×"</button>
                }
            >
                <RenameForm initial=name.get_value() on_done=finish />
            </Show>
        </li>
    }
}
