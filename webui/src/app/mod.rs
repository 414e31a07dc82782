use leptos::*;
use leptos_meta::*;

mod components;
mod lang;
mod roster;
mod theme;

use ::prelude::store;
use ::prelude::{Assignment, Roster};

use crate::cookie::CookieSlots;
use lang::*;
use roster::RosterBoard;
use theme::Theme;

/// Transient id of the player being dragged: set on dragstart, consumed on
/// drop, cleared on dragend either way.
#[derive(Clone, Copy)]
pub struct PendingMove(pub RwSignal<Option<String>>);

/// The drop zone currently hovered during a drag, highlight only.
#[derive(Clone, Copy)]
pub struct HoverZone(pub RwSignal<Option<Assignment>>);

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let (lang, set_lang) = create_signal(Language::English);
    provide_context(lang);
    provide_context(set_lang);

    let roster = create_rw_signal(store::load(&CookieSlots));
    provide_context(roster);

    provide_context(PendingMove(create_rw_signal(None)));
    provide_context(HoverZone(create_rw_signal(None)));

    // Every roster transition overwrites both cookie snapshots.
    create_effect(move |_| roster.with(|r| store::save(&CookieSlots, r)));

    let theme = create_rw_signal(Theme::load(&CookieSlots));
    create_effect(move |_| theme.get().apply());

    view! {
        // sets the document title
        <Title text="Roster"/>

        <TopBar theme=theme set_lang=set_lang />
        <main>
            <RosterBoard/>
        </main>
        <Announcer/>
    }
}

#[component]
fn TopBar(theme: RwSignal<Theme>, set_lang: WriteSignal<Language>) -> impl IntoView {
    let roster = expect_context::<RwSignal<Roster>>();
    let lang = expect_context::<ReadSignal<Language>>();

    let toggle_theme = move |_| {
        let next = theme.get().toggled();
        theme.set(next);
        // written right away, not through the snapshot effect
        next.store(&CookieSlots);
    };

    let reset = move |_| {
        let msg = match lang.get() {
            Language::Hungarian => "Biztosan visszaállítod az alap névsort? Minden módosítás elvész.",
            Language::English => "Reset the roster to its defaults? Every edit will be lost.",
        };
        if window().confirm_with_message(msg).unwrap_or(false) {
            roster.update(|r| r.reset());
        }
    };

    let theme_label = move || match theme.get() {
        Theme::Light => view! { <Lang hu="Sötét mód" en="Dark mode"/> }.into_view(),
        Theme::Dark => view! { <Lang hu="Világos mód" en="Light mode"/> }.into_view(),
    };

    view! {
        <nav class="navbar">
        <div class="container">
            <div class="left-section">
                <span class="logo"><Lang hu="Névsor" en="Roster"/></span>
            </div>
            <div class="right-section">
            <ul class="nav-list">
                <li>
                    <a href="#"><Lang hu="Nyelv" en="Language"/></a>
                    <div class="dropdown-content">
                        <a on:click=move |_| set_lang.set(Language::Hungarian)>
                            <Lang hu="Magyar" en="Hungarian"/>
                        </a>
                        <a on:click=move |_| set_lang.set(Language::English)>
                            <Lang hu="Angol" en="English"/>
                        </a>
                    </div>
                </li>
                <li>
                    <button type="button" class="theme-toggle" on:click=toggle_theme>
                        {theme_label}
                    </button>
                </li>
                <li>
                    <button type="button" class="reset-button" on:click=reset>
                        <Lang hu="Alaphelyzet" en="Reset"/>
                    </button>
                </li>
            </ul>
            </div>
        </div>
        </nav>
    }
}

/// Hidden live region summarizing the collections for assistive technology.
#[component]
fn Announcer() -> impl IntoView {
    let roster = expect_context::<RwSignal<Roster>>();
    let lang = expect_context::<ReadSignal<Language>>();

    let summary = move || {
        let (players, teams) = roster.with(|r| (r.players().len(), r.teams().len()));
        match lang.get() {
            Language::Hungarian => format!("{players} játékos, {teams} csapat"),
            Language::English => format!("{players} players, {teams} teams"),
        }
    };

    view! {
        <p class="visually-hidden" aria-live="polite">{summary}</p>
    }
}
