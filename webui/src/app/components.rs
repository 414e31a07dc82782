//! General-use components

use leptos::ev::{KeyboardEvent, SubmitEvent};
use leptos::html::Input;
use leptos::*;

/// Generic text input component, bound to a signal.
/// Takes the children as the label, and sets name= to every relevant thing.
#[component]
pub fn Input<S>(
    name: S,
    value: RwSignal<String>,
    children: ChildrenFn,
    #[prop(optional)] focus_on_show: bool,
) -> impl IntoView
where
    S: ToString,
{
    let name = name.to_string();

    // focus the main input on load
    let input_ref = create_node_ref::<Input>();
    create_effect(move |_| {
        if focus_on_show {
            if let Some(input) = input_ref.get() {
                // wait a tick for the browser to mount it, then .focus()
                request_animation_frame(move || {
                    let _ = input.focus();
                });
            }
        }
    });

    view! {
        <div class="input-group">
            <label for=name.clone()>{children()}</label>
            <input type="text" id=name.clone() name=name.clone()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                node_ref=input_ref />
        </div>
    }
}

/// Submit component, with a "disable" signal.
/// Takes children as the label
#[component]
pub fn Submit<F: Fn() -> bool + Copy + 'static>(disable: F, children: ChildrenFn) -> impl IntoView {
    view! {
        <div class="input-group">
            <button type="submit" class:disabled=disable disabled=disable >
                {children()}
            </button>
        </div>
    }
}

/// Inline rename input: commits on submit or focus loss, Escape abandons the
/// edit. The caller decides what a `None` (abandoned) edit means.
#[component]
pub fn RenameForm<F>(initial: String, on_done: F) -> impl IntoView
where
    F: Fn(Option<String>) + Copy + 'static,
{
    let input_ref = create_node_ref::<Input>();
    create_effect(move |_| {
        if let Some(input) = input_ref.get() {
            request_animation_frame(move || {
                let _ = input.focus();
            });
        }
    });

    let current = move || input_ref.get().map(|input| input.value());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_done(current());
    };
    let on_blur = move |_| on_done(current());
    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            on_done(None);
        }
    };

    view! {
        <form class="rename-form" on:submit=on_submit>
            <input type="text" value=initial node_ref=input_ref
                on:blur=on_blur on:keydown=on_keydown />
        </form>
    }
}
