//! Goal entry form

use goalboard_core::is_submit_key;
use leptos::ev::KeyboardEvent;
use leptos::html::Input;
use leptos::prelude::*;

use crate::state::BoardState;

/// Title and description inputs with the add control
///
/// Enter in the description submits; Shift+Enter inserts a newline.
#[component]
pub fn GoalForm(state: BoardState) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let title_ref = NodeRef::<Input>::new();

    let submit = move || {
        let accepted = state.submit(&title.get_untracked(), &description.get_untracked());
        if accepted {
            title.set(String::new());
            description.set(String::new());
            if let Some(input) = title_ref.get_untracked() {
                let _ = input.focus();
            }
        }
    };

    view! {
        <div class="goal-form">
            <input
                id="title"
                type="text"
                placeholder="Goal title"
                node_ref=title_ref
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <textarea
                id="description"
                placeholder="Describe your goal"
                rows="3"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
                on:keydown=move |ev: KeyboardEvent| {
                    if is_submit_key(&ev.key(), ev.shift_key()) {
                        ev.prevent_default();
                        submit();
                    }
                }
            ></textarea>
            <button id="add" class="btn-primary" on:click=move |_| submit()>
                "Add goal"
            </button>
        </div>
    }
}
