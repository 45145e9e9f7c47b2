//! Rendered goal list

use goalboard_core::Goal;
use leptos::prelude::*;

use crate::state::BoardState;
use crate::utils::local_offset;

/// Goals in display order, newest on top
#[component]
pub fn GoalList(state: BoardState) -> impl IntoView {
    view! {
        <div id="goal-list" class="goal-list">
            <For
                each=move || state.board.with(|board| board.goals().to_vec())
                key=|goal| goal.id
                children=move |goal: Goal| view! { <GoalItem goal=goal state=state /> }
            />
        </div>
    }
}

/// One goal with its remove control
#[component]
pub fn GoalItem(goal: Goal, state: BoardState) -> impl IntoView {
    let id = goal.id;
    let added_on = format!("Added on: {}", goal.added_on(local_offset()));

    view! {
        <div class="goal" data-id=id.to_string()>
            <h5>{goal.title}</h5>
            <p>{goal.description}</p>
            <small>{added_on}</small>
            <button
                class="remove-goal"
                title="Remove goal"
                on:click=move |_| state.remove(id)
            >
                "×"
            </button>
        </div>
    }
}
