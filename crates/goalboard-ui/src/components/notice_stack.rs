//! Transient banners

use leptos::prelude::*;

use crate::state::{ActiveNotice, BoardState};

/// Banners pinned to the top of the page, newest first
#[component]
pub fn NoticeStack(state: BoardState) -> impl IntoView {
    view! {
        <div class="notice-stack">
            <For
                each=move || state.notices.with(|queue| queue.items().to_vec())
                key=|active| active.id
                children=move |active: ActiveNotice| {
                    let id = active.id;
                    let kind = active.notice.kind;
                    let class = move || {
                        let fading = state.notices.with(|queue| queue.is_fading(id));
                        notice_class(kind.css_class(), fading)
                    };
                    view! { <div class=class role="status">{active.notice.message}</div> }
                }
            />
        </div>
    }
}

/// CSS classes for a banner
#[must_use]
pub fn notice_class(kind: &str, fading: bool) -> String {
    if fading {
        format!("notice {kind} fade-out")
    } else {
        format!("notice {kind}")
    }
}
