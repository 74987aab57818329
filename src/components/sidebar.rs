//! Sidebar Component
//!
//! View switcher.

use leptos::prelude::*;

use crate::store::{use_app_store, UiStateStoreFields, ViewKind};

#[component]
pub fn Sidebar(is_open: ReadSignal<bool>) -> impl IntoView {
    let store = use_app_store();

    view! {
        <nav class=move || if is_open.get() { "sidebar open" } else { "sidebar" }>
            {ViewKind::ALL.into_iter().map(|kind| {
                let is_active = move || store.view().get() == kind;
                view! {
                    <button
                        class=move || if is_active() { "sidebar-item active" } else { "sidebar-item" }
                        on:click=move |_| store.view().set(kind)
                    >
                        {kind.label()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
