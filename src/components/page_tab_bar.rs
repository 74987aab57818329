//! Page Tab Bar Component
//!
//! Tabs for switching the active page, with an inline form to add one.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, UiStateStoreFields};

#[component]
pub fn PageTabBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (adding, set_adding) = signal(false);
    let (new_name, set_new_name) = signal(String::new());

    let pages = move || store.workspace().with(|s| s.pages.clone());
    // Dangling ids display as the first page
    let active_id = move || store.workspace().with(|s| s.current_page().map(|p| p.id.clone()));

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.trim().is_empty() { return; }
        ctx.run(|ws| ws.add_page(&name));
        set_new_name.set(String::new());
        set_adding.set(false);
    };

    view! {
        <div class="page-tab-bar">
            <For
                each=pages
                key=|page| (page.id.clone(), page.name.clone())
                children=move |page| {
                    let id = page.id.clone();
                    let is_active = {
                        let id = id.clone();
                        move || active_id().as_deref() == Some(id.as_str())
                    };
                    view! {
                        <button
                            class=move || if is_active() { "page-tab active" } else { "page-tab" }
                            on:click=move |_| { ctx.run(|ws| ws.switch_page(&id)); }
                        >
                            {page.name.clone()}
                        </button>
                    }
                }
            />

            {move || if adding.get() {
                view! {
                    <form class="page-add-form" on:submit=on_add>
                        <input
                            type="text"
                            placeholder="Nama halaman baru"
                            prop:value=move || new_name.get()
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                        <button type="submit">"+"</button>
                        <button type="button" on:click=move |_| set_adding.set(false)>"×"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <button class="page-add-btn" on:click=move |_| set_adding.set(true)>
                        "+ Halaman"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
