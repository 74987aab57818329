//! Apps View

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, UiStateStoreFields};

#[component]
pub fn AppsView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let apps = move || store.workspace().with(|s| s.apps.clone());

    view! {
        <div class="panel">
            <h2>"Apps"</h2>
            <div class="app-list">
                <For
                    each=apps
                    key=|app| (app.id.clone(), app.installed)
                    children=move |app| {
                        let id = app.id.clone();
                        view! {
                            <div class="card app-card">
                                <strong>{app.name.clone()}</strong>
                                <button
                                    class={if app.installed { "ghost" } else { "primary" }}
                                    on:click=move |_| { ctx.run(|ws| ws.toggle_app(&id)); }
                                >
                                    {if app.installed { "Uninstall" } else { "Install" }}
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
