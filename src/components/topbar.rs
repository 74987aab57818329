//! Topbar Component
//!
//! Page tabs, brand badge and the preview/export/publish actions.

use leptos::prelude::*;

use crate::browser;
use crate::components::PageTabBar;
use crate::config;
use crate::context::use_app_context;
use crate::document::render_current_page;
use crate::store::{use_app_store, NoticeKind, UiStateStoreFields};

#[component]
pub fn Topbar(
    sidebar_open: ReadSignal<bool>,
    set_sidebar_open: WriteSignal<bool>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let brand = move || {
        store.workspace().with(|s| {
            let name = s.settings.brand_name.trim();
            if name.is_empty() { config::DEFAULT_BRAND.to_string() } else { name.to_string() }
        })
    };
    let initials = move || brand().chars().take(2).collect::<String>().to_uppercase();
    let logo = move || store.workspace().with(|s| s.media_by_id(&s.settings.logo).map(|m| m.data_url.clone()));
    let workspace_name = move || store.workspace().with(|s| s.settings.workspace.clone());

    let current_document = move || store.workspace().with_untracked(render_current_page);

    let on_preview = move |_| {
        let Some(doc) = current_document() else { return; };
        if let Err(e) = browser::open_preview(&doc) {
            ctx.notify(NoticeKind::Error, format!("Preview gagal: {}", e));
        }
    };

    // Publish has no hosting target yet; it downloads like export
    let download_page = move || {
        let Some(doc) = current_document() else {
            ctx.notify(NoticeKind::Info, "Belum ada halaman untuk diekspor");
            return;
        };
        if let Err(e) = browser::download_text(config::EXPORT_FILE_NAME, "text/html", &doc) {
            ctx.notify(NoticeKind::Error, format!("Export gagal: {}", e));
        }
    };

    view! {
        <header class="topbar">
            <div class="topbar-left">
                <button class="ghost menu-btn" on:click=move |_| set_sidebar_open.set(!sidebar_open.get())>
                    "☰"
                </button>
                <PageTabBar />
            </div>

            <div class="topbar-brand">
                {move || match logo() {
                    Some(src) => view! { <img class="brand-badge" src=src alt="logo" /> }.into_any(),
                    None => view! { <div class="brand-badge">{initials}</div> }.into_any(),
                }}
                <div>
                    <div class="brand-name">{brand}</div>
                    <div class="brand-workspace">{workspace_name}</div>
                </div>
            </div>

            <div class="topbar-actions">
                <button class="ghost" on:click=on_preview>"Preview"</button>
                <button class="ghost" on:click=move |_| download_page()>"Export"</button>
                <button class="primary" on:click=move |_| download_page()>"Publish"</button>
            </div>
        </header>
    }
}
