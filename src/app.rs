//! Landing Builder App
//!
//! Topbar, sidebar and the active screen.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Inspector, NoticeBar, Sidebar, Topbar, WorkspaceView};
use crate::context::AppContext;
use crate::storage::BrowserStorage;
use crate::store::{UiState, UiStateStoreFields, ViewKind};
use crate::workspace::{last_workspace, WorkspaceStore};

#[component]
pub fn App() -> impl IntoView {
    // Read the persisted aggregate once per session
    let name = last_workspace(&BrowserStorage);
    let workspace = WorkspaceStore::open(BrowserStorage, &name);
    log::info!(
        "opened workspace {} ({} pages)",
        name,
        workspace.state().pages.len()
    );

    let store = Store::new(UiState::new(workspace.state().clone()));
    provide_context(store);
    provide_context(AppContext::new(store, workspace));

    let (sidebar_open, set_sidebar_open) = signal(false);

    view! {
        <div class="app-layout">
            <Topbar sidebar_open=sidebar_open set_sidebar_open=set_sidebar_open />
            <div class="app-body">
                <Sidebar is_open=sidebar_open />
                <main class="main-content">
                    <NoticeBar />
                    <WorkspaceView />
                </main>
                <Show when=move || store.view().get() == ViewKind::Builder>
                    <Inspector />
                </Show>
            </div>
        </div>
    }
}
