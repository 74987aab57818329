//! Application Context
//!
//! Write path shared by all views: every mutation goes through the
//! workspace store (which persists it) and is then mirrored into `AppStore`.

use leptos::prelude::*;

use crate::blocks;
use crate::storage::{BrowserStorage, StorageError};
use crate::store::{AppStore, Notice, NoticeKind, UiStateStoreFields};
use crate::workspace::WorkspaceStore;

pub type BrowserWorkspace = WorkspaceStore<BrowserStorage>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    workspace: StoredValue<BrowserWorkspace>,
}

impl AppContext {
    pub fn new(store: AppStore, workspace: BrowserWorkspace) -> Self {
        Self {
            store,
            workspace: StoredValue::new(workspace),
        }
    }

    /// Run a workspace operation and publish the resulting aggregate
    ///
    /// A failed write keeps the change in memory and raises a warning notice.
    pub fn run<R>(&self, op: impl FnOnce(&mut BrowserWorkspace) -> Result<R, StorageError>) -> Option<R> {
        let mut outcome = None;
        let mut snapshot = None;
        self.workspace.update_value(|ws| {
            outcome = Some(op(ws));
            snapshot = Some(ws.state().clone());
        });
        if let Some(state) = snapshot {
            self.store.workspace().set(state);
        }
        match outcome? {
            Ok(value) => Some(value),
            Err(e) => {
                self.notify(NoticeKind::Warning, format!("Perubahan belum tersimpan: {}", e));
                None
            }
        }
    }

    /// Drop handler target: append a block to the active page
    pub fn append_block(&self, block_id: &str) {
        self.run(|ws| blocks::append_block(ws, block_id));
    }

    /// Forget everything stored for the current workspace
    pub fn reset_workspace(&self) {
        let workspace = self.store.workspace().with_untracked(|s| s.settings.workspace.clone());
        self.run(|ws| ws.reset(&workspace));
        self.store.view().set(Default::default());
    }

    /// Continue in another storage bucket
    pub fn open_workspace(&self, name: &str) {
        self.run(|ws| ws.open_workspace(name));
    }

    pub fn next_media_id(&self) -> String {
        self.workspace.with_value(|ws| ws.next_media_id())
    }

    pub fn notify(&self, kind: NoticeKind, message: impl Into<String>) {
        self.store.notice().set(Some(Notice {
            kind,
            message: message.into(),
        }));
    }

    pub fn dismiss_notice(&self) {
        self.store.notice().set(None);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
