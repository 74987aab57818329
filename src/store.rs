//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! `workspace` mirrors the aggregate owned by `WorkspaceStore`; views read
//! it here and write through `AppContext`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::WorkspaceState;

/// Screens reachable from the sidebar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewKind {
    #[default]
    Builder,
    Products,
    Orders,
    Customers,
    Library,
    Crm,
    Analytics,
    Apps,
    Settings,
}

impl ViewKind {
    pub const ALL: [ViewKind; 9] = [
        ViewKind::Builder,
        ViewKind::Products,
        ViewKind::Orders,
        ViewKind::Customers,
        ViewKind::Library,
        ViewKind::Crm,
        ViewKind::Analytics,
        ViewKind::Apps,
        ViewKind::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Builder => "Builder",
            ViewKind::Products => "Produk",
            ViewKind::Orders => "Pesanan",
            ViewKind::Customers => "Pelanggan",
            ViewKind::Library => "Library",
            ViewKind::Crm => "CRM",
            ViewKind::Analytics => "Analytics",
            ViewKind::Apps => "Apps",
            ViewKind::Settings => "Settings",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
}

/// Dismissible banner message
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Last aggregate produced by the workspace store
    pub workspace: WorkspaceState,
    /// Screen shown in the main area
    pub view: ViewKind,
    /// Banner shown above the main area
    pub notice: Option<Notice>,
}

impl UiState {
    pub fn new(workspace: WorkspaceState) -> Self {
        Self {
            workspace,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<UiState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
