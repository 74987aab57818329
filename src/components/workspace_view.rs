//! Workspace View
//!
//! Shows the screen selected in the sidebar.

use leptos::prelude::*;

use crate::components::{
    AnalyticsView, AppsView, BuilderCanvas, CrmView, CustomersView, LibraryView, OrdersView,
    ProductsView, SettingsView,
};
use crate::store::{use_app_store, UiStateStoreFields, ViewKind};

#[component]
pub fn WorkspaceView() -> impl IntoView {
    let store = use_app_store();

    move || match store.view().get() {
        ViewKind::Builder => view! { <BuilderCanvas /> }.into_any(),
        ViewKind::Products => view! { <ProductsView /> }.into_any(),
        ViewKind::Orders => view! { <OrdersView /> }.into_any(),
        ViewKind::Customers => view! { <CustomersView /> }.into_any(),
        ViewKind::Library => view! { <LibraryView /> }.into_any(),
        ViewKind::Crm => view! { <CrmView /> }.into_any(),
        ViewKind::Analytics => view! { <AnalyticsView /> }.into_any(),
        ViewKind::Apps => view! { <AppsView /> }.into_any(),
        ViewKind::Settings => view! { <SettingsView /> }.into_any(),
    }
}
