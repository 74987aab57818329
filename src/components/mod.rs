//! UI Components
//!
//! Leptos views. They read from `AppStore` and write through `AppContext`.

mod analytics_view;
mod apps_view;
mod block_palette;
mod builder_canvas;
mod crm_view;
mod customers_view;
mod delete_confirm_button;
mod drop_zone;
mod inspector;
mod library_view;
mod notice_bar;
mod orders_view;
mod page_tab_bar;
mod products_view;
mod settings_view;
mod sidebar;
mod topbar;
mod workspace_view;

pub use analytics_view::AnalyticsView;
pub use apps_view::AppsView;
pub use block_palette::BlockPalette;
pub use builder_canvas::BuilderCanvas;
pub use crm_view::CrmView;
pub use customers_view::CustomersView;
pub use delete_confirm_button::DeleteConfirmButton;
pub use drop_zone::DropZone;
pub use inspector::Inspector;
pub use library_view::LibraryView;
pub use notice_bar::NoticeBar;
pub use orders_view::OrdersView;
pub use page_tab_bar::PageTabBar;
pub use products_view::ProductsView;
pub use settings_view::SettingsView;
pub use sidebar::Sidebar;
pub use topbar::Topbar;
pub use workspace_view::WorkspaceView;
