//! Analytics View
//!
//! Sales counters derived from the order list.

use leptos::prelude::*;

use crate::sales::{format_rupiah, sales_summary};
use crate::store::{use_app_store, UiStateStoreFields};

#[component]
pub fn AnalyticsView() -> impl IntoView {
    let store = use_app_store();

    let summary = Memo::new(move |_| store.workspace().with(|s| sales_summary(&s.orders)));
    let counts = move || store.workspace().with(|s| (s.products.len(), s.customers.len(), s.crm.len()));

    view! {
        <div class="panel">
            <h2>"Analytics"</h2>
            <div class="stat-grid">
                <div class="card stat">
                    <span class="muted">"Pendapatan"</span>
                    <strong>{move || format_rupiah(summary.get().revenue)}</strong>
                </div>
                <div class="card stat">
                    <span class="muted">"Lunas"</span>
                    <strong>{move || summary.get().paid}</strong>
                </div>
                <div class="card stat">
                    <span class="muted">"Menunggu"</span>
                    <strong>{move || summary.get().pending}</strong>
                </div>
                <div class="card stat">
                    <span class="muted">"Batal"</span>
                    <strong>{move || summary.get().cancelled}</strong>
                </div>
                <div class="card stat">
                    <span class="muted">"Produk / Pelanggan / Lead"</span>
                    <strong>{move || {
                        let (products, customers, leads) = counts();
                        format!("{} / {} / {}", products, customers, leads)
                    }}</strong>
                </div>
            </div>
        </div>
    }
}
