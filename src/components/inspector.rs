//! Inspector Component
//!
//! Details of the block selected in the canvas.

use leptos::prelude::*;

use crate::blocks::BlockKind;
use crate::context::use_app_context;
use crate::store::{use_app_store, UiStateStoreFields};

#[component]
pub fn Inspector() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let selected = move || store.workspace().with(|s| s.selected_element.clone());
    let product_names = move || store.workspace().with(|s| s.products.iter().map(|p| p.name.clone()).collect::<Vec<_>>());

    view! {
        <aside class="inspector">
            {move || match selected() {
                None => view! {
                    <div class="inspector-empty">
                        <p>"Pilih elemen untuk mengedit"</p>
                        <p class="muted">"Klik blok di canvas untuk melihat properti"</p>
                    </div>
                }.into_any(),
                Some(block_type) => {
                    let label = BlockKind::from_id(&block_type)
                        .map(|kind| kind.label().to_string())
                        .unwrap_or_else(|| block_type.clone());
                    let is_product = block_type == BlockKind::Product.id();
                    view! {
                        <div class="inspector-panel">
                            <h4>"Element Terpilih"</h4>
                            <div class="field">
                                <span class="muted">"Tipe"</span>
                                <strong>{label}</strong>
                            </div>
                            <Show when=move || is_product>
                                <div class="field">
                                    <span class="muted">"Produk tersedia"</span>
                                    <ul>
                                        {move || product_names().into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                                    </ul>
                                </div>
                            </Show>
                            <button class="ghost" on:click=move |_| { ctx.run(|ws| ws.select_element(None)); }>
                                "Batal pilih"
                            </button>
                        </div>
                    }.into_any()
                }
            }}
        </aside>
    }
}
