//! Products View
//!
//! Product catalogue with an add form.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::ProductDraft;
use crate::placeholder::svg_placeholder;
use crate::sales::format_rupiah;
use crate::store::{use_app_store, NoticeKind, UiStateStoreFields};

#[component]
pub fn ProductsView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (sku, set_sku) = signal(String::new());
    let (category, set_category) = signal(String::new());

    let products = move || store.workspace().with(|s| s.products.clone());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let product_name = name.get().trim().to_string();
        if product_name.is_empty() {
            return;
        }
        let Some(amount) = price.get().trim().parse::<f64>().ok().filter(|p| p.is_finite()) else {
            ctx.notify(NoticeKind::Error, "Harga harus berupa angka");
            return;
        };
        let draft = ProductDraft {
            name: product_name,
            price: amount,
            sku: sku.get(),
            category: category.get(),
            ..Default::default()
        };
        if ctx.run(|ws| ws.add_product(draft)).flatten().is_some() {
            set_name.set(String::new());
            set_price.set(String::new());
            set_sku.set(String::new());
            set_category.set(String::new());
        }
    };

    view! {
        <div class="panel">
            <h2>"Produk"</h2>
            <form class="inline-form" on:submit=on_submit>
                <input type="text" placeholder="Nama produk" prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev)) />
                <input type="number" placeholder="Harga" prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev)) />
                <input type="text" placeholder="SKU" prop:value=move || sku.get()
                    on:input=move |ev| set_sku.set(event_target_value(&ev)) />
                <input type="text" placeholder="Kategori" prop:value=move || category.get()
                    on:input=move |ev| set_category.set(event_target_value(&ev)) />
                <button type="submit" class="primary">"Tambah"</button>
            </form>

            <Show when=move || !products().is_empty() fallback=|| view! { <p class="muted">"Belum ada produk"</p> }>
                <div class="product-grid">
                    <For
                        each=products
                        key=|p| p.id.clone()
                        children=move |product| {
                            let image = if product.image.is_empty() {
                                svg_placeholder(300, 200, &product.name)
                            } else {
                                product.image.clone()
                            };
                            view! {
                                <div class="card">
                                    <img src=image alt=product.name.clone() />
                                    <strong>{product.name.clone()}</strong>
                                    <span class="muted">{format!("{} · {}", product.sku, product.category)}</span>
                                    <span>{format_rupiah(product.price)}</span>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
