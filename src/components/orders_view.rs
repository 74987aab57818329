//! Orders View
//!
//! Order table with status changes and WhatsApp follow-up links.

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{OrderDraft, OrderStatus};
use crate::sales::{format_rupiah, order_link};
use crate::store::{use_app_store, NoticeKind, UiStateStoreFields};

fn format_date(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

#[component]
pub fn OrdersView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (customer, set_customer) = signal(String::new());
    let (product, set_product) = signal(String::new());
    let (qty, set_qty) = signal("1".to_string());
    let (total, set_total) = signal(String::new());
    let (method, set_method) = signal("transfer".to_string());

    let orders = move || store.workspace().with(|s| s.orders.clone());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if customer.get().trim().is_empty() || product.get().trim().is_empty() {
            return;
        }
        let (Ok(qty_value), Some(total_value)) = (
            qty.get().trim().parse::<u32>(),
            total.get().trim().parse::<f64>().ok().filter(|t| t.is_finite()),
        ) else {
            ctx.notify(NoticeKind::Error, "Jumlah dan total harus berupa angka");
            return;
        };
        let draft = OrderDraft {
            date: Utc::now().timestamp_millis(),
            customer: customer.get().trim().to_string(),
            product: product.get().trim().to_string(),
            qty: qty_value,
            total: total_value,
            method: method.get(),
            status: OrderStatus::Pending,
        };
        if ctx.run(|ws| ws.add_order(draft)).flatten().is_some() {
            set_customer.set(String::new());
            set_product.set(String::new());
            set_qty.set("1".to_string());
            set_total.set(String::new());
        }
    };

    view! {
        <div class="panel">
            <h2>"Pesanan"</h2>
            <form class="inline-form" on:submit=on_submit>
                <input type="text" placeholder="Pelanggan" prop:value=move || customer.get()
                    on:input=move |ev| set_customer.set(event_target_value(&ev)) />
                <input type="text" placeholder="Produk" prop:value=move || product.get()
                    on:input=move |ev| set_product.set(event_target_value(&ev)) />
                <input type="number" min="1" placeholder="Qty" prop:value=move || qty.get()
                    on:input=move |ev| set_qty.set(event_target_value(&ev)) />
                <input type="number" placeholder="Total" prop:value=move || total.get()
                    on:input=move |ev| set_total.set(event_target_value(&ev)) />
                <select on:change=move |ev| set_method.set(event_target_value(&ev))>
                    <option value="transfer">"Transfer"</option>
                    <option value="qris">"QRIS"</option>
                    <option value="cod">"COD"</option>
                </select>
                <button type="submit" class="primary">"Tambah"</button>
            </form>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Tanggal"</th>
                        <th>"Pelanggan"</th>
                        <th>"Produk"</th>
                        <th>"Qty"</th>
                        <th>"Total"</th>
                        <th>"Metode"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=orders
                        key=|o| (o.id.clone(), o.status.as_str())
                        children=move |order| {
                            let id = order.id.clone();
                            let current = order.status;
                            let total_label = format_rupiah(order.total);
                            let wa_href = {
                                let order = order.clone();
                                move || store.workspace().with(|s| order_link(&s.settings, &order))
                            };
                            view! {
                                <tr>
                                    <td>{format_date(order.date)}</td>
                                    <td>{order.customer.clone()}</td>
                                    <td>{order.product.clone()}</td>
                                    <td>{order.qty}</td>
                                    <td>{total_label.clone()}</td>
                                    <td>{order.method.clone()}</td>
                                    <td>
                                        <select on:change=move |ev| {
                                            if let Some(status) = OrderStatus::parse(&event_target_value(&ev)) {
                                                ctx.run(|ws| ws.set_order_status(&id, status));
                                            }
                                        }>
                                            {OrderStatus::ALL.into_iter().map(|status| view! {
                                                <option value=status.as_str() selected={status == current}>
                                                    {status.as_str()}
                                                </option>
                                            }).collect_view()}
                                        </select>
                                    </td>
                                    <td>
                                        <a class="btn" href=wa_href target="_blank" rel="noopener">"WA"</a>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
