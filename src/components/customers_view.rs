//! Customers View
//!
//! Customer list with search and an add form.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{Customer, CustomerDraft};
use crate::store::{use_app_store, UiStateStoreFields};

/// Case-insensitive match on name, phone or email
fn matches_query(customer: &Customer, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty()
        || [&customer.name, &customer.phone, &customer.email]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
}

#[component]
pub fn CustomersView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (query, set_query) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (email, set_email) = signal(String::new());

    let filtered = move || {
        let q = query.get();
        store.workspace().with(|s| {
            s.customers
                .iter()
                .filter(|c| matches_query(c, &q))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let customer_name = name.get().trim().to_string();
        if customer_name.is_empty() {
            return;
        }
        let draft = CustomerDraft {
            name: customer_name,
            phone: phone.get().trim().to_string(),
            email: email.get().trim().to_string(),
            ..Default::default()
        };
        if ctx.run(|ws| ws.add_customer(draft)).is_some() {
            set_name.set(String::new());
            set_phone.set(String::new());
            set_email.set(String::new());
        }
    };

    view! {
        <div class="panel">
            <h2>"Pelanggan"</h2>
            <input
                type="search"
                class="search"
                placeholder="Cari pelanggan..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <form class="inline-form" on:submit=on_submit>
                <input type="text" placeholder="Nama" prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev)) />
                <input type="tel" placeholder="Telepon" prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev)) />
                <input type="email" placeholder="Email" prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev)) />
                <button type="submit" class="primary">"Tambah"</button>
            </form>
            <table class="table">
                <thead>
                    <tr><th>"Nama"</th><th>"Telepon"</th><th>"Email"</th></tr>
                </thead>
                <tbody>
                    <For
                        each=filtered
                        key=|c| c.id.clone()
                        children=|customer| view! {
                            <tr>
                                <td>{customer.name}</td>
                                <td>{customer.phone}</td>
                                <td>{customer.email}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
