//! Notice Bar Component
//!
//! Banner for import errors and unsaved-change warnings.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, NoticeKind, UiStateStoreFields};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    move || {
        store.notice().get().map(|notice| {
            let class = match notice.kind {
                NoticeKind::Info => "notice info",
                NoticeKind::Warning => "notice warning",
                NoticeKind::Error => "notice error",
            };
            view! {
                <div class=class role="status">
                    <span>{notice.message}</span>
                    <button class="ghost" on:click=move |_| ctx.dismiss_notice()>"×"</button>
                </div>
            }
        })
    }
}
