//! CRM View
//!
//! Lead board; cards are dragged between stage columns.

use leptos::prelude::*;
use leptos_dragdrop::{
    create_dnd_signals, make_on_dragend, make_on_dragleave, make_on_dragover, make_on_dragstart, make_on_drop,
};

use crate::config;
use crate::context::use_app_context;
use crate::models::LeadStage;
use crate::store::{use_app_store, UiStateStoreFields};

#[component]
fn StageColumn(stage: LeadStage) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let dnd = create_dnd_signals();

    let leads = move || {
        store.workspace().with(|s| {
            s.crm
                .iter()
                .filter(|lead| lead.stage == stage)
                .cloned()
                .collect::<Vec<_>>()
        })
    };
    let on_drop = make_on_drop(dnd, config::LEAD_PAYLOAD_TYPE, move |lead_id: String| {
        ctx.run(|ws| ws.move_lead(&lead_id, stage));
    });

    view! {
        <div
            class=move || if dnd.over_read.get() { "crm-column active" } else { "crm-column" }
            on:dragover=make_on_dragover(dnd)
            on:dragleave=make_on_dragleave(dnd)
            on:drop=on_drop
        >
            <h4>{stage.label()}</h4>
            <For
                each=leads
                key=|lead| lead.id.clone()
                children=move |lead| view! {
                    <div
                        class="crm-card"
                        draggable="true"
                        on:dragstart=make_on_dragstart(dnd, config::LEAD_PAYLOAD_TYPE, lead.id.clone())
                        on:dragend=make_on_dragend(dnd)
                    >
                        <strong>{lead.name.clone()}</strong>
                        <Show when={
                            let empty = lead.note.is_empty();
                            move || !empty
                        }>
                            <p class="muted">{lead.note.clone()}</p>
                        </Show>
                    </div>
                }
            />
        </div>
    }
}

#[component]
pub fn CrmView() -> impl IntoView {
    let ctx = use_app_context();
    let (name, set_name) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.run(|ws| ws.add_lead(&name.get())).flatten().is_some() {
            set_name.set(String::new());
        }
    };

    view! {
        <div class="panel">
            <h2>"CRM"</h2>
            <form class="inline-form" on:submit=on_submit>
                <input type="text" placeholder="Nama lead" prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev)) />
                <button type="submit" class="primary">"Tambah"</button>
            </form>
            <div class="crm-board">
                {LeadStage::ALL.into_iter().map(|stage| view! { <StageColumn stage=stage /> }).collect_view()}
            </div>
        </div>
    }
}
