//! Block Palette Component
//!
//! Draggable block list grouped by category. Double-click appends directly.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart, DndSignals};

use crate::blocks::palette;
use crate::config;
use crate::context::use_app_context;

#[component]
pub fn BlockPalette(dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="block-palette">
            {palette().into_iter().map(|(category, kinds)| view! {
                <div class="palette-group">
                    <h4>{category.label()}</h4>
                    {kinds.into_iter().map(|kind| {
                        let on_dragstart = make_on_dragstart(dnd, config::BLOCK_PAYLOAD_TYPE, kind.id().to_string());
                        view! {
                            <div
                                class="palette-item"
                                draggable="true"
                                title=kind.id()
                                on:dragstart=on_dragstart
                                on:dragend=make_on_dragend(dnd)
                                on:dblclick=move |_| ctx.append_block(kind.id())
                            >
                                {kind.label()}
                            </div>
                        }
                    }).collect_view()}
                </div>
            }).collect_view()}
        </div>
    }
}
