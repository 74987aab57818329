//! Drop Zone Component
//!
//! Canvas area that accepts blocks dragged from the palette.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragleave, make_on_dragover, make_on_drop, DndSignals};

use crate::config;

/// Drop target reading the block id from the drag payload
#[component]
pub fn DropZone(
    /// Shared with the palette that starts the drag
    dnd: DndSignals,
    /// Called with the dropped block id
    on_drop: Callback<String>,
    children: Children,
) -> impl IntoView {
    let on_dragover = make_on_dragover(dnd);
    let on_dragleave = make_on_dragleave(dnd);
    let on_drop_handler = make_on_drop(dnd, config::BLOCK_PAYLOAD_TYPE, move |block_id: String| {
        on_drop.run(block_id);
    });

    view! {
        <div
            class=move || {
                let mut c = "drop-zone".to_string();
                if dnd.over_read.get() { c.push_str(" active"); }
                if dnd.dragging_read.get().is_some() { c.push_str(" dragging"); }
                c
            }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop_handler
        >
            {children()}
        </div>
    }
}
