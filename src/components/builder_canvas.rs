//! Builder Canvas Component
//!
//! Palette on the left, the active page's markup as the drop target.

use leptos::prelude::*;
use leptos_dragdrop::create_dnd_signals;
use wasm_bindgen::JsCast;

use crate::components::{BlockPalette, DropZone};
use crate::context::use_app_context;
use crate::store::{use_app_store, UiStateStoreFields};

/// `data-type` of the block containing the click target
fn clicked_block(ev: &web_sys::MouseEvent) -> Option<String> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let block = element.closest("[data-type]").ok()??;
    block.get_attribute("data-type")
}

#[component]
pub fn BuilderCanvas() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let dnd = create_dnd_signals();

    let html = move || {
        store
            .workspace()
            .with(|s| s.current_page().map(|p| p.html.clone()).unwrap_or_default())
    };
    let is_empty = move || store.workspace().with(|s| s.current_page().map_or(true, |p| p.html.is_empty()));

    let on_drop = Callback::new(move |block_id: String| ctx.append_block(&block_id));

    let on_click = move |ev: web_sys::MouseEvent| {
        let selected = clicked_block(&ev);
        if selected != store.workspace().with_untracked(|s| s.selected_element.clone()) {
            ctx.run(|ws| ws.select_element(selected));
        }
    };

    view! {
        <div class="builder">
            <aside class="palette-column">
                <h3>"Blok & Komponen"</h3>
                <BlockPalette dnd=dnd />
            </aside>
            <section class="canvas-column">
                <div class="canvas-header">
                    <h2>"Canvas"</h2>
                    <p class="muted">"Drag blok dari panel kiri untuk membangun halaman"</p>
                </div>
                <DropZone dnd=dnd on_drop=on_drop>
                    <Show
                        when=is_empty
                        fallback=move || view! { <div class="page-canvas" inner_html=html on:click=on_click></div> }
                    >
                        <div class="canvas-empty">
                            <h3>"Mulai Membangun"</h3>
                            <p class="muted">"Drag & drop blok dari panel kiri untuk memulai"</p>
                        </div>
                    </Show>
                </DropZone>
            </section>
        </div>
    }
}
