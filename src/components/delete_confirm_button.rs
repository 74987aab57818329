//! Two-step delete for library cards.

use leptos::prelude::*;

/// `×` first, then `Hapus?` with confirm and cancel
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    let choose = move |ev: web_sys::MouseEvent, confirmed: bool| {
        ev.stop_propagation();
        set_armed.set(false);
        if confirmed {
            on_confirm.run(());
        }
    };

    view! {
        <Show
            when=move || armed.get()
            fallback=move || {
                let class = button_class.clone();
                view! {
                    <button
                        class=class
                        title="Hapus"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(true);
                        }
                    >
                        "×"
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Hapus?"</span>
                <button class="confirm-btn" on:click=move |ev| choose(ev, true)>"✓"</button>
                <button class="cancel-btn" on:click=move |ev| choose(ev, false)>"✗"</button>
            </span>
        </Show>
    }
}
