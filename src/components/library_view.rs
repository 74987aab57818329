//! Library View
//!
//! Uploaded media stored inline in the workspace.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::media::read_file;
use crate::store::{use_app_store, NoticeKind, UiStateStoreFields};

#[component]
pub fn LibraryView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let media = move || store.workspace().with(|s| s.media.clone());

    let on_upload = move |ev: web_sys::Event| {
        for file in browser::picked_files(&ev) {
            spawn_local(async move {
                // Id is taken after the read so parallel uploads see each other
                match read_file(String::new(), &file).await {
                    Ok(mut media_file) => {
                        media_file.id = ctx.next_media_id();
                        ctx.run(|ws| ws.add_media(media_file));
                    }
                    Err(e) => {
                        log::error!("upload of {} failed: {}", file.name(), e);
                        ctx.notify(NoticeKind::Error, format!("Upload gagal: {}", e));
                    }
                }
            });
        }
    };

    view! {
        <div class="panel">
            <h2>"Library"</h2>
            <label class="btn">
                "Upload"
                <input type="file" multiple=true hidden=true on:change=on_upload />
            </label>
            <Show when=move || !media().is_empty() fallback=|| view! { <p class="muted">"Belum ada file"</p> }>
                <div class="media-grid">
                    <For
                        each=media
                        key=|m| m.id.clone()
                        children=move |file| {
                            let id = file.id.clone();
                            let preview = if file.is_image() {
                                view! { <img src=file.data_url.clone() alt=file.name.clone() /> }.into_any()
                            } else {
                                view! { <div class="media-file">{file.mime.clone()}</div> }.into_any()
                            };
                            view! {
                                <div class="card media-card">
                                    {preview}
                                    <span class="media-name">{file.name.clone()}</span>
                                    <DeleteConfirmButton
                                        button_class="delete-btn"
                                        on_confirm=Callback::new(move |_| { ctx.run(|ws| ws.remove_media(&id)); })
                                    />
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
