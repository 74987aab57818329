//! Settings View
//!
//! Brand, payment and theme settings, settings backup, and workspace
//! switching/reset.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::context::use_app_context;
use crate::logger;
use crate::models::Settings;
use crate::settings_io::{export_file_name, export_settings, import_settings};
use crate::store::{use_app_store, NoticeKind, UiStateStoreFields};

/// Text input bound to one settings field; saved on change
#[component]
fn SettingField(
    label: &'static str,
    read: fn(&Settings) -> String,
    write: fn(&mut Settings, String),
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let value = move || store.workspace().with(|s| read(&s.settings));
    let on_change = move |ev: web_sys::Event| {
        let next = event_target_value(&ev);
        if next != store.workspace().with_untracked(|s| read(&s.settings)) {
            ctx.run(|ws| ws.update_settings(|settings| write(settings, next)));
        }
    };

    view! {
        <label class="field">
            <span class="muted">{label}</span>
            {if multiline {
                view! { <textarea rows="3" prop:value=value on:change=on_change></textarea> }.into_any()
            } else {
                view! { <input type="text" prop:value=value on:change=on_change /> }.into_any()
            }}
        </label>
    }
}

/// Select over the media library bound to a media-id field
#[component]
fn MediaSelect(
    label: &'static str,
    read: fn(&Settings) -> String,
    write: fn(&mut Settings, String),
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let media = move || {
        store
            .workspace()
            .with(|s| s.media.iter().filter(|m| m.is_image()).map(|m| (m.id.clone(), m.name.clone())).collect::<Vec<_>>())
    };
    let current = move || store.workspace().with(|s| read(&s.settings));

    view! {
        <label class="field">
            <span class="muted">{label}</span>
            <select on:change=move |ev| {
                let next = event_target_value(&ev);
                ctx.run(|ws| ws.update_settings(|settings| write(settings, next)));
            }>
                <option value="" selected=move || current().is_empty()>"(tidak ada)"</option>
                {move || media().into_iter().map(|(id, name)| {
                    let is_selected = current() == id;
                    view! { <option value=id selected=is_selected>{name}</option> }
                }).collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn SettingsView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let theme = move || store.workspace().with(|s| s.settings.theme.clone());
    let workspace_name = move || store.workspace().with(|s| s.settings.workspace.clone());

    let on_export = move |_| {
        let now = chrono::Utc::now();
        let text = store.workspace().with_untracked(|s| export_settings(&s.settings, now));
        if let Err(e) = browser::download_text(&export_file_name(now), "application/json", &text) {
            ctx.notify(NoticeKind::Error, format!("Export gagal: {}", e));
        }
    };

    let on_import = move |ev: web_sys::Event| {
        for file in browser::picked_files(&ev) {
            spawn_local(async move {
                let parsed = browser::read_text(&file)
                    .await
                    .and_then(|text| import_settings(&text).map_err(|e| e.to_string()));
                match parsed {
                    Ok(imported) => {
                        if ctx.run(|ws| ws.update_settings(|settings| *settings = imported)).is_some() {
                            ctx.notify(NoticeKind::Info, "Pengaturan berhasil diimpor");
                        }
                    }
                    Err(e) => {
                        log::warn!("settings import rejected: {}", e);
                        ctx.notify(NoticeKind::Error, "Invalid file format");
                    }
                }
            });
        }
    };

    let on_reset_settings = move |_| {
        if browser::confirm("Kembalikan pengaturan ke default?") {
            ctx.run(|ws| ws.reset_settings());
        }
    };

    let on_reset_workspace = move |_| {
        if browser::confirm("Hapus semua data workspace ini? Tindakan ini tidak bisa dibatalkan.") {
            ctx.reset_workspace();
        }
    };

    let on_open_workspace = move |_| {
        if let Some(name) = browser::prompt("Nama workspace:") {
            ctx.open_workspace(&name);
        }
    };

    view! {
        <div class="panel settings">
            <h2>"Settings"</h2>

            <section>
                <h3>"Brand"</h3>
                <SettingField label="Nama brand" read={|s| s.brand_name.clone()} write={|s, v| s.brand_name = v} />
                <SettingField label="Domain" read={|s| s.domain.clone()} write={|s, v| s.domain = v} />
                <SettingField label="Bahasa" read={|s| s.language.clone()} write={|s, v| s.language = v} />
                <label class="field">
                    <span class="muted">"Tema"</span>
                    <select on:change=move |ev| {
                        let next = event_target_value(&ev);
                        ctx.run(|ws| ws.update_settings(|settings| settings.theme = next));
                    }>
                        <option value="dark" selected=move || theme() != "light">"Gelap"</option>
                        <option value="light" selected=move || theme() == "light">"Terang"</option>
                    </select>
                </label>
                <MediaSelect label="Logo" read={|s| s.logo.clone()} write={|s, v| s.logo = v} />
                <MediaSelect label="Favicon" read={|s| s.favicon.clone()} write={|s, v| s.favicon = v} />
            </section>

            <section>
                <h3>"Pembayaran"</h3>
                <SettingField label="Nomor WhatsApp" read={|s| s.wa_number.clone()} write={|s, v| s.wa_number = v} />
                <SettingField label="Template pesan" read={|s| s.wa_template.clone()} write={|s, v| s.wa_template = v} multiline=true />
                <SettingField label="Info bank" read={|s| s.bank_info.clone()} write={|s, v| s.bank_info = v} multiline=true />
                <SettingField label="QRIS ID" read={|s| s.qris_id.clone()} write={|s, v| s.qris_id = v} />
                <MediaSelect label="Gambar QRIS" read={|s| s.qris_img.clone()} write={|s, v| s.qris_img = v} />
            </section>

            <section>
                <h3>"Backup"</h3>
                <div class="actions">
                    <button class="ghost" on:click=on_export>"Export pengaturan"</button>
                    <label class="btn">
                        "Import pengaturan"
                        <input type="file" accept="application/json,.json" hidden=true on:change=on_import />
                    </label>
                    <button class="ghost" on:click=on_reset_settings>"Reset pengaturan"</button>
                </div>
            </section>

            <section>
                <h3>"Workspace"</h3>
                <p class="muted">{move || format!("Workspace aktif: {}", workspace_name())}</p>
                // Renaming saves into a new bucket; the old one keeps its last state
                <SettingField label="Workspace ID" read={|s| s.workspace.clone()} write={|s, v| s.workspace = v.trim().to_string()} />
                <div class="actions">
                    <button class="ghost" on:click=on_open_workspace>"Buka workspace lain"</button>
                    <button class="danger" on:click=on_reset_workspace>"Reset workspace"</button>
                </div>
            </section>

            <details class="diagnostics">
                <summary>"Log terakhir"</summary>
                <pre>{move || {
                    // Re-read whenever the aggregate changes
                    store.workspace().track();
                    logger::recent().join("\n")
                }}</pre>
            </details>
        </div>
    }
}
