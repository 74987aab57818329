//! Browser Actions
//!
//! Thin wrappers over window APIs used by the views: downloads, preview
//! windows, prompts and reading picked files.

use std::time::Duration;

use leptos::prelude::set_timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::storage::js_message;

const REVOKE_DELAY: Duration = Duration::from_secs(10);

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "window is unavailable".to_string())
}

fn object_url(contents: &str, mime: &str) -> Result<String, String> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_message)?;
    web_sys::Url::create_object_url_with_blob(&blob).map_err(js_message)
}

/// Offer `contents` as a file download
pub fn download_text(file_name: &str, mime: &str, contents: &str) -> Result<(), String> {
    let document = window()?.document().ok_or("document is unavailable")?;
    let url = object_url(contents, mime)?;
    let anchor = document
        .create_element("a")
        .map_err(js_message)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "failed to create link".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    // Revoking right away can cancel the download
    set_timeout(
        move || {
            let _ = web_sys::Url::revoke_object_url(&url);
        },
        REVOKE_DELAY,
    );
    log::info!("downloaded {} ({} bytes)", file_name, contents.len());
    Ok(())
}

/// Show an HTML document in a new tab
pub fn open_preview(html: &str) -> Result<(), String> {
    let url = object_url(html, "text/html")?;
    // The URL stays alive for the lifetime of the preview tab
    window()?
        .open_with_url_and_target(&url, "_blank")
        .map_err(js_message)?;
    Ok(())
}

/// `window.prompt`; None when cancelled or blank
pub fn prompt(message: &str) -> Option<String> {
    let answer = window().ok()?.prompt_with_message(message).ok()??;
    let answer = answer.trim();
    if answer.is_empty() {
        None
    } else {
        Some(answer.to_string())
    }
}

pub fn confirm(message: &str) -> bool {
    window()
        .ok()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Files picked in an `<input type="file">` change event
pub fn picked_files(ev: &web_sys::Event) -> Vec<web_sys::File> {
    let Some(input) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let files = match input.files() {
        Some(list) => (0..list.length()).filter_map(|i| list.get(i)).collect(),
        None => Vec::new(),
    };
    // Allow picking the same file again
    input.set_value("");
    files
}

/// Read a picked file as UTF-8 text
pub async fn read_text(file: &web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text()).await.map_err(js_message)?;
    text.as_string().ok_or_else(|| "file is not text".to_string())
}
