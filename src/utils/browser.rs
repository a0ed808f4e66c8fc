//! Small wrappers over browser APIs used by event handlers.

use leptos::logging::warn;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement, Url};

/// Blocking `confirm()` dialog; `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    if cfg!(not(target_arch = "wasm32")) {
        return false;
    }
    gloo_utils::window()
        .confirm_with_message(message)
        .unwrap_or(false)
}

/// First file chosen in a `<input type="file">`, clearing the input so the
/// same file can be picked again.
pub fn take_selected_file(ev: &Event) -> Option<File> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    let file = input.files().and_then(|list| list.get(0));
    input.set_value("");
    file
}

/// Local preview URL for a file that has not been uploaded.
pub fn object_url(file: &File) -> Option<String> {
    match Url::create_object_url_with_blob(file) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!("[BROWSER] Could not create preview URL: {:?}", e);
            None
        }
    }
}

pub fn revoke_object_url(url: &str) {
    if cfg!(target_arch = "wasm32") && url.starts_with("blob:") {
        let _ = Url::revoke_object_url(url);
    }
}
