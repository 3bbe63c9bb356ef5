//! Window-level effects that have no place in the rendered tree.
//! Only the wasm build talks to the browser; other targets log and do nothing.

use dioxus::prelude::document;

// Replies with the `offsetTop` of the element whose id it receives, or null.
const JS_SECTION_TOP: &str = r#"
    const id = await dioxus.recv();
    const section = document.getElementById(id);
    dioxus.send(section ? section.offsetTop : null);
"#;

/// Current top offset of the section `id`, read from the live layout.
pub async fn section_top(id: &str) -> Option<f64> {
    let mut eval = document::eval(JS_SECTION_TOP);
    if let Err(err) = eval.send(id) {
        tracing::debug!("browser.section_top: send failed: {err:?}");
        return None;
    }
    match eval.recv::<Option<f64>>().await {
        Ok(top) => top,
        Err(err) => {
            tracing::debug!("browser.section_top: {err:?}");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(target_arch = "wasm32")]
pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.open_with_url_and_target(url, "_blank") {
        tracing::warn!("browser.open_in_new_tab: url={url} err={err:?}");
    }
}

#[cfg(target_arch = "wasm32")]
pub fn set_document_lang(code: &str) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(err) = root.set_attribute("lang", code) {
            tracing::warn!("browser.set_document_lang: {err:?}");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to(top: f64) {
    tracing::trace!("browser.scroll_to: top={top} (no window)");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn open_in_new_tab(url: &str) {
    tracing::trace!("browser.open_in_new_tab: url={url} (no window)");
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_document_lang(code: &str) {
    tracing::trace!("browser.set_document_lang: {code} (no window)");
}
