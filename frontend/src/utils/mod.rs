pub mod logging;

use front_shared::FromEvent;
use js_sys::Function;
use leptos::{logging::warn, task::spawn_local};
use serde::de::DeserializeOwned;
use wasm_bindgen::{prelude::*, JsCast};

use front_shared::config::FALLBACK_BANNER;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    pub async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "event"], catch)]
    pub async fn listen(event: &str, handler: &Function) -> Result<JsValue, JsValue>;
}

/// Subscribes `handler` to a host event for the lifetime of the page.
pub fn create_listener<T, F>(event: &'static str, mut handler: F)
where
    T: FromEvent + DeserializeOwned + 'static,
    F: FnMut(T) + 'static,
{
    let closure = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
        match T::from_event_js(payload) {
            Ok(value) => handler(value),
            Err(e) => warn!("Failed to decode {} event: {}", event, e),
        }
    });
    spawn_local(async move {
        if let Err(e) = listen(event, closure.as_ref().unchecked_ref()).await {
            warn!("Failed to listen for {}: {:?}", event, e);
        }
        closure.forget();
    });
}

/// Error text of a rejected bridge call.
pub fn js_error_text(error: JsValue) -> String {
    error
        .as_string()
        .unwrap_or_else(|| format!("{:?}", error))
}

/// CSS `background-image` value for a server banner.
pub fn banner_image(url: &str) -> String {
    let url = if url.trim().is_empty() { FALLBACK_BANNER } else { url };
    format!("url({})", url)
}
