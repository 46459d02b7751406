//! Browser interop for loading chart data.
//!
//! The dataset is served as a static file next to the WASM bundle and fetched
//! with `window.fetch`; the raw bytes are handed to `rain_core::Dataset`, which
//! handles both plain and gzip-compressed JSON.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Append a `?v=<ms>` query so every page view fetches fresh data.
pub fn cache_busted(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}v={}", url, separator, js_sys::Date::now() as u64)
}

/// Fetch `url` and return the response body.
pub async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
    let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_error)?;
    let response: Response = response.dyn_into().map_err(js_error)?;
    if !response.ok() {
        return Err(format!("HTTP {} while fetching {}", response.status(), url));
    }

    let buffer = JsFuture::from(response.array_buffer().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    log::info!("Fetched {} bytes from {}", bytes.len(), url);
    Ok(bytes)
}

/// Inner width of the browser window in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
