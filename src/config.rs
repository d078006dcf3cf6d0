//! Runtime Configuration
//!
//! Build-time defaults (`WP_BASE_URL`) overridden by an optional
//! `window.__WP_CONFIG__` set by the hosting page, either as an object or
//! as a JSON string.

use wasm_bindgen::JsValue;
use wp_rest::ApiConfig;

const WINDOW_KEY: &str = "__WP_CONFIG__";

/// Read the page-provided config. Falls back to defaults when absent;
/// a malformed object is reported so it can be logged once logging is up.
pub fn load() -> Result<ApiConfig, String> {
    let Some(window) = web_sys::window() else {
        return Ok(ApiConfig::default());
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(WINDOW_KEY))
        .unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        return Ok(ApiConfig::default());
    }
    if let Some(json) = value.as_string() {
        return ApiConfig::from_json(&json).map_err(|e| format!("ignoring window.{}: {}", WINDOW_KEY, e));
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| format!("ignoring window.{}: {}", WINDOW_KEY, e))
}
