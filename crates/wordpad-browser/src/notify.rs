//! User-facing notifications for non-fatal failures.

use wasm_bindgen::JsValue;

use crate::js_error_message;

/// Show `message` through the host's callback, or `window.alert` without one.
pub fn notify(callback: Option<&js_sys::Function>, message: &str) {
    if let Some(callback) = callback {
        if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(message)) {
            tracing::warn!("notifier threw: {}", js_error_message(&e));
        }
        return;
    }
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
