//! WASM bindings for the wordpad editor.
//!
//! The host page loads TipTap and html2pdf.js, constructs a TipTap `Editor`
//! with `defaultConfig().initialContent`, then hands it to `JsWordpad` which
//! wires the toolbar, paste interception, image upload and PDF export.

mod editor;
mod toolbar;

pub use editor::*;

use wasm_bindgen::prelude::*;
use wordpad_core::WordpadConfig;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // A host that already installed a subscriber keeps it.
    let _ = set_global_default(Registry::default().with(wasm_layer));
}

/// The built-in configuration, for constructing the TipTap editor.
#[wasm_bindgen(js_name = defaultConfig)]
pub fn default_config() -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(&WordpadConfig::default())
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
