//! Browser DOM layer for the wordpad editor.
//!
//! This crate binds the pure logic in `wordpad-core` to the browser. It
//! assumes a `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `clipboard`: paste event reading and interception
//! - `file`: image file reading from the picker
//! - `tiptap`: `DocumentSurface` over a host-constructed TipTap editor
//! - `pdf`: html2pdf.js binding for page export
//! - `notify`: host callback or `alert` for non-fatal failures
//!
//! # Re-exports
//!
//! This crate re-exports `wordpad-core` for convenience, so consumers
//! only need to depend on `wordpad-browser`.

use wasm_bindgen::{JsCast, JsValue};

// Re-export core crate
pub use wordpad_core;
pub use wordpad_core::*;

pub mod clipboard;
pub mod file;
pub mod notify;
pub mod pdf;
pub mod tiptap;

pub use clipboard::{BrowserClipboard, handle_paste_event};
pub use file::{handle_file_selected, read_image_file};
pub use notify::notify;
pub use pdf::{export_and_notify, export_to_pdf};
pub use tiptap::{TiptapEditor, TiptapSurface};

/// Best-effort human-readable message from a thrown JS value.
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
