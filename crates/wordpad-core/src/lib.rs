//! wordpad-core: Pure Rust editor logic without browser dependencies.
//!
//! This crate provides:
//! - `PhraseFilter` - banned-phrase removal for pasted text and HTML
//! - `ClipboardIngest` - paste classification into pass-through or sanitized insert
//! - `DocumentSurface` trait - the rich-text engine seam, plus toolbar commands
//! - Image ingest helpers (data URI construction)
//! - `PdfExportOptions` and `WordpadConfig`

pub mod clipboard;
pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod surface;
pub mod upload;

#[cfg(test)]
pub(crate) mod testing;

pub use smol_str::SmolStr;

pub use clipboard::{
    ClipboardIngest, ClipboardPayload, ClipboardSource, MIME_HTML, MIME_PLAIN, PasteAction,
};
pub use config::{DEFAULT_BANNED_PHRASES, DEFAULT_INITIAL_CONTENT, WordpadConfig};
pub use error::WordpadError;
pub use export::{
    Html2CanvasOptions, ImageFormat, ImageOptions, JsPdfOptions, Orientation, PdfExportOptions,
};
pub use filter::PhraseFilter;
pub use surface::{DocumentSurface, Mark, ToolbarCommand, ToolbarState, execute_command};
pub use upload::{UploadedImage, data_url, insert_uploaded_image, resolve_mime_type};
