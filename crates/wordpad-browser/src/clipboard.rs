//! Browser clipboard implementation.
//!
//! Implements `ClipboardSource` over a paste event's DataTransfer.

use wordpad_core::{
    ClipboardIngest, ClipboardPayload, ClipboardSource, DocumentSurface, SmolStr,
};

/// Browser clipboard context wrapping a ClipboardEvent's DataTransfer.
pub struct BrowserClipboard {
    data_transfer: Option<web_sys::DataTransfer>,
}

impl BrowserClipboard {
    /// Create from a ClipboardEvent.
    ///
    /// Call this in your paste event handler.
    pub fn from_event(evt: &web_sys::ClipboardEvent) -> Self {
        Self {
            data_transfer: evt.clipboard_data(),
        }
    }

    /// Create an empty clipboard context (for testing or non-event contexts).
    pub fn empty() -> Self {
        Self {
            data_transfer: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.data_transfer.is_some()
    }
}

impl ClipboardSource for BrowserClipboard {
    fn item_types(&self) -> Vec<SmolStr> {
        let Some(dt) = &self.data_transfer else {
            return Vec::new();
        };
        let items = dt.items();
        (0..items.length())
            .filter_map(|i| items.get(i))
            .map(|item| SmolStr::new(item.type_()))
            .collect()
    }

    fn get_data(&self, mime: &str) -> Option<String> {
        let dt = self.data_transfer.as_ref()?;
        match dt.get_data(mime) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::debug!("clipboard getData({mime}) failed: {:?}", e);
                None
            }
        }
    }
}

/// Handle a DOM paste event.
///
/// Image pastes are left alone so the surface's native handler runs. Text
/// pastes are stopped before the surface sees them and replaced by the
/// sanitized fragment. Returns true if the event was intercepted.
pub fn handle_paste_event<S: DocumentSurface + ?Sized>(
    evt: &web_sys::ClipboardEvent,
    ingest: &ClipboardIngest,
    surface: &S,
) -> bool {
    let clipboard = BrowserClipboard::from_event(evt);
    if !clipboard.is_available() {
        return false;
    }

    let payload = ClipboardPayload::from_source(&clipboard);
    let intercepted = ingest.handle_paste(&payload, surface);
    if intercepted {
        evt.prevent_default();
        evt.stop_propagation();
    }
    intercepted
}
