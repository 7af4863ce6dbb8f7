//! Paste classification and sanitization.
//!
//! Image pastes are left to the surface's native handler untouched. Text
//! pastes are suppressed and replaced by a sanitized fragment, preferring the
//! HTML entry over plain text.

use smol_str::SmolStr;

use crate::filter::PhraseFilter;
use crate::surface::DocumentSurface;

pub const MIME_PLAIN: &str = "text/plain";
pub const MIME_HTML: &str = "text/html";

/// Fragment inserted when a paste sanitizes to nothing.
pub const EMPTY_PASTE_FRAGMENT: &str = " ";

/// Read access to a platform clipboard during a paste event.
pub trait ClipboardSource {
    /// MIME types of every item on the clipboard.
    fn item_types(&self) -> Vec<SmolStr>;

    /// Data for a MIME type; `None` when absent.
    fn get_data(&self, mime: &str) -> Option<String>;
}

/// Snapshot of a clipboard at paste time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardPayload {
    pub item_types: Vec<SmolStr>,
    pub plain: Option<String>,
    pub html: Option<String>,
}

impl ClipboardPayload {
    pub fn from_source<C: ClipboardSource + ?Sized>(source: &C) -> Self {
        Self {
            item_types: source.item_types(),
            plain: source.get_data(MIME_PLAIN),
            html: source.get_data(MIME_HTML),
        }
    }

    /// Payload with a single plain-text entry.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            item_types: vec![SmolStr::new_static(MIME_PLAIN)],
            plain: Some(text.into()),
            html: None,
        }
    }

    /// Payload with an HTML entry and its plain-text rendering.
    pub fn html(html: impl Into<String>, plain: impl Into<String>) -> Self {
        Self {
            item_types: vec![
                SmolStr::new_static(MIME_PLAIN),
                SmolStr::new_static(MIME_HTML),
            ],
            plain: Some(plain.into()),
            html: Some(html.into()),
        }
    }

    /// Add an item type (e.g. `image/png`) without data.
    pub fn with_item_type(mut self, mime: impl Into<SmolStr>) -> Self {
        self.item_types.push(mime.into());
        self
    }

    pub fn has_image(&self) -> bool {
        self.item_types.iter().any(|t| t.starts_with("image/"))
    }
}

/// What the platform should do with a paste event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteAction {
    /// Let the surface's native paste run (image pastes).
    PassThrough,
    /// Prevent the native paste and insert this fragment at the caret.
    Suppress(String),
}

/// Turns clipboard payloads into paste actions.
#[derive(Debug, Clone)]
pub struct ClipboardIngest {
    filter: PhraseFilter,
}

impl ClipboardIngest {
    pub fn new(filter: PhraseFilter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> &PhraseFilter {
        &self.filter
    }

    /// Classify a paste and produce the fragment to insert.
    pub fn on_paste(&self, payload: &ClipboardPayload) -> PasteAction {
        if payload.has_image() {
            tracing::debug!(types = ?payload.item_types, "image paste, passing through");
            return PasteAction::PassThrough;
        }

        let html = payload.html.as_deref().unwrap_or_default();
        let plain = payload.plain.as_deref().unwrap_or_default();

        let cleaned = if !html.trim().is_empty() {
            self.filter.sanitize_html(html)
        } else if !plain.trim().is_empty() {
            self.filter.sanitize_html(&plain_to_html(plain))
        } else {
            String::new()
        };

        tracing::debug!(
            html_len = html.len(),
            plain_len = plain.len(),
            cleaned_len = cleaned.len(),
            "sanitized paste"
        );

        if cleaned.trim().is_empty() {
            PasteAction::Suppress(EMPTY_PASTE_FRAGMENT.to_string())
        } else {
            PasteAction::Suppress(cleaned)
        }
    }

    /// Classify a paste and, if suppressed, insert the fragment.
    ///
    /// Returns true when the caller must prevent the platform's default paste.
    pub fn handle_paste<S: DocumentSurface + ?Sized>(
        &self,
        payload: &ClipboardPayload,
        surface: &S,
    ) -> bool {
        match self.on_paste(payload) {
            PasteAction::PassThrough => false,
            PasteAction::Suppress(fragment) => {
                surface.insert_content(&fragment);
                true
            }
        }
    }
}

/// Escape plain text and turn its line breaks into `<br>`.
fn plain_to_html(plain: &str) -> String {
    let mut out = String::with_capacity(plain.len());
    let normalized = plain.replace("\r\n", "\n");
    for c in normalized.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\n' => out.push_str("<br>"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BANNED_PHRASES;
    use crate::testing::{RecordingSurface, SurfaceCall};

    fn ingest() -> ClipboardIngest {
        ClipboardIngest::new(PhraseFilter::new(DEFAULT_BANNED_PHRASES).unwrap())
    }

    #[test]
    fn test_image_passes_through() {
        let payload = ClipboardPayload::plain("sign up").with_item_type("image/png");
        assert_eq!(ingest().on_paste(&payload), PasteAction::PassThrough);
    }

    #[test]
    fn test_image_only_passes_through() {
        let payload = ClipboardPayload::default().with_item_type("image/jpeg");
        assert_eq!(ingest().on_paste(&payload), PasteAction::PassThrough);
    }

    #[test]
    fn test_plain_multiline() {
        let payload = ClipboardPayload::plain("Report Abuse\nagain");
        assert_eq!(
            ingest().on_paste(&payload),
            PasteAction::Suppress("<br>again".to_string())
        );
    }

    #[test]
    fn test_plain_crlf_and_escaping() {
        let payload = ClipboardPayload::plain("a < b\r\nc & d");
        assert_eq!(
            ingest().on_paste(&payload),
            PasteAction::Suppress("a &lt; b<br>c &amp; d".to_string())
        );
    }

    #[test]
    fn test_html_preferred_over_plain() {
        let payload = ClipboardPayload::html(
            "<p>Hello <strong>Sign Up</strong> world</p>",
            "Hello Sign Up world",
        );
        assert_eq!(
            ingest().on_paste(&payload),
            PasteAction::Suppress("<p>Hello <strong></strong> world</p>".to_string())
        );
    }

    #[test]
    fn test_blank_html_falls_back_to_plain() {
        let payload = ClipboardPayload::html("   ", "Please sign up now");
        assert_eq!(
            ingest().on_paste(&payload),
            PasteAction::Suppress("Please now".to_string())
        );
    }

    #[test]
    fn test_empty_paste_inserts_space() {
        let ingest = ingest();
        for payload in [
            ClipboardPayload::default(),
            ClipboardPayload::plain("   "),
            ClipboardPayload::plain("SIGN UP"),
        ] {
            assert_eq!(
                ingest.on_paste(&payload),
                PasteAction::Suppress(" ".to_string())
            );
        }
    }

    #[test]
    fn test_handle_paste_inserts_fragment() {
        let surface = RecordingSurface::new();
        let handled = ingest().handle_paste(&ClipboardPayload::plain("hi  there"), &surface);
        assert!(handled);
        assert_eq!(
            surface.calls(),
            vec![SurfaceCall::InsertContent("hi there".to_string())]
        );
    }

    #[test]
    fn test_handle_paste_leaves_images_alone() {
        let surface = RecordingSurface::new();
        let payload = ClipboardPayload::default().with_item_type("image/png");
        assert!(!ingest().handle_paste(&payload, &surface));
        assert!(surface.calls().is_empty());
    }

    struct FakeSource;

    impl ClipboardSource for FakeSource {
        fn item_types(&self) -> Vec<SmolStr> {
            vec![SmolStr::new("text/plain")]
        }

        fn get_data(&self, mime: &str) -> Option<String> {
            (mime == MIME_PLAIN).then(|| "x".to_string())
        }
    }

    #[test]
    fn test_payload_from_source() {
        let payload = ClipboardPayload::from_source(&FakeSource);
        assert_eq!(payload, ClipboardPayload::plain("x"));
    }
}
