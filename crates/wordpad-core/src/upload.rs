//! Image file ingest.
//!
//! The platform reads the picked file into bytes; this module turns them into
//! a self-contained data URI and inserts it into the surface.

use base64::{Engine, engine::general_purpose::STANDARD};
use mime_sniffer::MimeTypeSniffer;
use smol_str::SmolStr;

use crate::error::WordpadError;
use crate::surface::DocumentSurface;

/// Empty block inserted after an image so the caret lands below it.
pub const TRAILING_PARAGRAPH: &str = "<p></p>";

/// An image file read from the picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadedImage {
    /// File name as reported by the picker
    pub name: String,
    pub mime_type: SmolStr,
    /// Size of the raw file in bytes
    pub size: usize,
    /// `data:<mime>;base64,...`
    pub data_url: String,
}

impl UploadedImage {
    /// Build from raw file bytes. `declared_type` is the picker's MIME type,
    /// which may be empty.
    pub fn from_bytes(
        name: impl Into<String>,
        declared_type: &str,
        bytes: &[u8],
    ) -> Result<Self, WordpadError> {
        let name = name.into();
        if bytes.is_empty() {
            return Err(WordpadError::EmptyFile(name));
        }

        let mime_type = resolve_mime_type(declared_type, bytes);
        let data_url = data_url(&mime_type, bytes);

        Ok(Self {
            name,
            mime_type,
            size: bytes.len(),
            data_url,
        })
    }
}

/// The declared type when present, otherwise sniffed from the bytes.
pub fn resolve_mime_type(declared_type: &str, bytes: &[u8]) -> SmolStr {
    let declared = declared_type.trim();
    if !declared.is_empty() {
        return SmolStr::new(declared);
    }
    SmolStr::new(
        bytes
            .sniff_mime_type()
            .unwrap_or("application/octet-stream"),
    )
}

/// Encode bytes as a base64 data URI.
pub fn data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Insert an image at the caret, followed by an empty paragraph.
pub fn insert_uploaded_image<S: DocumentSurface + ?Sized>(surface: &S, image: &UploadedImage) {
    tracing::debug!(
        name = %image.name,
        mime = %image.mime_type,
        size = image.size,
        "inserting uploaded image"
    );
    surface.insert_image_block(&image.data_url);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingSurface, SurfaceCall};

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

    #[test]
    fn test_data_url() {
        assert_eq!(data_url("image/gif", b"GIF"), "data:image/gif;base64,R0lG");
    }

    #[test]
    fn test_declared_type_wins() {
        assert_eq!(resolve_mime_type("image/webp", PNG_HEADER), "image/webp");
    }

    #[test]
    fn test_sniffs_when_undeclared() {
        assert_eq!(resolve_mime_type("", PNG_HEADER), "image/png");
    }

    #[test]
    fn test_unknown_bytes_fall_back() {
        assert_eq!(
            resolve_mime_type(" ", b"\x00\x01\x02"),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let err = UploadedImage::from_bytes("a.png", "image/png", &[]).unwrap_err();
        assert!(matches!(err, WordpadError::EmptyFile(name) if name == "a.png"));
    }

    #[test]
    fn test_insert_image_then_paragraph() {
        let image = UploadedImage::from_bytes("cat.png", "image/png", PNG_HEADER).unwrap();
        assert_eq!(image.size, PNG_HEADER.len());
        assert!(image.data_url.starts_with("data:image/png;base64,"));

        let surface = RecordingSurface::new();
        insert_uploaded_image(&surface, &image);
        assert_eq!(
            surface.calls(),
            vec![
                SurfaceCall::SetImage(image.data_url.clone()),
                SurfaceCall::InsertContent("<p></p>".to_string()),
            ]
        );
    }

    #[test]
    fn test_insert_image_uses_single_block_command() {
        let image = UploadedImage::from_bytes("cat.png", "image/png", PNG_HEADER).unwrap();

        let surface = RecordingSurface::batched();
        insert_uploaded_image(&surface, &image);
        assert_eq!(
            surface.calls(),
            vec![SurfaceCall::InsertImageBlock(image.data_url.clone())]
        );
    }
}
