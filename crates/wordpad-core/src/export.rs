//! PDF export options.
//!
//! The PDF itself is produced by html2pdf.js; these types serialize to the
//! option object it expects (`margin`, `filename`, `image`, `html2canvas`,
//! `jsPDF`).

use serde::{Deserialize, Serialize};

/// Options for a single page-container export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfExportOptions {
    /// Page margin in `jspdf.unit` units.
    pub margin: f64,
    /// Name of the downloaded file.
    pub filename: String,
    pub image: ImageOptions,
    pub html2canvas: Html2CanvasOptions,
    #[serde(rename = "jsPDF")]
    pub jspdf: JsPdfOptions,
}

impl Default for PdfExportOptions {
    fn default() -> Self {
        Self {
            margin: 10.0,
            filename: "document.pdf".to_owned(),
            image: ImageOptions::default(),
            html2canvas: Html2CanvasOptions::default(),
            jspdf: JsPdfOptions::default(),
        }
    }
}

/// Raster format of the captured page snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
    Webp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageOptions {
    #[serde(rename = "type")]
    pub format: ImageFormat,
    /// Encoder quality in `0.0..=1.0`.
    pub quality: f64,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            format: ImageFormat::Jpeg,
            quality: 0.98,
        }
    }
}

/// Snapshot settings. CORS/taint are permissive so pasted remote images
/// have a chance of surviving the capture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Html2CanvasOptions {
    pub scale: f64,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    pub allow_taint: bool,
}

impl Default for Html2CanvasOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            use_cors: true,
            allow_taint: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsPdfOptions {
    pub unit: String,
    pub format: String,
    pub orientation: Orientation,
}

impl Default for JsPdfOptions {
    fn default() -> Self {
        Self {
            unit: "mm".to_owned(),
            format: "a4".to_owned(),
            orientation: Orientation::Portrait,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_options_shape() {
        let value = serde_json::to_value(PdfExportOptions::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "margin": 10.0,
                "filename": "document.pdf",
                "image": { "type": "jpeg", "quality": 0.98 },
                "html2canvas": { "scale": 2.0, "useCORS": true, "allowTaint": true },
                "jsPDF": { "unit": "mm", "format": "a4", "orientation": "portrait" }
            })
        );
    }

    #[test]
    fn test_partial_deserialize() {
        let opts: PdfExportOptions =
            serde_json::from_value(json!({ "jsPDF": { "orientation": "landscape" } })).unwrap();
        assert_eq!(opts.jspdf.orientation, Orientation::Landscape);
        assert_eq!(opts.jspdf.format, "a4");
        assert_eq!(opts.margin, 10.0);
    }
}
