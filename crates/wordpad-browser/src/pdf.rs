//! html2pdf.js binding.
//!
//! The page container is rasterized by html2canvas and laid out onto jsPDF
//! pages by the library; we only hand it the element and the options.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wordpad_core::{PdfExportOptions, WordpadError};

use crate::js_error_message;
use crate::notify::notify;

#[wasm_bindgen]
extern "C" {
    /// html2pdf.js worker chain.
    #[wasm_bindgen(extends = js_sys::Object)]
    #[derive(Debug, Clone)]
    pub type Html2PdfWorker;

    /// Global `html2pdf()` factory. Throws if the library isn't loaded.
    #[wasm_bindgen(catch, js_name = html2pdf)]
    fn html2pdf() -> Result<Html2PdfWorker, JsValue>;

    #[wasm_bindgen(method, catch, js_name = from)]
    fn from_element(this: &Html2PdfWorker, source: &web_sys::Element) -> Result<Html2PdfWorker, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn set(this: &Html2PdfWorker, options: &JsValue) -> Result<Html2PdfWorker, JsValue>;

    /// Returns the worker, which is itself a thenable.
    #[wasm_bindgen(method, catch)]
    fn save(this: &Html2PdfWorker) -> Result<JsValue, JsValue>;
}

/// Export `element` to a downloaded PDF.
///
/// Resolves once the download has been triggered. There is no way to cancel
/// an export once started.
pub async fn export_to_pdf(
    element: &web_sys::Element,
    options: &PdfExportOptions,
) -> Result<(), WordpadError> {
    let js_options = serde_wasm_bindgen::to_value(options)
        .map_err(|e| WordpadError::export(format!("invalid options: {e}")))?;

    let to_export_error = |e: JsValue| WordpadError::export(js_error_message(&e));

    let saving = html2pdf()
        .and_then(|worker| worker.from_element(element))
        .and_then(|worker| worker.set(&js_options))
        .and_then(|worker| worker.save())
        .map_err(to_export_error)?;

    JsFuture::from(js_sys::Promise::resolve(&saving))
        .await
        .map_err(to_export_error)?;

    tracing::info!(filename = %options.filename, "PDF export complete");
    Ok(())
}

/// Export `element` and report any failure to the user.
///
/// `None` means there is nothing mounted to export. Returns true on success;
/// failures are logged, passed to `notify`, and return false.
pub async fn export_and_notify(
    element: Option<&web_sys::Element>,
    options: &PdfExportOptions,
    notifier: Option<&js_sys::Function>,
) -> bool {
    let result = match element {
        Some(element) => export_to_pdf(element, options).await,
        None => Err(WordpadError::export("editor is not mounted")),
    };
    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("{e}");
            notify(notifier, &e.to_string());
            false
        }
    }
}
