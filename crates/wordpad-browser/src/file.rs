//! Image file reading for the toolbar's file picker.

use std::rc::Rc;

use wasm_bindgen_futures::JsFuture;
use web_sys::{File, HtmlInputElement};
use wordpad_core::{DocumentSurface, UploadedImage, WordpadError, insert_uploaded_image};

use crate::js_error_message;

/// Read a picked file into an `UploadedImage`.
pub async fn read_image_file(file: &File) -> Result<UploadedImage, WordpadError> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| WordpadError::file_read(file.name(), js_error_message(&e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    UploadedImage::from_bytes(file.name(), &file.type_(), &bytes)
}

/// Handle a change event on the image file input.
///
/// The input is cleared right away so picking the same file again fires a
/// new change event. The read finishes asynchronously; failures are logged
/// and leave the surface untouched.
pub fn handle_file_selected<S: DocumentSurface + ?Sized + 'static>(
    input: &HtmlInputElement,
    surface: Rc<S>,
) {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    input.set_value("");

    wasm_bindgen_futures::spawn_local(async move {
        match read_image_file(&file).await {
            Ok(image) => insert_uploaded_image(surface.as_ref(), &image),
            Err(e) => tracing::warn!("image upload skipped: {e}"),
        }
    });
}
