//! Reading the file chosen in the campaign image picker.

#[cfg(feature = "csr")]
use claims::{ImageData, ImageError};

/// First file selected in an `<input type="file">`, if any.
#[cfg(feature = "csr")]
pub fn selected_file(input: &web_sys::HtmlInputElement) -> Option<web_sys::File> {
    input.files().and_then(|files| files.get(0))
}

/// Validate and read an uploaded image into a `data:` URL.
///
/// Type and size are checked against the file metadata first, so oversized
/// files are never read.
#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub async fn read_image(file: web_sys::File) -> Result<ImageData, ImageError> {
    let mime = ImageData::check(&file.type_(), file.size() as usize)?;
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| ImageError::Unreadable(format!("{e:?}")))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    ImageData::from_upload(&mime, &bytes)
}
