//! Campaign image ingestion.
//!
//! Images never leave the page, so accepted uploads are stored inline as a
//! `data:` URL that an `<img src>` can consume directly.

#[cfg(test)]
#[path = "image_test.rs"]
mod image_test;

use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Largest accepted upload, 1 MiB.
pub const MAX_IMAGE_BYTES: usize = 1024 * 1024;

/// MIME types accepted by the campaign form.
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

/// File picker `accept` attribute matching [`ACCEPTED_MIME_TYPES`].
pub const ACCEPT_ATTR: &str = ".jpg,.jpeg,.png";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImageError {
    #[error("unsupported image type: {0}")]
    UnsupportedType(String),
    #[error("image is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },
    #[error("failed to read image: {0}")]
    Unreadable(String),
}

impl ImageError {
    /// Inline message shown under the image field.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::UnsupportedType(_) => "Use JPG or PNG only.",
            Self::TooLarge { .. } => "Max size 1 MB.",
            Self::Unreadable(_) => "Failed to read file.",
        }
    }
}

/// An accepted image encoded as a `data:` URL.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageData(String);

impl ImageData {
    /// Validate an uploaded file and encode it.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::UnsupportedType`] for anything but JPG/PNG and
    /// [`ImageError::TooLarge`] above [`MAX_IMAGE_BYTES`].
    pub fn from_upload(mime: &str, bytes: &[u8]) -> Result<Self, ImageError> {
        let mime = Self::check(mime, bytes.len())?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        Ok(Self(format!("data:{mime};base64,{encoded}")))
    }

    /// Type and size check, run before the file contents are read.
    ///
    /// # Errors
    ///
    /// Same as [`ImageData::from_upload`].
    pub fn check(mime: &str, size: usize) -> Result<String, ImageError> {
        let mime = mime.trim().to_ascii_lowercase();
        if !ACCEPTED_MIME_TYPES.contains(&mime.as_str()) {
            return Err(ImageError::UnsupportedType(mime));
        }
        if size > MAX_IMAGE_BYTES {
            return Err(ImageError::TooLarge { size, limit: MAX_IMAGE_BYTES });
        }
        Ok(mime)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
