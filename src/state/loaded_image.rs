//! The image currently shown in the workspace.

use std::path::Path;

use thiserror::Error;

/// Supported image extensions
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tiff", "tif", "webp"];

/// Check if a filename (string) has a supported image extension.
/// Works with both full paths and just filenames.
pub fn is_image_filename(name: &str) -> bool {
    let lower = name.to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{}", ext)))
}

/// Errors that can occur while loading an image.
#[derive(Error, Debug)]
pub enum ImageError {
    /// The file could not be read
    #[error("Failed to read image {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a decodable image
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// No data was supplied
    #[error("Image {0} is empty")]
    Empty(String),
}

/// A decoded image owned by a workspace session.
///
/// Only the identity and dimensions are kept; the pixels are the display
/// layer's business. Dropping the value releases the image.
#[derive(Debug)]
pub struct LoadedImage {
    /// Filename of the image, also used as the image ID in submit payloads
    name: String,
    width: u32,
    height: u32,
}

impl LoadedImage {
    /// Decode an image from raw bytes.
    pub fn from_bytes(name: &str, data: &[u8]) -> Result<Self, ImageError> {
        if data.is_empty() {
            return Err(ImageError::Empty(name.to_string()));
        }

        let img = image::load_from_memory(data)?;
        log::info!(
            "Loaded image '{}' ({}x{}, {} bytes)",
            name,
            img.width(),
            img.height(),
            data.len()
        );

        Ok(Self {
            name: name.to_string(),
            width: img.width(),
            height: img.height(),
        })
    }

    /// Read and decode an image file.
    pub fn from_path(path: &Path) -> Result<Self, ImageError> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        if !is_image_filename(&name) {
            log::warn!("'{}' does not have a known image extension, trying anyway", name);
        }

        let data = std::fs::read(path).map_err(|source| ImageError::Io {
            name: name.clone(),
            source,
        })?;
        Self::from_bytes(&name, &data)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Drop for LoadedImage {
    fn drop(&mut self) {
        log::debug!("Released image '{}'", self.name);
    }
}
